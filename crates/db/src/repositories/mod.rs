pub mod label_repo;
pub mod link_repo;
pub mod project_repo;
pub mod user_repo;

pub use label_repo::LabelRepo;
pub use link_repo::LinkRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
