//! Domain services: all business rules live here, not in the handlers.
//!
//! Every service is a unit struct with static async functions taking the
//! pool plus typed inputs, mirroring the repository layer. Save operations
//! treat a DTO id of 0 as "create" and anything else as "update an
//! existing row"; uniqueness rules are pre-checked here even though the
//! schema carries matching unique indexes.

pub mod label;
pub mod link;
pub mod login;
pub mod profile;
pub mod project;
pub mod user;
