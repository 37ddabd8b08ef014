//! Explicit Entity↔DTO mapping, one statically-declared field map per pair.
//!
//! Conventions shared by every pair:
//!
//! - entity→DTO copies same-named scalar fields; a relationship on the
//!   entity contributes only its id, into the DTO's `<name>_id` field.
//! - DTO→entity is the inverse; a relationship-id field equal to 0 means
//!   "no relation" and is skipped, so applying a DTO to a loaded row never
//!   clobbers the owner with 0.
//! - Unmatched fields are silently skipped. Mapping is pure and never
//!   touches storage; the `User` password hash in particular has no DTO
//!   counterpart and is always preserved.

use crate::models::label::{Label, LabelDto};
use crate::models::link::{Link, LinkDto};
use crate::models::project::{Project, ProjectDto};
use crate::models::user::{User, UserDto};
use linkvault_core::types::DbId;

// --- User ↔ UserDto ---------------------------------------------------------

pub fn user_to_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
        username: user.username.clone(),
    }
}

/// Apply a DTO onto a loaded row. The password hash is not part of the DTO
/// and stays untouched.
pub fn apply_user_dto(dto: &UserDto, user: &mut User) {
    user.name = dto.name.clone();
    user.username = dto.username.clone();
}

// --- Project ↔ ProjectDto ---------------------------------------------------

pub fn project_to_dto(project: &Project) -> ProjectDto {
    ProjectDto {
        id: project.id,
        name: project.name.clone(),
        user_id: project.user_id,
    }
}

/// Build a fresh entity from a DTO (insert path). A `user_id` of 0 is kept
/// as-is; the service assigns the owner before persisting.
pub fn project_from_dto(dto: &ProjectDto) -> Project {
    Project {
        id: dto.id,
        name: dto.name.clone(),
        user_id: dto.user_id,
    }
}

pub fn apply_project_dto(dto: &ProjectDto, project: &mut Project) {
    project.name = dto.name.clone();
    if dto.user_id != 0 {
        project.user_id = dto.user_id;
    }
}

// --- Label ↔ LabelDto -------------------------------------------------------

pub fn label_to_dto(label: &Label) -> LabelDto {
    LabelDto {
        id: label.id,
        name: label.name.clone(),
    }
}

pub fn apply_label_dto(dto: &LabelDto, label: &mut Label) {
    label.name = dto.name.clone();
}

// --- Link ↔ LinkDto ---------------------------------------------------------

/// The label associations live in join rows, not on the link row itself;
/// callers pass the ids they loaded alongside the entity.
pub fn link_to_dto(link: &Link, label_ids: Vec<DbId>) -> LinkDto {
    LinkDto {
        id: link.id,
        description: link.description.clone(),
        url: link.url.clone(),
        comments: link.comments.clone(),
        read: link.read,
        favorite: link.favorite,
        user_id: link.user_id,
        label_ids,
    }
}

pub fn link_from_dto(dto: &LinkDto) -> Link {
    Link {
        id: dto.id,
        description: dto.description.clone(),
        url: dto.url.clone(),
        comments: dto.comments.clone(),
        read: dto.read,
        favorite: dto.favorite,
        user_id: dto.user_id,
    }
}

pub fn apply_link_dto(dto: &LinkDto, link: &mut Link) {
    link.description = dto.description.clone();
    link.url = dto.url.clone();
    link.comments = dto.comments.clone();
    link.read = dto.read;
    link.favorite = dto.favorite;
    if dto.user_id != 0 {
        link.user_id = dto.user_id;
    }
}
