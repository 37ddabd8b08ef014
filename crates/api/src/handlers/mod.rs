//! HTTP handlers, one module per resource.
//!
//! Handlers stay thin: extract the caller, delegate to a service, shape
//! the response. Business rules live in [`crate::services`].

pub mod auth;
pub mod label;
pub mod link;
pub mod profile;
pub mod project;
pub mod user;
