//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//!
//! Authorization (the admin-only rules on user management) lives in the
//! service layer so its error messages reach the client unchanged.

pub mod auth;
