//! Shared domain types and the error taxonomy used by every LinkVault crate.

pub mod error;
pub mod types;
