use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// `Domain` carries a business-rule violation whose message is surfaced
/// verbatim to the client (HTTP 400). `NotFound` is a lookup-by-id miss on a
/// read path (HTTP 404). `Unauthorized` covers missing/invalid credentials
/// and tokens (HTTP 401). `Internal` is never surfaced in detail.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Domain(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn domain(message: impl Into<String>) -> Self {
        CoreError::Domain(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        CoreError::Unauthorized(message.into())
    }
}
