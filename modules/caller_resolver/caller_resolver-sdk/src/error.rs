//! Error types for caller resolution.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CallerResolverError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}
