//! Error types for role configuration.

use thiserror::Error;

/// Errors raised while building role configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleSetError {
    /// An empty role set would silently deny every caller.
    #[error("allowed role set must not be empty")]
    Empty,
}
