//! Wiring-time errors for the operation registry.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("operation '{operation}' has an empty allowed role set")]
    EmptyRoleSet { operation: String },

    #[error("operation '{0}' is registered twice")]
    DuplicateOperation(String),

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}
