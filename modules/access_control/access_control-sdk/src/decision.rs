//! Access decision outcomes.

use serde::Serialize;
use thiserror::Error;

/// Client-facing message for every denial. The detailed reason stays in logs.
pub const OPERATION_NOT_PERMITTED: &str = "Operation not permitted";

/// Why an operation was allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grant {
    /// The `any` wildcard is configured.
    AnyRole,
    /// The caller is an authenticated application administrator.
    ApplicationAdministrator,
    /// The caller owns the resource and `self` is configured.
    ResourceOwner,
}

/// Why an operation was denied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    /// The `none` wildcard disables the operation.
    OperationDisabled,
    /// No configured role matched the caller.
    MissingRole,
}

/// Authorization denial. Recoverable by the caller, never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct AccessDenied {
    kind: DenialKind,
    reason: String,
}

impl AccessDenied {
    #[must_use]
    pub fn new(kind: DenialKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DenialKind {
        self.kind
    }

    /// Detailed reason, naming the caller and the required roles.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Binary outcome of an access check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow(Grant),
    Deny(AccessDenied),
}

impl AccessDecision {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }

    /// Convert into a `Result` so enforcement points can use `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`AccessDenied`] carried by a `Deny` decision.
    pub fn into_result(self) -> Result<Grant, AccessDenied> {
        match self {
            Self::Allow(grant) => Ok(grant),
            Self::Deny(denied) => Err(denied),
        }
    }
}
