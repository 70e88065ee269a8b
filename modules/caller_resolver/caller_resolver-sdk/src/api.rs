//! API trait for caller resolution.

use async_trait::async_trait;
use things_security::CallerContext;

use crate::error::CallerResolverError;

/// Resolves a bearer token into the caller's context.
///
/// Consumed by the API gateway's authentication middleware. Any I/O needed
/// to look up the caller happens here, before access decisions run.
#[async_trait]
pub trait CallerResolverClient: Send + Sync {
    /// Resolve the caller behind `bearer_token`.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if the token is empty or not recognized
    /// - `ServiceUnavailable` if the backing identity store is unreachable
    /// - `Internal` for unexpected errors
    async fn resolve(&self, bearer_token: &str) -> Result<CallerContext, CallerResolverError>;
}
