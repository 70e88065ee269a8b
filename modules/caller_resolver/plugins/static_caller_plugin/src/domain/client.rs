//! Client implementation for the static caller resolver plugin.

use async_trait::async_trait;
use caller_resolver_sdk::{CallerResolverClient, CallerResolverError};
use things_security::CallerContext;

use super::service::Service;

#[async_trait]
impl CallerResolverClient for Service {
    async fn resolve(&self, bearer_token: &str) -> Result<CallerContext, CallerResolverError> {
        Self::resolve(self, bearer_token).ok_or_else(|| {
            CallerResolverError::Unauthorized("token not recognized".to_owned())
        })
    }
}
