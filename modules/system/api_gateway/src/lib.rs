#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! API Gateway
//!
//! Puts every request through two middlewares before it reaches a handler:
//!
//! 1. [`auth::authn_middleware`] resolves the caller from the bearer token
//!    (anonymous when no `Authorization` header is sent)
//! 2. [`access::access_middleware`] maps `(method, path)` to a protected
//!    operation and asks the access decision engine whether the caller may
//!    invoke it
//!
//! Content modules merge their own routers into [`api_router`] before the
//! result is wrapped with [`secure`].

pub mod access;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use access_control::OperationRegistry;
use axum::Router;
use axum::routing::get;
use caller_resolver_sdk::CallerResolverClient;
use tower_http::trace::TraceLayer;

pub use access::{AccessPolicy, AccessState, build_access_policy};
pub use auth::AuthState;
pub use config::{ApiGatewayConfig, RouteBinding};
pub use error::GatewayError;

/// Endpoints owned by the gateway itself.
#[must_use]
pub fn api_router(registry: Arc<OperationRegistry>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/me", get(handlers::me))
        .route("/api/v1/me/privileges", get(handlers::privileges))
        .route("/api/v1/operations", get(handlers::operations))
        .with_state(registry)
}

/// Wrap `router` with request tracing, caller resolution and route guarding.
///
/// # Errors
///
/// Fails when a route binding is malformed or names an operation missing
/// from `registry`.
pub fn secure(
    router: Router,
    cfg: &ApiGatewayConfig,
    registry: Arc<OperationRegistry>,
    resolver: Arc<dyn CallerResolverClient>,
) -> Result<Router, GatewayError> {
    let policy = build_access_policy(cfg, &registry)?;
    let access_state = AccessState { policy, registry };
    let auth_state = AuthState { resolver };

    Ok(router
        .layer(axum::middleware::from_fn_with_state(
            access_state,
            access::access_middleware,
        ))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth::authn_middleware,
        ))
        .layer(TraceLayer::new_for_http()))
}
