//! Configuration for the API gateway.

use serde::{Deserialize, Serialize};

use crate::routes;

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiGatewayConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,

    /// Deny requests whose route is not bound to any operation. When off,
    /// such requests reach their handler without an access check.
    pub deny_unbound_routes: bool,

    /// `(method, path)` to operation bindings.
    pub routes: Vec<RouteBinding>,
}

impl Default for ApiGatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
            deny_unbound_routes: true,
            routes: routes::default_route_bindings(),
        }
    }
}

/// Binds an HTTP route pattern to a protected operation.
///
/// Path parameters may use either `{id}` or `:id` syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteBinding {
    pub method: String,
    pub path: String,
    pub operation: String,
}

impl RouteBinding {
    #[must_use]
    pub fn new(method: &str, path: &str, operation: &str) -> Self {
        Self {
            method: method.to_owned(),
            path: path.to_owned(),
            operation: operation.to_owned(),
        }
    }
}
