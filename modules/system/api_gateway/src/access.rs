use std::collections::HashMap;
use std::sync::Arc;

use access_control::{AccessDecision, OperationRegistry};
use access_control_sdk::OPERATION_NOT_PERMITTED;
use http::{Method, StatusCode};
use things_security::CallerContext;

use crate::auth::is_preflight_request;
use crate::config::ApiGatewayConfig;
use crate::error::{GatewayError, problem};

/// Route matcher for a specific HTTP method.
#[derive(Clone)]
struct OperationMatcher {
    matcher: matchit::Router<String>,
}

impl OperationMatcher {
    fn new() -> Self {
        Self {
            matcher: matchit::Router::new(),
        }
    }

    fn insert(&mut self, path: &str, operation: String) -> Result<(), matchit::InsertError> {
        self.matcher.insert(path, operation)
    }

    fn find(&self, path: &str) -> Option<&str> {
        self.matcher.at(path).ok().map(|m| m.value.as_str())
    }
}

/// Convert `:param` path syntax to matchit syntax `{param}`.
fn convert_colon_params_to_matchit(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut chars = path.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ':' {
            result.push('{');
            while matches!(chars.peek(), Some(c) if c.is_alphanumeric() || *c == '_') {
                if let Some(c) = chars.next() {
                    result.push(c);
                }
            }
            result.push('}');
        } else {
            result.push(ch);
        }
    }

    result
}

/// Resolves `(method, path)` to the protected operation bound to it.
#[derive(Clone)]
pub struct AccessPolicy {
    matchers: Arc<HashMap<Method, OperationMatcher>>,
    deny_unbound_routes: bool,
}

impl AccessPolicy {
    /// The operation bound to `(method, path)`, if any.
    ///
    /// `HEAD` resolves through the `GET` bindings, since the router answers
    /// it with the `GET` handler.
    #[must_use]
    pub fn resolve(&self, method: &Method, path: &str) -> Option<&str> {
        let method = if method == Method::HEAD {
            &Method::GET
        } else {
            method
        };
        self.matchers
            .get(method)
            .and_then(|matcher| matcher.find(path))
    }

    #[must_use]
    pub fn deny_unbound_routes(&self) -> bool {
        self.deny_unbound_routes
    }
}

/// Build the [`AccessPolicy`] from route bindings, checking every bound
/// operation against `registry`.
///
/// # Errors
///
/// - [`GatewayError::InvalidMethod`] for an unparsable HTTP method
/// - [`GatewayError::UnknownOperation`] for a binding naming an unregistered operation
/// - [`GatewayError::InvalidRoute`] for a malformed or conflicting path pattern
pub fn build_access_policy(
    cfg: &ApiGatewayConfig,
    registry: &OperationRegistry,
) -> Result<AccessPolicy, GatewayError> {
    let mut matchers: HashMap<Method, OperationMatcher> = HashMap::new();

    for binding in &cfg.routes {
        let method = Method::from_bytes(binding.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| GatewayError::InvalidMethod {
                method: binding.method.clone(),
                path: binding.path.clone(),
            })?;

        if !registry.contains(&binding.operation) {
            return Err(GatewayError::UnknownOperation {
                method: binding.method.clone(),
                path: binding.path.clone(),
                operation: binding.operation.clone(),
            });
        }

        let matchit_path = convert_colon_params_to_matchit(&binding.path);
        matchers
            .entry(method)
            .or_insert_with(OperationMatcher::new)
            .insert(&matchit_path, binding.operation.clone())
            .map_err(|source| GatewayError::InvalidRoute {
                path: binding.path.clone(),
                source,
            })?;
    }

    if !cfg.deny_unbound_routes {
        tracing::warn!("deny_unbound_routes is off; requests to unbound routes skip access checks");
    }
    tracing::info!(
        routes = cfg.routes.len(),
        deny_unbound_routes = cfg.deny_unbound_routes,
        "access policy built"
    );

    Ok(AccessPolicy {
        matchers: Arc::new(matchers),
        deny_unbound_routes: cfg.deny_unbound_routes,
    })
}

/// Shared state for the access middleware.
#[derive(Clone)]
pub struct AccessState {
    pub policy: AccessPolicy,
    pub registry: Arc<OperationRegistry>,
}

/// Route guard: runs the access decision engine for the operation bound to
/// the request's route.
///
/// Expects [`crate::auth::authn_middleware`] to have inserted the
/// `CallerContext`; a missing context is treated as anonymous.
pub async fn access_middleware(
    axum::extract::State(state): axum::extract::State<AccessState>,
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    if is_preflight_request(req.method(), req.headers()) {
        return next.run(req).await;
    }

    let Some(operation) = state.policy.resolve(req.method(), req.uri().path()) else {
        if state.policy.deny_unbound_routes() {
            tracing::debug!(
                method = %req.method(),
                path = req.uri().path(),
                "denying request to unbound route"
            );
            return problem(StatusCode::FORBIDDEN, OPERATION_NOT_PERMITTED);
        }
        return next.run(req).await;
    };

    let decision = {
        let anonymous = CallerContext::anonymous();
        let caller = req.extensions().get::<CallerContext>().unwrap_or(&anonymous);
        state.registry.check(operation, caller)
    };

    match decision {
        Ok(AccessDecision::Allow(grant)) => {
            tracing::debug!(operation, ?grant, "operation permitted");
            next.run(req).await
        }
        Ok(AccessDecision::Deny(denied)) => {
            tracing::debug!(
                operation,
                kind = ?denied.kind(),
                reason = denied.reason(),
                "operation not permitted"
            );
            problem(StatusCode::FORBIDDEN, OPERATION_NOT_PERMITTED)
        }
        Err(err) => {
            tracing::error!(operation, error = %err, "route bound to unregistered operation");
            problem(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal authorization error",
            )
        }
    }
}
