use std::sync::Arc;

use axum::http::{HeaderMap, Method, StatusCode};
use caller_resolver_sdk::{CallerResolverClient, CallerResolverError};
use things_security::CallerContext;

use crate::error::problem;

/// Shared state for the authentication middleware.
#[derive(Clone)]
pub struct AuthState {
    pub resolver: Arc<dyn CallerResolverClient>,
}

/// What the `Authorization` header carries.
#[derive(Debug, PartialEq, Eq)]
enum Credentials<'a> {
    Absent,
    Bearer(&'a str),
    Malformed,
}

/// Authentication middleware that resolves the caller for every request.
///
/// For each request:
/// 1. Skips CORS preflight requests
/// 2. Without an `Authorization` header: inserts an anonymous `CallerContext`
/// 3. With a bearer token: calls the caller resolver and inserts the result
/// 4. Anything else in `Authorization`: 401
pub async fn authn_middleware(
    axum::extract::State(state): axum::extract::State<AuthState>,
    mut req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    if is_preflight_request(req.method(), req.headers()) {
        return next.run(req).await;
    }

    match extract_credentials(req.headers()) {
        Credentials::Absent => {
            req.extensions_mut().insert(CallerContext::anonymous());
            next.run(req).await
        }
        Credentials::Malformed => problem(
            StatusCode::UNAUTHORIZED,
            "Missing or invalid Authorization header",
        ),
        Credentials::Bearer(token) => match state.resolver.resolve(token).await {
            Ok(caller) => {
                tracing::debug!(caller = caller.label(), "caller resolved");
                req.extensions_mut().insert(caller);
                next.run(req).await
            }
            Err(err) => resolver_error_to_response(err),
        },
    }
}

/// Convert `CallerResolverError` to an HTTP response.
fn resolver_error_to_response(err: CallerResolverError) -> axum::response::Response {
    match err {
        CallerResolverError::Unauthorized(msg) => {
            tracing::debug!("caller resolution rejected: {msg}");
            problem(StatusCode::UNAUTHORIZED, "Unauthorized")
        }
        CallerResolverError::ServiceUnavailable(msg) => {
            tracing::error!("caller resolver unavailable: {msg}");
            problem(
                StatusCode::SERVICE_UNAVAILABLE,
                "Authentication service unavailable",
            )
        }
        CallerResolverError::Internal(msg) => {
            tracing::error!("caller resolver internal error: {msg}");
            problem(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal authentication error",
            )
        }
    }
}

fn extract_credentials(headers: &HeaderMap) -> Credentials<'_> {
    let Some(value) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Credentials::Absent;
    };

    value
        .to_str()
        .ok()
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map_or(Credentials::Malformed, Credentials::Bearer)
}

/// Check if this is a CORS preflight request
///
/// Preflight requests are OPTIONS requests with:
/// - Origin header present
/// - Access-Control-Request-Method header present
pub(crate) fn is_preflight_request(method: &Method, headers: &HeaderMap) -> bool {
    method == Method::OPTIONS
        && headers.contains_key(axum::http::header::ORIGIN)
        && headers.contains_key(axum::http::header::ACCESS_CONTROL_REQUEST_METHOD)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use axum::http::header::{ACCESS_CONTROL_REQUEST_METHOD, AUTHORIZATION, ORIGIN};

    fn headers_with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn missing_header_is_absent() {
        assert_eq!(extract_credentials(&HeaderMap::new()), Credentials::Absent);
    }

    #[test]
    fn bearer_token_is_extracted_and_trimmed() {
        let headers = headers_with_authorization("Bearer  abc123 ");
        assert_eq!(extract_credentials(&headers), Credentials::Bearer("abc123"));
    }

    #[test]
    fn non_bearer_scheme_is_malformed() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(extract_credentials(&headers), Credentials::Malformed);
    }

    #[test]
    fn empty_bearer_token_is_malformed() {
        let headers = headers_with_authorization("Bearer   ");
        assert_eq!(extract_credentials(&headers), Credentials::Malformed);
    }

    #[test]
    fn preflight_requires_origin_and_request_method() {
        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, HeaderValue::from_static("https://reader.example.com"));
        assert!(!is_preflight_request(&Method::OPTIONS, &headers));

        headers.insert(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("PATCH"));
        assert!(is_preflight_request(&Method::OPTIONS, &headers));
        assert!(!is_preflight_request(&Method::GET, &headers));
    }
}
