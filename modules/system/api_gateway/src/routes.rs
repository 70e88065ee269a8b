//! Default route bindings for the REST API under `/api/v1`.

use access_control::catalog::{LIST_OPERATIONS, VIEW_HEALTH, VIEW_OWN_PRIVILEGES};

use crate::config::RouteBinding;

static DEFAULT_ROUTES: &[(&str, &str, &str)] = &[
    // gateway
    ("GET", "/health", VIEW_HEALTH),
    ("GET", "/api/v1/me", VIEW_OWN_PRIVILEGES),
    ("GET", "/api/v1/me/privileges", VIEW_OWN_PRIVILEGES),
    ("GET", "/api/v1/operations", LIST_OPERATIONS),
    // articles
    ("POST", "/api/v1/article", "create_article"),
    ("GET", "/api/v1/article", "list_article"),
    ("DELETE", "/api/v1/article", "delete_all_article"),
    ("GET", "/api/v1/article/{article_id}", "view_article"),
    ("PATCH", "/api/v1/article/{article_id}", "update_article"),
    ("DELETE", "/api/v1/article/{article_id}", "delete_article"),
    ("GET", "/api/v1/article/{article_id}/clients", "view_article"),
    ("POST", "/api/v1/article/{article_id}/vip", "update_article"),
    ("GET", "/api/v1/article/{article_id}/vip", "update_article"),
    ("DELETE", "/api/v1/article/{article_id}/vip/{user_id}", "update_article"),
    // authors
    ("POST", "/api/v1/author", "create_author"),
    ("GET", "/api/v1/author", "list_author"),
    ("DELETE", "/api/v1/author", "delete_all_author"),
    ("GET", "/api/v1/author/{author_id}", "view_author"),
    ("PATCH", "/api/v1/author/{author_id}", "update_author"),
    ("DELETE", "/api/v1/author/{author_id}", "delete_author"),
    // users
    ("POST", "/api/v1/auth/register", "create_anonymous_user"),
    ("GET", "/api/v1/user", "list_user"),
    ("GET", "/api/v1/user/me/roles", VIEW_OWN_PRIVILEGES),
    ("GET", "/api/v1/user/find", "view_user"),
    ("GET", "/api/v1/user/find_many", "view_user"),
    ("GET", "/api/v1/user/{user_id}", "view_user"),
    ("GET", "/api/v1/user/{user_id}/roles", "view_user"),
    ("PATCH", "/api/v1/user/{user_id}", "update_user"),
    ("DELETE", "/api/v1/user/{user_id}", "delete_user"),
    // utilities
    ("POST", "/api/v1/load_seed_data", "reseed_db"),
    ("DELETE", "/api/v1/wipe", "wipe_db"),
];

#[must_use]
pub fn default_route_bindings() -> Vec<RouteBinding> {
    DEFAULT_ROUTES
        .iter()
        .map(|(method, path, operation)| RouteBinding::new(method, path, operation))
        .collect()
}
