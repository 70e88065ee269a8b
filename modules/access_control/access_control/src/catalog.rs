//! Default operation catalog of the reader and admin application.
//!
//! Bulk deletes are disabled outright; everything that mutates content or
//! users is reserved to application administrators.

use std::collections::BTreeMap;

use access_control_sdk::Role;

const ADMIN: &[Role] = &[Role::ApplicationAdministrator];
const ANYONE: &[Role] = &[Role::Any];
const NOBODY: &[Role] = &[Role::None];

pub const LIST_OPERATIONS: &str = "list_operations";
pub const VIEW_OWN_PRIVILEGES: &str = "view_own_privileges";
pub const VIEW_HEALTH: &str = "view_health";

static DEFAULT_OPERATIONS: &[(&str, &[Role])] = &[
    // articles
    ("create_article", ADMIN),
    ("list_article", ANYONE),
    ("view_article", ANYONE),
    ("view_article_details", ADMIN),
    ("update_article", ADMIN),
    ("delete_article", ADMIN),
    ("delete_all_article", NOBODY),
    // authors
    ("create_author", ADMIN),
    ("list_author", ANYONE),
    ("view_author", ANYONE),
    ("view_author_details", ADMIN),
    ("update_author", ADMIN),
    ("delete_author", ADMIN),
    ("delete_all_author", NOBODY),
    // users
    ("create_user", ADMIN),
    ("create_anonymous_user", ANYONE),
    ("update_user", ADMIN),
    ("delete_user", ADMIN),
    ("list_user", ANYONE),
    ("view_user", ANYONE),
    ("impersonate_user", ADMIN),
    // utilities
    ("reseed_db", ADMIN),
    ("wipe_db", ADMIN),
    // access control introspection
    (LIST_OPERATIONS, ADMIN),
    (VIEW_OWN_PRIVILEGES, ANYONE),
    (VIEW_HEALTH, ANYONE),
];

/// The built-in operation table, keyed by operation name.
#[must_use]
pub fn default_operations() -> BTreeMap<String, Vec<Role>> {
    DEFAULT_OPERATIONS
        .iter()
        .map(|(name, roles)| ((*name).to_owned(), roles.to_vec()))
        .collect()
}
