//! Role tags and the per-operation role set.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RoleSetError;

/// A permission level, or a caller's relationship to a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Wildcard allow: every caller, anonymous included.
    Any,
    /// Wildcard deny: the operation is disabled.
    None,
    /// The caller must own the resource being accessed.
    #[serde(rename = "self")]
    SelfOwner,
    /// Application-wide superuser.
    ApplicationAdministrator,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::None => "none",
            Self::SelfOwner => "self",
            Self::ApplicationAdministrator => "application_administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The roles permitted to invoke one protected operation.
///
/// Never empty. Built once while wiring the application and shared
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Role>", into = "Vec<Role>")]
pub struct AllowedRoleSet {
    roles: BTreeSet<Role>,
}

impl AllowedRoleSet {
    /// Build a role set.
    ///
    /// # Errors
    ///
    /// Returns [`RoleSetError::Empty`] when `roles` yields nothing.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Result<Self, RoleSetError> {
        let roles: BTreeSet<Role> = roles.into_iter().collect();
        if roles.is_empty() {
            return Err(RoleSetError::Empty);
        }
        Ok(Self { roles })
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Always `false` for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// `true` when both wildcards are configured together; `any` takes
    /// precedence in that case.
    #[must_use]
    pub fn has_conflicting_wildcards(&self) -> bool {
        self.contains(Role::Any) && self.contains(Role::None)
    }
}

impl TryFrom<Vec<Role>> for AllowedRoleSet {
    type Error = RoleSetError;

    fn try_from(roles: Vec<Role>) -> Result<Self, Self::Error> {
        Self::new(roles)
    }
}

impl From<AllowedRoleSet> for Vec<Role> {
    fn from(set: AllowedRoleSet) -> Self {
        set.roles.into_iter().collect()
    }
}

impl fmt::Display for AllowedRoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, role) in self.roles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(role.as_str())?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(AllowedRoleSet::new(Vec::<Role>::new()), Err(RoleSetError::Empty));
    }

    #[test]
    fn duplicates_collapse() {
        let set = AllowedRoleSet::new([Role::Any, Role::Any]).unwrap();
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn conflicting_wildcards_are_detected() {
        let set = AllowedRoleSet::new([Role::None, Role::Any]).unwrap();
        assert!(set.has_conflicting_wildcards());

        let set = AllowedRoleSet::new([Role::None]).unwrap();
        assert!(!set.has_conflicting_wildcards());
    }

    #[test]
    fn role_names_are_exact() {
        let parsed: Result<AllowedRoleSet, _> =
            serde_saphyr::from_str("[Application_Administrator]");
        assert!(parsed.is_err());

        let parsed: Result<AllowedRoleSet, _> = serde_saphyr::from_str("[musician]");
        assert!(parsed.is_err());
    }

    #[test]
    fn display_lists_roles_in_order() {
        let set = AllowedRoleSet::new([Role::ApplicationAdministrator, Role::SelfOwner]).unwrap();
        assert_eq!(set.to_string(), "[self, application_administrator]");
    }

    #[test]
    fn deserializes_from_yaml_list() {
        let set: AllowedRoleSet =
            serde_saphyr::from_str("[application_administrator, self]").unwrap();
        assert!(set.contains(Role::ApplicationAdministrator));
        assert!(set.contains(Role::SelfOwner));
    }

    #[test]
    fn deserializing_empty_list_fails() {
        let parsed: Result<AllowedRoleSet, _> = serde_json::from_str("[]");
        let err = parsed.unwrap_err();
        assert!(err.to_string().contains("must not be empty"), "{err}");
    }

    #[test]
    fn serializes_as_role_names() {
        let set = AllowedRoleSet::new([Role::Any]).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["any"]"#);
    }
}
