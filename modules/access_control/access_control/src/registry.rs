//! Operation registry: the per-operation role sets, fixed at wiring time.

use std::collections::BTreeMap;

use access_control_sdk::{AccessDecision, AllowedRoleSet, Role};
use things_security::CallerContext;

use crate::config::AccessControlConfig;
use crate::engine;
use crate::error::RegistryError;

/// Read-only map from operation name to its [`AllowedRoleSet`].
///
/// Built once during startup, then shared behind an `Arc` by every request
/// handler.
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    operations: BTreeMap<String, AllowedRoleSet>,
}

impl OperationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyRoleSet`] for the first operation
    /// configured without roles.
    pub fn from_config(cfg: &AccessControlConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for (operation, roles) in &cfg.operations {
            registry.register(operation, roles.iter().copied())?;
        }
        tracing::info!(
            operations = registry.len(),
            "access control registry initialized"
        );
        Ok(registry)
    }

    /// Register one operation.
    ///
    /// Configuring `any` together with `none` is accepted with a warning:
    /// `any` wins.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::EmptyRoleSet`] if `roles` is empty
    /// - [`RegistryError::DuplicateOperation`] if `operation` is already registered
    pub fn register(
        &mut self,
        operation: &str,
        roles: impl IntoIterator<Item = Role>,
    ) -> Result<(), RegistryError> {
        if self.operations.contains_key(operation) {
            return Err(RegistryError::DuplicateOperation(operation.to_owned()));
        }

        let roles = AllowedRoleSet::new(roles).map_err(|_| RegistryError::EmptyRoleSet {
            operation: operation.to_owned(),
        })?;

        if roles.has_conflicting_wildcards() {
            tracing::warn!(
                operation,
                %roles,
                "both 'any' and 'none' are configured; 'any' takes precedence"
            );
        }

        tracing::debug!(operation, %roles, "registered protected operation");
        self.operations.insert(operation.to_owned(), roles);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, operation: &str) -> Option<&AllowedRoleSet> {
        self.operations.get(operation)
    }

    #[must_use]
    pub fn contains(&self, operation: &str) -> bool {
        self.operations.contains_key(operation)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AllowedRoleSet)> {
        self.operations
            .iter()
            .map(|(name, roles)| (name.as_str(), roles))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Operations configured with both `any` and `none`.
    #[must_use]
    pub fn conflicting_operations(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, roles)| roles.has_conflicting_wildcards())
            .map(|(name, _)| name)
            .collect()
    }

    /// Decide whether `caller` may invoke `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownOperation`] if `operation` was never
    /// registered. Denial is not an error: it is the `Deny` decision.
    pub fn check(
        &self,
        operation: &str,
        caller: &CallerContext,
    ) -> Result<AccessDecision, RegistryError> {
        let roles = self.lookup(operation)?;
        tracing::debug!(operation, caller = caller.label(), "checking access");
        Ok(engine::decide(roles, caller))
    }

    /// Decide whether `caller` may invoke `operation` on a resource owned by
    /// `owner_id`.
    ///
    /// This is the only path on which `self` grants. Handlers for operations
    /// that list `self` call it once the resource, and therefore its owner,
    /// is loaded; the route guard alone denies such callers.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownOperation`] if `operation` was never
    /// registered.
    pub fn check_for_owner(
        &self,
        operation: &str,
        caller: &CallerContext,
        owner_id: &str,
    ) -> Result<AccessDecision, RegistryError> {
        let roles = self.lookup(operation)?;
        tracing::debug!(operation, caller = caller.label(), owner_id, "checking access");
        Ok(engine::decide_for_owner(roles, caller, owner_id))
    }

    /// Which operations `caller` may invoke, without a resource owner.
    #[must_use]
    pub fn privileges(&self, caller: &CallerContext) -> BTreeMap<String, bool> {
        self.iter()
            .map(|(name, roles)| (name.to_owned(), engine::decide(roles, caller).is_allowed()))
            .collect()
    }

    fn lookup(&self, operation: &str) -> Result<&AllowedRoleSet, RegistryError> {
        self.operations
            .get(operation)
            .ok_or_else(|| RegistryError::UnknownOperation(operation.to_owned()))
    }
}
