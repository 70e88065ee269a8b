//! Configuration for the access control module.

use std::collections::BTreeMap;

use access_control_sdk::Role;
use serde::{Deserialize, Serialize};

use crate::catalog;

/// Module configuration.
///
/// Role lists are kept raw here so that an empty list reaches
/// [`crate::OperationRegistry::from_config`] and is rejected there with the
/// operation name attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessControlConfig {
    /// Operation name to the roles allowed to invoke it.
    pub operations: BTreeMap<String, Vec<Role>>,
}

impl Default for AccessControlConfig {
    fn default() -> Self {
        Self {
            operations: catalog::default_operations(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn missing_section_uses_catalog() {
        let cfg: AccessControlConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(cfg.operations, catalog::default_operations());
    }

    #[test]
    fn operations_parse_from_yaml() {
        let yaml = r"
operations:
  publish_article: [application_administrator, self]
  read_article: [any]
";
        let cfg: AccessControlConfig = serde_saphyr::from_str(yaml).unwrap();

        assert_eq!(cfg.operations.len(), 2);
        assert_eq!(
            cfg.operations["publish_article"],
            vec![Role::ApplicationAdministrator, Role::SelfOwner]
        );
    }

    #[test]
    fn unknown_role_is_rejected() {
        let yaml = "operations:\n  read_article: [musician]\n";
        let parsed: Result<AccessControlConfig, _> = serde_saphyr::from_str(yaml);
        assert!(parsed.is_err());
    }
}
