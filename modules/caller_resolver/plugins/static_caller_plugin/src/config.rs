//! Configuration for the static caller resolver plugin.

use serde::{Deserialize, Serialize};

/// Plugin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticCallerPluginConfig {
    /// Resolution mode.
    pub mode: CallerMode,

    /// Identity returned for every token in `accept_all` mode.
    pub default_identity: IdentityConfig,

    /// Token-to-identity mappings used in `static_tokens` mode.
    pub tokens: Vec<TokenMapping>,
}

impl Default for StaticCallerPluginConfig {
    fn default() -> Self {
        Self {
            mode: CallerMode::AcceptAll,
            default_identity: IdentityConfig::default(),
            tokens: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallerMode {
    /// Any non-empty token maps to the default identity.
    #[default]
    AcceptAll,
    /// Only configured tokens are accepted.
    StaticTokens,
}

/// A user record as far as access control is concerned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    pub subject_id: String,
    pub email: Option<String>,
    pub is_superuser: bool,
    /// Inactive users resolve to an anonymous caller.
    pub is_active: bool,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            subject_id: "reader".to_owned(),
            email: None,
            is_superuser: false,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    pub token: String,
    pub identity: IdentityConfig,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_applied() {
        let yaml = r#"
mode: static_tokens
tokens:
  - token: "admin-token"
    identity:
      subject_id: "a1"
      is_superuser: true
"#;

        let parsed: Result<StaticCallerPluginConfig, _> = serde_saphyr::from_str(yaml);
        let cfg = match parsed {
            Ok(cfg) => cfg,
            Err(e) => panic!("failed to parse config: {e}"),
        };

        assert_eq!(cfg.mode, CallerMode::StaticTokens);
        assert_eq!(cfg.default_identity.subject_id, "reader");
        assert_eq!(cfg.tokens.len(), 1);
        assert!(cfg.tokens[0].identity.is_superuser);
        assert!(cfg.tokens[0].identity.is_active);
        assert!(cfg.tokens[0].identity.email.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let yaml = "mode: accept_all\npriority: 100\n";
        let parsed: Result<StaticCallerPluginConfig, _> = serde_saphyr::from_str(yaml);
        assert!(parsed.is_err());
    }
}
