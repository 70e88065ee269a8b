//! Service implementation for the static caller resolver plugin.

use std::collections::HashMap;

use things_security::CallerContext;

use crate::config::{CallerMode, IdentityConfig, StaticCallerPluginConfig};

/// Static caller resolver service.
///
/// - `accept_all`: any non-empty token maps to the default identity
/// - `static_tokens`: specific tokens map to specific identities
pub struct Service {
    mode: CallerMode,
    default_identity: IdentityConfig,
    token_map: HashMap<String, IdentityConfig>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticCallerPluginConfig) -> Self {
        let token_map: HashMap<String, IdentityConfig> = cfg
            .tokens
            .iter()
            .map(|m| (m.token.clone(), m.identity.clone()))
            .collect();

        Self {
            mode: cfg.mode.clone(),
            default_identity: cfg.default_identity.clone(),
            token_map,
        }
    }

    /// Resolve a bearer token.
    ///
    /// Returns `None` if the token is empty or, in `static_tokens` mode,
    /// unknown.
    #[must_use]
    pub fn resolve(&self, bearer_token: &str) -> Option<CallerContext> {
        if bearer_token.is_empty() {
            return None;
        }

        let identity = match &self.mode {
            CallerMode::AcceptAll => &self.default_identity,
            CallerMode::StaticTokens => self.token_map.get(bearer_token)?,
        };

        Some(build_context(identity))
    }
}

fn build_context(identity: &IdentityConfig) -> CallerContext {
    if !identity.is_active {
        tracing::debug!(
            subject_id = %identity.subject_id,
            "inactive user resolved as anonymous caller"
        );
        return CallerContext::anonymous();
    }

    let builder = CallerContext::builder()
        .subject_id(identity.subject_id.clone())
        .privileged(identity.is_superuser);

    match &identity.email {
        Some(email) => builder.email(email.clone()).build(),
        None => builder.build(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::TokenMapping;

    fn default_config() -> StaticCallerPluginConfig {
        StaticCallerPluginConfig::default()
    }

    fn admin_identity() -> IdentityConfig {
        IdentityConfig {
            subject_id: "a1".to_owned(),
            email: Some("admin@example.com".to_owned()),
            is_superuser: true,
            is_active: true,
        }
    }

    #[test]
    fn accept_all_mode_returns_default_identity() {
        let service = Service::from_config(&default_config());

        let ctx = service.resolve("any-token-value").unwrap();
        assert!(ctx.is_authenticated());
        assert!(!ctx.is_privileged());
        assert_eq!(ctx.subject_id(), Some("reader"));
    }

    #[test]
    fn accept_all_mode_rejects_empty_token() {
        let service = Service::from_config(&default_config());
        assert!(service.resolve("").is_none());
    }

    #[test]
    fn static_tokens_mode_returns_mapped_identity() {
        let cfg = StaticCallerPluginConfig {
            mode: CallerMode::StaticTokens,
            tokens: vec![TokenMapping {
                token: "token-admin".to_owned(),
                identity: admin_identity(),
            }],
            ..default_config()
        };

        let service = Service::from_config(&cfg);

        let ctx = service.resolve("token-admin").unwrap();
        assert_eq!(ctx.subject_id(), Some("a1"));
        assert_eq!(ctx.email(), Some("admin@example.com"));
        assert!(ctx.is_privileged());
    }

    #[test]
    fn static_tokens_mode_rejects_unknown_token() {
        let cfg = StaticCallerPluginConfig {
            mode: CallerMode::StaticTokens,
            tokens: vec![TokenMapping {
                token: "known-token".to_owned(),
                identity: IdentityConfig::default(),
            }],
            ..default_config()
        };

        let service = Service::from_config(&cfg);
        assert!(service.resolve("unknown-token").is_none());
    }

    #[test]
    fn inactive_identity_resolves_to_anonymous() {
        let cfg = StaticCallerPluginConfig {
            mode: CallerMode::StaticTokens,
            tokens: vec![TokenMapping {
                token: "suspended".to_owned(),
                identity: IdentityConfig {
                    is_active: false,
                    ..admin_identity()
                },
            }],
            ..default_config()
        };

        let service = Service::from_config(&cfg);

        let ctx = service.resolve("suspended").unwrap();
        assert!(!ctx.is_authenticated());
        assert!(!ctx.is_privileged());
    }
}
