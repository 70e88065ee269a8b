#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Caller Resolver Plugin
//!
//! Maps bearer tokens to configured identities. Meant for development,
//! demos and tests; production deployments plug in a resolver backed by the
//! user store.
//!
//! ## Mode: `accept_all` (default)
//!
//! Any non-empty token resolves to `default_identity`.
//!
//! ## Mode: `static_tokens`
//!
//! Only tokens listed under `tokens` resolve; anything else is rejected.
//!
//! ## Configuration
//!
//! ```yaml
//! authn:
//!   mode: static_tokens
//!   tokens:
//!     - token: "admin-token"
//!       identity:
//!         subject_id: "64f0c0ffee0000000000a001"
//!         email: "admin@example.com"
//!         is_superuser: true
//! ```

pub mod config;
pub mod domain;

pub use config::{CallerMode, IdentityConfig, StaticCallerPluginConfig, TokenMapping};
pub use domain::Service as StaticCallerResolver;
