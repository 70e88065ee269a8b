#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Access control module.
//!
//! - [`decide`] / [`decide_for_owner`] - Stateless precedence-table engine
//! - [`OperationRegistry`] - Operation name to [`AllowedRoleSet`], built at wiring time
//! - [`AccessControlConfig`] - Configuration section, defaults to [`catalog::default_operations`]
//!
//! ## Usage
//!
//! ```ignore
//! let registry = OperationRegistry::from_config(&cfg.access_control)?;
//! registry.check("update_article", &caller)?.into_result()?;
//! ```
//!
//! ## Resource ownership
//!
//! The gateway guard only knows the route, so it calls
//! [`OperationRegistry::check`], where `self` never grants. A handler serving
//! an operation that lists `self` must load the resource and call
//! [`OperationRegistry::check_for_owner`] with the owner's subject id:
//!
//! ```ignore
//! let profile = profiles.get(&user_id).await?;
//! registry
//!     .check_for_owner("update_profile", &caller, &profile.owner_id)?
//!     .into_result()?;
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod registry;

pub use access_control_sdk::{AccessDecision, AccessDenied, AllowedRoleSet, DenialKind, Grant, Role};
pub use config::AccessControlConfig;
pub use engine::{PrecedenceRule, decide, decide_for_owner};
pub use error::RegistryError;
pub use registry::OperationRegistry;
