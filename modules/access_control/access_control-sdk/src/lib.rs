#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Access Control SDK
//!
//! This crate provides the public vocabulary of the `access_control` module:
//!
//! - [`Role`] - Role tags configured on protected operations
//! - [`AllowedRoleSet`] - Non-empty, immutable set of roles for one operation
//! - [`AccessDecision`], [`Grant`], [`AccessDenied`] - Decision outcomes
//! - [`RoleSetError`] - Configuration errors
//!
//! ## Usage
//!
//! ```ignore
//! use access_control_sdk::{AllowedRoleSet, Role};
//!
//! let roles = AllowedRoleSet::new([Role::ApplicationAdministrator])?;
//! let decision = access_control::decide(&roles, &caller);
//! decision.into_result()?;
//! ```

pub mod decision;
pub mod error;
pub mod role;

pub use decision::{AccessDecision, AccessDenied, DenialKind, Grant, OPERATION_NOT_PERMITTED};
pub use error::RoleSetError;
pub use role::{AllowedRoleSet, Role};
