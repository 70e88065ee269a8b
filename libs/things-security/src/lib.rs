#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Caller identity shared across request handling.
//!
//! [`CallerContext`] carries the facts the authentication layer resolved for
//! the current request. It is built fresh per request and never persisted.

pub mod caller;

pub use caller::{CallerContext, CallerContextBuilder};

/// Label used for callers that did not authenticate.
pub const ANONYMOUS_LABEL: &str = "anonymous";
