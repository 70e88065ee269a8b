//! Caller Resolver SDK
//!
//! - [`CallerResolverClient`] - API trait implemented by resolver plugins
//! - [`CallerResolverError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use caller_resolver_sdk::CallerResolverClient;
//!
//! let caller = resolver.resolve("token-value").await?;
//! if caller.is_privileged() { /* ... */ }
//! ```

pub mod api;
pub mod error;

pub use api::CallerResolverClient;
pub use error::CallerResolverError;
