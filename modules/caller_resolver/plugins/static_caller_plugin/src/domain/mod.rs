//! Domain layer for the static caller resolver plugin.

pub mod client;
pub mod service;

pub use service::Service;
