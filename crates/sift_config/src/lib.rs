//! Parsing and validation of `sift.toml` project configuration files.
//!
//! This crate reads the project configuration file and produces a
//! strongly-typed [`SiftConfig`], including the diagnostic suppression list
//! consumed by the reporter layer.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{CheckConfig, SiftConfig};
