//! Layered configuration for the explanation backend.
//!
//! Precedence, highest first: command-line flags, `-S KEY=VALUE` overrides,
//! the TOML config file, built-in defaults.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;

pub use builder::build_config;
pub use models::AppConfig;
