//! Application configuration.
//!
//! - `types.rs` - TOML-backed config structs and defaults
//! - `loader.rs` - file location, loading, validation

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, RoutesConfig};
