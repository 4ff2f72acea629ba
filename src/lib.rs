//! Trustedvote Node Configuration Library

pub mod config;

pub use config::loader::{load_json, ConfigError};
pub use config::schema::{Config, NetworkConfig, ServerConfig};
pub use config::validation::{validate_config, ValidationError};
pub use config::watcher::ConfigWatcher;
