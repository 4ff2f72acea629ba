//! Configuration schema definitions.
//!
//! This module defines the configuration structure for a trustedvote node.
//! All types derive Serde traits for deserialization from config files, and
//! every level carries defaults so a minimal (even empty) document loads.

use serde::{Deserialize, Serialize};

/// Root configuration for a trustedvote node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Network settings (server bind addresses and port).
    pub network: NetworkConfig,
}

/// Network configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NetworkConfig {
    /// Settings for the listening side of the node.
    pub server: ServerConfig,
}

/// Server listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Addresses to bind, in the order given (e.g., `["127.0.0.1", "::1"]`).
    pub interfaces: Vec<String>,

    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            interfaces: vec!["0.0.0.0".to_string()],
            port: 3333,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.network.server.interfaces, vec!["0.0.0.0"]);
        assert_eq!(config.network.server.port, 3333);
    }

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_document_fills_missing_fields() {
        let config: Config =
            serde_json::from_str(r#"{"network":{"server":{"port":7777}}}"#).unwrap();
        assert_eq!(config.network.server.port, 7777);
        assert_eq!(config.network.server.interfaces, vec!["0.0.0.0"]);
    }

    #[test]
    fn test_interface_order_preserved() {
        let config: Config = serde_json::from_str(
            r#"{"network":{"server":{"interfaces":["127.0.0.1","::1"]}}}"#,
        )
        .unwrap();
        assert_eq!(config.network.server.interfaces, vec!["127.0.0.1", "::1"]);
    }
}
