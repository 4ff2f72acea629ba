//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::Config;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are empty, not valid JSON, or the wrong shape.
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but violates semantic constraints.
    #[error("invalid config file {}: {}", .path.display(), format_errors(.errors))]
    Validation {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate a JSON configuration file.
///
/// Fields absent from the document take their defaults; fields present are
/// used verbatim. Either the whole document loads or an error is returned,
/// never a partially populated `Config`.
pub fn load_json(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&config).map_err(|errors| ConfigError::Validation {
        path: path.to_path_buf(),
        errors,
    })?;

    tracing::debug!(
        path = %path.display(),
        interfaces = ?config.network.server.interfaces,
        port = config.network.server.port,
        "Configuration loaded"
    );

    Ok(config)
}
