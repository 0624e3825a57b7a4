use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

pub const DEFAULT_LABEL: &str = "cache";

/// Construction-time settings for a cache. None of them change semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Name used in log events and in duplicate-key errors.
    pub label: String,
    /// Number of entries to reserve room for up front.
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            initial_capacity: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    label: Option<String>,
    initial_capacity: Option<usize>,
}

impl CacheConfig {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Parses a JSON document such as `{"label": "matrix", "initial_capacity": 64}`.
    /// Missing fields fall back to their defaults.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config_file: ConfigFile = serde_json::from_str(content)
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        let label = config_file
            .label
            .unwrap_or_else(|| DEFAULT_LABEL.to_string());
        if label.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "label must not be empty".to_string(),
            ));
        }

        Ok(Self {
            label,
            initial_capacity: config_file.initial_capacity.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let config =
            CacheConfig::from_json_str(r#"{"label": "quantum_defects", "initial_capacity": 128}"#)
                .unwrap();
        assert_eq!(config.label, "quantum_defects");
        assert_eq!(config.initial_capacity, 128);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = CacheConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_empty_label_rejected() {
        let err = CacheConfig::from_json_str(r#"{"label": "  "}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_malformed_document() {
        let err = CacheConfig::from_json_str(r#"{"initial_capacity": "lots"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(_)));
        assert!(err.to_string().starts_with("Invalid configuration format"));
    }
}
