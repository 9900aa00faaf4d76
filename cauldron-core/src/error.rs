//! Error types for the weight store, the panel and config loading.

use std::path::PathBuf;

/// Errors raised by panel and store operations.
///
/// Out-of-range diploma counts are not errors: the panel reports them as
/// `RenderOutcome::Ignored`. Index errors mean a write reached a slot that
/// was never rendered, which is a caller bug.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("weight index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("bounds index {index} out of range (len {len})")]
    BoundsIndexOutOfRange { index: usize, len: usize },
    #[error("unknown bounds field: {0}")]
    UnknownBoundsField(String),
    #[error("serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur while loading or validating a `PanelConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_message() {
        let err = PanelError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "weight index 7 out of range (len 3)");
    }

    #[test]
    fn invalid_config_message() {
        let err = ConfigError::Invalid("default_weights is empty".into());
        assert_eq!(err.to_string(), "invalid config: default_weights is empty");
    }
}
