//! Panel configuration — everything the host supplies before initialization.
//!
//! Loaded from TOML or JSON:
//!
//! ```toml
//! default_weights = [1.0, 1.0, 1.0, 1.0]
//! effect_names = ["Monedas", "Provisiones", "Cuartel Fuerza", "Ordinarios Básicos"]
//! icon_dir = "effects"
//! initial_count = 2
//!
//! [[bounds_fields]]
//! label = "search depth"
//! name = "n_starts"
//! min = 1
//! max = 100
//! value = 10
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bounds::{default_bounds_fields, BoundsField};
use crate::effects::EFFECT_NAMES;
use crate::error::ConfigError;

/// Hidden field the weights are submitted under.
pub const DEFAULT_OUTPUT_FIELD: &str = "effect_weights_json";

/// Diploma count shown when no other count is configured.
pub const DEFAULT_INITIAL_COUNT: usize = 4;

fn default_output_field() -> String {
    DEFAULT_OUTPUT_FIELD.to_string()
}

fn default_initial_count() -> usize {
    DEFAULT_INITIAL_COUNT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// One default per effect; its length is the maximum diploma count.
    pub default_weights: Vec<f64>,
    /// Labels parallel to `default_weights`. May be shorter.
    #[serde(default)]
    pub effect_names: Vec<String>,
    /// Explicit icon paths parallel to `default_weights`. May be shorter.
    #[serde(default)]
    pub effect_icons: Vec<String>,
    /// Directory used to synthesize `effect{i+1}.png` for missing icons.
    #[serde(default)]
    pub icon_dir: Option<String>,
    /// Diploma count rendered at initialization.
    #[serde(default = "default_initial_count")]
    pub initial_count: usize,
    #[serde(default = "default_output_field")]
    pub output_field: String,
    /// Scalar settings rendered beside the weights. Must stay the last
    /// field: TOML writes `[[bounds_fields]]` tables after plain values.
    #[serde(default)]
    pub bounds_fields: Vec<BoundsField>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_weights: vec![1.0; EFFECT_NAMES.len()],
            effect_names: EFFECT_NAMES.iter().map(|s| s.to_string()).collect(),
            effect_icons: Vec::new(),
            icon_dir: Some("effects".to_string()),
            bounds_fields: default_bounds_fields(),
            initial_count: DEFAULT_INITIAL_COUNT,
            output_field: default_output_field(),
        }
    }
}

impl PanelConfig {
    /// Load from a `.toml` or `.json` file and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let config = match ext.as_str() {
            "toml" => Self::from_toml(&content)?,
            "json" => Self::from_json(&content)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            max_effects = config.max_effects(),
            bounds = config.bounds_fields.len(),
            "loaded panel config"
        );
        Ok(config)
    }

    /// Load `explicit` when given; otherwise `fallback` if that file
    /// exists; otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>, fallback: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match fallback {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                tracing::debug!("no panel config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse TOML without validating.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse JSON without validating.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Number of weight slots; the diploma count upper bound.
    pub fn max_effects(&self) -> usize {
        self.default_weights.len()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_weights.is_empty() {
            return Err(ConfigError::Invalid("default_weights is empty".into()));
        }
        if let Some((i, w)) = self
            .default_weights
            .iter()
            .enumerate()
            .find(|(_, w)| !(0.0..=1.0).contains(*w))
        {
            return Err(ConfigError::Invalid(format!(
                "default_weights[{i}] = {w} is outside [0, 1]"
            )));
        }
        if self.effect_names.len() > self.max_effects() {
            return Err(ConfigError::Invalid(format!(
                "{} effect names for {} weights",
                self.effect_names.len(),
                self.max_effects()
            )));
        }
        if self.initial_count < 1 || self.initial_count > self.max_effects() {
            return Err(ConfigError::Invalid(format!(
                "initial_count {} is outside [1, {}]",
                self.initial_count,
                self.max_effects()
            )));
        }
        if self.output_field.trim().is_empty() {
            return Err(ConfigError::Invalid("output_field is empty".into()));
        }

        let mut seen = HashSet::new();
        for field in &self.bounds_fields {
            if let Some(problem) = field.check() {
                return Err(ConfigError::Invalid(problem));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate bounds field name '{}'",
                    field.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PanelConfig::default();
        config.validate().unwrap();
        assert_eq!(config.max_effects(), 24);
        assert_eq!(config.output_field, "effect_weights_json");
    }

    #[test]
    fn parses_minimal_toml() {
        let config = PanelConfig::from_toml("default_weights = [0.1, 0.2, 0.3]\n").unwrap();
        assert_eq!(config.max_effects(), 3);
        assert!(config.effect_names.is_empty());
        assert!(config.bounds_fields.is_empty());
        assert_eq!(config.initial_count, DEFAULT_INITIAL_COUNT);
        // 4 > 3 slots
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_bounds_with_integer_literals() {
        let toml = r#"
default_weights = [0.1, 0.2, 0.3]
effect_names = ["A", "B", "C"]
initial_count = 2

[[bounds_fields]]
label = "search depth"
name = "n_starts"
min = 1
max = 100
value = 10
"#;
        let config = PanelConfig::from_toml(toml).unwrap();
        config.validate().unwrap();
        assert_eq!(config.bounds_fields[0].max, 100.0);
        assert_eq!(config.bounds_fields[0].step, 1.0);
    }

    #[test]
    fn parses_json() {
        let json = r#"{"default_weights":[0.5,0.5],"initial_count":1,"icon_dir":"fx"}"#;
        let config = PanelConfig::from_json(json).unwrap();
        config.validate().unwrap();
        assert_eq!(config.icon_dir.as_deref(), Some("fx"));
    }

    #[test]
    fn rejects_out_of_range_defaults() {
        let mut config = PanelConfig::default();
        config.default_weights[3] = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_weights[3]"));
    }

    #[test]
    fn rejects_duplicate_bounds_names() {
        let mut config = PanelConfig::default();
        let dup = config.bounds_fields[0].clone();
        config.bounds_fields.push(dup);
        assert!(config.validate().unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_too_many_names() {
        let mut config = PanelConfig::default();
        config.default_weights.truncate(3);
        config.initial_count = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("panel.toml");
        std::fs::write(&toml_path, PanelConfig::default().to_toml().unwrap()).unwrap();
        assert_eq!(PanelConfig::load(&toml_path).unwrap(), PanelConfig::default());

        let json_path = dir.path().join("panel.json");
        std::fs::write(&json_path, r#"{"default_weights":[0.3],"initial_count":1}"#).unwrap();
        assert_eq!(PanelConfig::load(&json_path).unwrap().max_effects(), 1);

        let yaml_path = dir.path().join("panel.yaml");
        std::fs::write(&yaml_path, "x: 1").unwrap();
        assert!(matches!(
            PanelConfig::load(&yaml_path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn resolve_prefers_explicit_then_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.json");
        std::fs::write(&explicit, r#"{"default_weights":[0.3,0.4],"initial_count":2}"#).unwrap();
        let missing = dir.path().join("missing.toml");

        let from_explicit = PanelConfig::resolve(Some(&explicit), Some(&missing)).unwrap();
        assert_eq!(from_explicit.max_effects(), 2);

        let from_defaults = PanelConfig::resolve(None, Some(&missing)).unwrap();
        assert_eq!(from_defaults, PanelConfig::default());

        assert!(PanelConfig::resolve(Some(&missing), None).is_err());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = PanelConfig::load(Path::new("/nonexistent/panel.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
