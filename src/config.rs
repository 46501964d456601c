//! Lab configuration.
//!
//! Loaded from JSON or YAML, then overlaid with `DNA_LAB_*` environment
//! variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dna::vocabulary::DEFAULT_TROPE_COPY;
use crate::error::{DnaError, Result};

/// Environment variable overriding [`LabConfig::seed`].
pub const ENV_SEED: &str = "DNA_LAB_SEED";
/// Environment variable overriding [`LabConfig::max_prompts_per_run`].
pub const ENV_MAX_PROMPTS: &str = "DNA_LAB_MAX_PROMPTS";

/// Configuration for a lab session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabConfig {
    /// Maximum number of catalogue prompts remixed per generation.
    /// Defaults to 24.
    #[serde(default = "default_max_prompts_per_run")]
    pub max_prompts_per_run: usize,

    /// Number of tropes shown in the tag cloud.
    /// Defaults to 10.
    #[serde(default = "default_tag_cloud_limit")]
    pub tag_cloud_limit: usize,

    /// Seed for reproducible runs. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Trope text a new session starts with.
    #[serde(default = "default_tropes_text")]
    pub tropes_text: String,
}

fn default_max_prompts_per_run() -> usize {
    24
}

fn default_tag_cloud_limit() -> usize {
    10
}

fn default_tropes_text() -> String {
    DEFAULT_TROPE_COPY.to_string()
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            max_prompts_per_run: default_max_prompts_per_run(),
            tag_cloud_limit: default_tag_cloud_limit(),
            seed: None,
            tropes_text: default_tropes_text(),
        }
    }
}

impl LabConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, choosing the format by extension
    /// (`.json`, `.yaml` or `.yml`).
    ///
    /// # Errors
    /// Fails on unreadable files, unknown extensions and invalid content.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        log::debug!("Loading lab config from {}", path.display());
        match extension.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(DnaError::config(format!(
                "unsupported config format: {}",
                path.display()
            ))),
        }
    }

    /// Apply `DNA_LAB_SEED` and `DNA_LAB_MAX_PROMPTS` from the process
    /// environment.
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, keyed by environment variable
    /// name.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| DnaError::config(format!("{} must be an integer: {}", ENV_SEED, e)))?;
            self.seed = Some(seed);
        }
        if let Some(raw) = lookup(ENV_MAX_PROMPTS) {
            self.max_prompts_per_run = raw.trim().parse::<usize>().map_err(|e| {
                DnaError::config(format!("{} must be an integer: {}", ENV_MAX_PROMPTS, e))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_prompts_per_run == 0 {
            return Err(DnaError::config("max_prompts_per_run must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LabConfig::default();
        assert_eq!(config.max_prompts_per_run, 24);
        assert_eq!(config.tag_cloud_limit, 10);
        assert_eq!(config.seed, None);
        assert_eq!(config.tropes_text, DEFAULT_TROPE_COPY);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = LabConfig::from_json_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_prompts_per_run, 24);
    }

    #[test]
    fn test_yaml() {
        let config =
            LabConfig::from_yaml_str("max_prompts_per_run: 3\ntropes_text: laser, mecha\n").unwrap();
        assert_eq!(config.max_prompts_per_run, 3);
        assert_eq!(config.tropes_text, "laser, mecha");
    }

    #[test]
    fn test_zero_prompts_rejected() {
        let err = LabConfig::from_json_str(r#"{"max_prompts_per_run": 0}"#).unwrap_err();
        assert!(matches!(err, DnaError::Config { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [(ENV_SEED, "77"), (ENV_MAX_PROMPTS, " 5 ")].into();
        let config = LabConfig::default()
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.max_prompts_per_run, 5);
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let err = LabConfig::default()
            .apply_overrides(|key| (key == ENV_SEED).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_SEED));
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "seed: 12").unwrap();
        let config = LabConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(12));

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "seed = 12").unwrap();
        assert!(matches!(
            LabConfig::load(file.path()).unwrap_err(),
            DnaError::Config { .. }
        ));
    }
}
