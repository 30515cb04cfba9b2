//! Top-level ShipScore configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{GateConfig, PathsConfig, RecordConfig};
use crate::constants;
use crate::errors::ConfigError;
use crate::tracing::fields;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SHIPSCORE_*`)
/// 3. Project config (`shipscore.toml` in the root, or an explicit path)
/// 4. User config (`~/.shipscore/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShipscoreConfig {
    pub paths: PathsConfig,
    pub record: RecordConfig,
    pub gate: GateConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit project config file; replaces `<root>/shipscore.toml`.
    pub project_config: Option<PathBuf>,
    pub artifacts_dir: Option<PathBuf>,
    pub actor: Option<String>,
    pub min_score: Option<u32>,
}

impl ShipscoreConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!({ fields::REASON } = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config. An explicit path must exist.
        match cli_overrides.and_then(|cli| cli.project_config.as_deref()) {
            Some(explicit) => Self::merge_toml_file(&mut config, explicit)?,
            None => {
                let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ShipscoreConfig) -> Result<(), ConfigError> {
        if let Some(score) = config.gate.min_score {
            if score > 100 {
                return Err(ConfigError::ValidationFailed {
                    field: "gate.min_score".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        if let Some(ref actor) = config.record.actor {
            if actor.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "record.actor".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.shipscore/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".shipscore").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ShipscoreConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ShipscoreConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut ShipscoreConfig, other: &ShipscoreConfig) {
        // Paths
        if other.paths.artifacts_dir.is_some() {
            base.paths.artifacts_dir = other.paths.artifacts_dir.clone();
        }
        if other.paths.scores_path.is_some() {
            base.paths.scores_path = other.paths.scores_path.clone();
        }
        if other.paths.records_dir.is_some() {
            base.paths.records_dir = other.paths.records_dir.clone();
        }
        if other.paths.proposals_dir.is_some() {
            base.paths.proposals_dir = other.paths.proposals_dir.clone();
        }

        // Record
        if other.record.actor.is_some() {
            base.record.actor = other.record.actor.clone();
        }

        // Gate
        if other.gate.min_score.is_some() {
            base.gate.min_score = other.gate.min_score;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SHIPSCORE_ARTIFACTS_DIR`, `SHIPSCORE_MIN_SCORE`, etc.
    fn apply_env_overrides(config: &mut ShipscoreConfig) {
        if let Some(val) = std::env::var_os("SHIPSCORE_ARTIFACTS_DIR") {
            config.paths.artifacts_dir = Some(PathBuf::from(val));
        }
        if let Some(val) = std::env::var_os("SHIPSCORE_SCORES_PATH") {
            config.paths.scores_path = Some(PathBuf::from(val));
        }
        if let Some(val) = std::env::var_os("SHIPSCORE_RECORDS_DIR") {
            config.paths.records_dir = Some(PathBuf::from(val));
        }
        if let Some(val) = std::env::var_os("SHIPSCORE_PROPOSALS_DIR") {
            config.paths.proposals_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("SHIPSCORE_ACTOR") {
            config.record.actor = Some(val);
        }
        if let Ok(val) = std::env::var("SHIPSCORE_MIN_SCORE") {
            if let Ok(v) = val.parse::<u32>() {
                config.gate.min_score = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ShipscoreConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.artifacts_dir {
            config.paths.artifacts_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.actor {
            config.record.actor = Some(v.clone());
        }
        if let Some(v) = cli.min_score {
            config.gate.min_score = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
