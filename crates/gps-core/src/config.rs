//! Hyperparameter configuration for GPS cost terms
//!
//! Cost terms receive their hyperparameters as explicit records. A `Config`
//! is loaded once from a TOML file plus `GPS__`-prefixed environment
//! overrides and then handed to the cost constructors.

use std::path::{Path, PathBuf};

use config::{ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{GpsError, Result};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub cost: CostSumConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or `warn,gps_cost=trace`
    pub level: String,
    /// Emit JSON log lines instead of the human-readable format
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Weighted sum of cost terms
///
/// `weights` runs parallel to `costs`; an empty list weights every term 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSumConfig {
    #[serde(default)]
    pub weights: Vec<f64>,
    pub costs: Vec<CostTermConfig>,
}

impl CostSumConfig {
    /// Weights with the empty-list default applied
    pub fn resolved_weights(&self) -> Result<Vec<f64>> {
        if self.costs.is_empty() {
            return Err(GpsError::Config(
                "cost sum needs at least one cost term".to_string(),
            ));
        }
        if self.weights.is_empty() {
            return Ok(vec![1.0; self.costs.len()]);
        }
        if self.weights.len() != self.costs.len() {
            return Err(GpsError::Config(format!(
                "cost sum has {} terms but {} weights",
                self.costs.len(),
                self.weights.len()
            )));
        }
        Ok(self.weights.clone())
    }

    /// First action cost term, if any
    pub fn action(&self) -> Option<&ActionCostConfig> {
        self.costs.iter().find_map(|term| match term {
            CostTermConfig::Action(action) => Some(action),
            CostTermConfig::State(_) => None,
        })
    }
}

/// One cost term, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CostTermConfig {
    Action(ActionCostConfig),
    State(StateCostConfig),
}

impl CostTermConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            CostTermConfig::Action(_) => "action",
            CostTermConfig::State(_) => "state",
        }
    }
}

/// Quadratic control-effort penalty weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCostConfig {
    /// Per-control-dimension weight, length `Du`
    pub wu: Vec<f64>,
}

impl ActionCostConfig {
    pub fn new(wu: Vec<f64>) -> Self {
        Self { wu }
    }
}

/// Quadratic state-tracking penalty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateCostConfig {
    /// Per-state-dimension weight, length `Dx`
    pub wp: Vec<f64>,
    /// Target state; the origin when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<f64>>,
}

impl Config {
    /// Load configuration from a file and the environment
    ///
    /// When `path` is `None` the standard locations are searched. A config
    /// without a `[cost]` table is rejected.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigBuilder::<config::builder::DefaultState>::default();

        match path {
            Some(path) => {
                tracing::info!("Loading config from: {:?}", path);
                builder = builder.add_source(
                    File::from(path)
                        .format(FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(found) = Self::find_config_file() {
                    tracing::info!("Loading config from: {:?}", found);
                    builder = builder.add_source(
                        File::from(found)
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                } else {
                    tracing::info!("No config file found, relying on environment");
                }
            }
        }

        // Environment variables with GPS__ prefix, e.g. GPS__LOGGING__LEVEL
        builder = builder.add_source(
            Environment::with_prefix("GPS")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string, without environment overrides
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        self.cost.resolved_weights().map(|_| ())
    }

    /// Hyperparameters of the configured action cost
    pub fn action_cost(&self) -> Result<&ActionCostConfig> {
        self.cost
            .action()
            .ok_or_else(|| GpsError::Config("no action cost configured".to_string()))
    }

    /// Find the configuration file
    pub fn find_config_file() -> Option<PathBuf> {
        // Check in order: GPS_CONFIG env, ./gps.toml, ~/.config/gps/gps.toml
        if let Ok(path) = std::env::var("GPS_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from("gps.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".config").join("gps").join("gps.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }
}
