//! Core configuration structures for Bayesian bagging.
//!
//! This module provides the main configuration structure and builder for
//! setting up an ensemble: its size, weight sampler, base learner, seed and
//! diagnostics toggle.

use crate::core::constants::*;
use crate::core::error::{BaggingError, Result};
use crate::core::types::*;
use crate::{config_error, ensure};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Main configuration structure for an online Bayesian bagging ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaggingConfig {
    /// Number of models in the bag
    pub ensemble_size: usize,
    /// Weight sampling strategy
    pub sampler: SamplerKind,
    /// Tuning constant of the adaptive sampler
    pub adaptive_k: f64,
    /// Base learner cloned into every ensemble slot
    pub base_learner: BaseLearnerKind,
    /// Master seed of the weight stream
    pub random_seed: u64,
    /// Emit per-draw diagnostics
    pub verbose: bool,
}

impl Default for BaggingConfig {
    fn default() -> Self {
        BaggingConfig {
            ensemble_size: DEFAULT_ENSEMBLE_SIZE,
            sampler: SamplerKind::default(),
            adaptive_k: DEFAULT_ADAPTIVE_K,
            base_learner: BaseLearnerKind::default(),
            random_seed: DEFAULT_RANDOM_SEED,
            verbose: false,
        }
    }
}

impl BaggingConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.ensemble_size >= 1,
            BaggingError::invalid_parameter(
                "ensemble_size",
                self.ensemble_size.to_string(),
                "must be at least 1",
            )
        );

        ensure!(
            self.adaptive_k.is_finite() && self.adaptive_k > 0.0,
            BaggingError::invalid_parameter(
                "adaptive_k",
                self.adaptive_k.to_string(),
                "must be finite and positive",
            )
        );

        Ok(())
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| config_error!("Failed to read config file {}: {}", path.display(), e))?;

        let config: BaggingConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(BaggingError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| config_error!("Failed to serialize to TOML: {}", e))?,
            _ => {
                return Err(BaggingError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from `BAYESBAG_*` environment variables over the defaults
    pub fn load_from_environment() -> Result<Self> {
        let mut config = BaggingConfig::default();
        config.read_environment()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `BAYESBAG_*` environment variables that are set on top of this configuration
    pub fn apply_environment_overrides(&mut self) -> Result<()> {
        self.read_environment()?;
        self.validate()
    }

    fn read_environment(&mut self) -> Result<()> {
        if let Some(val) = env_var("BAYESBAG_ENSEMBLE_SIZE") {
            self.ensemble_size = val
                .parse()
                .map_err(|_| config_error!("Invalid BAYESBAG_ENSEMBLE_SIZE: {}", val))?;
        }

        if let Some(val) = env_var("BAYESBAG_SAMPLER") {
            self.sampler = val.parse().map_err(BaggingError::config)?;
        }

        if let Some(val) = env_var("BAYESBAG_ADAPTIVE_K") {
            self.adaptive_k = val
                .parse()
                .map_err(|_| config_error!("Invalid BAYESBAG_ADAPTIVE_K: {}", val))?;
        }

        if let Some(val) = env_var("BAYESBAG_BASE_LEARNER") {
            self.base_learner = val.parse().map_err(BaggingError::config)?;
        }

        if let Some(val) = env_var("BAYESBAG_RANDOM_SEED") {
            self.random_seed = val
                .parse()
                .map_err(|_| config_error!("Invalid BAYESBAG_RANDOM_SEED: {}", val))?;
        }

        if let Some(val) = env_var("BAYESBAG_VERBOSE") {
            self.verbose = match val.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(config_error!("Invalid BAYESBAG_VERBOSE: {}", val)),
            };
        }

        Ok(())
    }

    /// Merge another configuration into this one (other takes precedence)
    pub fn merge(&mut self, other: &BaggingConfig) -> Result<()> {
        self.ensemble_size = other.ensemble_size;
        self.sampler = other.sampler;
        self.adaptive_k = other.adaptive_k;
        self.base_learner = other.base_learner;
        self.random_seed = other.random_seed;
        self.verbose = other.verbose;

        self.validate()
    }

    /// Parameters as a string map, for logging and reporting
    pub fn as_parameter_map(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        params.insert("ensemble_size".to_string(), self.ensemble_size.to_string());
        params.insert("sampler".to_string(), self.sampler.to_string());
        params.insert("adaptive_k".to_string(), self.adaptive_k.to_string());
        params.insert("base_learner".to_string(), self.base_learner.to_string());
        params.insert("random_seed".to_string(), self.random_seed.to_string());
        params.insert("verbose".to_string(), self.verbose.to_string());
        params
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for [`BaggingConfig`]
#[derive(Debug)]
pub struct ConfigBuilder {
    config: BaggingConfig,
    validation_errors: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        ConfigBuilder {
            config: BaggingConfig::default(),
            validation_errors: Vec::new(),
        }
    }

    /// Set the number of models in the bag
    pub fn ensemble_size(mut self, size: usize) -> Self {
        if size < 1 {
            self.validation_errors
                .push("ensemble_size must be at least 1".to_string());
        }
        self.config.ensemble_size = size;
        self
    }

    /// Set the weight sampler
    pub fn sampler(mut self, sampler: SamplerKind) -> Self {
        self.config.sampler = sampler;
        self
    }

    /// Set the adaptive sampler's tuning constant
    pub fn adaptive_k(mut self, k: f64) -> Self {
        if !(k.is_finite() && k > 0.0) {
            self.validation_errors
                .push("adaptive_k must be finite and positive".to_string());
        }
        self.config.adaptive_k = k;
        self
    }

    /// Set the base learner
    pub fn base_learner(mut self, learner: BaseLearnerKind) -> Self {
        self.config.base_learner = learner;
        self
    }

    /// Set the master random seed
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = seed;
        self
    }

    /// Enable or disable per-draw diagnostics
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<BaggingConfig> {
        if !self.validation_errors.is_empty() {
            return Err(config_error!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            ));
        }

        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
