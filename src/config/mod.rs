//! Configuration management for Bayesian bagging.
//!
//! Configuration can come from defaults, the [`ConfigBuilder`], `.json` or
//! `.toml` files, or `BAYESBAG_*` environment variables. Every path ends in
//! [`BaggingConfig::validate`].

pub mod core;

pub use self::core::{BaggingConfig, ConfigBuilder};

use crate::core::error::Result;
use std::path::Path;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "bayesian_bagging.toml";

/// Where a configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Default configuration values
    Default,
    /// Configuration from file
    File(String),
    /// Configuration from environment variables
    Environment,
}

/// Resolve a configuration: the file if given, otherwise defaults, then environment overrides.
pub fn resolve<P: AsRef<Path>>(path: Option<P>) -> Result<(BaggingConfig, ConfigSource)> {
    let (mut config, source) = match path {
        Some(path) => {
            let display = path.as_ref().display().to_string();
            (BaggingConfig::load_from_file(path)?, ConfigSource::File(display))
        }
        None => (BaggingConfig::default(), ConfigSource::Default),
    };

    let before = config.clone();
    config.apply_environment_overrides()?;
    let source = if config != before && source == ConfigSource::Default {
        ConfigSource::Environment
    } else {
        source
    };

    log::debug!("Resolved configuration from {:?}: {:?}", source, config);
    Ok((config, source))
}
