//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::CalculatorConfig;

/// Loads and provides access to calculator configuration.
///
/// # File Format
///
/// ```text
/// default_break_policy: fixed_0_5_over_5_5h
/// input_mode: lenient
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml")?;
/// println!("Default policy: {}", loader.config().default_break_policy);
/// # Ok::<(), wage_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            default_break_policy = %config.default_break_policy,
            input_mode = ?config.input_mode,
            "Loaded calculator configuration"
        );

        Ok(Self { config })
    }

    /// Creates a loader around an already-built configuration.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Parses YAML text into a configuration.
    fn parse(content: &str, path: &str) -> EngineResult<CalculatorConfig> {
        // An empty file is valid and means "all defaults".
        if content.trim().is_empty() {
            return Ok(CalculatorConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}
