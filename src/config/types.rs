//! Configuration types for wage calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::BreakPolicy;

/// How the calculator treats malformed shift input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Substitute a neutral default, record a warning, and continue.
    #[default]
    Lenient,
    /// Reject the input with an error.
    Strict,
}

impl InputMode {
    /// Returns true in strict mode.
    pub fn is_strict(&self) -> bool {
        matches!(self, InputMode::Strict)
    }
}

/// Calculator settings injected by the caller.
///
/// # Example
///
/// ```
/// use wage_engine::config::{CalculatorConfig, InputMode};
/// use wage_engine::models::BreakPolicy;
///
/// let config = CalculatorConfig::default();
/// assert_eq!(config.default_break_policy, BreakPolicy::FixedHalfHourOverFiveAndHalf);
/// assert_eq!(config.input_mode, InputMode::Lenient);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Policy applied when the organization has none configured.
    #[serde(default)]
    pub default_break_policy: BreakPolicy,
    /// Whether malformed input is coerced or rejected.
    #[serde(default)]
    pub input_mode: InputMode,
}

impl CalculatorConfig {
    /// Returns a strict-mode configuration with the default policy.
    pub fn strict() -> Self {
        Self {
            input_mode: InputMode::Strict,
            ..Self::default()
        }
    }

    /// Returns a copy using the given default policy.
    pub fn with_default_policy(self, policy: BreakPolicy) -> Self {
        Self {
            default_break_policy: policy,
            ..self
        }
    }
}
