//! Application state for the Shift Wage Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{CalculatorConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the loaded calculator configuration, shared read-only across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded calculator configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        self.config.config()
    }
}
