//! Configuration loading and management for the Shift Wage Engine.
//!
//! This module provides the calculator settings a caller injects (the default
//! break policy and the input-handling mode) and loads them from YAML.
//!
//! # Example
//!
//! ```no_run
//! use wage_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Input mode: {:?}", loader.config().input_mode);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, InputMode};
