//! Error types for the Shift Wage Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Calculation errors are only produced in strict input mode; lenient mode
//! substitutes neutral defaults instead.

use thiserror::Error;

/// The main error type for the Shift Wage Engine.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A start or end time could not be read as a time of day.
    #[error("Invalid time for '{field}': {value}")]
    InvalidTime {
        /// The shift field holding the time (`start_time` or `end_time`).
        field: String,
        /// The rejected value.
        value: String,
    },

    /// Break minutes were non-numeric or negative.
    #[error("Invalid break minutes: {value}")]
    InvalidBreakMinutes {
        /// The rejected value.
        value: String,
    },

    /// The hourly wage snapshot was missing, non-numeric or negative.
    #[error("Invalid hourly wage: {value}")]
    InvalidWage {
        /// The rejected value.
        value: String,
    },

    /// The organization named a break policy this engine does not know.
    #[error("Unknown break policy: {name}")]
    UnknownBreakPolicy {
        /// The unrecognized policy name.
        name: String,
    },

    /// A report total grew beyond the range of a `Decimal`.
    #[error("Report total '{field}' is too large to represent")]
    TotalsOverflow {
        /// The total that overflowed (`duration_hours`, `paid_hours` or `gross`).
        field: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_time_displays_field_and_value() {
        let error = EngineError::InvalidTime {
            field: "start_time".to_string(),
            value: "nine-ish".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid time for 'start_time': nine-ish");
    }

    #[test]
    fn test_invalid_break_minutes_displays_value() {
        let error = EngineError::InvalidBreakMinutes {
            value: "-15".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid break minutes: -15");
    }

    #[test]
    fn test_invalid_wage_displays_value() {
        let error = EngineError::InvalidWage {
            value: "missing".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid hourly wage: missing");
    }

    #[test]
    fn test_unknown_break_policy_displays_name() {
        let error = EngineError::UnknownBreakPolicy {
            name: "lunch_only".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown break policy: lunch_only");
    }

    #[test]
    fn test_totals_overflow_displays_field() {
        let error = EngineError::TotalsOverflow {
            field: "gross".to_string(),
        };
        assert_eq!(error.to_string(), "Report total 'gross' is too large to represent");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_policy() -> EngineResult<()> {
            Err(EngineError::UnknownBreakPolicy {
                name: "x".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_policy()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
