//! Resolution of loosely-typed shift input into calculation values.
//!
//! In lenient mode a malformed value is replaced by a neutral default, logged,
//! and recorded as an [`AuditWarning`]. In strict mode it becomes an
//! [`EngineError`].

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::InputMode;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditWarning, BreakPolicy, NumericInput, OrgSettings, TimeInput};

use super::time_of_day::minutes_since_midnight;

/// Resolves raw inputs according to an [`InputMode`], collecting warnings.
#[derive(Debug)]
pub(crate) struct InputResolver {
    mode: InputMode,
    warnings: Vec<AuditWarning>,
}

impl InputResolver {
    pub(crate) fn new(mode: InputMode) -> Self {
        Self {
            mode,
            warnings: Vec::new(),
        }
    }

    /// Consumes the resolver, returning the warnings raised so far.
    pub(crate) fn into_warnings(self) -> Vec<AuditWarning> {
        self.warnings
    }

    /// Minutes since midnight for a start or end time. Unreadable times are 0.
    pub(crate) fn time(&mut self, input: &TimeInput, field: &str) -> EngineResult<u32> {
        match minutes_since_midnight(input) {
            Some(minutes) => Ok(minutes),
            None => {
                self.reject_or_coerce(
                    EngineError::InvalidTime {
                        field: field.to_string(),
                        value: input.to_string(),
                    },
                    "TIME_COERCED",
                    format!("Could not read {} '{}'; using 00:00", field, input),
                )?;
                Ok(0)
            }
        }
    }

    /// Logged break minutes. Missing means no break in either mode.
    pub(crate) fn break_minutes(&mut self, input: Option<&NumericInput>) -> EngineResult<Decimal> {
        match input {
            None => Ok(Decimal::ZERO),
            // abs() turns "-0" into 0
            Some(NumericInput::Number(n)) if *n >= Decimal::ZERO => Ok(n.abs()),
            Some(other) => {
                self.reject_or_coerce(
                    EngineError::InvalidBreakMinutes {
                        value: other.to_string(),
                    },
                    "BREAK_MINUTES_COERCED",
                    format!("Break minutes '{}' are not a non-negative number; using 0", other),
                )?;
                Ok(Decimal::ZERO)
            }
        }
    }

    /// Hourly wage snapshot. Missing is an error in strict mode.
    pub(crate) fn wage(&mut self, input: Option<&NumericInput>) -> EngineResult<Decimal> {
        match input {
            Some(NumericInput::Number(n)) if *n >= Decimal::ZERO => Ok(n.abs()),
            other => {
                let value = other.map_or_else(|| "missing".to_string(), ToString::to_string);
                self.reject_or_coerce(
                    EngineError::InvalidWage {
                        value: value.clone(),
                    },
                    "WAGE_COERCED",
                    format!("Hourly wage '{}' is not a non-negative number; using 0", value),
                )?;
                Ok(Decimal::ZERO)
            }
        }
    }

    /// Gross pay whose product does not fit in a `Decimal`. Lenient mode
    /// pays 0 for the shift.
    pub(crate) fn gross_overflow(
        &mut self,
        paid_hours: Decimal,
        hourly_wage: Decimal,
    ) -> EngineResult<()> {
        self.reject_or_coerce(
            EngineError::InvalidWage {
                value: hourly_wage.to_string(),
            },
            "WAGE_COERCED",
            format!(
                "Hourly wage '{}' x {} hours is too large to represent; using gross 0",
                hourly_wage,
                paid_hours.normalize()
            ),
        )
    }

    /// The break policy to apply, falling back to `default` when the
    /// organization has none. A blank name counts as none.
    pub(crate) fn policy(
        &mut self,
        org: Option<&OrgSettings>,
        default: BreakPolicy,
    ) -> EngineResult<BreakPolicy> {
        let Some(name) = org
            .and_then(|o| o.break_policy.as_deref())
            .filter(|name| !name.trim().is_empty())
        else {
            return Ok(default);
        };

        match name.parse::<BreakPolicy>() {
            Ok(policy) => Ok(policy),
            Err(err) => {
                self.reject_or_coerce(
                    err,
                    "BREAK_POLICY_COERCED",
                    format!("Unknown break policy '{}'; using '{}'", name, BreakPolicy::None),
                )?;
                Ok(BreakPolicy::None)
            }
        }
    }

    fn reject_or_coerce(
        &mut self,
        error: EngineError,
        code: &str,
        message: String,
    ) -> EngineResult<()> {
        if self.mode.is_strict() {
            return Err(error);
        }

        warn!(code = code, error = %error, "Coercing malformed shift input");
        self.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
            severity: "medium".to_string(),
        });
        Ok(())
    }
}
