//! Organization settings and break policies.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// An organization-level rule for unpaid time deducted on top of any
/// manually logged break.
///
/// # Example
///
/// ```
/// use wage_engine::models::BreakPolicy;
///
/// let policy: BreakPolicy = "fixed_0_5_over_5_5h".parse().unwrap();
/// assert_eq!(policy, BreakPolicy::FixedHalfHourOverFiveAndHalf);
/// assert_eq!(policy.as_str(), "fixed_0_5_over_5_5h");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakPolicy {
    /// No additional deduction.
    #[serde(rename = "none")]
    None,
    /// Half an hour deducted from shifts longer than five and a half hours.
    #[default]
    #[serde(rename = "fixed_0_5_over_5_5h")]
    FixedHalfHourOverFiveAndHalf,
    /// Deduction spread across pay periods. Currently deducts like the fixed rule.
    #[serde(rename = "proportional_across_periods")]
    ProportionalAcrossPeriods,
    /// Deduction derived from the base rate. Currently deducts like the fixed rule.
    #[serde(rename = "from_base_rate")]
    FromBaseRate,
}

impl BreakPolicy {
    /// All known policies.
    pub const ALL: [BreakPolicy; 4] = [
        BreakPolicy::None,
        BreakPolicy::FixedHalfHourOverFiveAndHalf,
        BreakPolicy::ProportionalAcrossPeriods,
        BreakPolicy::FromBaseRate,
    ];

    /// Returns the wire name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakPolicy::None => "none",
            BreakPolicy::FixedHalfHourOverFiveAndHalf => "fixed_0_5_over_5_5h",
            BreakPolicy::ProportionalAcrossPeriods => "proportional_across_periods",
            BreakPolicy::FromBaseRate => "from_base_rate",
        }
    }
}

impl std::fmt::Display for BreakPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreakPolicy::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| EngineError::UnknownBreakPolicy {
                name: s.to_string(),
            })
    }
}

/// Organization settings relevant to wage calculation.
///
/// The policy is kept as the raw name the organization stored so that an
/// unrecognized value can be reported or coerced by the calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgSettings {
    /// Name of the organization's break policy, if set.
    #[serde(default)]
    pub break_policy: Option<String>,
}

impl OrgSettings {
    /// Creates settings using a known policy.
    pub fn with_policy(policy: BreakPolicy) -> Self {
        Self {
            break_policy: Some(policy.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_policy_round_trips_through_its_name() {
        for policy in BreakPolicy::ALL {
            assert_eq!(policy.as_str().parse::<BreakPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_unknown_policy_name_is_an_error() {
        match "lunch_only".parse::<BreakPolicy>() {
            Err(EngineError::UnknownBreakPolicy { name }) => assert_eq!(name, "lunch_only"),
            other => panic!("Expected UnknownBreakPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_policy_name_is_trimmed() {
        assert_eq!(" none ".parse::<BreakPolicy>().unwrap(), BreakPolicy::None);
    }

    #[test]
    fn test_policy_serializes_to_wire_name() {
        let json = serde_json::to_string(&BreakPolicy::FixedHalfHourOverFiveAndHalf).unwrap();
        assert_eq!(json, r#""fixed_0_5_over_5_5h""#);

        let parsed: BreakPolicy = serde_json::from_str(r#""from_base_rate""#).unwrap();
        assert_eq!(parsed, BreakPolicy::FromBaseRate);
    }

    #[test]
    fn test_default_policy_is_fixed() {
        assert_eq!(BreakPolicy::default(), BreakPolicy::FixedHalfHourOverFiveAndHalf);
    }

    #[test]
    fn test_org_settings_deserialize_without_policy() {
        let org: OrgSettings = serde_json::from_str("{}").unwrap();
        assert!(org.break_policy.is_none());
    }

    #[test]
    fn test_with_policy_stores_wire_name() {
        let org = OrgSettings::with_policy(BreakPolicy::None);
        assert_eq!(org.break_policy.as_deref(), Some("none"));
    }
}
