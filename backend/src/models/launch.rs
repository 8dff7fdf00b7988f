//! Launch record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary launch outcome as encoded in the `class` column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    pub fn value(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.value()
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("outcome class must be 0 or 1, got {}", other)),
        }
    }
}

impl TryFrom<i64> for OutcomeClass {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| format!("outcome class must be 0 or 1, got {}", value))
            .and_then(OutcomeClass::try_from)
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// One row of the launch table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<i64>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub class: OutcomeClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Build a record from the four columns the dashboard needs.
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        class: OutcomeClass,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass_kg,
            class,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
        }
    }

    pub fn with_flight_number(mut self, flight_number: i64) -> Self {
        self.flight_number = Some(flight_number);
        self
    }

    pub fn with_booster_version(mut self, booster_version: impl Into<String>) -> Self {
        self.booster_version = Some(booster_version.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_class_from_integer() {
        assert_eq!(OutcomeClass::try_from(0u8).unwrap(), OutcomeClass::Failure);
        assert_eq!(OutcomeClass::try_from(1i64).unwrap(), OutcomeClass::Success);
        assert!(OutcomeClass::try_from(2u8).is_err());
        assert!(OutcomeClass::try_from(-1i64).is_err());
    }

    #[test]
    fn test_outcome_class_serializes_as_integer() {
        let json = serde_json::to_string(&OutcomeClass::Success).unwrap();
        assert_eq!(json, "1");
        let parsed: OutcomeClass = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, OutcomeClass::Failure);
    }

    #[test]
    fn test_record_builder() {
        let record = LaunchRecord::new("KSC LC-39A", 5000.0, OutcomeClass::Success, "FT")
            .with_flight_number(42)
            .with_booster_version("F9 FT B1031.1");
        assert_eq!(record.flight_number, Some(42));
        assert_eq!(record.booster_version.as_deref(), Some("F9 FT B1031.1"));
        assert!(record.class.is_success());
    }
}
