use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The single feature gated by this system.
pub const TOGGLE_NAME: &str = "ec2_stop_feature";

/// Whether automated instance stops are allowed to execute.
///
/// The default is `On`: a missing or unreadable toggle record must not
/// silently disable the automation (fail-open).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleStatus {
    #[default]
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl ToggleStatus {
    pub fn is_on(self) -> bool {
        matches!(self, ToggleStatus::On)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToggleStatus::On => "ON",
            ToggleStatus::Off => "OFF",
        }
    }
}

impl Display for ToggleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToggleStatus {
    type Err = InvalidToggleStatus;

    /// Accepts any letter case; the canonical form is uppercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ON" => Ok(ToggleStatus::On),
            "OFF" => Ok(ToggleStatus::Off),
            other => Err(InvalidToggleStatus(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct InvalidToggleStatus(pub String);

impl Display for InvalidToggleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid toggle status [{}]", self.0)
    }
}

impl std::error::Error for InvalidToggleStatus {}

/// Persisted toggle row, keyed by `toggle_name`. Overwritten on every
/// update, never versioned or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleRecord {
    pub toggle_name: String,
    pub status: ToggleStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_letter_case_to_canonical_form() {
        for input in ["on", "On", "ON", "oN"] {
            let status: ToggleStatus = input.parse().unwrap();
            assert_eq!(ToggleStatus::On, status);
            assert_eq!("ON", status.as_str());
        }

        assert_eq!(ToggleStatus::Off, "off".parse().unwrap());
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("MAYBE".parse::<ToggleStatus>().is_err());
        assert!("".parse::<ToggleStatus>().is_err());
    }

    #[test]
    fn serialises_to_uppercase_wire_form() {
        assert_eq!("\"ON\"", serde_json::to_string(&ToggleStatus::On).unwrap());
        assert_eq!("\"OFF\"", serde_json::to_string(&ToggleStatus::Off).unwrap());
    }

    #[test]
    fn defaults_on() {
        assert_eq!(ToggleStatus::On, ToggleStatus::default());
    }
}
