//! Sourcing modes for NANPA central-office prefixes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Strategy used to assemble the candidate prefix list for an area code.
///
/// Persisted as the bare letter so stored settings stay stable if the
/// variant names ever change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SourcingMode {
    /// Every well-formed central-office code, generated locally.
    #[serde(rename = "A")]
    Algorithmic,
    /// Only the prefixes registered for the area code in the loaded table.
    #[serde(rename = "B")]
    Registry,
    /// Registered prefixes when the table has any, the generated set
    /// otherwise.
    #[serde(rename = "C")]
    #[default]
    Hybrid,
}

impl FromStr for SourcingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "algorithmic" => Ok(Self::Algorithmic),
            "b" | "registry" => Ok(Self::Registry),
            "c" | "hybrid" => Ok(Self::Hybrid),
            _ => Err(format!(
                "unknown sourcing mode: {s} (expected a/algorithmic, b/registry or c/hybrid)"
            )),
        }
    }
}

impl fmt::Display for SourcingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::Algorithmic => "A",
            Self::Registry => "B",
            Self::Hybrid => "C",
        };
        write!(f, "{letter}")
    }
}
