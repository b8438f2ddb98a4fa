//! # Country Rule Table
//!
//! The closed set of countries the generator can format numbers for,
//! together with their dialing metadata.
//!
//! Rules are fixed at compile time and never mutated; the only fallible
//! edge is parsing a country identifier from user input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a supported country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryId {
    Us,
    Ca,
    Uk,
    Au,
    De,
}

/// Formatting family a country's numbers follow.
///
/// Closed set; adding a country means adding a rule below and, when the
/// format is new, a variant here with its synthesis arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// North American Numbering Plan: 3-digit area code, 3-digit
    /// central-office prefix, 4-digit line number.
    Nanpa,
    /// UK national numbers with variable-length area codes and a mobile
    /// range on leading "7".
    Uk,
    /// AU mobile-style numbers on leading "4".
    Au,
    /// DE area code plus a fixed-length local part.
    De,
}

/// Dialing metadata for one supported country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRule {
    pub id: CountryId,
    pub label: &'static str,
    pub dial_code: &'static str,
    pub format: NumberFormat,
    /// Substituted when the area input is missing or unusable.
    pub default_area: &'static str,
    pub min_area_len: usize,
    pub max_area_len: usize,
}

impl CountryRule {
    pub fn uses_nanpa(&self) -> bool {
        matches!(self.format, NumberFormat::Nanpa)
    }
}

static US: CountryRule = CountryRule {
    id: CountryId::Us,
    label: "United States",
    dial_code: "+1",
    format: NumberFormat::Nanpa,
    default_area: "806",
    min_area_len: 3,
    max_area_len: 3,
};

static CA: CountryRule = CountryRule {
    id: CountryId::Ca,
    label: "Canada",
    dial_code: "+1",
    format: NumberFormat::Nanpa,
    default_area: "416",
    min_area_len: 3,
    max_area_len: 3,
};

static UK: CountryRule = CountryRule {
    id: CountryId::Uk,
    label: "United Kingdom",
    dial_code: "+44",
    format: NumberFormat::Uk,
    // London
    default_area: "20",
    min_area_len: 2,
    max_area_len: 4,
};

static AU: CountryRule = CountryRule {
    id: CountryId::Au,
    label: "Australia",
    dial_code: "+61",
    format: NumberFormat::Au,
    // mobile prefix
    default_area: "4",
    min_area_len: 1,
    max_area_len: 2,
};

static DE: CountryRule = CountryRule {
    id: CountryId::De,
    label: "Germany",
    dial_code: "+49",
    format: NumberFormat::De,
    // Berlin
    default_area: "30",
    min_area_len: 2,
    max_area_len: 4,
};

impl CountryId {
    /// Every supported country, in display order.
    pub const ALL: [CountryId; 5] = [Self::Us, Self::Ca, Self::Uk, Self::Au, Self::De];

    pub fn rule(self) -> &'static CountryRule {
        match self {
            Self::Us => &US,
            Self::Ca => &CA,
            Self::Uk => &UK,
            Self::Au => &AU,
            Self::De => &DE,
        }
    }
}

impl FromStr for CountryId {
    type Err = String;

    /// Parses a country from its identifier or full label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" | "united states" => Ok(Self::Us),
            "ca" | "canada" => Ok(Self::Ca),
            "uk" | "united kingdom" => Ok(Self::Uk),
            "au" | "australia" => Ok(Self::Au),
            "de" | "germany" => Ok(Self::De),
            _ => Err(format!("unsupported country: {s} (expected US, CA, UK, AU or DE)")),
        }
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Self::Us => "US",
            Self::Ca => "CA",
            Self::Uk => "UK",
            Self::Au => "AU",
            Self::De => "DE",
        };
        write!(f, "{id}")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
