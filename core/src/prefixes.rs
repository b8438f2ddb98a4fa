//! # Prefix Source
//!
//! Candidate NANPA central-office codes, either generated locally or read
//! from an external lookup keyed by area code.
//!
//! The lookup is loaded once at startup and read-only afterwards. Load
//! failures degrade to an empty table; whichever sourcing mode is active,
//! the consumer is never handed an empty candidate list.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use contactr_common::config::APP_DIR;
use contactr_common::country::CountryRule;
use contactr_common::sourcing::SourcingMode;
use contactr_common::warn;

/// Central-office codes run 200-999; a leading 0 or 1 never occurs, which
/// the range itself guarantees.
const PREFIX_RANGE: RangeInclusive<u16> = 200..=999;

/// Every well-formed central-office code, ascending.
pub fn algorithmic_set() -> Vec<String> {
    PREFIX_RANGE.map(|code| code.to_string()).collect()
}

/// Externally-loaded prefixes keyed by area code.
#[derive(Debug, Default)]
pub struct PrefixTable {
    by_area: HashMap<String, Vec<String>>,
}

impl PrefixTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_map(by_area: HashMap<String, Vec<String>>) -> Self {
        Self { by_area }
    }

    /// Default on-disk location of the lookup file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("prefixes.json"))
    }

    /// Reads the lookup file once at startup.
    ///
    /// The file is a JSON object mapping area-code strings to arrays of
    /// 3-digit prefix strings. Absence or malformed content degrades to an
    /// empty table; sourcing mode B then always falls back to the
    /// generated set.
    pub async fn load(path: &Path) -> Self {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("No prefix lookup at {}", path.display());
                return Self::empty();
            }
            Err(err) => {
                warn!("Couldn't read prefix lookup {}: {err}", path.display());
                return Self::empty();
            }
        };

        match serde_json::from_str::<HashMap<String, Vec<String>>>(&raw) {
            Ok(by_area) => Self { by_area },
            Err(err) => {
                warn!("Couldn't parse prefix lookup {}: {err}", path.display());
                Self::empty()
            }
        }
    }

    /// Number of area codes with registered prefixes.
    pub fn len(&self) -> usize {
        self.by_area.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_area.is_empty()
    }

    /// Registered prefixes for an area code, if any.
    pub fn registered(&self, area_code: &str) -> Option<&[String]> {
        self.by_area.get(area_code).map(Vec::as_slice)
    }

    /// Candidate prefixes for `area_code` under `mode`.
    ///
    /// Empty for countries outside the numbering plan; the consumer skips
    /// prefix selection entirely. For NANPA rules an empty result falls
    /// back to the generated set unconditionally.
    pub fn candidates(
        &self,
        area_code: &str,
        mode: SourcingMode,
        rule: &CountryRule,
    ) -> Vec<String> {
        if !rule.uses_nanpa() {
            return Vec::new();
        }

        let registered = self.registered(area_code);
        let list = match mode {
            SourcingMode::Algorithmic => algorithmic_set(),
            SourcingMode::Registry => registered.map(<[String]>::to_vec).unwrap_or_default(),
            SourcingMode::Hybrid => registered.map_or_else(algorithmic_set, <[String]>::to_vec),
        };

        if list.is_empty() { algorithmic_set() } else { list }
    }
}
