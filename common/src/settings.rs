//! # Settings Store
//!
//! Persists the last-used generator inputs between runs so the tool starts
//! where the user left off.
//!
//! One flat record, overwritten after every run that changes it. Loading
//! fails soft: malformed or unreadable state is logged and discarded, never
//! propagated.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{APP_DIR, Theme};
use crate::country::CountryId;
use crate::sourcing::SourcingMode;

/// The file name carries the schema version; bumping it abandons old state
/// instead of migrating it.
const SETTINGS_FILE: &str = "settings_v1.json";

/// Last-used form values plus the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSettings {
    pub country: CountryId,
    pub mode: SourcingMode,
    pub area_code: String,
    pub count: u32,
    pub theme: Theme,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            country: CountryId::Us,
            mode: SourcingMode::default(),
            area_code: String::new(),
            count: 10,
            theme: Theme::default(),
        }
    }
}

impl PersistedSettings {
    /// Default on-disk location under the user config dir, or `None` when
    /// the platform exposes none.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Loads persisted settings.
    ///
    /// A missing file is a silent `None`; anything unreadable or malformed
    /// is logged and treated the same.
    pub fn load(path: &Path) -> Option<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                crate::warn!("Couldn't read settings from {}: {err}", path.display());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(err) => {
                crate::warn!("Couldn't load settings: {err}");
                None
            }
        }
    }

    /// Writes the record, creating parent directories on first use.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}
