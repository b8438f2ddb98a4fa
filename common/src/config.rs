use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Subdirectory under the user config dir holding our files.
pub const APP_DIR: &str = "contactr";

/// Runtime knobs shared by every command.
pub struct Config {
    /// Suppresses decorative output.
    ///
    /// 1 drops headers and listings, 2 drops everything except errors.
    pub quiet: u8,
    /// Terminal palette in effect for this run.
    pub theme: Theme,
}

/// Terminal palette selection, persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!("unknown theme: {s} (expected dark or light)")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}
