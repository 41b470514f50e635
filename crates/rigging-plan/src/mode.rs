//! Build mode and the mode-keyed settings table.
//!
//! Everything that differs between the two supported build targets is
//! collected in one [`ModeSettings`] table, selected once at the top of
//! resolution. Components read the selected table instead of branching on
//! the mode themselves, so the two supported configurations are documented
//! exhaustively in one place and a third mode would be a localized change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// The two-valued build target that conditions nearly every other decision
/// in plan resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

/// Mode-conditional values, selected once per resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSettings {
    /// Environment file injected into the bundle.
    pub env_file: &'static str,
    /// Whether output filenames embed a content-hash segment.
    pub hashed_filenames: bool,
    /// Whether the minimizer chain is actually invoked.
    pub minimize: bool,
    /// Whether transforms emit source maps.
    pub source_maps: bool,
}

const DEVELOPMENT: ModeSettings = ModeSettings {
    env_file: ".env.dev",
    hashed_filenames: false,
    minimize: false,
    source_maps: true,
};

const PRODUCTION: ModeSettings = ModeSettings {
    env_file: ".env.stage",
    hashed_filenames: true,
    minimize: true,
    source_maps: false,
};

impl Mode {
    /// The settings table for this mode.
    pub fn settings(self) -> &'static ModeSettings {
        match self {
            Mode::Development => &DEVELOPMENT,
            Mode::Production => &PRODUCTION,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Mode::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl FromStr for Mode {
    type Err = PlanError;

    /// Parse a mode name.
    ///
    /// Unrecognized values are fatal; resolution never proceeds with a
    /// defaulted mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Mode::Development),
            "production" => Ok(Mode::Production),
            other => Err(PlanError::UnrecognizedMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("development".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!("production".parse::<Mode>().unwrap(), Mode::Production);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "staging".parse::<Mode>().unwrap_err();
        assert!(matches!(err, PlanError::UnrecognizedMode(ref m) if m == "staging"));
    }

    #[test]
    fn rejects_mixed_case() {
        assert!("Development".parse::<Mode>().is_err());
        assert!("PRODUCTION".parse::<Mode>().is_err());
    }

    #[test]
    fn settings_table_is_exhaustive() {
        assert!(!Mode::Development.settings().minimize);
        assert!(Mode::Production.settings().minimize);
        assert_eq!(Mode::Development.settings().env_file, ".env.dev");
        assert_eq!(Mode::Production.settings().env_file, ".env.stage");
        assert!(Mode::Development.settings().source_maps);
        assert!(!Mode::Production.settings().source_maps);
    }
}
