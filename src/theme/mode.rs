//! The two-valued display mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The page's display mode.
///
/// The canonical string forms are exactly `"light"` and `"dark"`; these are
/// what gets persisted and what [`FromStr`] accepts. Anything else, including
/// `"Dark"` or `" dark"`, is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the canonical string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the other mode.
    pub fn opposite(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Returns true for [`ThemeMode::Dark`].
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Glyph shown on the toggle control while this mode is active.
    ///
    /// The glyph names the mode a click would switch *to*: the sun while
    /// dark, the moon while light.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "🌞",
            ThemeMode::Light => "🌙",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a canonical mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme mode {value:?}: expected \"light\" or \"dark\"")]
pub struct ParseModeError {
    pub value: String,
}

impl FromStr for ThemeMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseModeError {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_forms() {
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_is_strict() {
        for bad in ["Dark", "LIGHT", " dark", "dark\n", "", "blue"] {
            assert!(bad.parse::<ThemeMode>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_parse_error_mentions_value() {
        let err = "blue".parse::<ThemeMode>().unwrap_err();
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn test_opposite_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.opposite(), mode);
            assert_eq!(mode.opposite().opposite(), mode);
        }
    }

    #[test]
    fn test_glyph_names_next_mode() {
        assert_eq!(ThemeMode::Dark.toggle_glyph(), "🌞");
        assert_eq!(ThemeMode::Light.toggle_glyph(), "🌙");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!(ThemeMode::Light.to_string(), ThemeMode::Light.as_str());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let mode: ThemeMode = serde_yaml::from_str("light").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
