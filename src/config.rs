//! Configuration for the theme preference and the page session.
//!
//! Both structs have working defaults and a chaining builder API, and both
//! deserialize from YAML with every field optional:
//!
//! ```yaml
//! variant: scripted
//! origin: https://example.com
//! preference:
//!   storage_key: theme
//!   default_mode: dark
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::render::Variant;
use crate::storage::DEFAULT_ORIGIN;
use crate::theme::ThemeMode;

/// Key the preference is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Settings for [`ThemePreference`](crate::ThemePreference).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreferenceConfig {
    /// Storage key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Mode used when nothing is stored and the system preference is unknown.
    pub default_mode: ThemeMode,
}

impl PreferenceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn default_mode(mut self, mode: ThemeMode) -> Self {
        self.default_mode = mode;
        self
    }
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_mode: ThemeMode::Light,
        }
    }
}

/// Settings for a [`PageSession`](crate::PageSession).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Which page rendering to use.
    pub variant: Variant,
    /// Origin the persisted preference is scoped to.
    pub origin: String,
    /// Directory whose templates override the embedded ones.
    pub templates_dir: Option<PathBuf>,
    pub preference: PreferenceConfig,
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a config from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw)
    }

    /// Parses a config from YAML text. An empty document yields the defaults.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    pub fn preference(mut self, preference: PreferenceConfig) -> Self {
        self.preference = preference;
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            origin: DEFAULT_ORIGIN.to_string(),
            templates_dir: None,
            preference: PreferenceConfig::default(),
        }
    }
}
