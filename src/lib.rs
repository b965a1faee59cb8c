//! # Portfolio - static portfolio page with a persisted theme preference
//!
//! Renders a one-page personal portfolio (header, hero, about, projects,
//! contact, footer) in two interchangeable variants, and manages the page's
//! dark/light display mode.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio::{MemoryStore, PageSession, SiteConfig, ThemeMode, set_preference_detector};
//!
//! // Pretend the OS prefers dark.
//! set_preference_detector(|| Some(ThemeMode::Dark));
//!
//! let mut session = PageSession::new(&SiteConfig::default(), MemoryStore::new()).unwrap();
//! assert_eq!(session.start().unwrap(), ThemeMode::Dark);
//! assert!(session.html().unwrap().contains(r#"class="dark""#));
//!
//! // One click on the toggle.
//! assert_eq!(session.click_toggle(), ThemeMode::Light);
//! assert_eq!(session.preference().persisted_mode().unwrap(), Some(ThemeMode::Light));
//! # portfolio::reset_preference_detector();
//! ```
//!
//! ## Theme precedence
//!
//! The initial mode is, highest first:
//!
//! 1. a valid persisted choice (`"light"` or `"dark"` under the key `"theme"`)
//! 2. the system color-scheme preference
//! 3. the configured default (light)
//!
//! Storage failures never surface: reads fall through to the next tier and
//! writes are dropped with a `warn!` log line. See [`ThemePreference`].
//!
//! ## Variants
//!
//! [`Variant::Component`] builds the page from template macros and re-renders
//! it from state. [`Variant::Scripted`] renders plain markup once and patches
//! the root marker in place. Both produce the same content.

pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod session;
pub mod storage;
pub mod theme;

pub use config::{PreferenceConfig, SiteConfig, DEFAULT_STORAGE_KEY};
pub use content::{Link, Profile, Project, Site};
pub use error::{Error, Result};
pub use render::{slugify, PageRenderer, RegistryError, TemplateRegistry, Variant};
pub use session::PageSession;
pub use storage::{
    FileStore, MemoryStore, PreferenceStore, StorageError, UnavailableStore, DEFAULT_ORIGIN,
};
pub use theme::{
    detect_system_preference, reset_preference_detector, set_preference_detector, DocumentRoot,
    MarkerStyle, ParseModeError, PreferenceDetector, RootState, ThemeMode, ThemePreference,
};
