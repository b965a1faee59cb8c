//! Dark/light display mode and its persistence.
//!
//! This module provides:
//!
//! - [`ThemeMode`]: the two-valued mode
//! - [`ThemePreference`]: resolve, apply, persist and toggle
//! - [`DocumentRoot`] and [`MarkerStyle`]: the root-element marker
//! - [`set_preference_detector`]: control over the system preference signal

mod detect;
mod marker;
mod mode;
mod preference;

pub use detect::{
    detect_system_preference, reset_preference_detector, set_preference_detector,
    PreferenceDetector,
};
pub use marker::{DocumentRoot, MarkerStyle, RootState};
pub use mode::{ParseModeError, ThemeMode};
pub use preference::ThemePreference;
