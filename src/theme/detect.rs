//! System color-scheme detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::mode::ThemeMode;

/// A function reporting the environment's preferred mode.
///
/// `None` means the preference could not be determined.
pub type PreferenceDetector = fn() -> Option<ThemeMode>;

static PREFERENCE_DETECTOR: Lazy<Mutex<PreferenceDetector>> =
    Lazy::new(|| Mutex::new(os_preference_detector));

/// Overrides the detector used to read the system color-scheme preference.
///
/// This is useful for testing or when you want to force a specific mode
/// regardless of the operating system.
///
/// # Example
///
/// ```rust
/// use portfolio::{detect_system_preference, set_preference_detector, ThemeMode};
///
/// set_preference_detector(|| Some(ThemeMode::Dark));
/// assert_eq!(detect_system_preference(), Some(ThemeMode::Dark));
///
/// set_preference_detector(|| None);
/// assert_eq!(detect_system_preference(), None);
/// # portfolio::reset_preference_detector();
/// ```
pub fn set_preference_detector(detector: PreferenceDetector) {
    let mut guard = PREFERENCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the operating-system detector.
pub fn reset_preference_detector() {
    set_preference_detector(os_preference_detector);
}

/// Reads the system color-scheme preference through the current detector.
pub fn detect_system_preference() -> Option<ThemeMode> {
    let detector = PREFERENCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn os_preference_detector() -> Option<ThemeMode> {
    match detect_os_theme() {
        OsThemeMode::Dark => Some(ThemeMode::Dark),
        OsThemeMode::Light => Some(ThemeMode::Light),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detector_override() {
        set_preference_detector(|| Some(ThemeMode::Dark));
        assert_eq!(detect_system_preference(), Some(ThemeMode::Dark));

        set_preference_detector(|| Some(ThemeMode::Light));
        assert_eq!(detect_system_preference(), Some(ThemeMode::Light));

        set_preference_detector(|| None);
        assert_eq!(detect_system_preference(), None);

        reset_preference_detector();
    }
}
