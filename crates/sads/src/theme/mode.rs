//! Color mode detection for dark-mode-aware resolution.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// The user's preferred color mode.
///
/// Resolution treats this as a single boolean input: when the mode is
/// [`ColorMode::Dark`], color-category tokens first probe their `-dark`
/// counterpart in the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Whether this mode selects dark-variant color tokens.
    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used to determine whether the user prefers a light
/// or dark color mode.
///
/// This is useful for testing or when the host wants to force a specific mode
/// (e.g. wiring up an explicit dark-mode toggle).
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the current color mode via the installed detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detector_override() {
        set_mode_detector(|| ColorMode::Dark);
        assert_eq!(detect_color_mode(), ColorMode::Dark);
        assert!(detect_color_mode().is_dark());

        set_mode_detector(|| ColorMode::Light);
        assert_eq!(detect_color_mode(), ColorMode::Light);
        assert!(!detect_color_mode().is_dark());
    }
}
