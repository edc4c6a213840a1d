//! OS light/dark preference.
//!
//! Used by the `system` theme policy. Override the detector with
//! [`set_mode_detector`] in tests.

use std::sync::{Mutex, PoisonError};

use dark_light::Mode as OsMode;
use once_cell::sync::Lazy;
use tinct_core::ThemeMode;
use tracing::debug;

/// Returns the preferred mode, or `None` when the OS does not say.
pub type ModeDetector = fn() -> Option<ThemeMode>;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Replaces the detector used by [`detect_system_mode`].
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

pub fn detect_system_mode() -> Option<ThemeMode> {
    let detector = *MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    detector()
}

fn os_mode_detector() -> Option<ThemeMode> {
    match dark_light::detect() {
        Ok(OsMode::Dark) => Some(ThemeMode::Dark),
        Ok(OsMode::Light) => Some(ThemeMode::Light),
        Ok(OsMode::Unspecified) => None,
        Err(err) => {
            debug!(error = ?err, "os theme detection failed");
            None
        }
    }
}
