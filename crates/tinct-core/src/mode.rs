//! Dark/light theme mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;

/// Whether a palette is built for a dark or a light theme.
///
/// Decided once per generation run; every lightness adjustment downstream
/// picks its direction from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Dark when the image's average color has luminance below 0.5.
    pub fn from_average(average: &Color) -> Self {
        if average.luminance() < 0.5 {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// A forced mode wins; otherwise the average color decides.
    pub fn decide(forced: Option<ThemeMode>, average: &Color) -> Self {
        let mode = forced.unwrap_or_else(|| Self::from_average(average));
        debug!(
            %mode,
            forced = forced.is_some(),
            average = %average,
            luminance = average.luminance(),
            "theme mode decided"
        );
        mode
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Picks the value for this mode.
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            ThemeMode::Dark => dark,
            ThemeMode::Light => light,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.pick("dark", "light")
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(format!("unknown theme mode '{}'", other)),
        }
    }
}
