//! The color value every pipeline stage passes around.
//!
//! A [`Color`] keeps its RGB channels, HSL coordinates and WCAG luminance in
//! sync: every constructor starts from (clamped) RGB and derives the rest, so
//! there is no way to hold a color whose representations disagree.
//!
//! Colors are `Copy` and never mutated in place. Every adjustment returns a
//! fresh value:
//!
//! ```rust
//! use tinct_core::Color;
//!
//! let seed = Color::from_hsl(210.0, 40.0, 60.0);
//! let darker = seed.adjust(-20.0, 0.0);
//!
//! assert_eq!(seed.hex(), "#7098c1");
//! assert!(darker.luminance() < seed.luminance());
//! ```

pub mod convert;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PaletteError;

// ─── RGB and HSL ────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

// ─── Color ──────────────────────────────────────────────────────────────────

/// An immutable color with synchronized RGB, HSL and luminance.
///
/// Equality and hashing look at the RGB channels only; the HSL and luminance
/// fields are pure functions of them.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    rgb: Rgb,
    hsl: Hsl,
    luminance: f64,
}

/// How far an accent may drift from a background and still count as the same
/// visual family. See [`Color::is_accent_compatible`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentTolerance {
    pub max_hue_diff: f64,
    pub max_sat_diff: f64,
    pub max_light_diff: f64,
}

impl Default for AccentTolerance {
    fn default() -> Self {
        Self {
            max_hue_diff: 60.0,
            max_sat_diff: 40.0,
            max_light_diff: 50.0,
        }
    }
}

impl Color {
    /// Builds a color from integer channels, clamping each into `0..=255`.
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        Self::from(Rgb(clamp(r), clamp(g), clamp(b)))
    }

    /// Builds a color from HSL, truncating to integer channels.
    ///
    /// The stored HSL is recomputed from the resulting RGB, so it may differ
    /// slightly from the arguments.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from(convert::hsl_to_rgb(h, s, l))
    }

    /// A neutral gray at the given lightness percent.
    pub fn gray(lightness: f64) -> Self {
        Self::from_hsl(0.0, 0.0, lightness)
    }

    pub fn white() -> Self {
        Self::from(Rgb(255, 255, 255))
    }

    pub fn black() -> Self {
        Self::from(Rgb(0, 0, 0))
    }

    /// Parses `#rrggbb` or `#rgb` (the `#` is optional).
    pub fn parse_hex(hex: &str) -> Result<Self, PaletteError> {
        convert::hex_to_rgb(hex)
            .map(Self::from)
            .map_err(|_| PaletteError::InvalidHex(hex.to_string()))
    }

    /// Canonical lowercase `#rrggbb`.
    pub fn hex(&self) -> String {
        convert::rgb_to_hex(self.rgb)
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn hue(&self) -> f64 {
        self.hsl.h
    }

    pub fn saturation(&self) -> f64 {
        self.hsl.s
    }

    pub fn lightness(&self) -> f64 {
        self.hsl.l
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    // ─── Adjustments ────────────────────────────────────────────────────────

    /// Shifts lightness and saturation by the given percentage points.
    ///
    /// Both results are clamped to `[0, 100]` before converting back.
    pub fn adjust(&self, lightness_delta: f64, saturation_delta: f64) -> Self {
        let s = (self.hsl.s + saturation_delta).clamp(0.0, 100.0);
        let l = (self.hsl.l + lightness_delta).clamp(0.0, 100.0);
        Self::from_hsl(self.hsl.h, s, l)
    }

    /// Same hue and saturation, absolute lightness.
    pub fn with_lightness(&self, lightness: f64) -> Self {
        Self::from_hsl(self.hsl.h, self.hsl.s, lightness)
    }

    /// Same hue and lightness, absolute saturation.
    pub fn with_saturation(&self, saturation: f64) -> Self {
        Self::from_hsl(self.hsl.h, saturation, self.hsl.l)
    }

    /// Caps saturation at `max`. Colors already at or below it come back unchanged.
    pub fn clamp_saturation(&self, max: f64) -> Self {
        if self.hsl.s > max {
            Self::from_hsl(self.hsl.h, max, self.hsl.l)
        } else {
            *self
        }
    }

    /// Linear per-channel RGB interpolation: `0.0` is `self`, `1.0` is `other`.
    pub fn blend(&self, other: &Color, factor: f64) -> Self {
        let mix = |a: u8, b: u8| {
            let a = a as f64;
            (a + (b as f64 - a) * factor) as i32
        };
        Self::from_rgb(
            mix(self.rgb.0, other.rgb.0),
            mix(self.rgb.1, other.rgb.1),
            mix(self.rgb.2, other.rgb.2),
        )
    }

    /// Shortest distance between two hues on the color wheel, in `[0, 180]`.
    pub fn hue_distance(&self, other: &Color) -> f64 {
        let diff = (self.hsl.h - other.hsl.h).abs();
        if diff > 180.0 {
            360.0 - diff
        } else {
            diff
        }
    }

    /// Whether `accent` is close enough to this (background) color to be
    /// blended into it without clashing.
    pub fn is_accent_compatible(&self, accent: &Color, tolerance: AccentTolerance) -> bool {
        self.hue_distance(accent) <= tolerance.max_hue_diff
            && (self.hsl.s - accent.hsl.s).abs() <= tolerance.max_sat_diff
            && (self.hsl.l - accent.hsl.l).abs() <= tolerance.max_light_diff
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        let (h, s, l) = convert::rgb_to_hsl(rgb);
        Self {
            rgb,
            hsl: Hsl { h, s, l },
            luminance: convert::relative_luminance(rgb),
        }
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for Color {}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::parse_hex(&hex).map_err(serde::de::Error::custom)
    }
}
