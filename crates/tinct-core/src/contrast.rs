//! WCAG contrast ratios and the lightness search that repairs them.
//!
//! Every readable role is checked against *both* the main `background` and
//! `background_light`, since text lands on either surface. The repair walks
//! lightness in fixed steps away from the backgrounds until the weaker of the
//! two ratios clears the threshold, or the lightness leaves its allowed band.
//!
//! A repair that runs out of room returns its last color rather than failing.
//! The shortfall is logged and left for the readability report to surface.

use tracing::warn;

use crate::color::Color;
use crate::mode::ThemeMode;

/// WCAG contrast ratio between two relative luminances. Always `>= 1.0`.
pub fn contrast_ratio(lum1: f64, lum2: f64) -> f64 {
    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors.
pub fn contrast(a: &Color, b: &Color) -> f64 {
    contrast_ratio(a.luminance(), b.luminance())
}

/// The weaker of a color's ratios against the two backgrounds.
pub fn min_contrast(color: &Color, bg: &Color, bg_light: &Color) -> f64 {
    contrast(color, bg).min(contrast(color, bg_light))
}

/// Parameters of a lightness-stepping contrast repair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairSearch {
    /// Lightness change per iteration, in percent. Applied upward for dark
    /// themes and downward for light ones.
    pub step: f64,
    pub max_iterations: usize,
    /// The search stops once lightness falls below this...
    pub min_lightness: f64,
    /// ...or rises above this.
    pub max_lightness: f64,
}

impl RepairSearch {
    /// Used for UI text and accents.
    pub const TEXT: Self = Self {
        step: 3.0,
        max_iterations: 50,
        min_lightness: 5.0,
        max_lightness: 95.0,
    };

    /// Terminal and semantic colors have no fallback, so they get a wider,
    /// coarser search.
    pub const TERMINAL: Self = Self {
        step: 4.0,
        max_iterations: 60,
        min_lightness: 10.0,
        max_lightness: 90.0,
    };

    /// Nudges `color` until it reaches `min_ratio` against both backgrounds.
    ///
    /// A color that already passes is returned untouched, which makes the
    /// repair idempotent.
    pub fn run(
        &self,
        color: Color,
        bg: &Color,
        bg_light: &Color,
        min_ratio: f64,
        mode: ThemeMode,
    ) -> Color {
        let step = match mode {
            ThemeMode::Dark => self.step,
            ThemeMode::Light => -self.step,
        };

        let mut current = color;
        for _ in 0..self.max_iterations {
            if min_contrast(&current, bg, bg_light) >= min_ratio {
                return current;
            }

            current = current.adjust(step, 0.0);

            let l = current.lightness();
            if l > self.max_lightness || l < self.min_lightness {
                break;
            }
        }

        let achieved = min_contrast(&current, bg, bg_light);
        if achieved < min_ratio {
            warn!(
                color = %current,
                achieved = format_args!("{achieved:.2}"),
                required = min_ratio,
                "contrast repair ran out of room"
            );
        }
        current
    }
}

/// Repairs a UI color (text, accents) against both backgrounds.
pub fn ensure_contrast(
    color: Color,
    bg: &Color,
    bg_light: &Color,
    min_ratio: f64,
    mode: ThemeMode,
) -> Color {
    RepairSearch::TEXT.run(color, bg, bg_light, min_ratio, mode)
}

/// Repairs a terminal or semantic color against both backgrounds.
pub fn ensure_terminal_contrast(
    color: Color,
    bg: &Color,
    bg_light: &Color,
    min_ratio: f64,
    mode: ThemeMode,
) -> Color {
    RepairSearch::TERMINAL.run(color, bg, bg_light, min_ratio, mode)
}
