//! Static readability policy: contrast thresholds, saturation ceilings, and
//! the synthetic seeds stages fall back to when the image has nothing
//! suitable.
//!
//! None of this is configurable. A palette is only comparable to another if
//! both were held to the same numbers.

use crate::color::Color;
use crate::role::Role;

// ─── Contrast thresholds ────────────────────────────────────────────────────

/// Main text against both backgrounds.
pub const MIN_TEXT_CONTRAST: f64 = 5.0;
/// Secondary text (`foreground_dim`) against both backgrounds.
pub const MIN_DIM_CONTRAST: f64 = 4.0;
/// Terminal colors and UI accents.
pub const MIN_TERMINAL_CONTRAST: f64 = 4.0;
/// Error, warning, success, info, and the tertiary highlight.
pub const MIN_SEMANTIC_CONTRAST: f64 = 4.5;

/// Gate ratio for terminal slots that deliberately sit on the background
/// side of the theme. Always satisfied.
pub const ANCHOR_CONTRAST: f64 = 1.0;

// ─── Saturation ceilings ────────────────────────────────────────────────────

pub const MAX_BG_SATURATION: f64 = 35.0;
pub const MAX_FG_SATURATION: f64 = 25.0;
pub const MAX_ACCENT_SATURATION: f64 = 75.0;

// ─── Synthetic seeds ────────────────────────────────────────────────────────

/// A fixed HSL color used when no extracted color fits a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslSeed {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslSeed {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn color(&self) -> Color {
        Color::from_hsl(self.h, self.s, self.l)
    }
}

pub const ERROR_SEED: HslSeed = HslSeed::new(0.0, 65.0, 55.0);
pub const WARNING_SEED: HslSeed = HslSeed::new(38.0, 70.0, 55.0);
pub const SUCCESS_SEED: HslSeed = HslSeed::new(120.0, 50.0, 45.0);
pub const INFO_SEED: HslSeed = HslSeed::new(200.0, 60.0, 50.0);
pub const MAGENTA_SEED: HslSeed = HslSeed::new(300.0, 50.0, 55.0);
pub const CYAN_SEED: HslSeed = HslSeed::new(180.0, 50.0, 50.0);

/// Secondary accent fallback: rotated away from primary by this many degrees.
pub const SECONDARY_FALLBACK_ROTATION: f64 = 150.0;
/// Saturation cap for the synthesized secondary.
pub const SECONDARY_FALLBACK_MAX_SATURATION: f64 = 60.0;
pub const SECONDARY_FALLBACK_LIGHTNESS: f64 = 50.0;

/// Tertiary is sought this far around the wheel from primary.
pub const TERTIARY_ROTATION: f64 = 80.0;
pub const TERTIARY_FALLBACK_SATURATION: f64 = 50.0;
pub const TERTIARY_FALLBACK_LIGHTNESS: f64 = 55.0;

// ─── Hue windows ────────────────────────────────────────────────────────────

/// A band of hues plus a saturation floor that extracted colors must meet to
/// fill a terminal slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueWindow {
    /// Exclusive lower bound, in degrees.
    pub from: f64,
    /// Exclusive upper bound. A window with `from > to` wraps through 0°.
    pub to: f64,
    pub min_saturation: f64,
}

impl HueWindow {
    pub fn contains(&self, color: &Color) -> bool {
        let h = color.hue();
        let in_band = if self.from <= self.to {
            h > self.from && h < self.to
        } else {
            h > self.from || h < self.to
        };
        in_band && color.saturation() > self.min_saturation
    }
}

pub const BLUE_WINDOW: HueWindow = HueWindow {
    from: 190.0,
    to: 260.0,
    min_saturation: 25.0,
};

pub const MAGENTA_WINDOW: HueWindow = HueWindow {
    from: 280.0,
    to: 20.0,
    min_saturation: 30.0,
};

pub const CYAN_WINDOW: HueWindow = HueWindow {
    from: 160.0,
    to: 200.0,
    min_saturation: 25.0,
};

// ─── Per-role requirements ──────────────────────────────────────────────────

/// The minimum ratio a role should reach against both backgrounds, if it
/// carries one. Backgrounds, elements, borders and a few decorative accents
/// have none.
pub fn contrast_requirement(role: Role) -> Option<f64> {
    use Role::*;
    let ratio = match role {
        Foreground | ForegroundBright => 5.0,
        ForegroundMedium => 4.5,
        ForegroundDim => 4.0,
        Primary | Secondary => 4.0,
        PrimaryVariant | SecondaryVariant => 3.0,
        Tertiary => 4.5,
        Error | Warning | Success | Info => 4.5,
        Red | RedBright | Green | GreenBright | Yellow | YellowBright | Blue | BlueBright
        | Magenta | MagentaBright | Cyan | CyanBright | White | WhiteBright => 4.5,
        RedDim | GreenDim | YellowDim | BlueDim | MagentaDim | CyanDim | WhiteDim => 3.0,
        BlackBright => 3.0,
        BlackDim => 2.0,
        _ => return None,
    };
    Some(ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magenta_window_wraps_through_red() {
        assert!(MAGENTA_WINDOW.contains(&Color::from_hsl(320.0, 60.0, 50.0)));
        assert!(MAGENTA_WINDOW.contains(&Color::from_hsl(10.0, 60.0, 50.0)));
        assert!(!MAGENTA_WINDOW.contains(&Color::from_hsl(100.0, 60.0, 50.0)));
        assert!(!MAGENTA_WINDOW.contains(&Color::from_hsl(320.0, 10.0, 50.0)));
    }

    #[test]
    fn blue_window_bounds_are_exclusive() {
        assert!(BLUE_WINDOW.contains(&Color::from_rgb(40, 80, 200)));
        assert!(!BLUE_WINDOW.contains(&Color::from_hsl(120.0, 60.0, 50.0)));
    }

    #[test]
    fn seeds_resolve_to_expected_hues() {
        assert!((ERROR_SEED.color().hue() - 0.0).abs() < 1.0);
        assert!((SUCCESS_SEED.color().hue() - 120.0).abs() < 1.0);
        assert!((INFO_SEED.color().hue() - 200.0).abs() < 1.0);
    }

    #[test]
    fn requirements_follow_role_kind() {
        assert_eq!(contrast_requirement(Role::Foreground), Some(MIN_TEXT_CONTRAST));
        assert_eq!(contrast_requirement(Role::ForegroundDim), Some(MIN_DIM_CONTRAST));
        assert_eq!(contrast_requirement(Role::CyanDim), Some(3.0));
        assert_eq!(contrast_requirement(Role::BlackDim), Some(2.0));
        assert_eq!(contrast_requirement(Role::Background), None);
        assert_eq!(contrast_requirement(Role::Black), None);
        assert_eq!(contrast_requirement(Role::Selection), None);
    }
}
