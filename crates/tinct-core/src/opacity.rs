//! Translucent-surface opacity solving.
//!
//! A blurred theme draws its panels over a wallpaper the palette knows
//! nothing about. The solver assumes the worst wallpaper for the theme (white
//! behind a dark theme, black behind a light one) and finds the lowest
//! opacity at which the dimmest text stays readable.
//!
//! # Layering
//!
//! Editors composite several translucent surfaces. Panels sit on a *global*
//! layer, and the editor area is drawn on top of it, so the visible editor
//! opacity compounds:
//!
//! ```text
//! target = global + editor_layer * (1 - global)
//! ```
//!
//! [`OpacityLayers::for_target`] solves that identity for `editor_layer`.

use serde::Serialize;
use tracing::debug;

use crate::color::{Color, Rgb};
use crate::contrast::contrast;
use crate::error::{PaletteError, Result};
use crate::mode::ThemeMode;
use crate::palette::Palette;
use crate::policy::MIN_DIM_CONTRAST;
use crate::role::Role;

const SEARCH_ITERATIONS: usize = 50;
const SEARCH_TOLERANCE: f64 = 0.001;

/// Extra opacity added on top of the solved minimum.
pub const SAFETY_MARGIN: f64 = 0.05;

/// Two lowercase hex digits for an alpha value.
pub fn opacity_to_hex(opacity: f64) -> String {
    format!("{:02x}", (opacity.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Checks that an opacity is a usable alpha value.
pub fn validate_opacity(opacity: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(opacity)
    } else {
        Err(PaletteError::InvalidOpacity(opacity))
    }
}

/// The color seen when `bg` is drawn at `opacity` over `wallpaper`.
pub fn blend_with_opacity(bg: &Color, wallpaper: Rgb, opacity: f64) -> Color {
    let mix = |b: u8, w: u8| (b as f64 * opacity + w as f64 * (1.0 - opacity)) as i32;
    let Rgb(r, g, b) = bg.rgb();
    Color::from_rgb(mix(r, wallpaper.0), mix(g, wallpaper.1), mix(b, wallpaper.2))
}

/// The wallpaper that degrades this theme's text contrast the most.
pub fn worst_case_wallpaper(mode: ThemeMode) -> Rgb {
    mode.pick(Rgb(255, 255, 255), Rgb(0, 0, 0))
}

/// Minimum opacity at which `fg` keeps `min_ratio` against `bg` drawn over
/// the worst-case wallpaper.
///
/// Binary search; if no tested opacity passes, the surface stays fully
/// opaque (`1.0`).
pub fn calculate_safe_opacity(bg: &Color, fg: &Color, min_ratio: f64, mode: ThemeMode) -> f64 {
    let wallpaper = worst_case_wallpaper(mode);

    let (mut low, mut high) = (0.0_f64, 1.0_f64);
    let mut result = 1.0;

    for _ in 0..SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        let blended = blend_with_opacity(bg, wallpaper, mid);

        if contrast(&blended, fg) >= min_ratio {
            result = mid;
            high = mid;
        } else {
            low = mid;
        }

        if high - low < SEARCH_TOLERANCE {
            break;
        }
    }

    result
}

/// Opacity for a whole theme, keyed off its least readable text.
///
/// Uses `background` against `foreground_dim` at [`MIN_DIM_CONTRAST`], plus
/// [`SAFETY_MARGIN`], capped at `1.0`.
pub fn calculate_theme_opacity(palette: &Palette, mode: ThemeMode) -> Result<f64> {
    let bg = palette.require(Role::Background)?;
    let fg_dim = palette.require(Role::ForegroundDim)?;

    let safe = calculate_safe_opacity(&bg, &fg_dim, MIN_DIM_CONTRAST, mode);
    let opacity = (safe + SAFETY_MARGIN).min(1.0);
    debug!(%mode, safe, opacity, "theme opacity calculated");
    Ok(opacity)
}

/// Per-surface alpha values for an editor target opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpacityLayers {
    /// The root background. Panels inherit it.
    pub global: f64,
    /// Editor and gutter, stacked on `global`.
    pub editor_layer: f64,
    pub tab_bar_layer: f64,
    pub tab_layer: f64,
    /// Title and status bars, drawn standalone.
    pub title_status: f64,
    /// Surfaces that should let the layer below show through entirely.
    pub transparent: f64,
}

impl OpacityLayers {
    pub fn for_target(editor_target: f64) -> Self {
        let global = editor_target * 0.95;
        let editor_layer = if global < 1.0 {
            (editor_target - global) / (1.0 - global)
        } else {
            0.0
        };

        Self {
            global,
            editor_layer,
            tab_bar_layer: editor_layer,
            tab_layer: editor_layer * 0.5,
            title_status: editor_target * 0.95,
            transparent: 0.0,
        }
    }

    /// Every layer fully opaque, for themes drawn without blur.
    pub fn opaque() -> Self {
        Self {
            global: 1.0,
            editor_layer: 1.0,
            tab_bar_layer: 1.0,
            tab_layer: 1.0,
            title_status: 1.0,
            transparent: 1.0,
        }
    }

    /// Effective opacity of the editor surface once stacked on `global`.
    pub fn composite(&self) -> f64 {
        self.global + self.editor_layer * (1.0 - self.global)
    }
}

/// Shorthand for [`OpacityLayers::for_target`].
pub fn calculate_layered_opacities(editor_target: f64) -> OpacityLayers {
    OpacityLayers::for_target(editor_target)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Hex and blending
    // =========================================================================

    #[test]
    fn opacity_hex_truncates_and_clamps() {
        assert_eq!(opacity_to_hex(1.0), "ff");
        assert_eq!(opacity_to_hex(0.0), "00");
        assert_eq!(opacity_to_hex(0.5), "7f");
        assert_eq!(opacity_to_hex(0.9), "e5");
        assert_eq!(opacity_to_hex(1.7), "ff");
        assert_eq!(opacity_to_hex(-0.3), "00");
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert_eq!(validate_opacity(0.85), Ok(0.85));
        assert_eq!(validate_opacity(1.2), Err(PaletteError::InvalidOpacity(1.2)));
        assert!(validate_opacity(f64::NAN).is_err());
    }

    #[test]
    fn blend_endpoints() {
        let bg = Color::from_rgb(20, 40, 60);
        assert_eq!(blend_with_opacity(&bg, Rgb(255, 255, 255), 1.0), bg);
        assert_eq!(
            blend_with_opacity(&bg, Rgb(255, 255, 255), 0.0).hex(),
            "#ffffff"
        );
        assert_eq!(
            blend_with_opacity(&bg, Rgb(0, 0, 0), 0.5).rgb(),
            Rgb(10, 20, 30)
        );
    }

    // =========================================================================
    // Safe opacity
    // =========================================================================

    #[test]
    fn safe_opacity_is_minimal_and_passing() {
        let bg = Color::gray(10.0);
        let fg = Color::gray(75.0);
        let o = calculate_safe_opacity(&bg, &fg, 4.0, ThemeMode::Dark);

        let white = Rgb(255, 255, 255);
        assert!(contrast(&blend_with_opacity(&bg, white, o), &fg) >= 4.0);
        let below = (o - 0.002).max(0.0);
        assert!(contrast(&blend_with_opacity(&bg, white, below), &fg) < 4.0);
    }

    #[test]
    fn impossible_target_stays_opaque() {
        // Even fully opaque, gray on gray never reaches 4:1.
        let bg = Color::gray(40.0);
        let fg = Color::gray(80.0);
        assert_eq!(calculate_safe_opacity(&bg, &fg, 4.0, ThemeMode::Dark), 1.0);
    }

    #[test]
    fn light_theme_uses_black_wallpaper() {
        let bg = Color::gray(95.0);
        let fg = Color::gray(20.0);
        let o = calculate_safe_opacity(&bg, &fg, 4.0, ThemeMode::Light);
        assert!(o > 0.0 && o < 1.0);
        assert!(contrast(&blend_with_opacity(&bg, Rgb(0, 0, 0), o), &fg) >= 4.0);
    }

    // =========================================================================
    // Layers
    // =========================================================================

    #[test]
    fn layers_satisfy_stacking_identity() {
        for target in [0.1, 0.5, 0.8, 0.92, 0.99] {
            let layers = OpacityLayers::for_target(target);
            assert!(
                (layers.composite() - target).abs() < 1e-9,
                "target {} composite {}",
                target,
                layers.composite()
            );
        }
    }

    #[test]
    fn layer_ratios() {
        let layers = calculate_layered_opacities(0.9);
        assert!((layers.global - 0.855).abs() < 1e-12);
        assert_eq!(layers.tab_bar_layer, layers.editor_layer);
        assert!((layers.tab_layer - layers.editor_layer * 0.5).abs() < 1e-12);
        assert!((layers.title_status - 0.855).abs() < 1e-12);
        assert_eq!(layers.transparent, 0.0);
    }

    #[test]
    fn opaque_layers_composite_to_one() {
        assert_eq!(OpacityLayers::opaque().composite(), 1.0);
    }
}
