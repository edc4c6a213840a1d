//! Background and element surfaces.
//!
//! The base background comes from the extracted color whose saturation sits
//! closest to a target, forced into the theme's lightness band. Every other
//! surface is a fixed lightness offset from it.

use tracing::debug;

use super::{first_min_by, Palette, StageContext};
use crate::color::Color;
use crate::contrast::contrast_ratio;
use crate::mode::ThemeMode;
use crate::policy::{MAX_BG_SATURATION, MIN_TEXT_CONTRAST};
use crate::role::Role;

/// Lightness band for dark backgrounds, in percent.
pub const DARK_LIGHTNESS: (f64, f64) = (8.0, 18.0);
/// Lightness band for light backgrounds, in percent.
pub const LIGHT_LIGHTNESS: (f64, f64) = (85.0, 95.0);

/// `background_light` luminance the dark-theme repair walks down to.
const READABLE_BG_LIGHT_LUMINANCE: f64 = 0.12;

/// Writes the four backgrounds and five element states, then makes sure
/// `background_light` leaves room for readable text.
pub fn generate(ctx: &StageContext<'_>, mut palette: Palette) -> Palette {
    let mode = ctx.mode;
    let bg = base_background(ctx.colors, mode).clamp_saturation(MAX_BG_SATURATION);

    let shade = |dl: f64, ds: f64| bg.adjust(dl, ds).clamp_saturation(MAX_BG_SATURATION);

    palette.insert(Role::Background, bg);
    palette.insert(Role::BackgroundMedium, shade(mode.pick(4.0, -3.0), 0.0));
    palette.insert(Role::BackgroundLight, shade(mode.pick(8.0, -6.0), 0.0));
    palette.insert(Role::BackgroundDisabled, shade(mode.pick(-2.0, 2.0), -10.0));

    let active = shade(mode.pick(8.0, -6.0), 0.0);
    palette.insert(Role::Element, shade(mode.pick(2.0, -2.0), 0.0));
    palette.insert(Role::ElementHover, shade(mode.pick(5.0, -4.0), 0.0));
    palette.insert(Role::ElementActive, active);
    palette.insert(Role::ElementSelected, active);
    palette.insert(Role::ElementDisabled, shade(mode.pick(-1.0, 2.0), -10.0));

    ensure_background_contrast(palette, mode)
}

/// Seed color forced into the theme's lightness band.
///
/// Dark: seed nearest 25% saturation, lightness clamped into 8–18% (a seed
/// brighter than the band lands at 15%). Light: nearest 15% saturation,
/// lightness clamped into 85–95% (a darker seed lands at 90%), and the
/// saturation cap is halved.
fn base_background(colors: &[Color], mode: ThemeMode) -> Color {
    let target_sat = mode.pick(25.0, 15.0);
    let seed = match first_min_by(colors, |c| (c.saturation() - target_sat).abs()) {
        Some(seed) => seed,
        None => Color::gray(mode.pick(15.0, 90.0)),
    };

    let (h, s, l) = (seed.hue(), seed.saturation(), seed.lightness());
    let (lightness, max_sat) = match mode {
        ThemeMode::Dark => {
            let (min, max) = DARK_LIGHTNESS;
            let l = if l > max { max - 3.0 } else { l.clamp(min, max) };
            (l, MAX_BG_SATURATION)
        }
        ThemeMode::Light => {
            let (min, max) = LIGHT_LIGHTNESS;
            let l = if l < min { min + 5.0 } else { l.clamp(min, max) };
            (l, MAX_BG_SATURATION / 2.0)
        }
    };

    Color::from_hsl(h, s.min(max_sat), lightness)
}

/// Darkens a dark theme's backgrounds when even white text could not clear
/// the main text threshold (with half a point of headroom) on
/// `background_light`. Light themes pass through untouched.
pub fn ensure_background_contrast(mut palette: Palette, mode: ThemeMode) -> Palette {
    if mode == ThemeMode::Light {
        return palette;
    }

    let original = palette[Role::BackgroundLight];
    if contrast_ratio(1.0, original.luminance()) >= MIN_TEXT_CONTRAST + 0.5 {
        return palette;
    }

    let mut bg_light = original;
    while bg_light.luminance() > READABLE_BG_LIGHT_LUMINANCE && bg_light.lightness() > 5.0 {
        bg_light = bg_light.adjust(-3.0, 0.0);
    }

    let lum_diff = original.luminance() - bg_light.luminance();
    if lum_diff > 0.0 {
        let darken = (lum_diff * 80.0) as i32;
        let bg = palette[Role::Background]
            .adjust(-(darken as f64), 0.0)
            .clamp_saturation(MAX_BG_SATURATION);
        palette.insert(Role::Background, bg);
    }
    palette.insert(Role::BackgroundLight, bg_light);

    debug!(
        from = %original,
        to = %bg_light,
        lum_diff,
        "darkened backgrounds for readable text"
    );
    palette
}
