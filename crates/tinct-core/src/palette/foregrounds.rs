//! Text colors.
//!
//! The main foreground starts from the most extreme extracted color on the
//! readable side of the theme, gets pushed further out and desaturated, then
//! repaired against both backgrounds. The bright, medium and dim variants are
//! offsets from it, each re-validated on its own.

use super::{first_max_by, first_min_by, Palette, StageContext};
use crate::color::Color;
use crate::contrast::ensure_contrast;
use crate::mode::ThemeMode;
use crate::policy::{MAX_FG_SATURATION, MIN_DIM_CONTRAST, MIN_TEXT_CONTRAST};
use crate::role::Role;

/// Dark themes take their foreground seed from colors brighter than this.
const DARK_SEED_MIN_LUMINANCE: f64 = 0.5;
/// Light themes take theirs from colors darker than this.
const LIGHT_SEED_MAX_LUMINANCE: f64 = 0.3;

pub fn generate(ctx: &StageContext<'_>, mut palette: Palette) -> Palette {
    let mode = ctx.mode;
    let bg = palette[Role::Background];
    let bg_light = palette[Role::BackgroundLight];
    let repair = |c: Color, ratio: f64| ensure_contrast(c, &bg, &bg_light, ratio, mode);

    let seed = foreground_seed(ctx.colors, mode)
        .adjust(mode.pick(10.0, -10.0), -20.0)
        .clamp_saturation(MAX_FG_SATURATION);
    let mut fg = repair(seed, MIN_TEXT_CONTRAST);
    if mode.is_dark() {
        fg = fg.adjust(5.0, 0.0);
    }

    let bright = fg
        .adjust(mode.pick(10.0, -10.0), 0.0)
        .clamp_saturation(MAX_FG_SATURATION);
    let medium = fg.adjust(mode.pick(-3.0, 4.0), 0.0);
    let dim = fg.adjust(mode.pick(-8.0, 10.0), 0.0);

    palette.insert(Role::Foreground, fg);
    palette.insert(Role::ForegroundBright, repair(bright, MIN_TEXT_CONTRAST));
    palette.insert(Role::ForegroundMedium, repair(medium, MIN_TEXT_CONTRAST));
    palette.insert(Role::ForegroundDim, repair(dim, MIN_DIM_CONTRAST));
    palette
}

/// Brightest color above the luminance floor for dark themes, darkest below
/// the ceiling for light ones. With no candidate on the readable side, the
/// overall extreme is used instead.
fn foreground_seed(colors: &[Color], mode: ThemeMode) -> Color {
    let candidate = match mode {
        ThemeMode::Dark => first_max_by(
            colors.iter().filter(|c| c.luminance() > DARK_SEED_MIN_LUMINANCE),
            Color::luminance,
        ),
        ThemeMode::Light => first_min_by(
            colors.iter().filter(|c| c.luminance() < LIGHT_SEED_MAX_LUMINANCE),
            Color::luminance,
        ),
    };
    if let Some(seed) = candidate {
        return seed;
    }

    let by_luminance = |a: &&Color, b: &&Color| a.luminance().total_cmp(&b.luminance());
    let extreme = match mode {
        ThemeMode::Dark => colors.iter().max_by(by_luminance),
        ThemeMode::Light => colors.iter().min_by(by_luminance),
    };
    extreme
        .copied()
        .unwrap_or_else(|| mode.pick(Color::white(), Color::black()))
}
