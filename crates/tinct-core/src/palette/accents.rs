//! Accent, selection and border colors.
//!
//! Primary and secondary come straight from the image when it has vivid
//! enough colors; otherwise they are synthesized. Tertiary is used for
//! highlight text, so it is the only accent that gets contrast-repaired.
//!
//! Borders start from a near-background base and lean toward an accent.
//! How far depends on whether the accent belongs to the background's family
//! ([`Color::is_accent_compatible`]): a related accent is blended in at half
//! strength, an unrelated one only tints the border.

use super::{first_max_by, Palette, StageContext};
use crate::color::{AccentTolerance, Color};
use crate::contrast::ensure_terminal_contrast;
use crate::mode::ThemeMode;
use crate::policy::{
    HslSeed, MAX_ACCENT_SATURATION, MIN_SEMANTIC_CONTRAST, SECONDARY_FALLBACK_LIGHTNESS,
    SECONDARY_FALLBACK_MAX_SATURATION, SECONDARY_FALLBACK_ROTATION,
    TERTIARY_FALLBACK_LIGHTNESS, TERTIARY_FALLBACK_SATURATION, TERTIARY_ROTATION,
};
use crate::role::Role;

/// Luminance band an extracted color must sit in to serve as an accent.
const VIBRANT_LUMINANCE: (f64, f64) = (0.1, 0.75);
const PRIMARY_MIN_SATURATION: f64 = 35.0;
const SECONDARY_MIN_SATURATION: f64 = 25.0;
/// Secondary must sit at least this far from primary on the hue wheel.
const SECONDARY_MIN_HUE_DISTANCE: f64 = 40.0;
/// Tertiary candidates must sit within this distance of the target hue.
const TERTIARY_MAX_HUE_DISTANCE: f64 = 50.0;
const TERTIARY_MIN_SATURATION: f64 = 20.0;

pub const BORDER_BLEND_COMPATIBLE: f64 = 0.50;
pub const BORDER_BLEND_INCOMPATIBLE: f64 = 0.05;

pub fn generate(ctx: &StageContext<'_>, mut palette: Palette) -> Palette {
    let mode = ctx.mode;
    let bg = palette[Role::Background];
    let bg_light = palette[Role::BackgroundLight];

    let primary = pick_primary(ctx.colors).clamp_saturation(MAX_ACCENT_SATURATION);
    let secondary = pick_secondary(ctx.colors, &primary).clamp_saturation(MAX_ACCENT_SATURATION);

    let variant = |c: &Color| {
        c.adjust(mode.pick(15.0, -15.0), -5.0)
            .clamp_saturation(MAX_ACCENT_SATURATION)
    };

    let tertiary = ensure_terminal_contrast(
        pick_tertiary(ctx.colors, &primary).clamp_saturation(MAX_ACCENT_SATURATION),
        &bg,
        &bg_light,
        MIN_SEMANTIC_CONTRAST,
        mode,
    );

    palette.insert(Role::Primary, primary);
    palette.insert(Role::PrimaryVariant, variant(&primary));
    palette.insert(Role::Secondary, secondary);
    palette.insert(Role::SecondaryVariant, variant(&secondary));
    palette.insert(Role::Tertiary, tertiary);
    palette.insert(Role::Muted, bg.adjust(mode.pick(-5.0, 5.0), -5.0));
    palette.insert(Role::Selection, primary.adjust(-15.0, -25.0));

    borders(ctx, palette)
}

fn is_vibrant(c: &Color) -> bool {
    let (low, high) = VIBRANT_LUMINANCE;
    c.luminance() > low && c.luminance() < high
}

/// Most saturated vibrant color, else the most saturated color overall.
fn pick_primary(colors: &[Color]) -> Color {
    let vibrant = colors
        .iter()
        .filter(|c| c.saturation() > PRIMARY_MIN_SATURATION && is_vibrant(c));
    first_max_by(vibrant, Color::saturation)
        .or_else(|| first_max_by(colors, Color::saturation))
        .unwrap_or_else(|| Color::gray(50.0))
}

/// Most saturated vibrant color well away from primary's hue, else a
/// synthetic color rotated around the wheel from primary.
fn pick_secondary(colors: &[Color], primary: &Color) -> Color {
    let candidates = colors.iter().filter(|c| {
        c.saturation() > SECONDARY_MIN_SATURATION
            && c.hue_distance(primary) > SECONDARY_MIN_HUE_DISTANCE
            && is_vibrant(c)
    });
    match first_max_by(candidates, Color::saturation) {
        Some(found) => found,
        None => HslSeed::new(
            (primary.hue() + SECONDARY_FALLBACK_ROTATION).rem_euclid(360.0),
            primary.saturation().min(SECONDARY_FALLBACK_MAX_SATURATION),
            SECONDARY_FALLBACK_LIGHTNESS,
        )
        .color(),
    }
}

/// First saturated color near `primary + 80°`, else a synthetic one there.
fn pick_tertiary(colors: &[Color], primary: &Color) -> Color {
    let target = HslSeed::new(
        (primary.hue() + TERTIARY_ROTATION).rem_euclid(360.0),
        TERTIARY_FALLBACK_SATURATION,
        TERTIARY_FALLBACK_LIGHTNESS,
    );
    colors
        .iter()
        .find(|c| {
            hue_distance_to(c, target.h) < TERTIARY_MAX_HUE_DISTANCE
                && c.saturation() > TERTIARY_MIN_SATURATION
        })
        .copied()
        .unwrap_or_else(|| target.color())
}

/// Circular distance from a color's hue to an exact hue in degrees.
fn hue_distance_to(color: &Color, target: f64) -> f64 {
    let diff = (color.hue() - target).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

fn borders(ctx: &StageContext<'_>, mut palette: Palette) -> Palette {
    let mode = ctx.mode;
    let bg = palette[Role::Background];
    let primary = palette[Role::Primary];
    let secondary = palette[Role::Secondary];
    let secondary_variant = palette[Role::SecondaryVariant];

    let base = match mode {
        ThemeMode::Dark => palette[Role::BackgroundLight].adjust(5.0, 0.0),
        ThemeMode::Light => bg.adjust(-5.0, 0.0),
    };

    let blend_factor = |accent: &Color| {
        if bg.is_accent_compatible(accent, AccentTolerance::default()) {
            BORDER_BLEND_COMPATIBLE
        } else {
            BORDER_BLEND_INCOMPATIBLE
        }
    };
    let accent_blend = blend_factor(&primary);
    let focus_blend = blend_factor(&secondary);

    palette.insert(Role::Border, base.blend(&primary, accent_blend));
    palette.insert(
        Role::BorderVariant,
        base.adjust(mode.pick(3.0, -3.0), 0.0)
            .blend(&primary, accent_blend * 0.7),
    );
    palette.insert(Role::BorderFocused, base.blend(&secondary, focus_blend * 1.2));
    palette.insert(Role::BorderSelected, base.blend(&secondary_variant, focus_blend));
    palette.insert(Role::BorderDisabled, base.adjust(mode.pick(-3.0, 3.0), -10.0));
    palette
}
