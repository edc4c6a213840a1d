//! The 24 ANSI terminal colors.
//!
//! Black and white are pure grays anchored to the background and foreground
//! lightness so they stay neutral whatever the image. Red, green and yellow
//! reuse the semantic colors. Blue, magenta and cyan look for an extracted
//! color inside a hue window and fall back to a fixed seed.
//!
//! Every slot leaves through [`ensure_terminal_contrast`]. The grays that sit
//! on the background side of the theme (black in a dark theme, white and
//! white_bright in a light one) are gated at [`ANCHOR_CONTRAST`] so their
//! clamps survive.

use super::{first_max_by, Palette, StageContext};
use crate::color::Color;
use crate::contrast::ensure_terminal_contrast;
use crate::mode::ThemeMode;
use crate::policy::{
    HueWindow, ANCHOR_CONTRAST, BLUE_WINDOW, CYAN_SEED, CYAN_WINDOW, MAGENTA_SEED,
    MAGENTA_WINDOW, MIN_TERMINAL_CONTRAST,
};
use crate::role::{Ansi, Role};

/// Lightness change from base to the dim variant: darker on dark themes.
const DIM_LIGHTNESS: (f64, f64) = (-15.0, 12.0);
const DIM_SATURATION: f64 = -10.0;

/// One slot's color and the ratio its exit gate demands.
struct Gated {
    color: Color,
    ratio: f64,
}

fn readable(color: Color) -> Gated {
    Gated {
        color,
        ratio: MIN_TERMINAL_CONTRAST,
    }
}

fn anchor(color: Color) -> Gated {
    Gated {
        color,
        ratio: ANCHOR_CONTRAST,
    }
}

pub fn generate(ctx: &StageContext<'_>, mut palette: Palette) -> Palette {
    let mode = ctx.mode;
    let bg = palette[Role::Background];
    let bg_light = palette[Role::BackgroundLight];
    let gate = |slot: Gated| ensure_terminal_contrast(slot.color, &bg, &bg_light, slot.ratio, mode);

    let [black, black_bright, black_dim] = blacks(&palette, mode);
    palette.insert(Role::Black, gate(black));
    palette.insert(Role::BlackBright, gate(black_bright));
    palette.insert(Role::BlackDim, gate(black_dim));

    let chromatic = [
        (Ansi::Red, palette[Role::Error], 12.0),
        (Ansi::Green, palette[Role::Success], 15.0),
        (Ansi::Yellow, palette[Role::Warning], 12.0),
        (Ansi::Blue, blue_seed(ctx.colors, &palette), 15.0),
        (Ansi::Magenta, magenta_seed(ctx.colors), 15.0),
        (Ansi::Cyan, cyan_seed(ctx.colors), 15.0),
    ];
    for (ansi, seed, bright_delta) in chromatic {
        let base = gate(readable(seed));
        let bright = gate(readable(base.adjust(bright_delta, 0.0)));
        let dim = gate(readable(
            base.adjust(mode.pick(DIM_LIGHTNESS.0, DIM_LIGHTNESS.1), DIM_SATURATION),
        ));
        palette.insert(ansi.base(), base);
        palette.insert(ansi.bright(), bright);
        palette.insert(ansi.dim(), dim);
    }

    let [white, white_bright, white_dim] = whites(&palette, mode);
    palette.insert(Role::White, gate(white));
    palette.insert(Role::WhiteBright, gate(white_bright));
    palette.insert(Role::WhiteDim, gate(white_dim));

    palette
}

/// Dark themes anchor black to the background; light themes to the
/// foreground, where black is the readable side.
fn blacks(palette: &Palette, mode: ThemeMode) -> [Gated; 3] {
    match mode {
        ThemeMode::Dark => {
            let l = palette[Role::Background].lightness();
            [
                anchor(Color::gray(l)),
                anchor(Color::gray((l + 20.0).min(40.0))),
                anchor(Color::gray((l - 8.0).max(3.0))),
            ]
        }
        ThemeMode::Light => {
            let l = palette[Role::Foreground].lightness();
            [
                readable(Color::gray(l)),
                readable(Color::gray((l + 8.0).min(30.0))),
                readable(Color::gray((l + 12.0).min(35.0))),
            ]
        }
    }
}

/// Dark themes anchor white to `foreground_dim` with 75/90/60% floors; light
/// themes anchor it to the background, keeping only white_dim readable.
fn whites(palette: &Palette, mode: ThemeMode) -> [Gated; 3] {
    match mode {
        ThemeMode::Dark => {
            let l = palette[Role::ForegroundDim].lightness();
            [
                readable(Color::gray(l.max(75.0))),
                readable(Color::gray((l + 12.0).max(90.0))),
                readable(Color::gray((l - 8.0).max(60.0))),
            ]
        }
        ThemeMode::Light => {
            let l = palette[Role::Background].lightness();
            [
                anchor(Color::gray(l)),
                anchor(Color::gray((l + 3.0).min(97.0))),
                readable(Color::gray((l - 25.0).max(40.0))),
            ]
        }
    }
}

fn in_window<'a>(colors: &'a [Color], window: &'a HueWindow) -> impl Iterator<Item = &'a Color> {
    colors.iter().filter(move |c| window.contains(c))
}

/// Brightest extracted blue, else the generated info color.
fn blue_seed(colors: &[Color], palette: &Palette) -> Color {
    first_max_by(in_window(colors, &BLUE_WINDOW), Color::luminance)
        .unwrap_or_else(|| palette[Role::Info])
}

/// Most saturated extracted magenta, else the magenta seed.
fn magenta_seed(colors: &[Color]) -> Color {
    first_max_by(in_window(colors, &MAGENTA_WINDOW), Color::saturation)
        .unwrap_or_else(|| MAGENTA_SEED.color())
}

/// First extracted cyan, else the cyan seed.
fn cyan_seed(colors: &[Color]) -> Color {
    in_window(colors, &CYAN_WINDOW)
        .next()
        .copied()
        .unwrap_or_else(|| CYAN_SEED.color())
}
