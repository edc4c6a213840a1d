//! Error, warning, success and info.
//!
//! These start from fixed seeds rather than the image so that red still reads
//! as "error" whatever the wallpaper looks like. Only their lightness moves,
//! during contrast repair.

use super::{Palette, StageContext};
use crate::contrast::ensure_terminal_contrast;
use crate::policy::{ERROR_SEED, INFO_SEED, MIN_SEMANTIC_CONTRAST, SUCCESS_SEED, WARNING_SEED};
use crate::role::Role;

pub fn generate(ctx: &StageContext<'_>, mut palette: Palette) -> Palette {
    let bg = palette[Role::Background];
    let bg_light = palette[Role::BackgroundLight];

    for (role, seed) in [
        (Role::Error, ERROR_SEED),
        (Role::Warning, WARNING_SEED),
        (Role::Success, SUCCESS_SEED),
        (Role::Info, INFO_SEED),
    ] {
        let color = ensure_terminal_contrast(
            seed.color(),
            &bg,
            &bg_light,
            MIN_SEMANTIC_CONTRAST,
            ctx.mode,
        );
        palette.insert(role, color);
    }
    palette
}
