//! Runs the stages in order.
//!
//! The pipeline has no branches and no retries. A stage whose contrast
//! repair falls short still writes its best color and the run carries on;
//! [`ReadabilityReport`](crate::ReadabilityReport) is where shortfalls show up.

use tracing::debug;

use super::{accents, backgrounds, foregrounds, semantic, terminal};
use super::{Palette, Stage, StageContext};
use crate::color::Color;
use crate::error::{PaletteError, Result};
use crate::mode::ThemeMode;

/// The stages in dependency order. Each reads only roles written before it.
pub const STAGES: [(&str, Stage); 5] = [
    ("backgrounds", backgrounds::generate),
    ("foregrounds", foregrounds::generate),
    ("accents", accents::generate),
    ("semantic", semantic::generate),
    ("terminal", terminal::generate),
];

/// Derives a complete palette from extracted colors.
///
/// Fails only when `colors` is empty. Every fixed role is present in the
/// result.
pub fn generate_palette(colors: &[Color], mode: ThemeMode) -> Result<Palette> {
    if colors.is_empty() {
        return Err(PaletteError::NoColors);
    }

    let ctx = StageContext { colors, mode };
    let palette = STAGES
        .iter()
        .fold(Palette::new(), |palette, (name, stage)| {
            let before = palette.len();
            let palette = stage(&ctx, palette);
            debug!(stage = *name, written = palette.len() - before, %mode, "stage complete");
            palette
        });

    palette.ensure_complete()?;
    Ok(palette)
}
