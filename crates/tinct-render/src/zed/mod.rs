//! Zed editor theme families.
//!
//! A family holds a dark and a light theme built from the two palettes of one
//! image. The blurred family marks both themes translucent and derives every
//! surface alpha from the per-mode opacity.

mod style;
mod syntax;

use serde_json::{json, Value};
use tinct_core::opacity::validate_opacity;
use tinct_core::{Palette, ThemeMode};

use crate::error::Result;

pub const SCHEMA: &str = "https://zed.dev/schema/themes/v0.2.0.json";
pub const AUTHOR: &str = "tinct";

/// Per-mode opacities for a blurred family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurOpacity {
    pub dark: f64,
    pub light: f64,
}

impl BlurOpacity {
    pub fn uniform(opacity: f64) -> Self {
        Self {
            dark: opacity,
            light: opacity,
        }
    }

    fn for_mode(self, mode: ThemeMode) -> f64 {
        mode.pick(self.dark, self.light)
    }
}

/// `"{family} Dark"`, `"{family} Light Blur"`, and so on.
pub fn theme_name(family: &str, mode: ThemeMode, blurred: bool) -> String {
    let mode = mode.pick("Dark", "Light");
    if blurred {
        format!("{family} {mode} Blur")
    } else {
        format!("{family} {mode}")
    }
}

/// One theme entry: `{ name, appearance, style }`.
pub fn theme(palette: &Palette, mode: ThemeMode, family: &str, opacity: Option<f64>) -> Result<Value> {
    palette.ensure_complete()?;
    let opacity = opacity.map(validate_opacity).transpose()?;
    Ok(json!({
        "name": theme_name(family, mode, opacity.is_some()),
        "appearance": mode.as_str(),
        "style": style::build_style(palette, opacity),
    }))
}

/// The family document holding a dark and a light theme.
pub fn theme_family(
    family: &str,
    dark: &Palette,
    light: &Palette,
    blur: Option<BlurOpacity>,
) -> Result<Value> {
    let opacity = |mode| blur.map(|b| b.for_mode(mode));
    Ok(json!({
        "$schema": SCHEMA,
        "name": family,
        "author": AUTHOR,
        "themes": [
            theme(dark, ThemeMode::Dark, family, opacity(ThemeMode::Dark))?,
            theme(light, ThemeMode::Light, family, opacity(ThemeMode::Light))?,
        ],
    }))
}

/// Pretty-printed family document.
pub fn export_theme_family(
    family: &str,
    dark: &Palette,
    light: &Palette,
    blur: Option<BlurOpacity>,
) -> Result<String> {
    Ok(serde_json::to_string_pretty(&theme_family(family, dark, light, blur)?)?)
}
