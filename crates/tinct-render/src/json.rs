//! The flat palette export.
//!
//! One key per role in role order, each a `#rrggbb` string, followed by
//! metadata keys that start with an underscore so consumers can skip them.

use serde_json::{json, Map, Value};
use tinct_core::opacity::{opacity_to_hex, validate_opacity};
use tinct_core::Palette;

use crate::error::Result;

/// Suggested alpha for translucent backgrounds and selections, as hex digits.
pub const ALPHA_SUGGESTION: (&str, &str) = ("E6", "80");

const NOTE: &str = "24 terminal colors: black/red/green/yellow/blue/magenta/cyan/white \
                    with _bright and _dim variants";

/// Builds the export object.
///
/// The palette must be complete. `blur_opacity`, when given, must be a valid
/// alpha and is written both as a float rounded to two places and as hex.
pub fn palette_value(palette: &Palette, blur_opacity: Option<f64>) -> Result<Value> {
    palette.ensure_complete()?;

    let mut data: Map<String, Value> = palette
        .iter()
        .map(|(role, color)| (role.as_str().to_string(), Value::String(color.hex())))
        .collect();

    if let Some(opacity) = blur_opacity {
        let opacity = validate_opacity(opacity)?;
        data.insert(
            "_blur_opacity".to_string(),
            json!({
                "float": (opacity * 100.0).round() / 100.0,
                "hex": opacity_to_hex(opacity),
            }),
        );
    }
    data.insert(
        "_alpha_suggestion".to_string(),
        json!({
            "background": ALPHA_SUGGESTION.0,
            "selection": ALPHA_SUGGESTION.1,
        }),
    );
    data.insert("_note".to_string(), Value::String(NOTE.to_string()));

    Ok(Value::Object(data))
}

/// Pretty-printed export, two-space indented.
pub fn export_json(palette: &Palette, blur_opacity: Option<f64>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&palette_value(palette, blur_opacity)?)?)
}
