//! Syntax token colors.

use serde_json::{json, Map, Value};
use tinct_core::{Palette, Role};

/// `(token, role, font_style, font_weight)`
type Token = (&'static str, Role, Option<&'static str>, Option<u16>);

const TOKENS: [Token; 43] = {
    use Role::*;
    [
        ("attribute", Tertiary, None, None),
        ("boolean", Yellow, None, None),
        ("comment", ForegroundDim, None, None),
        ("comment.doc", ForegroundMedium, None, None),
        ("constant", Yellow, None, None),
        ("constructor", BlueDim, None, None),
        ("embedded", ForegroundBright, None, None),
        ("emphasis", Tertiary, None, None),
        ("emphasis.strong", Yellow, None, Some(700)),
        ("enum", Error, None, None),
        ("function", CyanDim, None, None),
        ("hint", BlueBright, None, None),
        ("keyword", Magenta, None, None),
        ("label", Tertiary, None, None),
        ("link_text", CyanDim, Some("normal"), None),
        ("link_uri", Cyan, None, None),
        ("namespace", ForegroundBright, None, None),
        ("number", Yellow, None, None),
        ("operator", Cyan, None, None),
        ("predictive", CyanBright, Some("italic"), None),
        ("preproc", ForegroundBright, None, None),
        ("primary", Foreground, None, None),
        ("property", Error, None, None),
        ("punctuation", Foreground, None, None),
        ("punctuation.bracket", ForegroundMedium, None, None),
        ("punctuation.delimiter", ForegroundMedium, None, None),
        ("punctuation.list_marker", Error, None, None),
        ("punctuation.markup", Error, None, None),
        ("punctuation.special", Red, None, None),
        ("selector", Yellow, None, None),
        ("selector.pseudo", Tertiary, None, None),
        ("string", Success, None, None),
        ("string.escape", ForegroundMedium, None, None),
        ("string.regex", Yellow, None, None),
        ("string.special", Yellow, None, None),
        ("string.special.symbol", Yellow, None, None),
        ("tag", Tertiary, None, None),
        ("text.literal", Success, None, None),
        ("title", Error, None, Some(400)),
        ("type", Cyan, None, None),
        ("variable", Foreground, None, None),
        ("variable.special", Yellow, None, None),
        ("variant", BlueDim, None, None),
    ]
};

/// Token styles, always fully opaque. `palette` must be complete.
pub(super) fn syntax_styles(palette: &Palette) -> Value {
    let styles: Map<String, Value> = TOKENS
        .iter()
        .map(|&(token, role, font_style, font_weight)| {
            let style = json!({
                "color": format!("{}ff", palette[role].hex()),
                "font_style": font_style,
                "font_weight": font_weight,
            });
            (token.to_string(), style)
        })
        .collect();
    Value::Object(styles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tinct_core::{generate_palette, Color, ThemeMode};

    #[test]
    fn tokens_are_unique() {
        let names: HashSet<&str> = TOKENS.iter().map(|t| t.0).collect();
        assert_eq!(names.len(), TOKENS.len());
    }

    #[test]
    fn styles_carry_weight_and_style() {
        let palette = generate_palette(&[Color::from_rgb(90, 120, 160)], ThemeMode::Dark).unwrap();
        let styles = syntax_styles(&palette);

        assert_eq!(styles.as_object().unwrap().len(), 43);
        assert_eq!(styles["emphasis.strong"]["font_weight"], 700);
        assert_eq!(styles["predictive"]["font_style"], "italic");
        assert!(styles["keyword"]["font_style"].is_null());
        assert_eq!(
            styles["string"]["color"],
            format!("{}ff", palette[Role::Success].hex())
        );
    }
}
