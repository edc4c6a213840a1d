//! Console listing of a palette, one role per line.

use std::fmt::Write;

use console::Style;
use tinct_core::contrast::contrast;
use tinct_core::{Ansi, Color, Palette, Role, ThemeMode};

use crate::util::rgb_to_ansi256;

/// Whether to prefix each line with a colored swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Swatches {
    #[default]
    Off,
    On,
}

fn sections() -> Vec<(&'static str, Vec<Role>)> {
    use Role::*;
    vec![
        ("BACKGROUNDS", vec![Background, BackgroundLight]),
        ("FOREGROUNDS", vec![Foreground, ForegroundDim]),
        ("ACCENTS", vec![Primary, Secondary, Tertiary, Muted, Selection]),
        ("SEMANTIC", vec![Error, Warning, Success, Info]),
        ("TERMINAL (Base)", Ansi::ALL.iter().map(|a| a.base()).collect()),
        ("TERMINAL (Bright)", Ansi::ALL.iter().map(|a| a.bright()).collect()),
        ("TERMINAL (Dim)", Ansi::ALL.iter().map(|a| a.dim()).collect()),
    ]
}

fn swatch(color: &Color) -> String {
    let style = Style::new()
        .on_color256(rgb_to_ansi256(color.rgb()))
        .force_styling(true);
    format!("{} ", style.apply_to("    "))
}

/// Lists the main roles with their contrast against `background`.
///
/// Roles absent from the palette are skipped. A palette without a
/// background lists nothing under the header.
pub fn render_listing(palette: &Palette, mode: ThemeMode, swatches: Swatches) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(
        out,
        "FUNCTIONAL COLOR PALETTE ({} THEME)",
        mode.as_str().to_uppercase()
    );
    let _ = writeln!(out, "{rule}");

    let Some(bg) = palette.get(Role::Background) else {
        return out;
    };

    for (title, roles) in sections() {
        let _ = writeln!(out, "\n{title}:");
        for role in roles {
            let Some(color) = palette.get(role) else {
                continue;
            };
            let prefix = match swatches {
                Swatches::On => swatch(&color),
                Swatches::Off => String::new(),
            };
            let _ = writeln!(
                out,
                "  {prefix}{:<18} {}  (contrast: {:.1}:1)",
                role.as_str(),
                color.hex(),
                contrast(&color, &bg)
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::generate_palette;

    fn palette() -> Palette {
        generate_palette(&[Color::from_rgb(112, 152, 193)], ThemeMode::Dark).unwrap()
    }

    #[test]
    fn lists_every_section() {
        let text = render_listing(&palette(), ThemeMode::Dark, Swatches::Off);
        assert!(text.contains("FUNCTIONAL COLOR PALETTE (DARK THEME)"));
        for title in ["BACKGROUNDS:", "ACCENTS:", "TERMINAL (Bright):", "TERMINAL (Dim):"] {
            assert!(text.contains(title), "{title}");
        }
        let line = text.lines().find(|l| l.contains("magenta_bright")).unwrap();
        assert!(line.starts_with("  magenta_bright     #"));
        assert!(line.ends_with(":1)"));
    }

    #[test]
    fn background_has_unit_contrast() {
        let text = render_listing(&palette(), ThemeMode::Dark, Swatches::Off);
        let line = text.lines().find(|l| l.contains("background ")).unwrap();
        assert!(line.ends_with("(contrast: 1.0:1)"));
    }

    #[test]
    fn swatches_add_escape_codes() {
        let plain = render_listing(&palette(), ThemeMode::Dark, Swatches::Off);
        let colored = render_listing(&palette(), ThemeMode::Dark, Swatches::On);
        assert!(!plain.contains('\u{1b}'));
        assert!(colored.contains("\u{1b}[48;5;"));
    }

    #[test]
    fn empty_palette_lists_header_only() {
        let text = render_listing(&Palette::new(), ThemeMode::Light, Swatches::Off);
        assert!(text.contains("(LIGHT THEME)"));
        assert!(!text.contains("BACKGROUNDS"));
    }
}
