//! Self-contained HTML preview page.

use std::collections::BTreeMap;

use minijinja::Environment;
use serde::Serialize;
use tinct_core::{Ansi, Color, Palette, Role, RoleFamily, ThemeMode};
use tracing::debug;

use crate::error::Result;
use crate::json::ALPHA_SUGGESTION;

const TEMPLATE_NAME: &str = "preview.html";
const TEMPLATE: &str = include_str!("../templates/preview.html");

#[derive(Serialize)]
struct Card {
    name: &'static str,
    hex: String,
    /// Label color that stays legible on the swatch.
    text: &'static str,
}

impl Card {
    fn new(name: &'static str, color: &Color) -> Self {
        Self {
            name,
            hex: color.hex(),
            text: label_color(color),
        }
    }
}

#[derive(Serialize)]
struct Section {
    title: &'static str,
    cards: Vec<Card>,
}

#[derive(Serialize)]
struct Line {
    role: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    theme: &'static str,
    alpha_background: &'static str,
    c: BTreeMap<&'static str, String>,
    sections: Vec<Section>,
    terminal: Vec<Card>,
    readability: Vec<Line>,
    terminal_preview: Vec<Line>,
    extracted: Vec<Card>,
}

/// White on dark swatches, black on light ones.
pub fn label_color(color: &Color) -> &'static str {
    if color.luminance() < 0.5 {
        "#ffffff"
    } else {
        "#000000"
    }
}

fn cards(palette: &Palette, roles: impl IntoIterator<Item = Role>) -> Vec<Card> {
    roles
        .into_iter()
        .filter_map(|role| palette.get(role).map(|c| Card::new(role.as_str(), &c)))
        .collect()
}

fn sections(palette: &Palette) -> Vec<Section> {
    let family = |f: RoleFamily| f.roles();
    vec![
        Section {
            title: "Backgrounds & Foregrounds",
            cards: cards(
                palette,
                family(RoleFamily::Backgrounds).chain(family(RoleFamily::Foregrounds)),
            ),
        },
        Section {
            title: "Element Backgrounds",
            cards: cards(palette, family(RoleFamily::Elements)),
        },
        Section {
            title: "Borders",
            cards: cards(palette, family(RoleFamily::Borders)),
        },
        Section {
            title: "Accent Colors",
            cards: cards(palette, family(RoleFamily::Accents)),
        },
        Section {
            title: "Semantic Colors",
            cards: cards(palette, family(RoleFamily::Semantic)),
        },
    ]
}

/// Base row, then bright, then dim: an 8-column grid.
fn terminal_grid(palette: &Palette) -> Vec<Card> {
    let rows: [fn(Ansi) -> Role; 3] = [Ansi::base, Ansi::bright, Ansi::dim];
    rows.iter()
        .flat_map(|variant| cards(palette, Ansi::ALL.iter().map(|&a| variant(a))))
        .collect()
}

fn readability_lines() -> Vec<Line> {
    [
        ("foreground_bright", "Foreground bright (headings)"),
        ("foreground", "Foreground text (primary)"),
        ("foreground_medium", "Foreground medium (secondary)"),
        ("foreground_dim", "Foreground dim (comments)"),
        ("error", "Error message"),
        ("warning", "Warning message"),
        ("success", "Success message"),
        ("info", "Info message"),
    ]
    .into_iter()
    .map(|(role, label)| Line { role, label })
    .collect()
}

fn terminal_preview_lines() -> Vec<Line> {
    [
        ("red", "Error output"),
        ("green", "Success / git additions"),
        ("yellow", "Warnings / strings"),
        ("blue", "Info / directories"),
        ("magenta", "Keywords"),
        ("cyan", "Types / special"),
    ]
    .into_iter()
    .map(|(role, label)| Line { role, label })
    .collect()
}

/// Renders the preview page for one palette.
///
/// `extracted` are the source colors, shown in their own section when
/// non-empty. The palette must be complete.
pub fn render_preview(palette: &Palette, mode: ThemeMode, extracted: &[Color]) -> Result<String> {
    palette.ensure_complete()?;

    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;

    let context = Context {
        title: "Color Palette Preview",
        theme: mode.pick("Dark", "Light"),
        alpha_background: ALPHA_SUGGESTION.0,
        c: palette.iter().map(|(r, c)| (r.as_str(), c.hex())).collect(),
        sections: sections(palette),
        terminal: terminal_grid(palette),
        readability: readability_lines(),
        terminal_preview: terminal_preview_lines(),
        extracted: extracted
            .iter()
            .map(|c| Card::new("extracted", c))
            .collect(),
    };

    let html = env.get_template(TEMPLATE_NAME)?.render(&context)?;
    debug!(%mode, bytes = html.len(), "rendered html preview");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::generate_palette;

    fn extracted() -> Vec<Color> {
        vec![Color::from_rgb(112, 152, 193), Color::from_rgb(35, 66, 35)]
    }

    fn render(mode: ThemeMode) -> (Palette, String) {
        let palette = generate_palette(&extracted(), mode).unwrap();
        let html = render_preview(&palette, mode, &extracted()).unwrap();
        (palette, html)
    }

    #[test]
    fn label_color_tracks_luminance() {
        assert_eq!(label_color(&Color::gray(10.0)), "#ffffff");
        assert_eq!(label_color(&Color::gray(95.0)), "#000000");
    }

    #[test]
    fn page_uses_palette_colors() {
        let (palette, html) = render(ThemeMode::Dark);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Dark Theme"));
        let bg = palette[Role::Background].hex();
        assert!(html.contains(&format!("background: {bg};")));
        assert!(html.contains(&format!("background: {bg}E6;")));
    }

    #[test]
    fn every_role_gets_a_card_or_cell() {
        let (palette, html) = render(ThemeMode::Light);
        for (role, _) in &palette {
            let name = format!(">{}<", role.as_str());
            assert!(html.contains(&name), "{role} missing");
        }
        assert_eq!(html.matches("class=\"terminal-color\"").count(), 24);
    }

    #[test]
    fn readability_blocks_on_both_backgrounds() {
        let (_, html) = render(ThemeMode::Dark);
        assert!(html.contains("On Background</h4>"));
        assert!(html.contains("On Background Light</h4>"));
        assert_eq!(html.matches("Foreground dim (comments)").count(), 2);
    }

    #[test]
    fn extracted_section_is_optional() {
        let palette = generate_palette(&extracted(), ThemeMode::Dark).unwrap();
        let html = render_preview(&palette, ThemeMode::Dark, &[]).unwrap();
        assert!(!html.contains("Extracted Colors"));
        let (_, with) = render(ThemeMode::Dark);
        assert!(with.contains("Extracted Colors"));
        assert!(with.contains("#7098c1"));
    }
}
