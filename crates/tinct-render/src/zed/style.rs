//! Projection of a palette onto Zed's theme style keys.
//!
//! Every color is written as `#rrggbbaa`. An opaque theme uses `ff`
//! throughout. A blurred theme takes its alphas from the layered opacity
//! solution so the stacked editor surfaces reach the target opacity.

use serde_json::{json, Map, Value};
use tinct_core::opacity::{calculate_layered_opacities, opacity_to_hex};
use tinct_core::{Ansi, AnsiVariant, Palette, Role};

use super::syntax::syntax_styles;

const OPAQUE: &str = "ff";
const CLEAR: &str = "#00000000";

/// Alpha hex digits per surface layer.
struct Alphas {
    blurred: bool,
    target: String,
    global: String,
    editor: String,
    tab_bar: String,
    tab: String,
    title_status: String,
    transparent: String,
    border: String,
}

impl Alphas {
    fn new(opacity: Option<f64>) -> Self {
        match opacity {
            Some(target) => {
                let layers = calculate_layered_opacities(target);
                Self {
                    blurred: true,
                    target: opacity_to_hex(target),
                    global: opacity_to_hex(layers.global),
                    editor: opacity_to_hex(layers.editor_layer),
                    tab_bar: opacity_to_hex(layers.tab_bar_layer),
                    tab: opacity_to_hex(layers.tab_layer),
                    title_status: opacity_to_hex(layers.title_status),
                    transparent: opacity_to_hex(layers.transparent),
                    border: opacity_to_hex(0.4),
                }
            }
            None => Self {
                blurred: false,
                target: OPAQUE.into(),
                global: OPAQUE.into(),
                editor: OPAQUE.into(),
                tab_bar: OPAQUE.into(),
                tab: OPAQUE.into(),
                title_status: OPAQUE.into(),
                transparent: OPAQUE.into(),
                border: OPAQUE.into(),
            },
        }
    }
}

struct StyleMap<'a> {
    palette: &'a Palette,
    map: Map<String, Value>,
}

impl StyleMap<'_> {
    fn color(&self, role: Role, alpha: &str) -> String {
        format!("{}{}", self.palette[role].hex(), alpha)
    }

    fn set(&mut self, key: &str, role: Role, alpha: &str) {
        let value = self.color(role, alpha);
        self.map.insert(key.to_string(), Value::String(value));
    }

    fn raw(&mut self, key: &str, value: Value) {
        self.map.insert(key.to_string(), value);
    }

    /// A diagnostic status: the text color, a faint background and a border.
    fn status(&mut self, name: &str, text: Role, background: Role, border: (Role, &str)) {
        self.set(name, text, OPAQUE);
        self.set(&format!("{name}.background"), background, "1a");
        self.set(&format!("{name}.border"), border.0, border.1);
    }
}

/// Builds the `style` object of one theme. `palette` must be complete.
pub(super) fn build_style(palette: &Palette, opacity: Option<f64>) -> Value {
    use Role::*;

    let a = Alphas::new(opacity);
    let mut s = StyleMap {
        palette,
        map: Map::new(),
    };

    s.set("border", Border, &a.border);
    s.set("border.variant", BorderVariant, &a.border);
    s.set("border.focused", BorderFocused, &a.border);
    s.set("border.selected", BorderSelected, OPAQUE);
    s.raw("border.transparent", json!(CLEAR));
    s.set("border.disabled", BorderDisabled, OPAQUE);

    s.set("elevated_surface.background", BackgroundMedium, &a.target);
    s.set("surface.background", BackgroundMedium, &a.transparent);
    let global_bg = if a.blurred { BackgroundMedium } else { BackgroundLight };
    s.set("background", global_bg, &a.global);

    s.set("element.background", Element, &a.transparent);
    s.set("element.hover", ElementHover, &a.title_status);
    s.set("element.active", ElementActive, &a.title_status);
    s.set("element.selected", ElementSelected, &a.title_status);
    s.set("element.disabled", ElementDisabled, &a.title_status);
    s.set("drop_target.background", ElementHover, "80");
    s.raw("ghost_element.background", json!(CLEAR));
    s.set("ghost_element.hover", ElementHover, OPAQUE);
    s.set("ghost_element.active", ElementActive, OPAQUE);
    s.set("ghost_element.selected", ElementSelected, OPAQUE);
    s.set("ghost_element.disabled", ElementDisabled, OPAQUE);

    for (prefix, placeholder) in [("text", ForegroundDim), ("icon", Foreground)] {
        s.set(prefix, ForegroundBright, OPAQUE);
        s.set(&format!("{prefix}.muted"), Foreground, OPAQUE);
        s.set(&format!("{prefix}.placeholder"), placeholder, OPAQUE);
        s.set(&format!("{prefix}.disabled"), ForegroundDim, OPAQUE);
        s.set(&format!("{prefix}.accent"), Tertiary, OPAQUE);
    }

    s.set("status_bar.background", BackgroundLight, &a.title_status);
    s.set("title_bar.background", BackgroundLight, &a.title_status);
    s.set("title_bar.inactive_background", BackgroundLight, &a.title_status);
    s.set("toolbar.background", Background, &a.editor);
    s.set("tab_bar.background", BackgroundMedium, &a.tab_bar);
    s.set("tab.inactive_background", BackgroundMedium, &a.tab);
    s.set("tab.active_background", Background, &a.target);
    s.set("search.match_background", Tertiary, "66");
    s.set("panel.background", BackgroundMedium, &a.transparent);
    s.raw("panel.focused_border", Value::Null);
    s.raw("pane.focused_border", Value::Null);

    s.set("scrollbar.thumb.background", Primary, "4c");
    s.set("scrollbar.thumb.hover_background", PrimaryVariant, OPAQUE);
    s.set("scrollbar.thumb.border", PrimaryVariant, &a.transparent);
    s.raw("scrollbar.track.background", json!(CLEAR));
    s.set("scrollbar.track.border", Primary, &a.transparent);

    s.set("editor.foreground", Foreground, OPAQUE);
    s.set("editor.background", Background, &a.editor);
    s.set("editor.gutter.background", Background, &a.editor);
    s.set("editor.subheader.background", BackgroundMedium, &a.editor);
    s.set("editor.active_line.background", BackgroundMedium, "bf");
    s.set("editor.highlighted_line.background", BackgroundMedium, OPAQUE);
    s.set("editor.line_number", ForegroundDim, OPAQUE);
    s.set("editor.active_line_number", ForegroundBright, OPAQUE);
    s.set("editor.hover_line_number", ForegroundDim, OPAQUE);
    s.set("editor.invisible", ForegroundDim, OPAQUE);
    s.set("editor.wrap_guide", Primary, "0d");
    s.set("editor.active_wrap_guide", Primary, "1a");
    s.set("editor.document_highlight.read_background", Tertiary, "1a");
    s.set("editor.document_highlight.write_background", Primary, "66");

    // The terminal's dim foreground is the background itself: lowest contrast.
    s.set("terminal.background", Background, &a.transparent);
    s.set("terminal.foreground", ForegroundBright, OPAQUE);
    s.set("terminal.bright_foreground", ForegroundBright, OPAQUE);
    s.set("terminal.dim_foreground", Background, OPAQUE);
    for ansi in Ansi::ALL {
        for (variant, prefix) in [
            (AnsiVariant::Base, ""),
            (AnsiVariant::Bright, "bright_"),
            (AnsiVariant::Dim, "dim_"),
        ] {
            let key = format!("terminal.ansi.{prefix}{}", ansi.name());
            s.set(&key, ansi.role(variant), OPAQUE);
        }
    }

    s.set("link_text.hover", Info, OPAQUE);
    s.set("version_control.added", Green, OPAQUE);
    s.set("version_control.modified", Yellow, OPAQUE);
    s.set("version_control.deleted", Red, OPAQUE);
    s.set("version_control.conflict_marker.ours", Success, "1a");
    s.set("version_control.conflict_marker.theirs", Tertiary, "1a");

    s.status("conflict", Warning, Warning, (YellowDim, "c2"));
    s.status("created", Success, Success, (GreenDim, "c2"));
    s.status("deleted", Error, Error, (RedDim, "c2"));
    s.status("error", Error, Error, (RedDim, "c2"));
    s.status("hidden", ForegroundDim, BackgroundDisabled, (Muted, OPAQUE));
    s.status("hint", BlueBright, SecondaryVariant, (SecondaryVariant, OPAQUE));
    s.status("ignored", ForegroundDim, BackgroundDisabled, (Primary, OPAQUE));
    s.status("info", Info, Info, (BlueDim, OPAQUE));
    s.status("modified", Warning, Warning, (YellowDim, "c2"));
    s.status("predictive", CyanBright, CyanBright, (GreenDim, "c2"));
    s.status("renamed", Tertiary, Tertiary, (SecondaryVariant, OPAQUE));
    s.status("success", Success, Success, (GreenDim, "c2"));
    s.status("unreachable", Foreground, Primary, (Primary, OPAQUE));
    s.status("warning", Warning, Warning, (YellowDim, "c2"));

    let players: Vec<Value> = [Tertiary, Magenta, Cyan, Error, Warning, Success]
        .into_iter()
        .map(|role| {
            json!({
                "cursor": s.color(role, OPAQUE),
                "background": s.color(role, OPAQUE),
                "selection": s.color(role, "3d"),
            })
        })
        .collect();
    s.raw("players", Value::Array(players));
    s.raw("syntax", syntax_styles(palette));

    if a.blurred {
        s.raw("background.appearance", json!("blurred"));
    }

    Value::Object(s.map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::{generate_palette, Color, ThemeMode};

    fn palette() -> Palette {
        generate_palette(
            &[Color::from_rgb(112, 152, 193), Color::from_rgb(35, 66, 35)],
            ThemeMode::Dark,
        )
        .unwrap()
    }

    fn hex_with(palette: &Palette, role: Role, alpha: &str) -> String {
        format!("{}{}", palette[role].hex(), alpha)
    }

    // =========================================================================
    // Opaque themes
    // =========================================================================

    #[test]
    fn opaque_theme_uses_full_alpha() {
        let p = palette();
        let style = build_style(&p, None);
        assert_eq!(style["background"], hex_with(&p, Role::BackgroundLight, "ff"));
        assert_eq!(style["editor.background"], hex_with(&p, Role::Background, "ff"));
        assert_eq!(style["border"], hex_with(&p, Role::Border, "ff"));
        assert_eq!(style["element.background"], hex_with(&p, Role::Element, "ff"));
        assert_eq!(style["panel.background"], hex_with(&p, Role::BackgroundMedium, "ff"));
        assert!(style.get("background.appearance").is_none());
    }

    #[test]
    fn terminal_covers_all_ansi_slots() {
        let p = palette();
        let style = build_style(&p, None);
        let ansi = style
            .as_object()
            .unwrap()
            .keys()
            .filter(|k| k.starts_with("terminal.ansi."))
            .count();
        assert_eq!(ansi, 24);
        assert_eq!(style["terminal.ansi.bright_black"], hex_with(&p, Role::BlackBright, "ff"));
        assert_eq!(style["terminal.ansi.dim_white"], hex_with(&p, Role::WhiteDim, "ff"));
        assert_eq!(style["terminal.dim_foreground"], hex_with(&p, Role::Background, "ff"));
    }

    #[test]
    fn statuses_and_players() {
        let p = palette();
        let style = build_style(&p, None);
        assert_eq!(style["error.background"], hex_with(&p, Role::Error, "1a"));
        assert_eq!(style["error.border"], hex_with(&p, Role::RedDim, "c2"));
        assert_eq!(style["hint.border"], hex_with(&p, Role::SecondaryVariant, "ff"));
        assert_eq!(style["players"].as_array().unwrap().len(), 6);
        assert_eq!(style["players"][1]["selection"], hex_with(&p, Role::Magenta, "3d"));
        assert!(style["panel.focused_border"].is_null());
    }

    // =========================================================================
    // Blurred themes
    // =========================================================================

    #[test]
    fn blurred_theme_uses_layered_alphas() {
        let p = palette();
        let style = build_style(&p, Some(0.9));
        let layers = calculate_layered_opacities(0.9);

        assert_eq!(style["background.appearance"], "blurred");
        assert_eq!(
            style["background"],
            hex_with(&p, Role::BackgroundMedium, &opacity_to_hex(layers.global))
        );
        assert_eq!(
            style["editor.background"],
            hex_with(&p, Role::Background, &opacity_to_hex(layers.editor_layer))
        );
        assert_eq!(style["tab.active_background"], hex_with(&p, Role::Background, "e5"));
        assert_eq!(style["border"], hex_with(&p, Role::Border, "66"));
        assert_eq!(style["panel.background"], hex_with(&p, Role::BackgroundMedium, "00"));
        assert_eq!(style["element.hover"], hex_with(&p, Role::ElementHover, "da"));
    }

    #[test]
    fn element_alphas_follow_the_theme_kind() {
        let p = palette();
        let opaque = build_style(&p, None);
        assert_eq!(opaque["element.background"], hex_with(&p, Role::Element, "ff"));
        assert_eq!(opaque["element.hover"], hex_with(&p, Role::ElementHover, "ff"));
        assert_eq!(opaque["scrollbar.track.border"], hex_with(&p, Role::Primary, "ff"));

        let blurred = build_style(&p, Some(0.9));
        assert_eq!(blurred["element.background"], hex_with(&p, Role::Element, "00"));
        assert_eq!(blurred["scrollbar.thumb.border"], hex_with(&p, Role::PrimaryVariant, "00"));
    }
}
