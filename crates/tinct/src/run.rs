//! One generation run: sample, build palettes, write artifacts.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tinct_core::opacity::calculate_theme_opacity;
use tinct_core::{Color, Extraction, Palette, ReadabilityReport, ThemeMode};
use tinct_image::{ImageAverager, ImageExtractor};
use tinct_render::{
    export_json, export_theme_family, render_listing, render_preview, render_report, BlurOpacity,
    Swatches,
};
use tracing::{debug, info, warn};

use crate::config::{Settings, Source, ThemePolicy};
use crate::detect::detect_system_mode;

/// A palette for one mode, with its blur opacity and readability report.
#[derive(Debug, Clone)]
pub struct Generated {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub opacity: f64,
    pub report: ReadabilityReport,
}

#[derive(Debug, Clone)]
pub struct Run {
    pub extracted: Vec<Color>,
    pub themes: Vec<Generated>,
}

/// A file written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub path: PathBuf,
    pub note: Option<String>,
}

impl Run {
    pub fn theme(&self, mode: ThemeMode) -> Option<&Generated> {
        self.themes.iter().find(|t| t.mode == mode)
    }

    /// Console output for every palette: listing then report.
    pub fn render_console(&self, swatches: Swatches) -> String {
        let mut out = String::new();
        for theme in &self.themes {
            out.push_str(&render_listing(&theme.palette, theme.mode, swatches));
            let _ = writeln!(out, "\n{}", render_report(&theme.report));
        }
        out
    }
}

/// Theme modes a policy asks for, given the sampled image.
pub fn modes(policy: ThemePolicy, extraction: &Extraction) -> Vec<ThemeMode> {
    match policy {
        ThemePolicy::Both => vec![ThemeMode::Dark, ThemeMode::Light],
        ThemePolicy::Dark => vec![extraction.mode(Some(ThemeMode::Dark))],
        ThemePolicy::Light => vec![extraction.mode(Some(ThemeMode::Light))],
        ThemePolicy::Auto => vec![extraction.mode(None)],
        ThemePolicy::System => {
            let system = detect_system_mode();
            if system.is_none() {
                info!("no OS color preference, using the image average");
            }
            vec![extraction.mode(system)]
        }
    }
}

pub fn sample(settings: &Settings) -> anyhow::Result<Extraction> {
    match &settings.source {
        Source::Image(path) => Extraction::from_image(
            &ImageExtractor::default(),
            &ImageAverager::default(),
            path,
            settings.colors,
        )
        .with_context(|| format!("failed to analyze {}", path.display())),
        Source::Hex(fixed) => Ok(Extraction::from_image(
            fixed,
            fixed,
            Path::new("-"),
            settings.colors,
        )?),
    }
}

/// Samples the source and builds every requested palette.
pub fn generate(settings: &Settings) -> anyhow::Result<Run> {
    let extraction = sample(settings)?;
    let themes = modes(settings.theme, &extraction)
        .into_iter()
        .map(|mode| {
            let palette = extraction.palette(mode)?;
            let opacity = match settings.opacity {
                Some(opacity) => opacity,
                None => calculate_theme_opacity(&palette, mode)?,
            };
            let report = ReadabilityReport::evaluate(&palette, mode)?;
            if !report.passes() {
                warn!(%mode, issues = report.issues.len(), "palette has contrast issues");
            }
            info!(%mode, opacity, roles = palette.len(), "generated palette");
            Ok(Generated {
                mode,
                palette,
                opacity,
                report,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Run {
        extracted: extraction.colors,
        themes,
    })
}

fn write_file(dir: &Path, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(path)
}

/// Writes the artifacts the settings enable.
///
/// Zed families hold a dark and a light theme, so they are only written
/// when both palettes were generated.
pub fn write_outputs(run: &Run, settings: &Settings) -> anyhow::Result<Vec<Written>> {
    let dir = settings.output_dir.as_path();
    let outputs = settings.outputs;
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    let mut push = |path: PathBuf, note: Option<String>| written.push(Written { path, note });

    for theme in &run.themes {
        let mode = theme.mode;
        if outputs.json {
            let json = export_json(&theme.palette, Some(theme.opacity))?;
            push(write_file(dir, &format!("palette-{mode}.json"), &json)?, None);
        }
        if outputs.html {
            let html = render_preview(&theme.palette, mode, &run.extracted)?;
            push(write_file(dir, &format!("palette_preview-{mode}.html"), &html)?, None);
        }
        if outputs.report {
            let report = render_report(&theme.report);
            push(write_file(dir, &format!("readability_report-{mode}.txt"), &report)?, None);
        }
    }

    let pair = run.theme(ThemeMode::Dark).zip(run.theme(ThemeMode::Light));
    let name = settings.name.as_str();
    match pair {
        Some((dark, light)) => {
            if outputs.zed {
                let family = export_theme_family(name, &dark.palette, &light.palette, None)?;
                push(
                    write_file(dir, &format!("{name}.json"), &family)?,
                    Some(format!("contains '{name} Dark' and '{name} Light'")),
                );
            }
            if outputs.zed_blur {
                let blur = BlurOpacity {
                    dark: dark.opacity,
                    light: light.opacity,
                };
                let family = export_theme_family(name, &dark.palette, &light.palette, Some(blur))?;
                push(
                    write_file(dir, &format!("{name}-blur.json"), &family)?,
                    Some(format!(
                        "contains '{name} Dark Blur' and '{name} Light Blur'"
                    )),
                );
            }
        }
        None if outputs.zed || outputs.zed_blur => {
            info!("zed themes need both dark and light palettes, skipping");
        }
        None => {}
    }

    Ok(written)
}

/// The closing block listing written files and blur opacities.
pub fn render_summary(run: &Run, written: &[Written]) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();
    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "Exported:");
    for file in written {
        match &file.note {
            Some(note) => {
                let _ = writeln!(out, "  - {} ({note})", file.path.display());
            }
            None => {
                let _ = writeln!(out, "  - {}", file.path.display());
            }
        }
    }
    let opacities: Vec<String> = run
        .themes
        .iter()
        .map(|t| format!("{}={:.2}", t.mode, t.opacity))
        .collect();
    let _ = writeln!(out, "\nBlur opacity: {}", opacities.join(", "));
    out.push_str(&rule);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Outputs, DEFAULT_NAME};
    use crate::detect::set_mode_detector;
    use tinct_core::FixedColors;

    fn fixed() -> FixedColors {
        FixedColors::parse_list("#7098c1,#1a1a1a,#234223").unwrap()
    }

    fn settings(dir: &Path, theme: ThemePolicy) -> Settings {
        Settings {
            source: Source::Hex(fixed()),
            output_dir: dir.to_path_buf(),
            colors: 20,
            theme,
            opacity: None,
            name: DEFAULT_NAME.into(),
            outputs: Outputs::default(),
        }
    }

    fn extraction() -> Extraction {
        let fixed = fixed();
        Extraction::from_image(&fixed, &fixed, Path::new("-"), 20).unwrap()
    }

    // ============================================================================
    // Mode selection
    // ============================================================================

    #[test]
    fn policies_map_to_modes() {
        let e = extraction();
        assert_eq!(
            modes(ThemePolicy::Both, &e),
            vec![ThemeMode::Dark, ThemeMode::Light]
        );
        assert_eq!(modes(ThemePolicy::Light, &e), vec![ThemeMode::Light]);
        // The mean of the three colors is dark.
        assert_eq!(modes(ThemePolicy::Auto, &e), vec![ThemeMode::Dark]);
    }

    #[test]
    fn system_policy_follows_the_detector() {
        let e = extraction();
        set_mode_detector(|| Some(ThemeMode::Light));
        assert_eq!(modes(ThemePolicy::System, &e), vec![ThemeMode::Light]);
        set_mode_detector(|| None);
        assert_eq!(modes(ThemePolicy::System, &e), vec![ThemeMode::Dark]);
    }

    // ============================================================================
    // Generation and output
    // ============================================================================

    #[test]
    fn opacity_override_applies_to_every_theme() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings(dir.path(), ThemePolicy::Both);
        settings.opacity = Some(0.7);
        let run = generate(&settings).unwrap();
        assert_eq!(run.themes.len(), 2);
        assert!(run.themes.iter().all(|t| t.opacity == 0.7));
        assert!(render_summary(&run, &[]).contains("Blur opacity: dark=0.70, light=0.70"));
    }

    #[test]
    fn both_modes_write_eight_files() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), ThemePolicy::Both);
        let run = generate(&settings).unwrap();
        let written = write_outputs(&run, &settings).unwrap();

        assert_eq!(written.len(), 8);
        for file in &written {
            assert!(file.path.is_file(), "{}", file.path.display());
        }
        assert!(dir.path().join("palette-dark.json").is_file());
        assert!(dir.path().join("readability_report-light.txt").is_file());
        assert!(dir.path().join("palette-blur.json").is_file());

        let summary = render_summary(&run, &written);
        assert!(summary.contains("(contains 'palette Dark' and 'palette Light')"));
        assert!(summary.contains("(contains 'palette Dark Blur' and 'palette Light Blur')"));
    }

    #[test]
    fn single_mode_skips_zed_families() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), ThemePolicy::Dark);
        let run = generate(&settings).unwrap();
        let written = write_outputs(&run, &settings).unwrap();

        assert_eq!(written.len(), 3);
        assert!(!dir.path().join("palette.json").exists());
        assert!(!dir.path().join("palette-light.json").exists());
    }

    #[test]
    fn disabled_outputs_are_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings(dir.path(), ThemePolicy::Both);
        settings.outputs = Outputs {
            html: false,
            zed_blur: false,
            ..Outputs::default()
        };
        let run = generate(&settings).unwrap();
        let written = write_outputs(&run, &settings).unwrap();
        assert_eq!(written.len(), 5);
        assert!(!dir.path().join("palette_preview-dark.html").exists());
        assert!(dir.path().join("palette.json").is_file());
    }

    #[test]
    fn console_output_covers_each_theme() {
        let dir = tempfile::tempdir().unwrap();
        let run = generate(&settings(dir.path(), ThemePolicy::Both)).unwrap();
        let text = run.render_console(Swatches::Off);
        assert!(text.contains("FUNCTIONAL COLOR PALETTE (DARK THEME)"));
        assert!(text.contains("FUNCTIONAL COLOR PALETTE (LIGHT THEME)"));
        assert_eq!(text.matches("READABILITY REPORT").count(), 2);
    }
}
