//! Run settings: an optional YAML file merged with command-line flags.
//!
//! The file is read from `--config` when given, otherwise from
//! `./tinct.yaml` if it exists. Every field is optional:
//!
//! ```yaml
//! colors: 12
//! theme: dark          # auto | dark | light | system | both
//! opacity: 0.85        # omit to auto-calculate
//! name: evening
//! outputs:
//!   html: false
//!   zed_blur: false
//! ```
//!
//! Flags win over file values. Contrast thresholds are fixed policy and are
//! not configurable.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::ValueEnum;
use serde::Deserialize;
use tinct_core::opacity::validate_opacity;
use tinct_core::{FixedColors, ThemeMode};
use tracing::debug;

use crate::cli::Cli;

pub const DEFAULT_CONFIG: &str = "tinct.yaml";
pub const DEFAULT_COLORS: usize = 20;
/// Theme name when there is no image file to take it from.
pub const DEFAULT_NAME: &str = "palette";

/// Which theme modes a run generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemePolicy {
    /// Pick from the image's average color.
    Auto,
    Dark,
    Light,
    /// Follow the OS preference, falling back to the image.
    System,
    /// Generate dark and light.
    #[default]
    Both,
}

/// Artifacts to write. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Outputs {
    pub json: bool,
    pub html: bool,
    pub report: bool,
    pub zed: bool,
    pub zed_blur: bool,
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            json: true,
            html: true,
            report: true,
            zed: true,
            zed_blur: true,
        }
    }
}

/// Contents of a config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub colors: usize,
    pub theme: ThemePolicy,
    pub opacity: Option<f64>,
    pub name: Option<String>,
    pub outputs: Outputs,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            theme: ThemePolicy::default(),
            opacity: None,
            name: None,
            outputs: Outputs::default(),
        }
    }
}

impl FileConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Loads `explicit`, or `tinct.yaml` under `dir` when present.
    ///
    /// An explicit path that cannot be read is an error. A missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let fallback = dir.join(DEFAULT_CONFIG);
                if fallback.is_file() {
                    Self::read(&fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Where the input colors come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Image(PathBuf),
    Hex(FixedColors),
}

impl Source {
    pub fn label(&self) -> String {
        match self {
            Source::Image(path) => path.display().to_string(),
            Source::Hex(fixed) => {
                let hex: Vec<String> = fixed.colors().iter().map(|c| c.hex()).collect();
                hex.join(",")
            }
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source: Source,
    pub output_dir: PathBuf,
    pub colors: usize,
    pub theme: ThemePolicy,
    /// Blur opacity override; `None` auto-calculates per theme.
    pub opacity: Option<f64>,
    pub name: String,
    pub outputs: Outputs,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileConfig) -> anyhow::Result<Self> {
        let source = match (&cli.from_hex, &cli.image) {
            (Some(list), _) => Source::Hex(
                FixedColors::parse_list(list).context("invalid --from-hex color list")?,
            ),
            (None, Some(image)) => Source::Image(image.clone()),
            (None, None) => bail!("an image path or --from-hex is required"),
        };

        let colors = cli.colors.unwrap_or(file.colors);
        if colors == 0 {
            bail!("color count must be at least 1");
        }

        let opacity = cli
            .opacity
            .or(file.opacity)
            .map(validate_opacity)
            .transpose()?;

        let name = cli
            .name
            .clone()
            .or(file.name)
            .or_else(|| {
                cli.image
                    .as_deref()
                    .and_then(Path::file_stem)
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let output_dir = cli
            .output_dir
            .clone()
            .or_else(|| {
                cli.image
                    .as_deref()
                    .and_then(Path::parent)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .map(Path::to_path_buf)
            })
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            source,
            output_dir,
            colors,
            theme: cli.theme.unwrap_or(file.theme),
            opacity,
            name,
            outputs: file.outputs,
        })
    }

    /// The mode to force for a single-mode policy.
    pub fn forced_mode(&self) -> Option<ThemeMode> {
        match self.theme {
            ThemePolicy::Dark => Some(ThemeMode::Dark),
            ThemePolicy::Light => Some(ThemeMode::Light),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tinct").chain(args.iter().copied())).unwrap()
    }

    // ============================================================================
    // File config
    // ============================================================================

    #[test]
    fn empty_file_gives_defaults() {
        let config = FileConfig::from_yaml("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.colors, 20);
        assert_eq!(config.theme, ThemePolicy::Both);
        assert!(config.outputs.zed_blur);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = FileConfig::from_yaml("theme: system\noutputs:\n  html: false\n").unwrap();
        assert_eq!(config.theme, ThemePolicy::System);
        assert!(!config.outputs.html);
        assert!(config.outputs.json);
        assert_eq!(config.colors, DEFAULT_COLORS);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(FileConfig::from_yaml("colours: 5\n").is_err());
        assert!(FileConfig::from_yaml("outputs:\n  svg: true\n").is_err());
    }

    #[test]
    fn default_file_is_picked_up_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            FileConfig::load(None, dir.path()).unwrap(),
            FileConfig::default()
        );

        fs::write(dir.path().join(DEFAULT_CONFIG), "colors: 7\n").unwrap();
        assert_eq!(FileConfig::load(None, dir.path()).unwrap().colors, 7);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = FileConfig::load(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("nope.yaml"));
    }

    // ============================================================================
    // Merging
    // ============================================================================

    #[test]
    fn flags_override_file_values() {
        let file = FileConfig {
            colors: 8,
            theme: ThemePolicy::Light,
            opacity: Some(0.5),
            name: Some("from-file".into()),
            ..FileConfig::default()
        };
        let settings = Settings::resolve(
            &cli(&["wall.png", "--colors", "3", "--theme", "dark", "--opacity", "0.9"]),
            file,
        )
        .unwrap();
        assert_eq!(settings.colors, 3);
        assert_eq!(settings.theme, ThemePolicy::Dark);
        assert_eq!(settings.opacity, Some(0.9));
        assert_eq!(settings.name, "from-file");
        assert_eq!(settings.forced_mode(), Some(ThemeMode::Dark));
    }

    #[test]
    fn name_and_output_dir_follow_the_image() {
        let settings =
            Settings::resolve(&cli(&["pics/sunset.jpg"]), FileConfig::default()).unwrap();
        assert_eq!(settings.name, "sunset");
        assert_eq!(settings.output_dir, PathBuf::from("pics"));
        assert_eq!(settings.source, Source::Image(PathBuf::from("pics/sunset.jpg")));

        let bare = Settings::resolve(&cli(&["sunset.jpg", "out"]), FileConfig::default()).unwrap();
        assert_eq!(bare.output_dir, PathBuf::from("out"));

        let here = Settings::resolve(&cli(&["sunset.jpg"]), FileConfig::default()).unwrap();
        assert_eq!(here.output_dir, PathBuf::from("."));
    }

    #[test]
    fn hex_source_needs_no_image() {
        let settings =
            Settings::resolve(&cli(&["--from-hex", "#7098c1, #234223"]), FileConfig::default())
                .unwrap();
        assert_eq!(settings.name, DEFAULT_NAME);
        assert_eq!(settings.source.label(), "#7098c1,#234223");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = FileConfig::default;
        assert!(Settings::resolve(&cli(&["a.png", "--opacity", "1.5"]), file()).is_err());
        assert!(Settings::resolve(&cli(&["a.png", "--colors", "0"]), file()).is_err());
        assert!(Settings::resolve(&cli(&["--from-hex", "#12345"]), file()).is_err());
    }
}
