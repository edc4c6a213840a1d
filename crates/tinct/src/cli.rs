use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::ThemePolicy;

/// Generate readable UI palettes and Zed themes from an image.
#[derive(Debug, Clone, Parser)]
#[command(name = "tinct", version, about)]
pub struct Cli {
    /// Path to the source image
    #[arg(value_name = "IMAGE", required_unless_present = "from_hex")]
    pub image: Option<PathBuf>,

    /// Output directory (default: same as image)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Override blur theme opacity (0.0-1.0). Auto-calculated when unset.
    #[arg(long, value_name = "F")]
    pub opacity: Option<f64>,

    /// Theme modes to generate
    #[arg(long, value_enum, value_name = "MODE")]
    pub theme: Option<ThemePolicy>,

    /// Number of colors to extract from the image
    #[arg(long, value_name = "N")]
    pub colors: Option<usize>,

    /// Theme family name (default: image file name)
    #[arg(long)]
    pub name: Option<String>,

    /// Config file (default: ./tinct.yaml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use these comma-separated hex colors instead of decoding the image.
    /// IMAGE, when given, only names the theme and the output location.
    #[arg(long, value_name = "HEX,...")]
    pub from_hex: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
