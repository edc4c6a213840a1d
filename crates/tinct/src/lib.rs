//! # Tinct - Wallpaper to Theme
//!
//! The `tinct` command samples an image, derives dark and light palettes with
//! guaranteed text contrast, and writes them out as palette JSON, HTML
//! previews, readability reports and Zed theme families.
//!
//! ```text
//! tinct wallpaper.jpg themes/ --theme both --colors 16
//! tinct --from-hex '#7098c1,#234223' --theme dark
//! ```
//!
//! The pieces are exposed as a library so the run can be driven in tests:
//!
//! - [`cli`]: argument definitions
//! - [`config`]: YAML config and flag merging into [`Settings`](config::Settings)
//! - [`detect`]: OS light/dark preference for the `system` policy
//! - [`run`]: sampling, palette generation and artifact writing
//! - [`logging`]: stderr `tracing` subscriber

pub mod cli;
pub mod config;
pub mod detect;
pub mod logging;
pub mod run;

pub use cli::Cli;
pub use config::{FileConfig, Outputs, Settings, Source, ThemePolicy};
