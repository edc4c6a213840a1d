//! # Tinct Render - Palette Serializers
//!
//! `tinct-render` turns a finished [`Palette`](tinct_core::Palette) into the
//! artifacts people actually use:
//!
//! - [`export_json`]: flat role to hex mapping with blur metadata
//! - [`render_preview`]: self-contained HTML swatch page
//! - [`export_theme_family`]: Zed theme family, opaque or blurred
//! - [`render_report`]: fixed-width readability report
//! - [`render_listing`]: console listing with optional color swatches
//!
//! Nothing here touches the filesystem. Every function returns a `String`
//! (or a `serde_json::Value`) and the caller decides where it goes.
//!
//! ```rust
//! use tinct_core::{generate_palette, Color, ThemeMode};
//! use tinct_render::export_json;
//!
//! let palette = generate_palette(&[Color::from_rgb(90, 120, 160)], ThemeMode::Dark).unwrap();
//! let json = export_json(&palette, Some(0.9)).unwrap();
//! assert!(json.contains("\"_blur_opacity\""));
//! ```

pub mod error;
pub mod html;
pub mod json;
pub mod listing;
pub mod report;
pub mod util;
pub mod zed;

pub use error::{RenderError, Result};
pub use html::render_preview;
pub use json::{export_json, palette_value};
pub use listing::{render_listing, Swatches};
pub use report::render_report;
pub use zed::{export_theme_family, theme_family, BlurOpacity};
