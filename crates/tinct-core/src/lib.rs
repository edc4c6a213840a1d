//! # Tinct Core - Readable Palettes From Extracted Colors
//!
//! `tinct-core` turns a handful of colors pulled from an image into a complete
//! UI palette: backgrounds, text, accents, borders, semantic colors and the 24
//! ANSI terminal slots. Every text-bearing role is repaired until it clears a
//! WCAG contrast ratio against both the main and the lighter background.
//!
//! The crate does no file I/O. Colors come in through the [`ColorExtractor`]
//! and [`AverageColorSampler`] traits (see `tinct-image` for the image-backed
//! implementations) or directly as a slice.
//!
//! ## Core Concepts
//!
//! - [`Color`]: Immutable sRGB color with cached HSL and relative luminance
//! - [`ThemeMode`]: Dark or light, fixed for one generation run
//! - [`Role`]: One of the fixed palette slots, in generation order
//! - [`Palette`]: Role to color mapping produced by [`generate_palette`]
//! - [`ReadabilityReport`]: Where contrast shortfalls show up
//! - [`OpacityLayers`]: Per-surface alpha values for translucent themes
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct_core::{generate_palette, Color, Role, ThemeMode};
//! use tinct_core::contrast::min_contrast;
//!
//! let extracted = [
//!     Color::from_hsl(210.0, 40.0, 60.0),
//!     Color::from_hsl(0.0, 0.0, 10.0),
//!     Color::from_hsl(120.0, 30.0, 20.0),
//! ];
//! let palette = generate_palette(&extracted, ThemeMode::Dark).unwrap();
//!
//! let ratio = min_contrast(
//!     &palette[Role::Foreground],
//!     &palette[Role::Background],
//!     &palette[Role::BackgroundLight],
//! );
//! assert!(ratio >= 5.0);
//! ```
//!
//! ## Translucency
//!
//! ```rust
//! use tinct_core::{generate_palette, opacity, Color, ThemeMode};
//!
//! let palette = generate_palette(&[Color::from_rgb(40, 60, 90)], ThemeMode::Dark).unwrap();
//! let safe = opacity::calculate_theme_opacity(&palette, ThemeMode::Dark).unwrap();
//! let layers = opacity::calculate_layered_opacities(safe);
//! assert!((layers.composite() - safe).abs() < 1e-9);
//! ```

pub mod color;
pub mod contrast;
pub mod error;
pub mod mode;
pub mod opacity;
pub mod overrides;
pub mod palette;
pub mod policy;
pub mod report;
pub mod role;
pub mod source;

pub use color::{AccentTolerance, Color, Hsl, Rgb};
pub use error::{PaletteError, Result};
pub use mode::ThemeMode;
pub use opacity::OpacityLayers;
pub use overrides::EditablePalette;
pub use palette::generator::generate_palette;
pub use palette::Palette;
pub use report::{contrast_table, ReadabilityReport};
pub use role::{Ansi, AnsiVariant, Role, RoleFamily};
pub use source::{AverageColorSampler, ColorExtractor, Extraction, FixedColors, SourceError};
