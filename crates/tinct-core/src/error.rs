//! Error types for palette derivation.

use thiserror::Error;

use crate::role::Role;

/// Errors raised by the palette core.
///
/// Contrast repairs never fail: a search that runs out of range returns its
/// best color and the shortfall shows up in the
/// [`ReadabilityReport`](crate::ReadabilityReport) instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// A hex color string could not be parsed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// The extractor produced no colors to derive a palette from.
    #[error("no colors to derive a palette from")]
    NoColors,

    /// A consumer asked for a role the palette does not hold.
    #[error("palette is missing role '{0}'")]
    MissingRole(Role),

    /// A role name did not match any known role.
    #[error("unknown role '{0}'")]
    UnknownRole(String),

    /// An opacity outside `[0, 1]` was supplied.
    #[error("opacity must be within 0.0..=1.0, got {0}")]
    InvalidOpacity(f64),
}

/// Result type for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
