//! Error types for palette rendering.

use thiserror::Error;
use tinct_core::PaletteError;

/// Error type for every serializer in this crate.
///
/// Wraps the template engine's and serde's errors so callers never name them.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template syntax error or render failure.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Data serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while writing an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The palette lacks a role the serializer needs.
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
