//! Error types for image sampling.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    /// The file could not be opened or decoded.
    #[error("failed to load image {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The image decoded to zero pixels.
    #[error("image {} has no pixels", .0.display())]
    Empty(PathBuf),
}

pub type Result<T> = std::result::Result<T, ImageError>;
