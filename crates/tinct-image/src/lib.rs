//! Image-backed color sources for `tinct-core`.
//!
//! [`ImageExtractor`] clusters an image's pixels with k-means and returns the
//! centroids. [`ImageAverager`] returns the mean pixel color, which the core
//! uses to pick a theme mode. Both downscale first: the palette only needs
//! the broad strokes.

mod average;
mod error;
mod extract;

use std::path::Path;

use image::RgbImage;

pub use average::ImageAverager;
pub use error::{ImageError, Result};
pub use extract::ImageExtractor;

/// Decodes `path` and shrinks it to fit within `max_dimension` on both axes.
/// Images already small enough are left at their size.
pub fn load_thumbnail(path: &Path, max_dimension: u32) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| ImageError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let img = if img.width() > max_dimension || img.height() > max_dimension {
        img.thumbnail(max_dimension, max_dimension)
    } else {
        img
    };

    let rgb = img.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(ImageError::Empty(path.to_path_buf()));
    }
    Ok(rgb)
}
