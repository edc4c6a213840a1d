use std::path::Path;

use tinct_core::{AverageColorSampler, Color};
use tracing::debug;

use crate::error::ImageError;
use crate::load_thumbnail;

/// Mean pixel color of a downscaled image, channels truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageAverager {
    pub max_dimension: u32,
}

impl Default for ImageAverager {
    fn default() -> Self {
        Self { max_dimension: 100 }
    }
}

impl ImageAverager {
    pub fn mean(pixels: impl IntoIterator<Item = [u8; 3]>) -> Option<Color> {
        let (mut sum, mut n) = ([0u64; 3], 0u64);
        for px in pixels {
            for (total, channel) in sum.iter_mut().zip(px) {
                *total += channel as u64;
            }
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let [r, g, b] = sum.map(|total| (total / n) as i32);
        Some(Color::from_rgb(r, g, b))
    }
}

impl AverageColorSampler for ImageAverager {
    type Error = ImageError;

    fn average_color(&self, image: &Path) -> Result<Color, ImageError> {
        let thumb = load_thumbnail(image, self.max_dimension)?;
        let average = Self::mean(thumb.pixels().map(|p| p.0))
            .ok_or_else(|| ImageError::Empty(image.to_path_buf()))?;
        debug!(
            image = %image.display(),
            width = thumb.width(),
            height = thumb.height(),
            %average,
            "averaged image"
        );
        Ok(average)
    }
}
