use std::collections::HashSet;
use std::path::Path;

use kmeans_colors::get_kmeans;
use palette::Srgb;
use tinct_core::{Color, ColorExtractor};
use tracing::debug;

use crate::error::ImageError;
use crate::load_thumbnail;

/// Channel sums at or below this are treated as near-black and skipped.
const DARK_CUTOFF: u32 = 30;
/// Channel sums at or above this are treated as near-white and skipped.
const LIGHT_CUTOFF: u32 = 735;
const CONVERGENCE: f32 = 1e-4;
/// Cluster labels are stored as `u8`.
const MAX_CLUSTERS: usize = 256;

/// Dominant colors by k-means over sRGB pixels.
///
/// The clustering runs `runs` times with consecutive seeds starting at
/// `seed` and keeps the tightest result, so the same image always yields
/// the same colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageExtractor {
    pub max_dimension: u32,
    pub max_iterations: usize,
    pub runs: u64,
    pub seed: u64,
}

impl Default for ImageExtractor {
    fn default() -> Self {
        Self {
            max_dimension: 300,
            max_iterations: 20,
            runs: 10,
            seed: 42,
        }
    }
}

impl ImageExtractor {
    /// Clusters raw pixels into at most `count` colors.
    ///
    /// Near-black and near-white pixels are dropped first unless that leaves
    /// fewer than `count` of them. Never asks for more clusters than there
    /// are distinct pixel values.
    pub fn cluster(&self, pixels: &[[u8; 3]], count: usize) -> Vec<Color> {
        let mid_tones: Vec<[u8; 3]> = pixels
            .iter()
            .copied()
            .filter(|px| {
                let sum: u32 = px.iter().map(|&c| c as u32).sum();
                sum > DARK_CUTOFF && sum < LIGHT_CUTOFF
            })
            .collect();
        let sample: &[[u8; 3]] = if mid_tones.len() < count {
            pixels
        } else {
            &mid_tones
        };

        let buf: Vec<Srgb<f32>> = sample
            .iter()
            .map(|&[r, g, b]| Srgb::new(r, g, b).into_format())
            .collect();
        let distinct = sample.iter().collect::<HashSet<_>>().len();
        let k = count.min(distinct).min(MAX_CLUSTERS);
        if k == 0 {
            return Vec::new();
        }

        let best = (0..self.runs.max(1))
            .map(|run| {
                get_kmeans(
                    k,
                    self.max_iterations,
                    CONVERGENCE,
                    false,
                    &buf,
                    self.seed + run,
                )
            })
            .min_by(|a, b| a.score.total_cmp(&b.score));

        debug!(
            pixels = pixels.len(),
            clustered = buf.len(),
            k,
            score = best.as_ref().map(|b| b.score),
            "k-means complete"
        );

        best.map(|result| {
            result
                .centroids
                .iter()
                .map(|c| {
                    Color::from_rgb(
                        (c.red * 255.0) as i32,
                        (c.green * 255.0) as i32,
                        (c.blue * 255.0) as i32,
                    )
                })
                .collect()
        })
        .unwrap_or_default()
    }
}

impl ColorExtractor for ImageExtractor {
    type Error = ImageError;

    fn extract(&self, image: &Path, count: usize) -> Result<Vec<Color>, ImageError> {
        let thumb = load_thumbnail(image, self.max_dimension)?;
        let pixels: Vec<[u8; 3]> = thumb.pixels().map(|p| p.0).collect();
        let colors = self.cluster(&pixels, count);
        if colors.is_empty() {
            return Err(ImageError::Empty(image.to_path_buf()));
        }
        Ok(colors)
    }
}
