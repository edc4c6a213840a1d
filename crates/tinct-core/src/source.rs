//! Where extracted colors come from.
//!
//! The core never touches image files. It asks a [`ColorExtractor`] for
//! representative colors and an [`AverageColorSampler`] for the overall tone
//! used to pick the theme mode. `tinct-image` implements both on top of real
//! image decoding; [`FixedColors`] implements both over a list the caller
//! already has.

use std::convert::Infallible;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::color::Color;
use crate::error::PaletteError;
use crate::mode::ThemeMode;
use crate::palette::generator::generate_palette;
use crate::palette::Palette;

/// Produces up to `count` representative colors for an image.
///
/// `count` is a hint. Order does not matter to the pipeline beyond breaking
/// ties between equally good candidates.
pub trait ColorExtractor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn extract(&self, image: &Path, count: usize) -> Result<Vec<Color>, Self::Error>;
}

/// Produces the average color of an image.
pub trait AverageColorSampler {
    type Error: std::error::Error + Send + Sync + 'static;

    fn average_color(&self, image: &Path) -> Result<Color, Self::Error>;
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to obtain colors from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("color extraction failed")]
    Extract(#[source] BoxError),

    #[error("average color sampling failed")]
    Average(#[source] BoxError),

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// The extracted colors and average tone of one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub colors: Vec<Color>,
    pub average: Color,
}

impl Extraction {
    /// Samples an image through the given collaborators.
    pub fn from_image<E, A>(
        extractor: &E,
        sampler: &A,
        image: &Path,
        count: usize,
    ) -> Result<Self, SourceError>
    where
        E: ColorExtractor,
        A: AverageColorSampler,
    {
        let colors = extractor
            .extract(image, count)
            .map_err(|e| SourceError::Extract(Box::new(e)))?;
        if colors.is_empty() {
            return Err(PaletteError::NoColors.into());
        }
        let average = sampler
            .average_color(image)
            .map_err(|e| SourceError::Average(Box::new(e)))?;

        debug!(
            image = %image.display(),
            requested = count,
            extracted = colors.len(),
            average = %average,
            "sampled image"
        );
        Ok(Self { colors, average })
    }

    /// Theme mode for this image, unless one is forced.
    pub fn mode(&self, forced: Option<ThemeMode>) -> ThemeMode {
        ThemeMode::decide(forced, &self.average)
    }

    pub fn palette(&self, mode: ThemeMode) -> Result<Palette, PaletteError> {
        generate_palette(&self.colors, mode)
    }
}

/// A source over colors the caller already has.
///
/// The image path is ignored. The average is the per-channel mean of the
/// colors, truncated.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedColors {
    colors: Vec<Color>,
}

impl FixedColors {
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::NoColors);
        }
        Ok(Self { colors })
    }

    /// Parses a comma-separated list of hex colors.
    pub fn parse_list(list: &str) -> Result<Self, PaletteError> {
        let colors = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Color::parse_hex)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn mean(&self) -> Color {
        let n = self.colors.len() as u32;
        let (r, g, b) = self.colors.iter().fold((0u32, 0u32, 0u32), |(r, g, b), c| {
            let rgb = c.rgb();
            (r + rgb.0 as u32, g + rgb.1 as u32, b + rgb.2 as u32)
        });
        Color::from_rgb((r / n) as i32, (g / n) as i32, (b / n) as i32)
    }
}

impl ColorExtractor for FixedColors {
    type Error = Infallible;

    fn extract(&self, _image: &Path, count: usize) -> Result<Vec<Color>, Self::Error> {
        Ok(self.colors.iter().take(count.max(1)).copied().collect())
    }
}

impl AverageColorSampler for FixedColors {
    type Error = Infallible;

    fn average_color(&self, _image: &Path) -> Result<Color, Self::Error> {
        Ok(self.mean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[test]
    fn fixed_colors_reject_empty() {
        assert_eq!(FixedColors::new(vec![]), Err(PaletteError::NoColors));
        assert_eq!(FixedColors::parse_list(" , "), Err(PaletteError::NoColors));
    }

    #[test]
    fn parse_list_reads_hex() {
        let fixed = FixedColors::parse_list("#7098c1, 191919,#234223").unwrap();
        assert_eq!(fixed.colors().len(), 3);
        assert_eq!(fixed.colors()[1].hex(), "#191919");
        assert!(matches!(
            FixedColors::parse_list("#7098c1,#zz0000"),
            Err(PaletteError::InvalidHex(_))
        ));
    }

    #[test]
    fn mean_truncates() {
        let fixed = FixedColors::new(vec![Color::from_rgb(0, 0, 0), Color::from_rgb(255, 3, 10)]).unwrap();
        assert_eq!(fixed.mean().hex(), Color::from_rgb(127, 1, 5).hex());
    }

    #[test]
    fn extraction_decides_mode_from_average() {
        let fixed = FixedColors::parse_list("#101010,#202020").unwrap();
        let extraction = Extraction::from_image(&fixed, &fixed, Path::new("unused"), 20).unwrap();
        assert_eq!(extraction.mode(None), ThemeMode::Dark);
        assert_eq!(extraction.mode(Some(ThemeMode::Light)), ThemeMode::Light);
        assert!(extraction.palette(ThemeMode::Dark).unwrap().is_complete());
    }

    #[derive(Debug)]
    struct Unreadable;

    impl fmt::Display for Unreadable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("unreadable image")
        }
    }

    impl std::error::Error for Unreadable {}

    struct Broken;

    impl ColorExtractor for Broken {
        type Error = Unreadable;

        fn extract(&self, _image: &Path, _count: usize) -> Result<Vec<Color>, Unreadable> {
            Err(Unreadable)
        }
    }

    struct Empty;

    impl ColorExtractor for Empty {
        type Error = Infallible;

        fn extract(&self, _image: &Path, _count: usize) -> Result<Vec<Color>, Infallible> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn extractor_failures_surface() {
        let fixed = FixedColors::parse_list("#101010").unwrap();
        let err = Extraction::from_image(&Broken, &fixed, Path::new("x.png"), 5).unwrap_err();
        assert!(matches!(err, SourceError::Extract(_)));
        assert_eq!(
            std::error::Error::source(&err).map(|e| e.to_string()),
            Some("unreadable image".to_string())
        );

        let err = Extraction::from_image(&Empty, &fixed, Path::new("x.png"), 5).unwrap_err();
        assert!(matches!(err, SourceError::Palette(PaletteError::NoColors)));
    }
}
