pub mod builder;

use image::GrayImage;
use crate::{
    algorithms::{
        resize_area, resize_nearest, BorderPreprocessor, BoxReducer, CharacterCropper,
        ImageprocContourExtractor, LocatedCharacter, SignificanceFilter, ThresholdPreprocessor,
    },
    config::EncoderConfig,
    error::{GlyphError, Result},
    types::FeatureVector,
};

/// Turns character images into fixed-length feature vectors
#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    config: EncoderConfig,
    cropper: CharacterCropper,
}

impl FeatureEncoder {
    /// Create a new encoder builder
    pub fn builder() -> builder::EncoderBuilder {
        builder::EncoderBuilder::new()
    }

    /// Create an encoder from a validated configuration
    pub fn new(config: EncoderConfig) -> Result<Self> {
        config.validate()?;

        let cropper = CharacterCropper {
            border: BorderPreprocessor { width: config.border_width, value: 255 },
            threshold: ThresholdPreprocessor { threshold: config.threshold },
            contour_extractor: ImageprocContourExtractor,
            reducer: BoxReducer::new(SignificanceFilter { min_area_ratio: config.min_area_ratio }),
        };

        Ok(Self { config, cropper })
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn grid_size(&self) -> u32 {
        self.config.grid_size
    }

    /// Number of values in each feature vector
    pub fn feature_len(&self) -> usize {
        self.config.feature_len()
    }

    /// Locate the character without cropping
    pub fn locate(&self, image: &GrayImage) -> Result<LocatedCharacter> {
        self.cropper.locate(image)
    }

    /// Crop the image to the character
    pub fn crop(&self, image: &GrayImage) -> Result<GrayImage> {
        self.cropper.crop(image)
    }

    /// Crop to the character and shrink it to the feature grid
    pub fn feature_grid(&self, image: &GrayImage) -> Result<GrayImage> {
        let cropped = self.crop(image)?;
        let grid = resize_area(&cropped, self.config.grid_size, self.config.grid_size)?;
        tracing::debug!(
            crop_width = cropped.width(),
            crop_height = cropped.height(),
            grid_size = self.config.grid_size,
            "reduced character to feature grid"
        );
        Ok(grid)
    }

    /// Extract the flattened feature vector of a character image
    pub fn extract_features(&self, image: &GrayImage) -> Result<FeatureVector> {
        let grid = self.feature_grid(image)?;
        FeatureVector::from_grid(&grid).ok_or_else(|| {
            GlyphError::ImageProcessing(format!(
                "feature grid is {}x{}, expected a square",
                grid.width(),
                grid.height()
            ))
        })
    }

    /// Enlarge the feature grid so each cell shows as a uniform block
    pub fn render_preview(&self, image: &GrayImage) -> Result<GrayImage> {
        let grid = self.feature_grid(image)?;
        resize_nearest(&grid, self.config.preview_size, self.config.preview_size)
    }
}

impl Default for FeatureEncoder {
    fn default() -> Self {
        let config = EncoderConfig::default();
        Self {
            cropper: CharacterCropper::default(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn create_test_image() -> GrayImage {
        let mut img = GrayImage::from_pixel(50, 50, Luma([255u8]));
        for y in 20..30 {
            for x in 20..30 {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }
        img
    }

    #[test]
    fn test_extract_features_length() {
        let image = create_test_image();
        for grid_size in [1, 4, 8, 16, 28] {
            let encoder = FeatureEncoder::builder()
                .grid_size(grid_size)
                .build()
                .expect("Should build encoder");
            let features = encoder.extract_features(&image).expect("Should extract features");
            assert_eq!(features.len(), (grid_size * grid_size) as usize);
            assert_eq!(features.grid_size(), grid_size);
        }
    }

    #[test]
    fn test_extract_features_is_deterministic() {
        let encoder = FeatureEncoder::default();
        let image = create_test_image();

        let first = encoder.extract_features(&image).expect("Should extract features");
        let second = encoder.extract_features(&image).expect("Should extract features");
        assert_eq!(first, second);
    }

    #[test]
    fn test_features_are_dark_for_dark_glyph() {
        let encoder = FeatureEncoder::default();
        let features = encoder
            .extract_features(&create_test_image())
            .expect("Should extract features");
        assert!(features.mean() < 128.0, "mean was {}", features.mean());
    }

    #[test]
    fn test_blank_image_has_no_features() {
        let encoder = FeatureEncoder::default();
        let blank = GrayImage::from_pixel(50, 50, Luma([255u8]));
        assert!(matches!(
            encoder.extract_features(&blank),
            Err(GlyphError::NoContentDetected { .. })
        ));
    }

    #[test]
    fn test_render_preview_size() {
        let encoder = FeatureEncoder::builder()
            .grid_size(4)
            .preview_size(100)
            .build()
            .expect("Should build encoder");

        let preview = encoder.render_preview(&create_test_image()).expect("Should render");
        assert_eq!(preview.dimensions(), (100, 100));

        // Each 25x25 block repeats one grid cell.
        let grid = encoder.feature_grid(&create_test_image()).expect("Should reduce");
        for (x, y, pixel) in preview.enumerate_pixels() {
            assert_eq!(pixel[0], grid.get_pixel(x / 25, y / 25)[0]);
        }
    }

    #[test]
    fn test_encoders_with_different_grids_coexist() {
        let small = FeatureEncoder::builder().grid_size(4).build().expect("Should build");
        let large = FeatureEncoder::builder().grid_size(12).build().expect("Should build");
        let image = create_test_image();

        assert_eq!(small.extract_features(&image).expect("Should extract").len(), 16);
        assert_eq!(large.extract_features(&image).expect("Should extract").len(), 144);
    }
}
