use crate::{config::EncoderConfig, encoder::FeatureEncoder, error::Result};

/// Builder for creating feature encoders with a fluent API
#[derive(Debug, Clone, Default)]
pub struct EncoderBuilder {
    config: EncoderConfig,
}

impl EncoderBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Set the side length of the feature grid
    pub fn grid_size(mut self, grid_size: u32) -> Self {
        self.config.grid_size = grid_size;
        self
    }

    /// Set the binarization threshold
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the width of the padding border
    pub fn border_width(mut self, border_width: u32) -> Self {
        self.config.border_width = border_width;
        self
    }

    /// Set the noise cut-off as a fraction of the image area
    pub fn min_area_ratio(mut self, min_area_ratio: f64) -> Self {
        self.config.min_area_ratio = min_area_ratio;
        self
    }

    /// Set the side length of preview images
    pub fn preview_size(mut self, preview_size: u32) -> Self {
        self.config.preview_size = preview_size;
        self
    }

    /// Validate the settings and build the encoder
    pub fn build(self) -> Result<FeatureEncoder> {
        FeatureEncoder::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlyphError;

    #[test]
    fn test_builder_applies_settings() {
        let encoder = EncoderBuilder::new()
            .grid_size(16)
            .threshold(100)
            .border_width(2)
            .min_area_ratio(0.05)
            .preview_size(320)
            .build()
            .expect("Should build encoder");

        let config = encoder.config();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.threshold, 100);
        assert_eq!(config.border_width, 2);
        assert_eq!(config.min_area_ratio, 0.05);
        assert_eq!(config.preview_size, 320);
    }

    #[test]
    fn test_builder_rejects_zero_grid() {
        let result = EncoderBuilder::new().grid_size(0).build();
        assert!(matches!(result, Err(GlyphError::InvalidConfiguration(_))));
    }
}
