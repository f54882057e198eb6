use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use crate::{
    algorithms::{DEFAULT_MIN_AREA_RATIO, DEFAULT_THRESHOLD},
    error::{GlyphError, Result},
};

pub const DEFAULT_GRID_SIZE: u32 = 8;
pub const DEFAULT_PREVIEW_SIZE: u32 = 500;
pub const DEFAULT_BORDER_WIDTH: u32 = 1;

/// Settings for a [`FeatureEncoder`](crate::FeatureEncoder).
///
/// Changing `grid_size` changes the feature vector length, so models trained
/// on vectors of one size cannot consume vectors of another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EncoderConfig {
    /// Side length of the feature grid; vectors hold `grid_size * grid_size` values
    #[schemars(range(min = 1))]
    pub grid_size: u32,
    /// Binarization threshold used to find the character (values above are background)
    pub threshold: u8,
    /// Width of the white border added before contour detection
    #[schemars(range(min = 1))]
    pub border_width: u32,
    /// Boxes whose area is at most this fraction of the image are treated as noise
    #[schemars(range(min = 0.0, max = 1.0))]
    pub min_area_ratio: f64,
    /// Side length of the enlarged preview image
    #[schemars(range(min = 1))]
    pub preview_size: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            threshold: DEFAULT_THRESHOLD,
            border_width: DEFAULT_BORDER_WIDTH,
            min_area_ratio: DEFAULT_MIN_AREA_RATIO,
            preview_size: DEFAULT_PREVIEW_SIZE,
        }
    }
}

impl EncoderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(GlyphError::InvalidConfiguration(
                "grid_size must be at least 1".to_string(),
            ));
        }
        if self.border_width == 0 {
            return Err(GlyphError::InvalidConfiguration(
                "border_width must be at least 1".to_string(),
            ));
        }
        if self.preview_size == 0 {
            return Err(GlyphError::InvalidConfiguration(
                "preview_size must be at least 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.min_area_ratio) {
            return Err(GlyphError::InvalidConfiguration(format!(
                "min_area_ratio must be in [0, 1), got {}",
                self.min_area_ratio
            )));
        }
        Ok(())
    }

    /// Number of values in each feature vector
    pub fn feature_len(&self) -> usize {
        self.grid_size as usize * self.grid_size as usize
    }

    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(EncoderConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EncoderConfig::default();
        config.validate().expect("Default config should be valid");
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.feature_len(), 64);
        assert_eq!(config.threshold, 127);
    }

    #[test]
    fn test_zero_grid_size_is_rejected() {
        let config = EncoderConfig { grid_size: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(GlyphError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_bad_ratio_is_rejected() {
        for ratio in [-0.1, 1.0, f64::NAN] {
            let config = EncoderConfig { min_area_ratio: ratio, ..Default::default() };
            assert!(config.validate().is_err(), "ratio {ratio} should be rejected");
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EncoderConfig =
            serde_json::from_str(r#"{ "grid_size": 16 }"#).expect("Should parse");
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.preview_size, DEFAULT_PREVIEW_SIZE);
    }

    #[test]
    fn test_fractional_grid_size_fails_to_parse() {
        let result: std::result::Result<EncoderConfig, _> =
            serde_json::from_str(r#"{ "grid_size": 8.5 }"#);
        assert!(result.is_err());
    }
}
