use std::path::Path;

use image::GrayImage;
use crate::{encoder::FeatureEncoder, error::Result, types::FeatureVector};

/// Read an image file and convert it to 8-bit grayscale
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayImage> {
    let image = image::open(path.as_ref())?;
    Ok(image.to_luma8())
}

/// Decode an in-memory PNG or JPEG and convert it to 8-bit grayscale
pub fn decode_grayscale(bytes: &[u8]) -> Result<GrayImage> {
    let image = image::load_from_memory(bytes)?;
    Ok(image.to_luma8())
}

impl FeatureEncoder {
    /// Decode an image file and extract its features
    pub fn extract_features_from_path<P: AsRef<Path>>(&self, path: P) -> Result<FeatureVector> {
        let image = load_grayscale(path)?;
        self.extract_features(&image)
    }

    /// Decode an in-memory image and extract its features
    pub fn extract_features_from_bytes(&self, bytes: &[u8]) -> Result<FeatureVector> {
        let image = decode_grayscale(bytes)?;
        self.extract_features(&image)
    }
}
