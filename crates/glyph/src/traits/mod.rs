use image::GrayImage;
use crate::{
    error::Result,
    types::{BoundingBox, Contour, ImageSize},
};

/// Trait for image preprocessing steps (padding, thresholding)
pub trait ImagePreprocessor: Send + Sync {
    /// Produce a new image from the input
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Extract contours from a binary image
    fn extract_contours(&self, image: &GrayImage) -> Result<Vec<Contour>>;
}

/// Trait for deciding whether a candidate box is character content
pub trait BoxFilter: Send + Sync {
    /// `true` if the box should take part in the merged bounding box
    fn is_significant(&self, bbox: &BoundingBox, image_size: ImageSize) -> bool;
}
