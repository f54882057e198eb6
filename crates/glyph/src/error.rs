use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Encode(image::ImageError),

    #[error("No character content detected in {width}x{height} image")]
    NoContentDetected { width: u32, height: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GlyphError {
    /// Errors that only affect a single image; batch callers skip these and continue.
    pub fn is_per_image(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::NoContentDetected { .. })
    }
}

pub type Result<T> = std::result::Result<T, GlyphError>;
