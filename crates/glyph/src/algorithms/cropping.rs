use image::GrayImage;
use crate::{
    algorithms::{
        BorderPreprocessor, BoxReducer, ImageprocContourExtractor, SignificanceFilter,
        ThresholdPreprocessor,
    },
    error::{GlyphError, Result},
    traits::{ContourExtractor, ImagePreprocessor},
    types::{BoundingBox, ImageSize},
};

/// A located character: the padded image and the box around the glyph in it
#[derive(Debug, Clone)]
pub struct LocatedCharacter {
    pub padded: GrayImage,
    pub bounds: BoundingBox,
}

impl LocatedCharacter {
    /// Sub-image of the padded image inside the bounds
    pub fn crop(&self) -> Result<GrayImage> {
        let size = ImageSize::of(&self.padded);
        if !self.bounds.fits_within(size) {
            return Err(GlyphError::ImageProcessing(format!(
                "crop {:?} outside {}x{} image",
                self.bounds, size.width, size.height
            )));
        }
        let BoundingBox { x, y, width, height } = self.bounds;
        Ok(image::imageops::crop_imm(&self.padded, x, y, width, height).to_image())
    }
}

/// Crops an image down to the character it contains.
///
/// The image is padded with a white border so that a glyph touching the edge
/// still yields a contour distinct from the image frame, thresholded, traced,
/// and the significant contours are merged into one box.
#[derive(Debug, Clone)]
pub struct CharacterCropper {
    pub border: BorderPreprocessor,
    pub threshold: ThresholdPreprocessor,
    pub contour_extractor: ImageprocContourExtractor,
    pub reducer: BoxReducer<SignificanceFilter>,
}

impl Default for CharacterCropper {
    fn default() -> Self {
        Self {
            border: BorderPreprocessor::default(),
            threshold: ThresholdPreprocessor::default(),
            contour_extractor: ImageprocContourExtractor,
            reducer: BoxReducer::default(),
        }
    }
}

impl CharacterCropper {
    /// Find the character's bounding box, in padded-image coordinates
    pub fn locate(&self, image: &GrayImage) -> Result<LocatedCharacter> {
        let padded = self.border.preprocess(image)?;
        let binary = self.threshold.preprocess(&padded)?;
        let contours = self.contour_extractor.extract_contours(&binary)?;
        let bounds = self.reducer.merge(&contours, ImageSize::of(&padded))?;

        tracing::debug!(?bounds, width = image.width(), height = image.height(), "located character");
        Ok(LocatedCharacter { padded, bounds })
    }

    /// Crop the image to the character
    pub fn crop(&self, image: &GrayImage) -> Result<GrayImage> {
        self.locate(image)?.crop()
    }
}
