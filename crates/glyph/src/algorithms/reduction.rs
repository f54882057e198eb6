//! Reduces the contours found in an image to one bounding box around the character.
//!
//! A glyph is often traced as several disjoint contours (the dot and stem of
//! an "i", strokes split by anti-aliasing), so the significant boxes are
//! unioned. Boxes spanning the whole image are the image border, and boxes
//! covering at most 1% of the image are specks.

use crate::{
    error::{GlyphError, Result},
    traits::BoxFilter,
    types::{BoundingBox, Contour, ImageSize},
};

/// Fraction of the image area at or below which a box counts as noise
pub const DEFAULT_MIN_AREA_RATIO: f64 = 0.01;

/// Rejects image-spanning boxes and boxes no larger than a fraction of the image
#[derive(Debug, Clone)]
pub struct SignificanceFilter {
    pub min_area_ratio: f64,
}

impl Default for SignificanceFilter {
    fn default() -> Self {
        Self { min_area_ratio: DEFAULT_MIN_AREA_RATIO }
    }
}

impl BoxFilter for SignificanceFilter {
    fn is_significant(&self, bbox: &BoundingBox, image_size: ImageSize) -> bool {
        if bbox.width == image_size.width && bbox.height == image_size.height {
            return false;
        }
        // Boundary case is noise: area exactly at the threshold is rejected.
        bbox.area() as f64 > image_size.area() as f64 * self.min_area_ratio
    }
}

/// Filters candidate boxes and folds the survivors into one enclosing box
#[derive(Debug, Clone)]
pub struct BoxReducer<F: BoxFilter> {
    pub filter: F,
}

impl Default for BoxReducer<SignificanceFilter> {
    fn default() -> Self {
        Self::new(SignificanceFilter::default())
    }
}

impl<F: BoxFilter> BoxReducer<F> {
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Whether a single box is character content
    pub fn classify(&self, bbox: &BoundingBox, image_size: ImageSize) -> bool {
        self.filter.is_significant(bbox, image_size)
    }

    /// Merge the bounding boxes of all significant contours.
    ///
    /// Contours without points are ignored.
    pub fn merge(&self, contours: &[Contour], image_size: ImageSize) -> Result<BoundingBox> {
        self.merge_boxes(contours.iter().filter_map(Contour::bounding_box), image_size)
    }

    /// Merge pre-computed candidate boxes
    pub fn merge_boxes<I>(&self, boxes: I, image_size: ImageSize) -> Result<BoundingBox>
    where
        I: IntoIterator<Item = BoundingBox>,
    {
        let mut candidates = 0usize;
        let mut accepted = 0usize;
        let merged = boxes
            .into_iter()
            .inspect(|_| candidates += 1)
            .filter(|bbox| self.classify(bbox, image_size))
            .inspect(|_| accepted += 1)
            .reduce(|acc, bbox| acc.union(&bbox));

        tracing::debug!(candidates, accepted, ?merged, "reduced contour boxes");

        let no_content = GlyphError::NoContentDetected {
            width: image_size.width,
            height: image_size.height,
        };
        match merged {
            // Pieces that together span the whole frame are the border, not a glyph.
            Some(bbox) if bbox == BoundingBox::new(0, 0, image_size.width, image_size.height) => {
                Err(no_content)
            }
            Some(bbox) => Ok(bbox),
            None => Err(no_content),
        }
    }
}
