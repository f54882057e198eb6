use image::GrayImage;
use imageproc::contours::BorderType;
use crate::{
    error::Result,
    traits::ContourExtractor,
    types::{BorderKind, Contour},
};

/// Imageproc-based contour extractor.
///
/// Traces every border of the non-zero regions, outer and hole alike, and
/// returns them as one flat list.
#[derive(Debug, Clone, Default)]
pub struct ImageprocContourExtractor;

impl ContourExtractor for ImageprocContourExtractor {
    fn extract_contours(&self, binary_image: &GrayImage) -> Result<Vec<Contour>> {
        let contours = imageproc::contours::find_contours::<u32>(binary_image);

        let result: Vec<Contour> = contours
            .into_iter()
            .map(|contour| {
                let kind = match contour.border_type {
                    BorderType::Outer => BorderKind::Outer,
                    BorderType::Hole => BorderKind::Hole,
                };
                let points = contour.points.iter().map(|p| [p.x, p.y]).collect();
                Contour::new(points, kind)
            })
            .collect();

        tracing::debug!(count = result.len(), "extracted contours");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundingBox;
    use image::Luma;

    #[test]
    fn test_filled_square_has_outer_contour() {
        let mut image = GrayImage::new(20, 20);
        for y in 5..10 {
            for x in 4..12 {
                image.put_pixel(x, y, Luma([255u8]));
            }
        }

        let contours = ImageprocContourExtractor
            .extract_contours(&image)
            .expect("Should extract contours");

        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].kind, BorderKind::Outer);
        assert_eq!(contours[0].bounding_box(), Some(BoundingBox::new(4, 5, 8, 5)));
    }

    #[test]
    fn test_background_hole_is_reported() {
        // White canvas with a dark square: the canvas is the region, the square its hole.
        let mut image = GrayImage::from_pixel(20, 20, Luma([255u8]));
        for y in 6..12 {
            for x in 6..12 {
                image.put_pixel(x, y, Luma([0u8]));
            }
        }

        let contours = ImageprocContourExtractor
            .extract_contours(&image)
            .expect("Should extract contours");

        // The canvas touches the image edge, so only its hole is traced.
        assert!(contours.iter().all(|c| c.kind == BorderKind::Hole));
        let hole = contours
            .iter()
            .find(|c| c.kind == BorderKind::Hole)
            .expect("Should find the hole");
        let bbox = hole.bounding_box().expect("Hole should have points");
        assert!(bbox.left() <= 6 && bbox.top() <= 6);
        assert!(bbox.right() >= 12 && bbox.bottom() >= 12);
        assert!(bbox.width <= 8 && bbox.height <= 8);
    }
}
