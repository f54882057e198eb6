use image::{GrayImage, Luma};
use crate::{error::{GlyphError, Result}, traits::ImagePreprocessor};

/// Default binarization threshold: values above it become foreground (255)
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Pads the image with a solid border on all four sides
#[derive(Debug, Clone)]
pub struct BorderPreprocessor {
    pub width: u32,
    pub value: u8,
}

impl Default for BorderPreprocessor {
    fn default() -> Self {
        Self { width: 1, value: 255 }
    }
}

impl ImagePreprocessor for BorderPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        let padding = self.width.checked_mul(2).ok_or_else(|| {
            GlyphError::ImageProcessing(format!("border width {} overflows", self.width))
        })?;
        let width = image.width().checked_add(padding);
        let height = image.height().checked_add(padding);
        let (Some(width), Some(height)) = (width, height) else {
            return Err(GlyphError::ImageProcessing(format!(
                "padded size of {}x{} image overflows",
                image.width(),
                image.height()
            )));
        };

        let mut padded = GrayImage::from_pixel(width, height, Luma([self.value]));
        image::imageops::replace(&mut padded, image, self.width as i64, self.width as i64);
        Ok(padded)
    }
}

/// Standard binary threshold
#[derive(Debug, Clone)]
pub struct ThresholdPreprocessor {
    pub threshold: u8,
}

impl Default for ThresholdPreprocessor {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }
}

impl ImagePreprocessor for ThresholdPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        Ok(imageproc::contrast::threshold(image, self.threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_pads_every_side() {
        let image = GrayImage::from_pixel(3, 2, Luma([0u8]));
        let padded = BorderPreprocessor::default()
            .preprocess(&image)
            .expect("Should pad image");

        assert_eq!(padded.dimensions(), (5, 4));
        for (x, y, pixel) in padded.enumerate_pixels() {
            let inside = (1..4).contains(&x) && (1..3).contains(&y);
            let expected = if inside { 0 } else { 255 };
            assert_eq!(pixel[0], expected, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let image = GrayImage::from_fn(3, 1, |x, _| Luma([[126u8, 127, 128][x as usize]]));
        let binary = ThresholdPreprocessor::default()
            .preprocess(&image)
            .expect("Should threshold image");

        assert_eq!(binary.as_raw(), &vec![0, 0, 255]);
    }
}
