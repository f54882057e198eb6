//! Diagnostic renderings for checking what the encoder sees.

use std::path::Path;

use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use imageproc::{drawing::draw_hollow_rect_mut, rect::Rect};
use crate::{
    algorithms::LocatedCharacter,
    error::{GlyphError, Result},
    types::BoundingBox,
};

const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Draw the box onto a colour copy of the image, two pixels thick
pub fn render_bounding_box(image: &GrayImage, bbox: &BoundingBox) -> RgbImage {
    let mut canvas = DynamicImage::ImageLuma8(image.clone()).to_rgb8();
    if bbox.width == 0 || bbox.height == 0 {
        return canvas;
    }

    let (x, y) = (bbox.x as i32, bbox.y as i32);
    draw_hollow_rect_mut(&mut canvas, Rect::at(x, y).of_size(bbox.width, bbox.height), BOX_COLOR);
    draw_hollow_rect_mut(
        &mut canvas,
        Rect::at(x - 1, y - 1).of_size(bbox.width + 2, bbox.height + 2),
        BOX_COLOR,
    );
    canvas
}

/// Render the padded image with the located bounds drawn on it
pub fn render_located(located: &LocatedCharacter) -> RgbImage {
    render_bounding_box(&located.padded, &located.bounds)
}

/// Write a diagnostic image; the format follows the file extension
pub fn save_debug_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    image.save(path.as_ref()).map_err(GlyphError::Encode)?;
    tracing::info!(path = %path.as_ref().display(), "saved debug image");
    Ok(())
}
