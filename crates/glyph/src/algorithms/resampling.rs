use image::{imageops::FilterType, GrayImage, Luma};
use crate::error::{GlyphError, Result};

/// Source pixels covered by one destination pixel along an axis, with the
/// covered fraction of each.
fn axis_coverage(src_len: u32, dst_len: u32) -> Vec<Vec<(u32, f64)>> {
    let scale = src_len as f64 / dst_len as f64;

    (0..dst_len)
        .map(|d| {
            let start = d as f64 * scale;
            let end = ((d + 1) as f64 * scale).min(src_len as f64);
            let first = start.floor() as u32;
            let last = (end.ceil() as u32).min(src_len);

            (first..last)
                .filter_map(|s| {
                    let overlap = end.min(s as f64 + 1.0) - start.max(s as f64);
                    (overlap > 0.0).then_some((s, overlap))
                })
                .collect()
        })
        .collect()
}

fn check_dimensions(image: &GrayImage, width: u32, height: u32) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(GlyphError::ImageProcessing("cannot resample an empty image".to_string()));
    }
    if width == 0 || height == 0 {
        return Err(GlyphError::ImageProcessing(format!(
            "invalid target size {width}x{height}"
        )));
    }
    Ok(())
}

/// Resample using area interpolation.
///
/// Every destination pixel is the mean of the source area its footprint
/// covers, with partially covered source pixels weighted by the covered
/// fraction. Shrinking averages whole blocks, enlarging repeats pixels.
/// Exact halves round to even.
pub fn resize_area(image: &GrayImage, width: u32, height: u32) -> Result<GrayImage> {
    check_dimensions(image, width, height)?;

    let columns = axis_coverage(image.width(), width);
    let rows = axis_coverage(image.height(), height);

    let resized = GrayImage::from_fn(width, height, |dx, dy| {
        let mut sum = 0.0;
        let mut weight = 0.0;
        for &(sy, wy) in &rows[dy as usize] {
            for &(sx, wx) in &columns[dx as usize] {
                let w = wx * wy;
                sum += image.get_pixel(sx, sy)[0] as f64 * w;
                weight += w;
            }
        }
        let value = if weight > 0.0 { sum / weight } else { 0.0 };
        Luma([value.round_ties_even().clamp(0.0, 255.0) as u8])
    });

    Ok(resized)
}

/// Resample with nearest-neighbour interpolation, keeping hard cell edges
pub fn resize_nearest(image: &GrayImage, width: u32, height: u32) -> Result<GrayImage> {
    check_dimensions(image, width, height)?;
    Ok(image::imageops::resize(image, width, height, FilterType::Nearest))
}
