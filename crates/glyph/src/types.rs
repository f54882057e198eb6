use image::{GrayImage, Luma};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Width and height of the image a contour was detected in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &GrayImage) -> Self {
        Self::new(image.width(), image.height())
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Axis-aligned rectangle in pixel coordinates.
///
/// `right()` and `bottom()` are exclusive edges, so a box at `x = 2` with
/// `width = 10` covers columns `2..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest box enclosing every point, counting each point as a whole pixel.
    ///
    /// Returns `None` for an empty point set.
    pub fn from_points(points: &[[u32; 2]]) -> Option<Self> {
        let (&[first_x, first_y], rest) = points.split_first()?;

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first_x, first_y, first_x, first_y);
        for &[x, y] in rest {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        Some(Self::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    pub fn left(&self) -> u32 {
        self.x
    }

    pub fn top(&self) -> u32 {
        self.y
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Smallest box containing both `self` and `other`
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(left, top, right - left, bottom - top)
    }

    /// Whether the box lies entirely inside an image of the given size
    pub fn fits_within(&self, size: ImageSize) -> bool {
        self.right() <= size.width && self.bottom() <= size.height
    }
}

/// Which side of a connected region a contour traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BorderKind {
    /// Boundary between a foreground region and the background around it
    Outer,
    /// Boundary of a background hole enclosed by a foreground region
    Hole,
}

/// A traced boundary curve, opaque apart from its points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<[u32; 2]>,
    pub kind: BorderKind,
}

impl Contour {
    pub fn new(points: Vec<[u32; 2]>, kind: BorderKind) -> Self {
        Self { points, kind }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }
}

/// Flattened `grid_size x grid_size` intensity grid in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureVector {
    grid_size: u32,
    values: Vec<u8>,
}

impl FeatureVector {
    /// Flatten a square grid image. Returns `None` if the grid is not square.
    pub fn from_grid(grid: &GrayImage) -> Option<Self> {
        if grid.width() != grid.height() {
            return None;
        }
        Some(Self {
            grid_size: grid.width(),
            values: grid.as_raw().clone(),
        })
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.values
    }

    /// Mean intensity over all cells
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.values.iter().map(|&v| v as u64).sum();
        sum as f64 / self.values.len() as f64
    }

    /// Rebuild the grid as an image
    pub fn to_image(&self) -> GrayImage {
        let size = self.grid_size;
        GrayImage::from_fn(size, size, |x, y| {
            Luma([self.values[(y * size + x) as usize]])
        })
    }
}
