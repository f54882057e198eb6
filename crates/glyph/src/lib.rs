//! # Glyph Feature Extraction Library
//!
//! Turns an image of a single handwritten or printed character into a
//! fixed-length feature vector for a classifier.
//!
//! ## Core Features
//!
//! - **Character Location**: threshold, trace contours, and merge the significant ones into one box
//! - **Area Downsampling**: shrink the cropped glyph to a small square grid
//! - **Explicit Configuration**: grid size and thresholds live in an [`EncoderConfig`], not globals
//! - **Dataset Helpers**: walk a directory of images, encode them, export as JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glyph::FeatureEncoder;
//!
//! let encoder = FeatureEncoder::builder()
//!     .grid_size(8)
//!     .build()?;
//!
//! let image = image::open("letter.png")?.to_luma8();
//! let features = encoder.extract_features(&image)?;
//! assert_eq!(features.len(), 64);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Reducing Contours by Hand
//!
//! ```rust
//! use glyph::{BoundingBox, BoxReducer, ImageSize};
//!
//! let reducer = BoxReducer::default();
//! let merged = reducer.merge_boxes(
//!     [BoundingBox::new(2, 3, 10, 10), BoundingBox::new(15, 3, 5, 5)],
//!     ImageSize::new(40, 40),
//! )?;
//! assert_eq!(merged, BoundingBox::new(2, 3, 18, 10));
//! # Ok::<(), glyph::GlyphError>(())
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod config;
pub mod encoder;
pub mod io;
pub mod debug;

// Re-exports for convenience
pub use error::{GlyphError, Result};
pub use types::{BorderKind, BoundingBox, Contour, FeatureVector, ImageSize};
pub use traits::*;
pub use algorithms::*;
pub use config::EncoderConfig;
pub use encoder::{FeatureEncoder, builder::EncoderBuilder};
pub use io::*;
