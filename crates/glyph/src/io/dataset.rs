use std::{
    fs,
    path::{Path, PathBuf},
};

use image::GrayImage;
use serde::Serialize;
use crate::{
    encoder::FeatureEncoder,
    error::Result,
    io::decode::load_grayscale,
    types::FeatureVector,
};

/// File extensions picked up when walking a dataset
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Whether the path has one of the [`IMAGE_EXTENSIONS`], ignoring case
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

fn collect_images(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_images(&path, found)?;
        } else if is_image_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

/// Recursively list the image files under `root`, sorted by path
pub fn find_images<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect_images(root.as_ref(), &mut found)?;
    found.sort();
    Ok(found)
}

/// Decode every image under `root` and hand it to `f`.
///
/// Files that fail to decode are logged and skipped. Returns the number of
/// images passed to `f`.
pub fn for_each_image<P, F>(root: P, mut f: F) -> Result<usize>
where
    P: AsRef<Path>,
    F: FnMut(&Path, GrayImage),
{
    let mut visited = 0;
    for path in find_images(root)? {
        tracing::info!(path = %path.display(), "reading image");
        match load_grayscale(&path) {
            Ok(image) => {
                f(&path, image);
                visited += 1;
            }
            Err(err) => tracing::warn!(path = %path.display(), %err, "skipping unreadable image"),
        }
    }
    Ok(visited)
}

/// One encoded image
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub path: PathBuf,
    /// Name of the directory holding the image, when it is below the dataset root
    pub label: Option<String>,
    pub features: FeatureVector,
}

/// An image left out of a batch, with the reason
#[derive(Debug, Clone, Serialize)]
pub struct SkippedImage {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of encoding a whole directory
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub samples: Vec<Sample>,
    pub skipped: Vec<SkippedImage>,
}

fn label_for(root: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(root)
        .ok()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
}

/// Encode every image under `root`.
///
/// Images that cannot be decoded or contain no character are recorded in
/// [`BatchReport::skipped`] and the batch carries on.
pub fn encode_directory<P: AsRef<Path>>(encoder: &FeatureEncoder, root: P) -> Result<BatchReport> {
    let root = root.as_ref();
    let mut report = BatchReport::default();

    for path in find_images(root)? {
        let encoded = load_grayscale(&path).and_then(|image| encoder.extract_features(&image));
        match encoded {
            Ok(features) => {
                tracing::debug!(path = %path.display(), "encoded image");
                report.samples.push(Sample {
                    label: label_for(root, &path),
                    path,
                    features,
                });
            }
            Err(err) if err.is_per_image() => {
                tracing::warn!(path = %path.display(), %err, "skipping image");
                report.skipped.push(SkippedImage {
                    path,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        encoded = report.samples.len(),
        skipped = report.skipped.len(),
        root = %root.display(),
        "finished encoding directory"
    );
    Ok(report)
}
