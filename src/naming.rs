//! Output filename convention for resized images.
//!
//! The resized copy keeps the source stem and extension and records its new
//! size between them:
//!
//! - `photo.jpg` at 300×200 → `photo__300x200.jpg`
//! - `scans/page-01.tiff` at 1240×1754 → `scans/page-01__1240x1754.tiff`
//! - `README` (no extension) at 10×10 → `README__10x10`
//!
//! The file lands in the output directory if one is given, otherwise next to
//! the source.

use crate::imaging::Dimensions;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Build `{stem}__{width}x{height}{.ext}` for a source path.
pub fn resized_file_name(source: &Path, target: Dimensions) -> OsString {
    let mut name = OsString::from(source.file_stem().unwrap_or_default());
    name.push(format!("__{}x{}", target.width, target.height));
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Full path of the resized copy.
pub fn resized_path(source: &Path, target: Dimensions, output_dir: Option<&Path>) -> PathBuf {
    let dir = output_dir
        .or_else(|| source.parent())
        .unwrap_or_else(|| Path::new(""));
    dir.join(resized_file_name(source, target))
}
