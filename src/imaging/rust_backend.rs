//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Open (JPEG, PNG, TIFF, WebP, GIF, BMP) | `image::ImageReader` with content-sniffed format |
//! | Dimensions | `DynamicImage::width` / `height` |
//! | Resample | `DynamicImage::resize_exact` with the configured [`Filter`] |
//! | Write | `DynamicImage::save` (format from the output extension) |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::Filter;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Production backend. Stateless; every call works on the image it is given.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    type Image = DynamicImage;

    fn open(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        let reader = ImageReader::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => BackendError::NotFound(path.to_path_buf()),
            _ => BackendError::Io(e),
        })?;
        // Trust the file contents over the extension
        reader
            .with_guessed_format()
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| BackendError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    fn dimensions(&self, image: &DynamicImage) -> Dimensions {
        Dimensions {
            width: image.width(),
            height: image.height(),
        }
    }

    fn resample(&self, image: &DynamicImage, target: Dimensions, filter: Filter) -> DynamicImage {
        image.resize_exact(target.width, target.height, filter.into())
    }

    fn write(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        image.save(path).map_err(|e| BackendError::Encode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
