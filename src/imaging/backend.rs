//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the four operations the resize pipeline
//! needs from an image codec: open, dimensions, resample, and write.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` in this module, which never
//! touches the filesystem.

use super::params::Filter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{}: file not found", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("Failed to encode {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Pixel extents of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for image processing backends.
///
/// A backend hands out its own decoded image type; the pipeline only moves
/// it between calls and never looks inside.
pub trait ImageBackend {
    type Image;

    /// Open and decode an image file.
    fn open(&self, path: &Path) -> Result<Self::Image, BackendError>;

    /// Pixel extents of a decoded image.
    fn dimensions(&self, image: &Self::Image) -> Dimensions;

    /// Resample to exactly `target`, ignoring the source aspect ratio.
    fn resample(&self, image: &Self::Image, target: Dimensions, filter: Filter) -> Self::Image;

    /// Encode and write an image; the format follows the path's extension.
    fn write(&self, image: &Self::Image, path: &Path) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    #[derive(Default)]
    pub struct MockBackend {
        /// Dimensions reported by `open`; `None` makes `open` fail.
        pub source: Option<Dimensions>,
        /// When set, `write` fails.
        pub fail_write: bool,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    /// Stand-in for a decoded image.
    #[derive(Debug, Clone, PartialEq)]
    pub struct MockImage {
        pub dims: Dimensions,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Open(String),
        Resample {
            width: u32,
            height: u32,
            filter: Filter,
        },
        Write {
            path: String,
            width: u32,
            height: u32,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(width: u32, height: u32) -> Self {
            Self {
                source: Some(Dimensions { width, height }),
                ..Self::default()
            }
        }

        pub fn failing_write(mut self) -> Self {
            self.fail_write = true;
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        type Image = MockImage;

        fn open(&self, path: &Path) -> Result<MockImage, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Open(path.to_string_lossy().to_string()));

            self.source
                .map(|dims| MockImage { dims })
                .ok_or_else(|| BackendError::NotFound(path.to_path_buf()))
        }

        fn dimensions(&self, image: &MockImage) -> Dimensions {
            image.dims
        }

        fn resample(&self, _image: &MockImage, target: Dimensions, filter: Filter) -> MockImage {
            self.operations.lock().unwrap().push(RecordedOp::Resample {
                width: target.width,
                height: target.height,
                filter,
            });
            MockImage { dims: target }
        }

        fn write(&self, image: &MockImage, path: &Path) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Write {
                path: path.to_string_lossy().to_string(),
                width: image.dims.width,
                height: image.dims.height,
            });
            if self.fail_write {
                return Err(BackendError::Encode {
                    path: path.to_path_buf(),
                    reason: "mock write failure".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn mock_records_open() {
        let backend = MockBackend::with_dimensions(800, 600);

        let image = backend.open(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(
            backend.dimensions(&image),
            Dimensions {
                width: 800,
                height: 600
            }
        );

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Open(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_without_source_fails_open() {
        let backend = MockBackend::new();
        let result = backend.open(Path::new("/missing.png"));
        assert!(matches!(result, Err(BackendError::NotFound(_))));
    }

    #[test]
    fn mock_resample_then_write() {
        let backend = MockBackend::with_dimensions(400, 300);
        let image = backend.open(Path::new("/a.png")).unwrap();
        let resized = backend.resample(
            &image,
            Dimensions {
                width: 200,
                height: 150,
            },
            Filter::Nearest,
        );
        backend.write(&resized, Path::new("/a__200x150.png")).unwrap();

        let ops = backend.get_operations();
        assert_eq!(
            ops[1..],
            [
                RecordedOp::Resample {
                    width: 200,
                    height: 150,
                    filter: Filter::Nearest,
                },
                RecordedOp::Write {
                    path: "/a__200x150.png".to_string(),
                    width: 200,
                    height: 150,
                },
            ]
        );
    }

    #[test]
    fn dimensions_display_as_w_x_h() {
        let d = Dimensions {
            width: 300,
            height: 200,
        };
        assert_eq!(d.to_string(), "300x200");
    }

    #[test]
    fn not_found_message_names_path() {
        let err = BackendError::NotFound(PathBuf::from("photo.jpg"));
        assert_eq!(err.to_string(), "photo.jpg: file not found");
    }
}
