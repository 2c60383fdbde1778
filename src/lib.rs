//! # image-resize
//!
//! Resize one raster image by width, height, or a uniform scale factor and
//! save the result next to the original as `name__WxH.ext`.
//!
//! # Pipeline
//!
//! ```text
//! 1. Validate   --width/--height/--scale  →  ResizeRequest   (no I/O)
//! 2. Open       file                      →  decoded image + Dimensions
//! 3. Plan       Dimensions + request      →  ResizePlan      (pure)
//! 4. Resample   image + plan              →  resized image
//! 5. Write      resized image             →  dir/name__WxH.ext
//! ```
//!
//! Steps 1 and 3 hold all of the decision logic and are plain functions over
//! small value types, so they are tested without images. Steps 2, 4 and 5 go
//! through the [`imaging::ImageBackend`] trait.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`request`] | Argument validation; picks one of four resize modes |
//! | [`imaging`] | Dimension planning, drift detection, and the `image`-crate backend |
//! | [`resize`] | The open → plan → resample → write pipeline and its errors |
//! | [`naming`] | `name__WxH.ext` output path convention |
//! | [`config`] | Optional TOML config (drift tolerance, resampling filter) |
//! | [`output`] | CLI message formatting |
//!
//! # Resize Modes
//!
//! | Given | Target |
//! |---|---|
//! | `--scale s` | `floor(w·s) × floor(h·s)` |
//! | `--width W --height H` | `W × H` (may distort; a warning is printed) |
//! | `--width W` | `W × floor(W / ratio)` |
//! | `--height H` | `floor(H · ratio) × H` |
//!
//! `ratio` is the source `width / height`. A target side that truncates to
//! zero is an error.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod request;
pub mod resize;

#[cfg(test)]
pub(crate) mod test_helpers;
