//! Image processing on top of the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Open** | `image::ImageReader` (format sniffed from content) |
//! | **Plan** | pure dimension math in [`plan`] |
//! | **Resample** | `DynamicImage::resize_exact` |
//! | **Write** | `DynamicImage::save` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing a resize
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{PlanError, aspect_ratio, plan, ratio_drift};
pub use params::{DriftTolerance, Filter, ResizePlan};
pub use rust_backend::RustBackend;
