//! Pure calculation functions for resize dimensions.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! Fractional pixel counts are truncated toward zero, the same way an integer
//! cast drops the fraction. A target side that truncates to zero (or does not
//! fit in a `u32`) is an error rather than being clamped: silently producing a
//! 1-pixel-wide image from an extreme downscale hides a user mistake.

use super::backend::Dimensions;
use super::params::{DriftTolerance, ResizePlan};
use crate::request::ResizeRequest;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("Source image has no pixels ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
    #[error("Resized image would be {width}x{height}; both sides must be between 1 and {max}", max = u32::MAX)]
    InvalidDimensions { width: u64, height: u64 },
}

/// Aspect ratio as real division: `width / height`.
pub fn aspect_ratio(dims: Dimensions) -> f64 {
    dims.width as f64 / dims.height as f64
}

/// Absolute difference between two aspect ratios.
pub fn ratio_drift(source: Dimensions, target: Dimensions) -> f64 {
    (aspect_ratio(source) - aspect_ratio(target)).abs()
}

/// Compute target dimensions for `request` and flag aspect-ratio distortion.
///
/// # Examples
/// ```
/// # use image_resize::imaging::{Dimensions, DriftTolerance, plan};
/// # use image_resize::request::ResizeRequest;
/// let source = Dimensions { width: 200, height: 100 };
///
/// let plan_w = plan(source, &ResizeRequest::WidthOnly(50), DriftTolerance::DEFAULT).unwrap();
/// assert_eq!((plan_w.target.width, plan_w.target.height), (50, 25));
///
/// let both = ResizeRequest::Both { width: 50, height: 50 };
/// let plan_b = plan(source, &both, DriftTolerance::DEFAULT).unwrap();
/// assert!(plan_b.ratio_drifted);
/// ```
pub fn plan(
    source: Dimensions,
    request: &ResizeRequest,
    tolerance: DriftTolerance,
) -> Result<ResizePlan, PlanError> {
    if source.width == 0 || source.height == 0 {
        return Err(PlanError::EmptySource {
            width: source.width,
            height: source.height,
        });
    }

    let source_ratio = aspect_ratio(source);

    let (width, height) = match *request {
        ResizeRequest::Scale(scale) => (source.width as f64 * scale, source.height as f64 * scale),
        ResizeRequest::Both { width, height } => (width as f64, height as f64),
        ResizeRequest::WidthOnly(width) => (width as f64, width as f64 / source_ratio),
        ResizeRequest::HeightOnly(height) => (height as f64 * source_ratio, height as f64),
    };

    let target = match (to_pixels(width), to_pixels(height)) {
        (Some(width), Some(height)) => Dimensions { width, height },
        _ => {
            return Err(PlanError::InvalidDimensions {
                width: width.trunc() as u64,
                height: height.trunc() as u64,
            });
        }
    };

    // Only the both-sides mode can really drift, but the other modes can
    // pick up a little from truncation, so every plan is checked.
    let target_ratio = aspect_ratio(target);
    let drift = (source_ratio - target_ratio).abs();

    Ok(ResizePlan {
        target,
        source_ratio,
        target_ratio,
        ratio_drifted: tolerance.is_exceeded_by(drift),
    })
}

/// Truncate a fractional pixel count; `None` if it is not a valid side length.
fn to_pixels(value: f64) -> Option<u32> {
    let whole = value.trunc();
    (whole >= 1.0 && whole <= u32::MAX as f64).then_some(whole as u32)
}
