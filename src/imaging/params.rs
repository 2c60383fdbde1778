//! Parameter types for resize operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the planner in [`calculations`](super::calculations) and the
//! [`backend`](super::backend) that does the pixel work.
//!
//! ## Types
//!
//! - [`DriftTolerance`] — Largest aspect-ratio change accepted silently (default 0.1).
//! - [`Filter`] — Resampling filter handed to the backend (default Lanczos3).
//! - [`ResizePlan`] — Target dimensions plus the drift flag, produced once per run.

use super::backend::Dimensions;
use serde::{Deserialize, Serialize};

/// Maximum absolute difference between source and target aspect ratios
/// before the user is warned.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriftTolerance(pub f64);

impl DriftTolerance {
    pub const DEFAULT: DriftTolerance = DriftTolerance(0.1);

    pub fn value(self) -> f64 {
        self.0
    }

    /// Drift strictly greater than the tolerance counts as distortion.
    pub fn is_exceeded_by(self, drift: f64) -> bool {
        drift > self.0
    }
}

impl Default for DriftTolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resampling filter, from fastest to sharpest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<Filter> for image::imageops::FilterType {
    fn from(filter: Filter) -> Self {
        use image::imageops::FilterType;
        match filter {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Outcome of planning: where to resize to, and whether that distorts the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePlan {
    pub target: Dimensions,
    /// Aspect ratio of the source (width / height).
    pub source_ratio: f64,
    /// Aspect ratio of the target (width / height).
    pub target_ratio: f64,
    pub ratio_drifted: bool,
}

impl ResizePlan {
    pub fn drift(&self) -> f64 {
        (self.source_ratio - self.target_ratio).abs()
    }
}
