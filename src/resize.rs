//! The resize pipeline: open → plan → resample → write.
//!
//! Argument validation happens before this module is reached, so nothing here
//! can fail on a bad combination of flags. What can fail is the filesystem and
//! the codec, plus a plan that would produce an empty image.
//!
//! Progress is reported as [`ResizeEvent`]s so the caller decides how to show
//! them; the drift advisory in particular must reach the user before the
//! (possibly slow) resample starts, and never stops the run.

use crate::config::ResizeConfig;
use crate::imaging::{BackendError, Dimensions, ImageBackend, PlanError, ResizePlan, RustBackend};
use crate::naming::resized_path;
use crate::request::ResizeRequest;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("Failed to open image: file not found or wrong file format")]
    Open(#[source] BackendError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error("Failed to save resized image")]
    Save(#[source] BackendError),
}

/// Something worth telling the user while a resize is in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum ResizeEvent {
    Opened { path: PathBuf, dimensions: Dimensions },
    Planned(ResizePlan),
}

/// A finished resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOutcome {
    pub output: PathBuf,
    pub source: Dimensions,
    pub plan: ResizePlan,
}

/// Resize `source` with the production backend.
pub fn resize(
    source: &Path,
    output_dir: Option<&Path>,
    request: &ResizeRequest,
    config: &ResizeConfig,
    on_event: impl FnMut(ResizeEvent),
) -> Result<ResizeOutcome, ResizeError> {
    let backend = RustBackend::new();
    resize_with_backend(&backend, source, output_dir, request, config, on_event)
}

/// Resize using a specific backend (allows testing with mock).
pub fn resize_with_backend<B: ImageBackend>(
    backend: &B,
    source: &Path,
    output_dir: Option<&Path>,
    request: &ResizeRequest,
    config: &ResizeConfig,
    mut on_event: impl FnMut(ResizeEvent),
) -> Result<ResizeOutcome, ResizeError> {
    let image = backend.open(source).map_err(ResizeError::Open)?;
    let dimensions = backend.dimensions(&image);
    on_event(ResizeEvent::Opened {
        path: source.to_path_buf(),
        dimensions,
    });

    let plan = crate::imaging::plan(dimensions, request, config.drift_tolerance)?;
    on_event(ResizeEvent::Planned(plan));

    let resized = backend.resample(&image, plan.target, config.filter);
    let output = resized_path(source, plan.target, output_dir);
    backend.write(&resized, &output).map_err(ResizeError::Save)?;

    Ok(ResizeOutcome {
        output,
        source: dimensions,
        plan,
    })
}
