//! CLI output formatting.
//!
//! # Streams
//!
//! The result line goes to stdout so it can be captured by scripts. Everything
//! else (progress, the drift advisory, errors) goes to stderr.
//!
//! # Output Format
//!
//! ```text
//! $ image-resize --width 50 --height 50 wide.png --verbose
//! Source: wide.png (200x100)
//! Target: 50x50
//! Attention! The proportions of the new image do not match the proportions of the original (2.000 → 1.000)
//! Resized file saved to: wide__50x50.png
//! ```
//!
//! # Architecture
//!
//! Each message has a `format_*` function (returns `String` or `Vec<String>`)
//! for testability and a `print_*` wrapper that writes to the right stream.
//! Format functions are pure — no I/O, no side effects.

use crate::imaging::ResizePlan;
use crate::resize::ResizeEvent;
use std::error::Error;
use std::path::Path;

/// Lines to show for a pipeline event.
///
/// Source and target sizes are only shown in verbose mode; the drift advisory
/// is always shown.
pub fn format_event(event: &ResizeEvent, verbose: bool) -> Vec<String> {
    match event {
        ResizeEvent::Opened { path, dimensions } if verbose => {
            vec![format!("Source: {} ({})", path.display(), dimensions)]
        }
        ResizeEvent::Opened { .. } => Vec::new(),
        ResizeEvent::Planned(plan) => {
            let mut lines = Vec::new();
            if verbose {
                lines.push(format!("Target: {}", plan.target));
            }
            if plan.ratio_drifted {
                lines.push(format_drift_warning(plan));
            }
            lines
        }
    }
}

/// Advisory for a resize that changes the aspect ratio beyond tolerance.
pub fn format_drift_warning(plan: &ResizePlan) -> String {
    format!(
        "Attention! The proportions of the new image do not match the proportions of the original ({:.3} → {:.3})",
        plan.source_ratio, plan.target_ratio
    )
}

pub fn format_success(output: &Path) -> String {
    format!("Resized file saved to: {}", output.display())
}

/// Top-level message followed by each underlying cause, `: `-separated.
///
/// ```text
/// Failed to open image: file not found or wrong file format: photo.jpg: file not found
/// ```
pub fn format_error(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(c) = cause {
        message.push_str(": ");
        message.push_str(&c.to_string());
        cause = c.source();
    }
    message
}

pub fn print_event(event: &ResizeEvent, verbose: bool) {
    for line in format_event(event, verbose) {
        eprintln!("{}", line);
    }
}

pub fn print_success(output: &Path) {
    println!("{}", format_success(output));
}

pub fn print_error(err: &dyn Error) {
    eprintln!("{}", format_error(err));
}
