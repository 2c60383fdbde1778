//! Argument validation: raw command-line values → a resize request.
//!
//! The user may give a width, a height, both, or a scale factor. Any other
//! combination is rejected here, before a single byte of the image is read.
//!
//! Rules are checked in order and the first match wins:
//!
//! | # | Condition | Error |
//! |---|---|---|
//! | 1 | nothing given | [`ValidationError::NoModeSpecified`] |
//! | 2 | scale together with width or height | [`ValidationError::ConflictingModes`] |
//! | 3 | any given value ≤ 0 | [`ValidationError::NonPositiveValue`] |
//! | 4 | value does not fit a pixel extent, or scale is infinite | [`ValidationError::OutOfRange`] |
//!
//! A successful validation picks exactly one [`ResizeRequest`] variant, so the
//! planner never has to re-derive which mode applies.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("You must specify at least one argument")]
    NoModeSpecified,
    #[error("You must specify only width/height or scale. Not both")]
    ConflictingModes,
    #[error("Values of arguments must be greater than 0")]
    NonPositiveValue,
    #[error("Value of --{name} is too large: {value}")]
    OutOfRange { name: &'static str, value: String },
}

/// Raw values as they come off the command line. Nothing is checked yet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestFields {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub scale: Option<f64>,
}

/// A validated resize intent. Exactly one mode, all values strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeRequest {
    /// Multiply both sides by the same factor.
    Scale(f64),
    /// Use both sides verbatim; the aspect ratio may change.
    Both { width: u32, height: u32 },
    /// Fix the width, derive the height from the source ratio.
    WidthOnly(u32),
    /// Fix the height, derive the width from the source ratio.
    HeightOnly(u32),
}

impl ResizeRequest {
    pub fn width(&self) -> Option<u32> {
        match *self {
            ResizeRequest::Both { width, .. } | ResizeRequest::WidthOnly(width) => Some(width),
            _ => None,
        }
    }

    pub fn height(&self) -> Option<u32> {
        match *self {
            ResizeRequest::Both { height, .. } | ResizeRequest::HeightOnly(height) => Some(height),
            _ => None,
        }
    }

    pub fn scale(&self) -> Option<f64> {
        match *self {
            ResizeRequest::Scale(scale) => Some(scale),
            _ => None,
        }
    }
}

/// Validate raw fields and select the resize mode.
pub fn validate(fields: &RequestFields) -> Result<ResizeRequest, ValidationError> {
    let RequestFields {
        width,
        height,
        scale,
    } = *fields;

    if width.is_none() && height.is_none() && scale.is_none() {
        return Err(ValidationError::NoModeSpecified);
    }
    if scale.is_some() && (width.is_some() || height.is_some()) {
        return Err(ValidationError::ConflictingModes);
    }
    // `!(s > 0.0)` so that NaN is rejected along with zero and negatives
    let non_positive = width.is_some_and(|w| w <= 0)
        || height.is_some_and(|h| h <= 0)
        || scale.is_some_and(|s| !(s > 0.0));
    if non_positive {
        return Err(ValidationError::NonPositiveValue);
    }

    if let Some(scale) = scale {
        if !scale.is_finite() {
            return Err(ValidationError::OutOfRange {
                name: "scale",
                value: scale.to_string(),
            });
        }
        return Ok(ResizeRequest::Scale(scale));
    }

    let width = width.map(|w| to_extent("width", w)).transpose()?;
    let height = height.map(|h| to_extent("height", h)).transpose()?;

    Ok(match (width, height) {
        (Some(width), Some(height)) => ResizeRequest::Both { width, height },
        (Some(width), None) => ResizeRequest::WidthOnly(width),
        (None, Some(height)) => ResizeRequest::HeightOnly(height),
        (None, None) => unreachable!("rule 1 rejects requests without any field"),
    })
}

fn to_extent(name: &'static str, value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        name,
        value: value.to_string(),
    })
}
