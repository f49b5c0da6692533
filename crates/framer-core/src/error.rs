//! Pipeline error type.
//!
//! Every failure is terminal for the current run: the caller gets either a
//! finished PNG or one of these, never partial output.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Message shown for failures that indicate a bug rather than bad input.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while framing the photo";

#[derive(Debug, Error)]
pub enum FramerError {
    /// The upload could not be decoded.
    #[error("Could not read the uploaded image: {0}")]
    Decode(#[from] DecodeError),

    /// The bundled frame image is missing or unreadable.
    #[error("Frame image unavailable: {0}")]
    FrameAssetUnavailable(String),

    /// The selection has no area once mapped onto the photo.
    #[error("The selected region is empty ({width}x{height}); adjust the crop box")]
    EmptyCrop { width: i64, height: i64 },

    /// A crop rectangle reached the cropper outside the source bounds.
    #[error(
        "Crop region {width}x{height} at ({x}, {y}) exceeds image bounds {image_width}x{image_height}"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    /// A configuration value is outside its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// PNG export failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl FramerError {
    /// True for invariant violations the user cannot fix by changing input.
    pub fn is_internal(&self) -> bool {
        matches!(self, FramerError::OutOfBounds { .. } | FramerError::Encode(_))
    }

    /// Human-readable message for display to the user.
    pub fn user_message(&self) -> String {
        if self.is_internal() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
