//! The decorative frame asset.
//!
//! The frame ships next to the page under a fixed name and is decoded once per
//! run. It is never modified; compositing reads from it.

use std::path::Path;

use crate::decode::{decode_any, Bitmap};
use crate::error::FramerError;

/// Fixed file name the frame is bundled under.
pub const FRAME_FILE_NAME: &str = "frame.webp";

/// Read-only decoded frame image.
#[derive(Debug, Clone)]
pub struct FrameAsset {
    bitmap: Bitmap,
}

impl FrameAsset {
    /// Decode a frame from encoded bytes (PNG, JPEG or WebP).
    ///
    /// # Errors
    ///
    /// Returns `FramerError::FrameAssetUnavailable` if the bytes cannot be
    /// decoded or the image is empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FramerError> {
        let bitmap = decode_any(bytes)
            .map_err(|e| FramerError::FrameAssetUnavailable(e.to_string()))?;
        Self::from_bitmap(bitmap)
    }

    /// Use an already decoded bitmap as the frame.
    pub fn from_bitmap(bitmap: Bitmap) -> Result<Self, FramerError> {
        if bitmap.is_empty() {
            return Err(FramerError::FrameAssetUnavailable(format!(
                "frame image is empty ({}x{})",
                bitmap.width(),
                bitmap.height()
            )));
        }
        Ok(Self { bitmap })
    }

    /// Read and decode the frame at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FramerError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            FramerError::FrameAssetUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let frame = Self::from_bytes(&bytes).map_err(|e| match e {
            FramerError::FrameAssetUnavailable(reason) => {
                FramerError::FrameAssetUnavailable(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })?;

        log::debug!(
            "loaded frame {} ({}x{})",
            path.display(),
            frame.width(),
            frame.height()
        );
        Ok(frame)
    }

    /// Load [`FRAME_FILE_NAME`] from `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, FramerError> {
        Self::load(dir.as_ref().join(FRAME_FILE_NAME))
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }
}
