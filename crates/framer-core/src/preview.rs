//! Preview scaling for the interactive crop box.
//!
//! The crop widget works on a reduced copy of the upload. Alongside that copy
//! we keep the per-axis [`ScaleFactor`] that maps preview pixels back onto the
//! full-resolution photo.

use serde::{Deserialize, Serialize};

use crate::decode::{fit_within, resize, Bitmap, FilterType};
use crate::error::FramerError;

/// Longest preview edge on regular viewports.
pub const DEFAULT_PREVIEW_EDGE: u32 = 700;

/// Longest preview edge on compact (phone-sized) viewports.
pub const COMPACT_PREVIEW_EDGE: u32 = 350;

/// Ratio between source and preview coordinates: `source = preview * factor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactor {
    pub sx: f64,
    pub sy: f64,
}

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor { sx: 1.0, sy: 1.0 };

    /// Factor mapping `preview` dimensions onto `source` dimensions.
    ///
    /// Each axis is computed on its own; policies that scale uniformly still
    /// produce slightly different factors after rounding.
    pub fn between(source: (u32, u32), preview: (u32, u32)) -> Self {
        Self {
            sx: source.0 as f64 / preview.0 as f64,
            sy: source.1 as f64 / preview.1 as f64,
        }
    }
}

/// How the preview size is derived from the source size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewPolicy {
    /// Width is capped at `max_width`, height follows the aspect ratio.
    FixedWidth { max_width: u32 },
    /// Both sides divided by `divisor` (integer division).
    Divisor { divisor: u32 },
    /// Uniformly shrunk to fit a `size x size` box; never upscaled.
    BoundingBox { size: u32 },
}

impl Default for PreviewPolicy {
    fn default() -> Self {
        PreviewPolicy::BoundingBox {
            size: DEFAULT_PREVIEW_EDGE,
        }
    }
}

impl PreviewPolicy {
    /// Policy for the current viewport. The host decides what counts as
    /// compact and passes it in.
    pub fn for_viewport(compact: bool) -> Self {
        let size = if compact {
            COMPACT_PREVIEW_EDGE
        } else {
            DEFAULT_PREVIEW_EDGE
        };
        PreviewPolicy::BoundingBox { size }
    }

    pub fn validate(&self) -> Result<(), FramerError> {
        let (name, bound) = match *self {
            PreviewPolicy::FixedWidth { max_width } => ("max_width", max_width),
            PreviewPolicy::Divisor { divisor } => ("divisor", divisor),
            PreviewPolicy::BoundingBox { size } => ("size", size),
        };
        if bound == 0 {
            return Err(FramerError::InvalidConfig(format!(
                "preview {} must be greater than zero",
                name
            )));
        }
        Ok(())
    }

    /// Preview dimensions for a `width x height` source.
    ///
    /// The result never exceeds the source and is at least 1x1.
    pub fn preview_dimensions(&self, width: u32, height: u32) -> Result<(u32, u32), FramerError> {
        self.validate()?;
        if width == 0 || height == 0 {
            return Err(FramerError::InvalidConfig(format!(
                "cannot preview a {}x{} image",
                width, height
            )));
        }

        let dims = match *self {
            PreviewPolicy::FixedWidth { max_width } => {
                let w = width.min(max_width);
                let h = (height as f64 * w as f64 / width as f64).round() as u32;
                (w, h.clamp(1, height))
            }
            PreviewPolicy::Divisor { divisor } => {
                ((width / divisor).max(1), (height / divisor).max(1))
            }
            PreviewPolicy::BoundingBox { size } => fit_within(width, height, size),
        };
        Ok(dims)
    }
}

/// A downscaled copy of the source plus the factor relating the two.
#[derive(Debug, Clone)]
pub struct Preview {
    image: Bitmap,
    scale: ScaleFactor,
}

impl Preview {
    pub fn image(&self) -> &Bitmap {
        &self.image
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub fn into_image(self) -> Bitmap {
        self.image
    }
}

/// Build the crop preview for `source` under `policy`.
///
/// # Errors
///
/// Returns `FramerError::InvalidConfig` for a zero bound or an empty source.
pub fn create_preview(
    source: &Bitmap,
    policy: &PreviewPolicy,
    filter: FilterType,
) -> Result<Preview, FramerError> {
    let (width, height) = policy.preview_dimensions(source.width(), source.height())?;
    let image = resize(source, width, height, filter)?;
    let scale = ScaleFactor::between(source.dimensions(), image.dimensions());

    log::debug!(
        "preview {}x{} -> {}x{} (sx={:.4}, sy={:.4})",
        source.width(),
        source.height(),
        width,
        height,
        scale.sx,
        scale.sy
    );

    Ok(Preview { image, scale })
}
