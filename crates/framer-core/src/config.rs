//! Run configuration.
//!
//! Viewport size and other page-level choices arrive here as explicit fields;
//! nothing is read from global state.

use serde::{Deserialize, Serialize};

use crate::composite::{validate_inset, DEFAULT_INSET};
use crate::decode::FilterType;
use crate::error::FramerError;
use crate::preview::PreviewPolicy;

/// Settings for one framing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramerConfig {
    /// How the crop preview is sized.
    pub preview: PreviewPolicy,
    /// Fraction of the frame covered by the photo, in (0, 1].
    pub inset: f64,
    /// Resampling filter for the preview and the inset photo.
    pub filter: FilterType,
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            preview: PreviewPolicy::default(),
            inset: DEFAULT_INSET,
            filter: FilterType::default(),
        }
    }
}

impl FramerConfig {
    /// Defaults with the preview sized for a compact or regular viewport.
    pub fn for_viewport(compact: bool) -> Self {
        Self {
            preview: PreviewPolicy::for_viewport(compact),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), FramerError> {
        self.preview.validate()?;
        validate_inset(self.inset)
    }
}
