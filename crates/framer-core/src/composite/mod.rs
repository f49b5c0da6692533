//! Compositing the cropped photo with the decorative frame.
//!
//! The photo is inset into the frame: the frame keeps its fixed size and the
//! photo is scaled to a configurable fraction of it, centered underneath.
//! Output dimensions therefore depend only on the frame asset.

mod frame;
mod inset;

pub use frame::{FrameAsset, FRAME_FILE_NAME};
pub use inset::{compose_inset, inset_dimensions, DEFAULT_INSET};

pub(crate) use inset::validate_inset;
