//! Framer Core - crop-and-frame image library
//!
//! This crate turns an uploaded photo plus a square selection made on a
//! downscaled preview into a framed PNG:
//!
//! 1. [`decode`] - upload decoding into RGBA bitmaps
//! 2. [`preview`] - the downscaled copy the crop box is drawn on
//! 3. [`transform`] - preview-to-source remapping and cropping
//! 4. [`composite`] - insetting the photo into the frame asset
//! 5. [`encode`] - PNG export
//!
//! [`pipeline::FramingSession`] chains these steps.

pub mod composite;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod transform;

pub use composite::{compose_inset, FrameAsset};
pub use config::FramerConfig;
pub use decode::{decode_image, Bitmap};
pub use encode::{encode_bitmap, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use error::FramerError;
pub use pipeline::{frame_photo, frame_photo_with_frame_file, FramingSession};
pub use preview::{create_preview, PreviewPolicy, ScaleFactor};
pub use transform::{crop, remap_to_source, CropRect, PixelRect};
