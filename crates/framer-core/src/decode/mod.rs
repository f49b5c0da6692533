//! Image decoding for Framer.
//!
//! This module provides:
//! - Decoding uploaded JPEG/PNG photos into RGBA bitmaps
//! - EXIF orientation correction for phone photos
//! - Resampling helpers used by the preview scaler and compositor
//!
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use framer_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod resize;
mod types;
mod upload;

pub use resize::{fit_within, resize};
pub use types::{Bitmap, DecodeError, FilterType, Orientation, CHANNELS};
pub use upload::{decode_any, decode_image, get_orientation};
