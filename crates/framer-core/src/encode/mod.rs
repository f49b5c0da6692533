//! Export of the framed photo.
//!
//! This module provides:
//! - Encoding RGBA bitmaps to PNG for download
//! - The download file name and MIME type
//!
//! # Examples
//!
//! ```ignore
//! use framer_core::encode::{encode_bitmap, EXPORT_FILE_NAME};
//!
//! let png = encode_bitmap(&framed).unwrap();
//! std::fs::write(EXPORT_FILE_NAME, png).unwrap();
//! ```

mod png;

pub use png::{encode_bitmap, encode_png, EncodeError, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
