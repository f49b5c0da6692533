//! Selection geometry: remapping a preview selection onto the photo and
//! cropping it out.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, x grows rightward and y downward
//! - A rectangle is only meaningful together with the bitmap it was measured on:
//!   [`CropRect`] lives in preview space, [`PixelRect`] in source space
//! - `source = preview * scale`, see [`ScaleFactor`](crate::preview::ScaleFactor)

mod crop;
mod rect;
mod remap;

pub use crop::crop;
pub use rect::{CropRect, PixelRect};
pub use remap::remap_to_source;
