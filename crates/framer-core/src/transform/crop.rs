//! Pixel-exact cropping.
//!
//! The region is copied row by row without resampling, so channel data is
//! preserved bit for bit.

use super::PixelRect;
use crate::decode::{Bitmap, CHANNELS};
use crate::error::FramerError;

/// Extract `rect` from `image` as a new bitmap.
///
/// # Errors
///
/// Returns `FramerError::OutOfBounds` if the rectangle has no area or is not
/// fully contained in the image. After [`remap_to_source`](super::remap_to_source)
/// this cannot happen; the check keeps a bad rectangle from silently
/// cropping the wrong region.
///
/// # Example
///
/// ```ignore
/// use framer_core::decode::Bitmap;
/// use framer_core::transform::{crop, PixelRect};
///
/// let image = Bitmap::filled(100, 100, [128, 128, 128, 255]);
/// let cropped = crop(&image, PixelRect::new(25, 25, 50, 50)).unwrap();
/// assert_eq!(cropped.dimensions(), (50, 50));
/// ```
pub fn crop(image: &Bitmap, rect: PixelRect) -> Result<Bitmap, FramerError> {
    let out_of_bounds = || FramerError::OutOfBounds {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
        image_width: image.width(),
        image_height: image.height(),
    };

    if !rect.fits_within(image.width(), image.height()) {
        return Err(out_of_bounds());
    }

    // Fast path: full crop returns a clone
    if rect == PixelRect::new(0, 0, image.width(), image.height()) {
        return Ok(image.clone());
    }

    let src_stride = image.width() as usize * CHANNELS;
    let row_len = rect.width as usize * CHANNELS;
    let x_offset = rect.x as usize * CHANNELS;
    let src = image.pixels();

    let mut output = Vec::with_capacity(row_len * rect.height as usize);
    for y in rect.y as usize..rect.bottom() as usize {
        let start = y * src_stride + x_offset;
        output.extend_from_slice(&src[start..start + row_len]);
    }

    Bitmap::from_raw(rect.width, rect.height, output).ok_or_else(out_of_bounds)
}
