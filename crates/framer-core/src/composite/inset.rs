//! Photo-inset compositing.
//!
//! The frame keeps its native size. The cropped photo is resized to a
//! fraction of the frame, copied centered onto a transparent canvas, and the
//! frame is drawn over it. Opaque frame pixels come out unchanged; transparent
//! ones show the photo.
//!
//! ```text
//! +--------------- frame ---------------+
//! |   offset = ((fw - pw) / 2,          |
//! |             (fh - ph) / 2)          |
//! |        +----- photo -----+          |
//! |        |  fw * inset     |          |
//! |        |  x fh * inset   |          |
//! |        +-----------------+          |
//! +-------------------------------------+
//! ```

use super::FrameAsset;
use crate::decode::{resize, Bitmap, FilterType, CHANNELS};
use crate::error::FramerError;

/// Fraction of the frame the photo occupies by default.
pub const DEFAULT_INSET: f64 = 0.7;

/// Size of the photo area for a frame of `frame_width x frame_height`.
///
/// `inset` must be in `(0, 1]`; `1.0` fills the whole frame.
pub fn inset_dimensions(
    frame_width: u32,
    frame_height: u32,
    inset: f64,
) -> Result<(u32, u32), FramerError> {
    validate_inset(inset)?;
    let scale = |edge: u32| ((edge as f64 * inset).round() as u32).clamp(1, edge.max(1));
    Ok((scale(frame_width), scale(frame_height)))
}

pub(crate) fn validate_inset(inset: f64) -> Result<(), FramerError> {
    if !(inset.is_finite() && inset > 0.0 && inset <= 1.0) {
        return Err(FramerError::InvalidConfig(format!(
            "inset must be in (0, 1], got {}",
            inset
        )));
    }
    Ok(())
}

/// Composite `photo` inside `frame`.
///
/// The output always has the frame's dimensions, whatever the photo's size or
/// aspect ratio.
///
/// # Errors
///
/// Returns `FramerError::InvalidConfig` for an inset outside `(0, 1]`.
pub fn compose_inset(
    photo: &Bitmap,
    frame: &FrameAsset,
    inset: f64,
    filter: FilterType,
) -> Result<Bitmap, FramerError> {
    let (frame_w, frame_h) = frame.bitmap().dimensions();
    let (photo_w, photo_h) = inset_dimensions(frame_w, frame_h, inset)?;
    let resized = resize(photo, photo_w, photo_h, filter)?;

    let offset_x = (frame_w - photo_w) / 2;
    let offset_y = (frame_h - photo_h) / 2;

    let mut canvas = vec![0u8; frame_w as usize * frame_h as usize * CHANNELS];
    paste(&mut canvas, frame_w, &resized, offset_x, offset_y);

    for (dst, src) in canvas
        .chunks_exact_mut(CHANNELS)
        .zip(frame.bitmap().pixels().chunks_exact(CHANNELS))
    {
        blend_over(dst, src);
    }

    log::debug!(
        "composited {}x{} photo at ({}, {}) in {}x{} frame",
        photo_w,
        photo_h,
        offset_x,
        offset_y,
        frame_w,
        frame_h
    );

    Bitmap::from_raw(frame_w, frame_h, canvas).ok_or(FramerError::OutOfBounds {
        x: 0,
        y: 0,
        width: frame_w,
        height: frame_h,
        image_width: frame_w,
        image_height: frame_h,
    })
}

/// Copy `src` into a `canvas_width`-wide RGBA buffer at (x, y), replacing
/// whatever is there. The caller guarantees `src` fits.
fn paste(canvas: &mut [u8], canvas_width: u32, src: &Bitmap, x: u32, y: u32) {
    let stride = canvas_width as usize * CHANNELS;
    let row_len = src.width() as usize * CHANNELS;
    let x_offset = x as usize * CHANNELS;

    for (row, src_row) in src.pixels().chunks_exact(row_len).enumerate() {
        let start = (y as usize + row) * stride + x_offset;
        canvas[start..start + row_len].copy_from_slice(src_row);
    }
}

/// Porter-Duff "source over destination" for one RGBA8 pixel, in integer
/// arithmetic with round-to-nearest.
fn blend_over(dst: &mut [u8], src: &[u8]) {
    let src_a = src[3] as u32;
    if src_a == 255 {
        dst.copy_from_slice(src);
        return;
    }
    if src_a == 0 {
        return;
    }

    let dst_a = dst[3] as u32;
    let inv = 255 - src_a;
    // Output alpha scaled by 255
    let out_a = src_a * 255 + dst_a * inv;

    for c in 0..3 {
        let num = src[c] as u32 * src_a * 255 + dst[c] as u32 * dst_a * inv;
        dst[c] = ((num + out_a / 2) / out_a) as u8;
    }
    dst[3] = ((out_a + 127) / 255) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    const BORDER: [u8; 4] = [200, 160, 40, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];
    const PHOTO: [u8; 4] = [30, 90, 210, 255];

    /// Frame with an opaque `border`-pixel edge and a transparent middle.
    fn ring_frame(size: u32, border: u32) -> FrameAsset {
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let edge = x < border || y < border || x >= size - border || y >= size - border;
                pixels.extend_from_slice(if edge { &BORDER } else { &CLEAR });
            }
        }
        FrameAsset::from_bitmap(Bitmap::from_raw(size, size, pixels).unwrap()).unwrap()
    }

    #[test]
    fn test_inset_dimensions() {
        assert_eq!(inset_dimensions(800, 800, 0.7).unwrap(), (560, 560));
        assert_eq!(inset_dimensions(800, 600, 1.0).unwrap(), (800, 600));
        assert_eq!(inset_dimensions(3, 3, 0.01).unwrap(), (1, 1));
    }

    #[test]
    fn test_inset_out_of_range() {
        for inset in [0.0, -0.5, 1.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                inset_dimensions(800, 800, inset),
                Err(FramerError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_compose_800_frame_places_560_photo_at_120() {
        let frame = ring_frame(800, 10);
        let photo = Bitmap::filled(300, 200, PHOTO);

        let out = compose_inset(&photo, &frame, 0.7, FilterType::Lanczos3).unwrap();

        assert_eq!(out.dimensions(), (800, 800));
        // Photo spans [120, 680) on both axes
        assert_eq!(out.pixel(120, 120), Some(PHOTO));
        assert_eq!(out.pixel(679, 679), Some(PHOTO));
        assert_eq!(out.pixel(400, 120), Some(PHOTO));
        assert_eq!(out.pixel(119, 400), Some(CLEAR));
        assert_eq!(out.pixel(680, 400), Some(CLEAR));
        assert_eq!(out.pixel(400, 119), Some(CLEAR));
        assert_eq!(out.pixel(400, 680), Some(CLEAR));
        // Frame border drawn on top, unchanged
        assert_eq!(out.pixel(0, 0), Some(BORDER));
        assert_eq!(out.pixel(799, 400), Some(BORDER));
    }

    #[test]
    fn test_compose_output_size_ignores_photo_size() {
        let frame = ring_frame(120, 4);
        for (w, h) in [(1, 1), (50, 500), (2000, 1000)] {
            let photo = Bitmap::filled(w, h, PHOTO);
            let out = compose_inset(&photo, &frame, 0.7, FilterType::Bilinear).unwrap();
            assert_eq!(out.dimensions(), (120, 120));
        }
    }

    #[test]
    fn test_compose_full_bleed_covers_canvas() {
        let frame = ring_frame(64, 4);
        let photo = Bitmap::filled(64, 64, PHOTO);

        let out = compose_inset(&photo, &frame, 1.0, FilterType::Lanczos3).unwrap();

        assert_eq!(out.pixel(0, 0), Some(BORDER));
        assert_eq!(out.pixel(4, 4), Some(PHOTO));
        assert_eq!(out.pixel(59, 59), Some(PHOTO));
    }

    #[test]
    fn test_compose_odd_margin_rounds_offset_down() {
        // 101 * 0.5 = 50.5 -> 51, offset (101 - 51) / 2 = 25
        let frame = ring_frame(101, 1);
        let photo = Bitmap::filled(10, 10, PHOTO);

        let out = compose_inset(&photo, &frame, 0.5, FilterType::Bilinear).unwrap();

        assert_eq!(out.pixel(24, 50), Some(CLEAR));
        assert_eq!(out.pixel(25, 50), Some(PHOTO));
        assert_eq!(out.pixel(75, 50), Some(PHOTO));
        assert_eq!(out.pixel(76, 50), Some(CLEAR));
    }

    #[test]
    fn test_compose_invalid_inset() {
        let frame = ring_frame(10, 1);
        let photo = Bitmap::filled(10, 10, PHOTO);
        assert!(compose_inset(&photo, &frame, 0.0, FilterType::Lanczos3).is_err());
    }

    #[test]
    fn test_blend_over_opaque_source_replaces() {
        let mut dst = [1, 2, 3, 255];
        blend_over(&mut dst, &[9, 8, 7, 255]);
        assert_eq!(dst, [9, 8, 7, 255]);
    }

    #[test]
    fn test_blend_over_transparent_source_keeps_destination() {
        let mut dst = [1, 2, 3, 200];
        blend_over(&mut dst, &[9, 8, 7, 0]);
        assert_eq!(dst, [1, 2, 3, 200]);
    }

    #[test]
    fn test_blend_over_half_alpha() {
        let mut dst = [0, 0, 255, 255];
        blend_over(&mut dst, &[255, 0, 0, 128]);
        assert_eq!(dst, [128, 0, 127, 255]);
    }

    #[test]
    fn test_blend_over_onto_transparent_keeps_source_color() {
        let mut dst = CLEAR;
        blend_over(&mut dst, &[100, 50, 25, 64]);
        assert_eq!(dst, [100, 50, 25, 64]);
    }
}
