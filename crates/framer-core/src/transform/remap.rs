//! Preview-to-source coordinate remapping.
//!
//! The crop-box widget works on the downscaled preview. Before cropping, its
//! selection is mapped onto the full-resolution photo by scaling each of the
//! four edges independently and only then deriving the size:
//!
//! ```text
//! left   = trunc(preview_left           * sx)
//! top    = trunc(preview_top            * sy)
//! right  = trunc((preview_left + width) * sx)
//! bottom = trunc((preview_top + height) * sy)
//! ```
//!
//! Scaling the width separately and adding it to a separately truncated left
//! edge lets the two rounding errors stack, which can push the right edge one
//! pixel past the photo. Edge-first keeps every edge within one truncation of
//! its exact position. Products that miss an integer only by `f64` noise are
//! snapped to it first, so selecting the whole preview selects the whole photo.

use super::{CropRect, PixelRect};
use crate::error::FramerError;
use crate::preview::ScaleFactor;

/// Map a preview-space selection onto a `source_width x source_height` photo.
///
/// The result is clamped to the photo bounds.
///
/// # Errors
///
/// Returns `FramerError::EmptyCrop` if the clamped rectangle has no area,
/// e.g. a zero-sized selection or one entirely outside the preview.
pub fn remap_to_source(
    rect: CropRect,
    scale: ScaleFactor,
    source_width: u32,
    source_height: u32,
) -> Result<PixelRect, FramerError> {
    let left = scale_edge(rect.left as i64, scale.sx);
    let top = scale_edge(rect.top as i64, scale.sy);
    let right = scale_edge(rect.right(), scale.sx);
    let bottom = scale_edge(rect.bottom(), scale.sy);

    let clamped_left = left.max(0);
    let clamped_top = top.max(0);
    let clamped_right = right.min(source_width as i64);
    let clamped_bottom = bottom.min(source_height as i64);

    let width = clamped_right - clamped_left;
    let height = clamped_bottom - clamped_top;
    if width <= 0 || height <= 0 {
        return Err(FramerError::EmptyCrop { width, height });
    }

    if (clamped_left, clamped_top, clamped_right, clamped_bottom) != (left, top, right, bottom) {
        log::warn!(
            "crop edges ({}, {}, {}, {}) clamped to {}x{} source",
            left,
            top,
            right,
            bottom,
            source_width,
            source_height
        );
    }

    // All four values are within [0, u32::MAX] after clamping.
    Ok(PixelRect::new(
        clamped_left as u32,
        clamped_top as u32,
        width as u32,
        height as u32,
    ))
}

/// Relative tolerance under which a scaled edge counts as landing exactly on
/// an integer. `1000 / 333 * 333` comes out a hair below 1000 in `f64`.
const SNAP_TOLERANCE: f64 = 1e-9;

#[inline]
fn scale_edge(coord: i64, factor: f64) -> i64 {
    let exact = coord as f64 * factor;
    let nearest = exact.round();
    if (exact - nearest).abs() <= SNAP_TOLERANCE * exact.abs().max(1.0) {
        nearest as i64
    } else {
        exact.trunc() as i64
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Preview size, source size, and a selection inside the preview.
    fn scenario() -> impl Strategy<Value = (u32, u32, u32, u32, CropRect)> {
        (1u32..=800, 1u32..=800, 1u32..=8, 1u32..=8).prop_flat_map(|(pw, ph, mx, my)| {
            let sw = pw * mx + (mx - 1);
            let sh = ph * my + (my - 1);
            (0..pw, 0..ph).prop_flat_map(move |(left, top)| {
                (1..=pw - left, 1..=ph - top).prop_map(move |(w, h)| {
                    (pw, ph, sw, sh, CropRect::new(left as i32, top as i32, w, h))
                })
            })
        })
    }

    proptest! {
        /// Property: a selection inside the preview maps inside the source.
        #[test]
        fn prop_remapped_rect_inside_source(
            (pw, ph, sw, sh, rect) in scenario(),
        ) {
            let s = ScaleFactor::between((sw, sh), (pw, ph));
            if let Ok(out) = remap_to_source(rect, s, sw, sh) {
                prop_assert!(out.fits_within(sw, sh));
            }
        }

        /// Property: edge-first rounding keeps the size within one preview pixel.
        #[test]
        fn prop_width_slack_within_one_pixel(
            (pw, ph, sw, sh, rect) in scenario(),
        ) {
            let s = ScaleFactor::between((sw, sh), (pw, ph));
            let out = remap_to_source(rect, s, sw, sh).unwrap();

            let back_w = out.width as f64 / s.sx;
            let back_h = out.height as f64 / s.sy;
            prop_assert!((back_w - rect.width as f64).abs() <= 1.0 + 1e-9);
            prop_assert!((back_h - rect.height as f64).abs() <= 1.0 + 1e-9);
        }

        /// Property: selecting the whole preview selects the whole source.
        #[test]
        fn prop_full_selection_covers_source(
            (pw, ph, sw, sh, _rect) in scenario(),
        ) {
            let s = ScaleFactor::between((sw, sh), (pw, ph));
            let out = remap_to_source(CropRect::new(0, 0, pw, ph), s, sw, sh).unwrap();
            prop_assert_eq!(out, PixelRect::new(0, 0, sw, sh));
        }

        /// Property: zero-area selections never produce a rectangle.
        #[test]
        fn prop_degenerate_selection_rejected(
            left in 0i32..500,
            top in 0i32..500,
            extent in 0u32..500,
            zero_width in any::<bool>(),
            sx in 1.0f64..10.0,
        ) {
            let rect = if zero_width {
                CropRect::new(left, top, 0, extent)
            } else {
                CropRect::new(left, top, extent, 0)
            };
            let result = remap_to_source(rect, ScaleFactor { sx, sy: sx }, 5000, 5000);
            let is_empty_crop = matches!(result, Err(FramerError::EmptyCrop { .. }));
            prop_assert!(is_empty_crop);
        }

        /// Property: arbitrary widget output never panics and never escapes the source.
        #[test]
        fn prop_arbitrary_rect_never_escapes(
            left in -1000i32..1000,
            top in -1000i32..1000,
            width in 0u32..2000,
            height in 0u32..2000,
            sx in 0.1f64..20.0,
            sy in 0.1f64..20.0,
        ) {
            let rect = CropRect::new(left, top, width, height);
            if let Ok(out) = remap_to_source(rect, ScaleFactor { sx, sy }, 3000, 2000) {
                prop_assert!(out.fits_within(3000, 2000));
            }
        }
    }
}
