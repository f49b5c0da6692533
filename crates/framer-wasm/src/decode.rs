//! Upload decoding WASM bindings.
//!
//! [`JsFramingSession`](crate::JsFramingSession) covers the normal flow. These
//! lower-level functions are for pages that draw the crop box themselves.
//!
//! ```typescript
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const preview = preview_image(image, true, 2); // compact, Lanczos3
//! ```

use crate::types::{filter_from_u8, to_js_error, JsBitmap};
use framer_core::{create_preview, decode, PreviewPolicy};
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG upload into RGBA pixels.
///
/// EXIF orientation is applied, so the result is upright.
///
/// # Errors
/// Throws if the bytes are not a JPEG or PNG image.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    decode::decode_image(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| to_js_error(e.into()))
}

/// Downscale `image` to the crop preview size for the viewport.
///
/// # Arguments
/// * `compact` - true on small screens
/// * `filter` - 0 = Bilinear, 1 = CatmullRom, 2 = Lanczos3
#[wasm_bindgen]
pub fn preview_image(image: &JsBitmap, compact: bool, filter: u8) -> Result<JsBitmap, JsValue> {
    create_preview(
        image.bitmap(),
        &PreviewPolicy::for_viewport(compact),
        filter_from_u8(filter),
    )
    .map(|preview| JsBitmap::from_bitmap(preview.into_image()))
    .map_err(to_js_error)
}
