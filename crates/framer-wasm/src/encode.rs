//! PNG export WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, export_file_name, export_mime_type } from '@framer/wasm';
//!
//! const png = encode_png(bitmap);
//! const url = URL.createObjectURL(new Blob([png], { type: export_mime_type() }));
//! link.download = export_file_name();
//! link.href = url;
//! ```

use crate::types::{to_js_error, JsBitmap};
use framer_core::encode::{self, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use wasm_bindgen::prelude::*;

/// Encode a JsBitmap to PNG bytes.
///
/// # Errors
///
/// Throws if the bitmap is empty.
#[wasm_bindgen]
pub fn encode_png(image: &JsBitmap) -> Result<Vec<u8>, JsValue> {
    encode::encode_bitmap(image.bitmap()).map_err(|e| to_js_error(e.into()))
}

/// File name for the download link.
#[wasm_bindgen]
pub fn export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

/// MIME type for the download blob.
#[wasm_bindgen]
pub fn export_mime_type() -> String {
    EXPORT_MIME_TYPE.to_string()
}
