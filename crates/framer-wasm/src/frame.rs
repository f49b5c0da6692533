//! Frame asset WASM bindings.
//!
//! The page fetches the bundled `frame.webp` and hands its bytes over once;
//! the decoded frame is then reused for every render.
//!
//! ```typescript
//! const bytes = new Uint8Array(await (await fetch(frame_file_name())).arrayBuffer());
//! const frame = new JsFrameAsset(bytes);
//! ```

use crate::types::to_js_error;
use framer_core::composite::FRAME_FILE_NAME;
use framer_core::FrameAsset;
use wasm_bindgen::prelude::*;

/// Decoded, read-only frame image.
#[wasm_bindgen]
pub struct JsFrameAsset {
    inner: FrameAsset,
}

#[wasm_bindgen]
impl JsFrameAsset {
    /// Decode the frame from PNG, JPEG or WebP bytes.
    ///
    /// # Errors
    /// Throws if the bytes are not a decodable, non-empty image.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8]) -> Result<JsFrameAsset, JsValue> {
        FrameAsset::from_bytes(bytes)
            .map(|inner| JsFrameAsset { inner })
            .map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }
}

impl JsFrameAsset {
    pub(crate) fn asset(&self) -> &FrameAsset {
        &self.inner
    }

    #[cfg(test)]
    pub(crate) fn from_asset(inner: FrameAsset) -> Self {
        Self { inner }
    }
}

/// Name the frame asset is bundled under.
#[wasm_bindgen]
pub fn frame_file_name() -> String {
    FRAME_FILE_NAME.to_string()
}
