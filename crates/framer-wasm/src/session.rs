//! Framing session WASM bindings.
//!
//! One session per uploaded photo. The page draws the crop box over
//! `preview()`, and on every adjustment or "generate" click passes the
//! selection back in preview pixels.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const photo = new Uint8Array(await file.arrayBuffer());
//! const session = new JsFramingSession(photo, window.innerWidth < 640);
//!
//! const preview = session.preview();
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(preview.pixels()),
//!                                preview.width, preview.height), 0, 0);
//!
//! // rect comes from the 1:1 crop widget
//! const cropped = session.crop(rect);
//! const png = session.render(rect, frame);
//! ```

use crate::frame::JsFrameAsset;
use crate::types::{crop_rect_from_js, to_js_error, JsBitmap};
use framer_core::{CropRect, FramerConfig, FramerError, FramingSession};
use wasm_bindgen::prelude::*;

/// An uploaded photo with its crop preview.
#[wasm_bindgen]
pub struct JsFramingSession {
    inner: FramingSession,
    config: FramerConfig,
}

#[wasm_bindgen]
impl JsFramingSession {
    /// Decode an upload with the default settings for the viewport size.
    ///
    /// # Arguments
    /// * `bytes` - JPEG or PNG file bytes
    /// * `compact` - true on small screens, giving a smaller preview
    ///
    /// # Errors
    /// Throws if the bytes are not a JPEG or PNG image.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8], compact: bool) -> Result<JsFramingSession, JsValue> {
        Self::open(bytes, FramerConfig::for_viewport(compact)).map_err(to_js_error)
    }

    /// Decode an upload with an explicit configuration object.
    ///
    /// `config` is a partial `{ preview, inset, filter }` object; missing
    /// fields take their defaults.
    pub fn with_config(bytes: &[u8], config: JsValue) -> Result<JsFramingSession, JsValue> {
        let config: FramerConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {}", e)))?;
        Self::open(bytes, config).map_err(to_js_error)
    }

    /// The downscaled photo to draw under the crop box.
    pub fn preview(&self) -> JsBitmap {
        JsBitmap::from_bitmap(self.inner.preview().clone())
    }

    /// Source pixels per preview pixel, horizontally.
    #[wasm_bindgen(getter)]
    pub fn scale_x(&self) -> f64 {
        self.inner.scale().sx
    }

    /// Source pixels per preview pixel, vertically.
    #[wasm_bindgen(getter)]
    pub fn scale_y(&self) -> f64 {
        self.inner.scale().sy
    }

    #[wasm_bindgen(getter)]
    pub fn source_width(&self) -> u32 {
        self.inner.source().width()
    }

    #[wasm_bindgen(getter)]
    pub fn source_height(&self) -> u32 {
        self.inner.source().height()
    }

    /// Full-resolution crop of the selection, for the "Cropped Image" view.
    ///
    /// # Errors
    /// Throws if `rect` is malformed or selects nothing.
    pub fn crop(&self, rect: JsValue) -> Result<JsBitmap, JsValue> {
        let rect = crop_rect_from_js(rect)?;
        self.crop_region(rect).map_err(to_js_error)
    }

    /// Framed PNG bytes for the selection.
    ///
    /// # Errors
    /// Throws if `rect` is malformed or selects nothing.
    pub fn render(&self, rect: JsValue, frame: &JsFrameAsset) -> Result<Vec<u8>, JsValue> {
        let rect = crop_rect_from_js(rect)?;
        self.render_png(rect, frame).map_err(to_js_error)
    }
}

impl JsFramingSession {
    fn open(bytes: &[u8], config: FramerConfig) -> Result<Self, FramerError> {
        let inner = FramingSession::from_upload(bytes, &config)?;
        Ok(Self { inner, config })
    }

    fn crop_region(&self, rect: CropRect) -> Result<JsBitmap, FramerError> {
        self.inner.crop(rect).map(JsBitmap::from_bitmap)
    }

    fn render_png(&self, rect: CropRect, frame: &JsFrameAsset) -> Result<Vec<u8>, FramerError> {
        self.inner.export(rect, frame.asset(), &self.config)
    }
}

/// One-shot: decode, crop, frame and encode in a single call.
///
/// # Errors
/// Throws on an unreadable upload, a malformed rectangle or an empty selection.
#[wasm_bindgen]
pub fn frame_photo(
    photo: &[u8],
    frame: &JsFrameAsset,
    rect: JsValue,
    compact: bool,
) -> Result<Vec<u8>, JsValue> {
    let rect = crop_rect_from_js(rect)?;
    framer_core::frame_photo(
        photo,
        frame.asset(),
        rect,
        &FramerConfig::for_viewport(compact),
    )
    .map_err(to_js_error)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_new_rejects_garbage() {
        assert!(JsFramingSession::new(b"garbage", false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_with_config_rejects_bad_inset() {
        let config = serde_wasm_bindgen::to_value(&FramerConfig {
            inset: 2.0,
            ..FramerConfig::default()
        })
        .unwrap();
        assert!(JsFramingSession::with_config(b"garbage", config).is_err());
    }
}
