//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Framer
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use framer_core::decode::FilterType;
use framer_core::{Bitmap, CropRect, FramerError};
use wasm_bindgen::prelude::*;

/// An RGBA bitmap wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. The result can be handed straight to
/// `new ImageData(new Uint8ClampedArray(pixels), width, height)` for display.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a new JsBitmap from dimensions and RGBA pixel data.
    ///
    /// # Errors
    /// Returns an error if `pixels.length != width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsBitmap, JsValue> {
        let len = pixels.len();
        Bitmap::from_raw(width, height, pixels)
            .map(JsBitmap::from_bitmap)
            .ok_or_else(|| {
                JsValue::from_str(&format!(
                    "Pixel buffer of {} bytes does not match {}x{} RGBA",
                    len, width, height
                ))
            })
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsBitmap {
    pub(crate) fn from_bitmap(inner: Bitmap) -> Self {
        Self { inner }
    }

    pub(crate) fn bitmap(&self) -> &Bitmap {
        &self.inner
    }
}

/// Crop rectangle as it arrives from the page.
///
/// Crop-box widgets report fractional CSS pixels; they are truncated to
/// whole preview pixels here.
#[derive(serde::Deserialize)]
struct CropRectJs {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl From<CropRectJs> for CropRect {
    fn from(rect: CropRectJs) -> Self {
        // `as` saturates and maps NaN to 0
        CropRect::new(
            rect.left.trunc() as i32,
            rect.top.trunc() as i32,
            rect.width.max(0.0).trunc() as u32,
            rect.height.max(0.0).trunc() as u32,
        )
    }
}

/// Deserialize a `{left, top, width, height}` object.
pub(crate) fn crop_rect_from_js(rect: JsValue) -> Result<CropRect, JsValue> {
    let rect: CropRectJs = serde_wasm_bindgen::from_value(rect)
        .map_err(|e| JsValue::from_str(&format!("Invalid crop rectangle: {}", e)))?;
    Ok(rect.into())
}

/// Convert a pipeline error into a JS `Error`.
///
/// The full error goes to the log; the thrown message is the user-facing one.
pub(crate) fn to_js_error(err: FramerError) -> JsValue {
    log::error!("{}", err);
    js_sys::Error::new(&err.user_message()).into()
}

/// Convert a u8 filter code from JavaScript.
///
/// - 0 = Bilinear
/// - 1 = CatmullRom
/// - 2 = Lanczos3
///
/// Any other value defaults to Lanczos3.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Bilinear,
        1 => FilterType::CatmullRom,
        _ => FilterType::Lanczos3,
    }
}
