//! Framer WASM - WebAssembly bindings for Framer
//!
//! This crate exposes the framer-core crop-and-frame pipeline to the
//! browser page.
//!
//! # Module Structure
//!
//! - `session` - Upload session: preview, crop and framed PNG render
//! - `frame` - The decoded frame asset
//! - `decode` - Lower-level decoding and preview bindings
//! - `encode` - PNG export and download metadata
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsFramingSession, JsFrameAsset, frame_file_name } from '@framer/wasm';
//!
//! await init();
//!
//! const frame = new JsFrameAsset(
//!   new Uint8Array(await (await fetch(frame_file_name())).arrayBuffer()),
//! );
//! const session = new JsFramingSession(new Uint8Array(await file.arrayBuffer()), false);
//! const png = session.render({ left: 0, top: 0, width: 300, height: 300 }, frame);
//! ```

use log::{Level, LevelFilter};
use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod frame;
mod session;
mod types;

// Re-export public types
pub use decode::{decode_image, preview_image};
pub use encode::{encode_png, export_file_name, export_mime_type};
pub use frame::{frame_file_name, JsFrameAsset};
pub use session::{frame_photo, JsFramingSession};
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
///
/// Installs the panic hook and routes `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    // Fails only if a logger is already installed; keep that one
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
    log::debug!("framer-wasm {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Change the console log level ("error", "warn", "info", "debug", "trace" or "off").
///
/// Returns false and leaves the level unchanged for an unknown name.
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> bool {
    match parse_level(level) {
        Some(filter) => {
            log::set_max_level(filter);
            true
        }
        None => false,
    }
}

fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}
