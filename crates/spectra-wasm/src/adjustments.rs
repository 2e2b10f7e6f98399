//! Per-channel adjustment bindings.

use crate::types::JsPixelBuffer;
use spectra_core::adjustments;
use wasm_bindgen::prelude::*;

/// Add `offset` to every channel, wrapping modulo 256.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const shifted = shift_channels(image, 64);
/// ```
#[wasm_bindgen]
pub fn shift_channels(image: &JsPixelBuffer, offset: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_core(adjustments::shift_channels(image.as_core(), offset))
}
