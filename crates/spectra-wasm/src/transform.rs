//! WASM bindings for geometric operations: rotation and resizing.

use crate::types::{filter_from_u8, to_js_error, JsPixelBuffer};
use spectra_core::transform::{rotate as core_rotate, InterpolationMode};
use wasm_bindgen::prelude::*;

/// Rotate an image about its center.
///
/// The output has the same dimensions and channel count as the input.
/// Areas that rotate in from outside the source are black.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees
/// * `bilinear` - Use bilinear sampling, otherwise nearest neighbor
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Preview rotation (fast, nearest)
/// const rotated = rotate(sourceImage, 15.0, false);
///
/// // Smooth rotation
/// const smooth = rotate(sourceImage, 15.0, true);
/// ```
#[wasm_bindgen]
pub fn rotate(image: &JsPixelBuffer, angle_degrees: f64, bilinear: bool) -> JsPixelBuffer {
    let mode = if bilinear {
        InterpolationMode::Bilinear
    } else {
        InterpolationMode::Nearest
    };
    JsPixelBuffer::from_core(core_rotate(image.as_core(), angle_degrees, mode))
}

/// Resize an image to exact dimensions (aspect ratio is not preserved).
///
/// # Arguments
///
/// * `filter` - Resize algorithm: 0=Nearest (fastest), 1=Bilinear (default), 2=Lanczos3 (best quality)
///
/// # Errors
///
/// Returns an error if the source or target has zero width or height.
#[wasm_bindgen]
pub fn resize(
    image: &JsPixelBuffer,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsPixelBuffer, JsValue> {
    spectra_core::resize(image.as_core(), width, height, filter_from_u8(filter))
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}
