//! WASM bindings for 3x3 convolution: edge detection and blur.
//!
//! All functions return a grayscale (1-channel) image with the input's
//! dimensions. RGB input is reduced to intensity first.

use crate::types::JsPixelBuffer;
use spectra_core::convolution::{self, KernelKind, ThresholdPolicy};
use wasm_bindgen::prelude::*;

/// Sobel edge detection.
///
/// Gradient magnitudes outside `[min_threshold, max_threshold]` (or above
/// 255) become black.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const edges = sobel_filter(image, 0, 255);
/// ```
#[wasm_bindgen]
pub fn sobel_filter(image: &JsPixelBuffer, min_threshold: i32, max_threshold: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_core(convolution::sobel_filter(
        image.as_core(),
        min_threshold,
        max_threshold,
    ))
}

/// Prewitt edge detection. Thresholds behave as in [`sobel_filter`].
#[wasm_bindgen]
pub fn prewitt_filter(
    image: &JsPixelBuffer,
    min_threshold: i32,
    max_threshold: i32,
) -> JsPixelBuffer {
    JsPixelBuffer::from_core(convolution::prewitt_filter(
        image.as_core(),
        min_threshold,
        max_threshold,
    ))
}

/// 3x3 box blur.
#[wasm_bindgen]
pub fn blur(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_core(convolution::blur(image.as_core()))
}

/// Convolve with a selectable kernel and threshold policy.
///
/// # Arguments
///
/// * `kernel` - 0=Sobel, 1=Prewitt, 2=Blur (unknown values use Sobel)
/// * `clamp` - Saturate out-of-range magnitudes instead of zeroing them
#[wasm_bindgen]
pub fn convolve(
    image: &JsPixelBuffer,
    kernel: u8,
    min_threshold: i32,
    max_threshold: i32,
    clamp: bool,
) -> JsPixelBuffer {
    let policy = if clamp {
        ThresholdPolicy::Clamp
    } else {
        ThresholdPolicy::HardZero
    };
    JsPixelBuffer::from_core(convolution::convolve(
        image.as_core(),
        kernel_from_u8(kernel),
        min_threshold,
        max_threshold,
        policy,
    ))
}

fn kernel_from_u8(value: u8) -> KernelKind {
    match value {
        1 => KernelKind::Prewitt,
        2 => KernelKind::Blur,
        _ => KernelKind::Sobel,
    }
}
