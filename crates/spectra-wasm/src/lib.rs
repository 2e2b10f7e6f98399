//! Spectra WASM - WebAssembly bindings for Spectra
//!
//! This crate provides WASM bindings to expose the spectra-core filters to
//! JavaScript/TypeScript applications. It holds no state: every call
//! converts its inputs, runs one core operation, and returns a new image.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for image data
//! - `convolution` - Sobel, Prewitt and blur
//! - `frequency` - FFT-based low/high/band-pass filters and spectrum view
//! - `transform` - Rotation and resizing
//! - `adjustments` - Channel shift
//! - `operation` - Run an operation described as a JS object
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPixelBuffer, sobel_filter } from '@spectra/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsPixelBuffer(width, height, 3, rgbBytes);
//! const edges = sobel_filter(image, 0, 255);
//! console.log(`Edges ${edges.width}x${edges.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod convolution;
mod frequency;
mod operation;
mod transform;
mod types;

// Re-export public types
pub use adjustments::shift_channels;
pub use convolution::{blur, convolve, prewitt_filter, sobel_filter};
pub use frequency::{
    band_pass_filter, frequency_filter, frequency_spectrum_magnitude, high_pass_filter,
    low_pass_filter,
};
pub use operation::{apply_operation, default_operation};
pub use transform::{resize, rotate};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
