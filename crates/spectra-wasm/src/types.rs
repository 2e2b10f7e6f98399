//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Spectra
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use spectra_core::{FilterError, PixelBuffer, PixelFormat, ResizeFilter};
use wasm_bindgen::prelude::*;

/// An image wrapper for JavaScript.
///
/// Holds either 8-bit grayscale (1 channel) or RGB (3 channels) pixel data in
/// row-major order.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new image from dimensions, channel count and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - 1 for grayscale, 3 for RGB
    /// * `pixels` - Pixel data (`width * height * channels` bytes)
    ///
    /// # Errors
    ///
    /// Returns an error if `channels` is not 1 or 3, or if the pixel data has
    /// the wrong length.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> Result<JsPixelBuffer, JsValue> {
        let format = format_from_channels(channels)
            .ok_or_else(|| JsValue::from_str(&format!("unsupported channel count: {}", channels)))?;
        PixelBuffer::new(width, height, format, pixels)
            .map(Self::from_core)
            .map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of channels per pixel (1 or 3)
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channels() as u8
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Returns pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    /// Wrap a core buffer returned by a filter.
    pub(crate) fn from_core(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    /// Borrow the core buffer for passing to filters.
    pub(crate) fn as_core(&self) -> &PixelBuffer {
        &self.inner
    }
}

/// Map a channel count to a pixel format: 1 = Gray8, 3 = Rgb8.
pub(crate) fn format_from_channels(channels: u8) -> Option<PixelFormat> {
    match channels {
        1 => Some(PixelFormat::Gray8),
        3 => Some(PixelFormat::Rgb8),
        _ => None,
    }
}

/// Convert a u8 filter type value to the core ResizeFilter enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> ResizeFilter {
    match value {
        0 => ResizeFilter::Nearest,
        2 => ResizeFilter::Lanczos3,
        _ => ResizeFilter::Bilinear,
    }
}

/// Convert a core error into a JavaScript exception value.
pub(crate) fn to_js_error(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_pixel_buffer_from_core() {
        let core = PixelBuffer::rgb(100, 50, vec![0u8; 100 * 50 * 3]).unwrap();
        let img = JsPixelBuffer::from_core(core);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.channels(), 3);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_js_pixel_buffer_constructor() {
        let pixels = vec![255u8, 128, 64, 32];
        let img = JsPixelBuffer::new(2, 2, 1, pixels.clone()).unwrap();
        assert_eq!(img.channels(), 1);
        assert_eq!(img.pixels(), pixels);
        assert_eq!(img.as_core().format, PixelFormat::Gray8);
    }

    #[test]
    fn test_format_from_channels() {
        assert_eq!(format_from_channels(1), Some(PixelFormat::Gray8));
        assert_eq!(format_from_channels(3), Some(PixelFormat::Rgb8));
        assert_eq!(format_from_channels(0), None);
        assert_eq!(format_from_channels(4), None);
    }

    #[test]
    fn test_filter_from_u8() {
        assert_eq!(filter_from_u8(0), ResizeFilter::Nearest);
        assert_eq!(filter_from_u8(1), ResizeFilter::Bilinear);
        assert_eq!(filter_from_u8(2), ResizeFilter::Lanczos3);
        // Unknown values default to Bilinear
        assert_eq!(filter_from_u8(3), ResizeFilter::Bilinear);
        assert_eq!(filter_from_u8(255), ResizeFilter::Bilinear);
    }
}
