//! WASM bindings for frequency-domain filtering.
//!
//! Radii are percentages in `[0, 100]`. The filtered image keeps the
//! input's dimensions and channel count; the spectrum view is always a
//! 256x256 grayscale image.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const smooth = low_pass_filter(image, 40);
//! const spectrum = frequency_spectrum_magnitude(image, 0, 40, 100);
//! ```

use crate::types::{to_js_error, JsPixelBuffer};
use spectra_core::frequency::{self, FrequencyFilterKind};
use wasm_bindgen::prelude::*;

/// Filter an image in the frequency domain.
///
/// # Arguments
///
/// * `kind` - 0=Low-pass, 1=High-pass, 2=Band-pass (unknown values use low-pass)
/// * `radius` - Cutoff, or lower bound for band-pass
/// * `max_radius` - Upper bound for band-pass, ignored otherwise
#[wasm_bindgen]
pub fn frequency_filter(
    image: &JsPixelBuffer,
    kind: u8,
    radius: f64,
    max_radius: f64,
) -> Result<JsPixelBuffer, JsValue> {
    frequency::frequency_filter(image.as_core(), kind_from_u8(kind), radius, Some(max_radius))
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}

/// Keep frequencies closer to the center than `radius`.
#[wasm_bindgen]
pub fn low_pass_filter(image: &JsPixelBuffer, radius: f64) -> Result<JsPixelBuffer, JsValue> {
    frequency::low_pass_filter(image.as_core(), radius)
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}

/// Keep frequencies at or beyond `radius`.
#[wasm_bindgen]
pub fn high_pass_filter(image: &JsPixelBuffer, radius: f64) -> Result<JsPixelBuffer, JsValue> {
    frequency::high_pass_filter(image.as_core(), radius)
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}

/// Keep frequencies between `min_radius` and `max_radius` inclusive.
#[wasm_bindgen]
pub fn band_pass_filter(
    image: &JsPixelBuffer,
    min_radius: f64,
    max_radius: f64,
) -> Result<JsPixelBuffer, JsValue> {
    frequency::band_pass_filter(image.as_core(), min_radius, max_radius)
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}

/// Render the masked, log-scaled spectrum as a 256x256 grayscale image.
///
/// Arguments are as for [`frequency_filter`].
#[wasm_bindgen]
pub fn frequency_spectrum_magnitude(
    image: &JsPixelBuffer,
    kind: u8,
    radius: f64,
    max_radius: f64,
) -> Result<JsPixelBuffer, JsValue> {
    frequency::frequency_spectrum_magnitude(
        image.as_core(),
        kind_from_u8(kind),
        radius,
        Some(max_radius),
    )
    .map(JsPixelBuffer::from_core)
    .map_err(to_js_error)
}

fn kind_from_u8(value: u8) -> FrequencyFilterKind {
    match value {
        1 => FrequencyFilterKind::HighPass,
        2 => FrequencyFilterKind::BandPass,
        _ => FrequencyFilterKind::LowPass,
    }
}
