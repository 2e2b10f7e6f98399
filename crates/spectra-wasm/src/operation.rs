//! Run an operation described by a plain JavaScript object.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const result = apply_operation(image, {
//!   op: 'frequency_filter',
//!   kind: 'band_pass',
//!   radius: 10,
//!   max_radius: 60,
//! });
//! ```

use crate::types::{to_js_error, JsPixelBuffer};
use spectra_core::params::{self, Operation};
use wasm_bindgen::prelude::*;

/// Apply one operation to an image.
///
/// `operation` must have an `op` field naming the operation
/// (`edge_detect`, `blur`, `rotate`, `frequency_filter`,
/// `spectrum_magnitude`, `shift_channels`); missing parameters take their
/// defaults.
///
/// # Errors
///
/// Returns an error if the description is malformed or the operation fails.
#[wasm_bindgen]
pub fn apply_operation(image: &JsPixelBuffer, operation: JsValue) -> Result<JsPixelBuffer, JsValue> {
    let operation: Operation = serde_wasm_bindgen::from_value(operation)
        .map_err(|e| JsValue::from_str(&format!("Invalid operation: {}", e)))?;
    run(image, &operation)
}

/// Default parameters for an operation, as a JavaScript object.
///
/// Unknown names return `undefined`.
#[wasm_bindgen]
pub fn default_operation(name: &str) -> Result<JsValue, JsValue> {
    match default_for(name) {
        Some(op) => serde_wasm_bindgen::to_value(&op).map_err(|e| JsValue::from_str(&e.to_string())),
        None => Ok(JsValue::UNDEFINED),
    }
}

fn run(image: &JsPixelBuffer, operation: &Operation) -> Result<JsPixelBuffer, JsValue> {
    params::apply_operation(image.as_core(), operation)
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}

fn default_for(name: &str) -> Option<Operation> {
    let op = match name {
        "edge_detect" => Operation::EdgeDetect(Default::default()),
        "blur" => Operation::Blur,
        "rotate" => Operation::Rotate(Default::default()),
        "frequency_filter" => Operation::FrequencyFilter(Default::default()),
        "spectrum_magnitude" => Operation::SpectrumMagnitude(Default::default()),
        "shift_channels" => Operation::ShiftChannels { offset: 0 },
        _ => return None,
    };
    Some(op)
}
