//! Operation parameters and dispatch.
//!
//! Each operation has a plain value struct whose `Default` matches a fresh
//! editing session. [`Operation`] bundles one operation with its parameters
//! so a host can describe work as JSON:
//!
//! ```json
//! { "op": "rotate", "angle_degrees": 30.0, "interpolation": "bilinear" }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjustments::shift_channels;
use crate::buffer::PixelBuffer;
use crate::convolution::{blur, convolve, KernelKind, ThresholdPolicy};
use crate::error::FilterResult;
use crate::frequency::{
    frequency_filter, frequency_spectrum_magnitude, FrequencyFilterKind, DEFAULT_MAX_RADIUS,
};
use crate::transform::{rotate, InterpolationMode};

/// Edge detection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeDetectParams {
    pub kernel: KernelKind,
    /// Lowest gradient magnitude kept (0 to 255)
    pub min_threshold: i32,
    /// Highest gradient magnitude kept (0 to 255)
    pub max_threshold: i32,
    pub policy: ThresholdPolicy,
}

impl Default for EdgeDetectParams {
    fn default() -> Self {
        Self {
            kernel: KernelKind::Sobel,
            min_threshold: 0,
            max_threshold: 255,
            policy: ThresholdPolicy::HardZero,
        }
    }
}

/// Rotation settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationParams {
    /// Rotation angle in degrees, any range
    pub angle_degrees: f64,
    pub interpolation: InterpolationMode,
}

/// Frequency filter settings. Radii are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyParams {
    pub kind: FrequencyFilterKind,
    /// Cutoff for low/high-pass, lower bound for band-pass (0 to 100)
    pub radius: f64,
    /// Upper bound for band-pass (0 to 100)
    pub max_radius: f64,
}

impl Default for FrequencyParams {
    fn default() -> Self {
        Self {
            kind: FrequencyFilterKind::LowPass,
            radius: 0.0,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

/// One image operation with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    EdgeDetect(EdgeDetectParams),
    Blur,
    Rotate(RotationParams),
    FrequencyFilter(FrequencyParams),
    SpectrumMagnitude(FrequencyParams),
    ShiftChannels { offset: i32 },
}

/// Run one operation on an image.
///
/// # Errors
///
/// Only the frequency operations can fail; see
/// [`frequency_filter`](crate::frequency::frequency_filter).
pub fn apply_operation(image: &PixelBuffer, operation: &Operation) -> FilterResult<PixelBuffer> {
    debug!(?operation, "apply operation");

    match *operation {
        Operation::EdgeDetect(p) => Ok(convolve(
            image,
            p.kernel,
            p.min_threshold,
            p.max_threshold,
            p.policy,
        )),
        Operation::Blur => Ok(blur(image)),
        Operation::Rotate(p) => Ok(rotate(image, p.angle_degrees, p.interpolation)),
        Operation::FrequencyFilter(p) => {
            frequency_filter(image, p.kind, p.radius, Some(p.max_radius))
        }
        Operation::SpectrumMagnitude(p) => {
            frequency_spectrum_magnitude(image, p.kind, p.radius, Some(p.max_radius))
        }
        Operation::ShiftChannels { offset } => Ok(shift_channels(image, offset)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PixelFormat;
    use crate::error::FilterError;
    use crate::frequency::SPECTRUM_SIZE;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| ((x * 13 + y * 3) % 256) as u8))
            .collect();
        PixelBuffer::gray(width, height, pixels).unwrap()
    }

    #[test]
    fn test_defaults() {
        let edge = EdgeDetectParams::default();
        assert_eq!(edge.min_threshold, 0);
        assert_eq!(edge.max_threshold, 255);
        assert_eq!(edge.policy, ThresholdPolicy::HardZero);

        let rot = RotationParams::default();
        assert_eq!(rot.angle_degrees, 0.0);
        assert_eq!(rot.interpolation, InterpolationMode::Nearest);

        let freq = FrequencyParams::default();
        assert_eq!(freq.kind, FrequencyFilterKind::LowPass);
        assert_eq!(freq.radius, 0.0);
        assert_eq!(freq.max_radius, 100.0);
    }

    #[test]
    fn test_operation_from_json() {
        let op: Operation = serde_json::from_str(
            r#"{"op": "rotate", "angle_degrees": 30.0, "interpolation": "bilinear"}"#,
        )
        .unwrap();
        assert_eq!(
            op,
            Operation::Rotate(RotationParams {
                angle_degrees: 30.0,
                interpolation: InterpolationMode::Bilinear,
            })
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let op: Operation =
            serde_json::from_str(r#"{"op": "edge_detect", "kernel": "prewitt"}"#).unwrap();
        assert_eq!(
            op,
            Operation::EdgeDetect(EdgeDetectParams {
                kernel: KernelKind::Prewitt,
                ..Default::default()
            })
        );

        let op: Operation =
            serde_json::from_str(r#"{"op": "frequency_filter", "kind": "band_pass"}"#).unwrap();
        let Operation::FrequencyFilter(p) = op else {
            panic!("unexpected operation {:?}", op);
        };
        assert_eq!(p.max_radius, 100.0);
    }

    #[test]
    fn test_unit_and_struct_variants_from_json() {
        let op: Operation = serde_json::from_str(r#"{"op": "blur"}"#).unwrap();
        assert_eq!(op, Operation::Blur);

        let op: Operation =
            serde_json::from_str(r#"{"op": "shift_channels", "offset": -3}"#).unwrap();
        assert_eq!(op, Operation::ShiftChannels { offset: -3 });
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        assert!(serde_json::from_str::<Operation>(r#"{"op": "sharpen"}"#).is_err());
    }

    #[test]
    fn test_operation_serializes_with_tag() {
        let json = serde_json::to_value(Operation::Blur).unwrap();
        assert_eq!(json["op"], "blur");
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let img = gradient(20, 12);

        let edge = EdgeDetectParams::default();
        assert_eq!(
            apply_operation(&img, &Operation::EdgeDetect(edge)).unwrap(),
            convolve(&img, KernelKind::Sobel, 0, 255, ThresholdPolicy::HardZero)
        );
        assert_eq!(apply_operation(&img, &Operation::Blur).unwrap(), blur(&img));

        let rot = RotationParams {
            angle_degrees: 12.0,
            interpolation: InterpolationMode::Bilinear,
        };
        assert_eq!(
            apply_operation(&img, &Operation::Rotate(rot)).unwrap(),
            rotate(&img, 12.0, InterpolationMode::Bilinear)
        );

        assert_eq!(
            apply_operation(&img, &Operation::ShiftChannels { offset: 7 }).unwrap(),
            shift_channels(&img, 7)
        );
    }

    #[test]
    fn test_dispatch_frequency_operations() {
        let img = gradient(20, 12);
        let params = FrequencyParams {
            kind: FrequencyFilterKind::HighPass,
            radius: 25.0,
            max_radius: 100.0,
        };

        let filtered = apply_operation(&img, &Operation::FrequencyFilter(params)).unwrap();
        assert_eq!((filtered.width, filtered.height), (20, 12));

        let spectrum = apply_operation(&img, &Operation::SpectrumMagnitude(params)).unwrap();
        assert_eq!((spectrum.width, spectrum.height), (SPECTRUM_SIZE, SPECTRUM_SIZE));
        assert_eq!(spectrum.format, PixelFormat::Gray8);
    }

    #[test]
    fn test_dispatch_propagates_errors() {
        let empty = PixelBuffer::gray(0, 0, vec![]).unwrap();
        let op = Operation::FrequencyFilter(FrequencyParams::default());
        assert_eq!(apply_operation(&empty, &op), Err(FilterError::EmptyImage));
    }
}
