//! Spectra Core - Image filtering library
//!
//! This crate provides the numeric engine for Spectra: a radix-2 FFT2D with
//! low/high/band-pass frequency filtering and spectrum visualization, 3x3
//! spatial convolution (Sobel, Prewitt, blur), and rotation about the image
//! center.
//!
//! Every operation takes a [`PixelBuffer`] and returns a new one; nothing is
//! cached between calls.

pub mod adjustments;
pub mod buffer;
pub mod convolution;
pub mod error;
pub mod frequency;
pub mod params;
pub mod transform;

pub(crate) mod parallel;

pub use adjustments::shift_channels;
pub use buffer::{resize, PixelBuffer, PixelFormat, ResizeFilter};
pub use convolution::{blur, convolve, prewitt_filter, sobel_filter, KernelKind, ThresholdPolicy};
pub use error::{FilterError, FilterResult};
pub use frequency::{
    band_pass_filter, fft2d, frequency_filter, frequency_spectrum_magnitude, high_pass_filter,
    low_pass_filter, ComplexBuffer, Direction, FrequencyFilterKind,
};
pub use params::{
    apply_operation, EdgeDetectParams, FrequencyParams, Operation, RotationParams,
};
pub use transform::{rotate, InterpolationMode};
