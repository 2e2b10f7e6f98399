//! Error types for Spectra operations.

use thiserror::Error;

/// Errors raised by the image filters.
///
/// The numeric kernels themselves are total over well-formed input; these
/// variants cover malformed buffers and the FFT power-of-two precondition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// FFT2D was invoked on a buffer whose sides are not powers of two.
    #[error("FFT requires power-of-two dimensions, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Pixel data length does not match `width * height * channels`.
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// An operation received (or would produce) an image with no pixels.
    #[error("image has zero width or height")]
    EmptyImage,
}

/// Result type for Spectra operations.
pub type FilterResult<T> = Result<T, FilterError>;
