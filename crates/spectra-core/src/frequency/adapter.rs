//! Conversions between pixel buffers and centered complex buffers.
//!
//! Multiplying each spatial sample by `(-1)^(x+y)` before the forward FFT
//! moves the zero-frequency term from `(0, 0)` to `(width/2, height/2)`.
//! The frequency masks measure distance from that point, so every conversion
//! into the frequency pipeline goes through [`to_centered_complex`] and back
//! through [`from_centered_complex`].

use num_complex::Complex64;
use tracing::debug;

use super::ComplexBuffer;
use crate::buffer::{PixelBuffer, PixelFormat};
use crate::error::FilterResult;

/// Gain applied to each magnitude before log compression.
pub const MAGNITUDE_GAIN: f64 = 150.0;

/// `(-1)^(x+y)`
#[inline]
pub fn centering_sign(x: usize, y: usize) -> f64 {
    if (x + y) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Convert a pixel buffer to a centered complex buffer of the same size.
///
/// Real part is the pixel intensity times `(-1)^(x+y)`, imaginary part 0.
pub fn to_centered_complex(image: &PixelBuffer) -> ComplexBuffer {
    ComplexBuffer::from_fn(image.width as usize, image.height as usize, |x, y| {
        let value = image.intensity_at(x, y) as f64;
        Complex64::new(value * centering_sign(x, y), 0.0)
    })
}

/// Convert a centered complex buffer back to pixels.
///
/// Takes the real part, undoes the `(-1)^(x+y)` modulation, clamps to
/// `[0, 255]` and rounds. For `Rgb8` the intensity is replicated across
/// channels.
pub fn from_centered_complex(
    buffer: &ComplexBuffer,
    format: PixelFormat,
) -> FilterResult<PixelBuffer> {
    let plane = buffer
        .indexed()
        .map(|(x, y, c)| (c.re * centering_sign(x, y)).clamp(0.0, 255.0).round() as u8)
        .collect();

    PixelBuffer::from_intensities(
        buffer.width() as u32,
        buffer.height() as u32,
        format,
        plane,
    )
}

/// Render the spectrum magnitude as a log-compressed Gray8 image.
///
/// `gray = C * ln(1 + m * 150)` with `C = 255 / ln(1 + M)`, where `m` is the
/// sample magnitude and `M` the buffer-wide maximum, clamped to `[0, 255]`.
/// A spectrum with no energy renders as all black. That includes any `M`
/// small enough that `ln(1 + M)` rounds to 0.
pub fn to_magnitude_image(buffer: &ComplexBuffer) -> FilterResult<PixelBuffer> {
    let max = buffer.max_magnitude();
    let (width, height) = (buffer.width() as u32, buffer.height() as u32);

    let denom = (1.0 + max).ln();
    if !max.is_finite() || denom <= 0.0 {
        debug!(max, "spectrum has no finite energy, rendering black");
        return Ok(PixelBuffer::black(width, height, PixelFormat::Gray8));
    }

    let c = 255.0 / denom;
    debug!(max, c, "magnitude log scale");

    let plane = buffer
        .samples()
        .iter()
        .map(|s| {
            let gray = c * (1.0 + s.norm() * MAGNITUDE_GAIN).ln();
            gray.clamp(0.0, 255.0) as u8
        })
        .collect();

    PixelBuffer::gray(width, height, plane)
}
