//! Frequency-domain filtering.
//!
//! # Pipeline
//!
//! Every frequency operation runs the same steps:
//! 1. Resize to the next power-of-two square (nearest neighbor)
//! 2. Convert to a centered [`ComplexBuffer`] (`(-1)^(x+y)` modulation)
//! 3. Forward FFT2D
//! 4. Apply a [`FrequencyMask`]
//! 5. Inverse FFT2D
//! 6. Convert back to pixels and resize to the original dimensions
//!
//! The resize in step 1 is what guarantees the FFT's power-of-two
//! precondition; [`fft2d`] itself only checks it.
//!
//! [`frequency_spectrum_magnitude`] stops after step 4 and renders the
//! log-scaled magnitude at a fixed 256x256 resolution instead.

mod adapter;
mod complex;
mod fft;
mod mask;

pub use adapter::{
    centering_sign, from_centered_complex, to_centered_complex, to_magnitude_image,
    MAGNITUDE_GAIN,
};
pub use complex::ComplexBuffer;
pub use fft::{fft1d, fft2d, forward_fft2d, inverse_fft2d, Direction};
pub use mask::{center_distance, percent_to_pixel_radius, FrequencyFilterKind, FrequencyMask};

use tracing::debug;

use crate::buffer::{resize, resize_to_working_square, PixelBuffer, ResizeFilter};
use crate::error::{FilterError, FilterResult};

/// Side of the square working buffer used by [`frequency_spectrum_magnitude`].
pub const SPECTRUM_SIZE: u32 = 256;

/// Default upper radius (percent) for band-pass when none is given.
pub const DEFAULT_MAX_RADIUS: f64 = 100.0;

/// Filter an image in the frequency domain.
///
/// `radius` and `max_radius` are percentages in `[0, 100]` (see
/// [`percent_to_pixel_radius`]). `max_radius` is only read for band-pass,
/// where `radius` is the lower bound; it defaults to 100.
///
/// The result has the input's dimensions and pixel format.
///
/// # Errors
///
/// Returns `FilterError::EmptyImage` for an image with no pixels, and
/// `FilterError::BufferSizeMismatch` if the pixel data does not match the
/// dimensions.
pub fn frequency_filter(
    image: &PixelBuffer,
    kind: FrequencyFilterKind,
    radius: f64,
    max_radius: Option<f64>,
) -> FilterResult<PixelBuffer> {
    check_input(image)?;

    let side = working_side(image);
    let mask = FrequencyMask::from_percent(
        kind,
        radius,
        max_radius.unwrap_or(DEFAULT_MAX_RADIUS),
        side,
    );
    debug!(
        width = image.width,
        height = image.height,
        side,
        ?mask,
        "frequency filter"
    );

    filter_through_spectrum(image, Some(&mask))
}

/// Low-pass filter with `radius` in percent.
pub fn low_pass_filter(image: &PixelBuffer, radius: f64) -> FilterResult<PixelBuffer> {
    frequency_filter(image, FrequencyFilterKind::LowPass, radius, None)
}

/// High-pass filter with `radius` in percent.
pub fn high_pass_filter(image: &PixelBuffer, radius: f64) -> FilterResult<PixelBuffer> {
    frequency_filter(image, FrequencyFilterKind::HighPass, radius, None)
}

/// Band-pass filter keeping radii in `[min_radius, max_radius]` percent.
pub fn band_pass_filter(
    image: &PixelBuffer,
    min_radius: f64,
    max_radius: f64,
) -> FilterResult<PixelBuffer> {
    frequency_filter(
        image,
        FrequencyFilterKind::BandPass,
        min_radius,
        Some(max_radius),
    )
}

/// Render the masked spectrum of an image as a 256x256 Gray8 image.
///
/// The image is resized to 256x256, transformed, masked with radii mapped
/// for a 256-pixel side, and rendered with [`to_magnitude_image`]. This is a
/// diagnostic view; the output is not resized back.
pub fn frequency_spectrum_magnitude(
    image: &PixelBuffer,
    kind: FrequencyFilterKind,
    radius: f64,
    max_radius: Option<f64>,
) -> FilterResult<PixelBuffer> {
    check_input(image)?;
    let square = resize(image, SPECTRUM_SIZE, SPECTRUM_SIZE, ResizeFilter::Nearest)?;
    let mut buffer = to_centered_complex(&square);
    forward_fft2d(&mut buffer)?;

    let mask = FrequencyMask::from_percent(
        kind,
        radius,
        max_radius.unwrap_or(DEFAULT_MAX_RADIUS),
        SPECTRUM_SIZE as usize,
    );
    debug!(?mask, "spectrum magnitude");
    mask.apply(&mut buffer);

    to_magnitude_image(&buffer)
}

fn check_input(image: &PixelBuffer) -> FilterResult<()> {
    if image.is_empty() {
        return Err(FilterError::EmptyImage);
    }
    if !image.is_well_formed() {
        return Err(FilterError::BufferSizeMismatch {
            expected: image.pixel_count() * image.channels(),
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

fn working_side(image: &PixelBuffer) -> usize {
    crate::buffer::working_size(image.width, image.height) as usize
}

/// Steps 1-6 of the pipeline; `None` skips the mask.
fn filter_through_spectrum(
    image: &PixelBuffer,
    mask: Option<&FrequencyMask>,
) -> FilterResult<PixelBuffer> {
    let square = resize_to_working_square(image)?;
    let mut buffer = to_centered_complex(&square);

    forward_fft2d(&mut buffer)?;
    if let Some(mask) = mask {
        mask.apply(&mut buffer);
    }
    inverse_fft2d(&mut buffer)?;

    let filtered = from_centered_complex(&buffer, image.format)?;
    resize(&filtered, image.width, image.height, ResizeFilter::Nearest)
}
