//! Image resizing, including the power-of-two square resize that precedes
//! every frequency-domain operation.
//!
//! All functions return new buffers without modifying the input.

use super::{PixelBuffer, PixelFormat, ResizeFilter};
use crate::error::{FilterError, FilterResult};
use tracing::trace;

/// Resize an image to exact dimensions.
///
/// Each axis is scaled independently; the aspect ratio is not preserved.
/// The output keeps the input's pixel format.
///
/// # Errors
///
/// Returns `FilterError::EmptyImage` if either target dimension is zero, or
/// if the source is empty.
pub fn resize(
    image: &PixelBuffer,
    width: u32,
    height: u32,
    filter: ResizeFilter,
) -> FilterResult<PixelBuffer> {
    if width == 0 || height == 0 || image.is_empty() {
        return Err(FilterError::EmptyImage);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    trace!(
        src_w = image.width,
        src_h = image.height,
        width,
        height,
        ?filter,
        "resize"
    );

    let expected = image.pixel_count() * image.channels();
    let mismatch = || FilterError::BufferSizeMismatch {
        expected,
        actual: image.pixels.len(),
    };

    let resized = match image.format {
        PixelFormat::Gray8 => {
            let src = image.to_gray_image().ok_or_else(mismatch)?;
            PixelBuffer::from_gray_image(image::imageops::resize(
                &src,
                width,
                height,
                filter.to_image_filter(),
            ))
        }
        PixelFormat::Rgb8 => {
            let src = image.to_rgb_image().ok_or_else(mismatch)?;
            PixelBuffer::from_rgb_image(image::imageops::resize(
                &src,
                width,
                height,
                filter.to_image_filter(),
            ))
        }
    };

    Ok(resized)
}

/// Side of the square working buffer for a frequency operation: the smallest
/// power of two that is at least `max(width, height)`.
///
/// An exact power of two maps to itself.
pub fn working_size(width: u32, height: u32) -> u32 {
    width.max(height).max(1).next_power_of_two()
}

/// Resize to the power-of-two square returned by [`working_size`], using
/// nearest-neighbor sampling.
pub fn resize_to_working_square(image: &PixelBuffer) -> FilterResult<PixelBuffer> {
    let side = working_size(image.width, image.height);
    resize(image, side, side, ResizeFilter::Nearest)
}
