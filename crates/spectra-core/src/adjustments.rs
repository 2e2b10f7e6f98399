//! Per-channel pixel adjustments.

use tracing::debug;

use crate::buffer::PixelBuffer;

/// Add `offset` to every channel of every pixel, wrapping modulo 256.
///
/// The result keeps the input's format and dimensions. Negative offsets
/// wrap the same way: `(c + offset) & 0xFF`.
///
/// # Example
/// ```
/// use spectra_core::{adjustments::shift_channels, PixelBuffer};
///
/// let img = PixelBuffer::gray(2, 1, vec![10, 250]).unwrap();
/// let shifted = shift_channels(&img, 10);
/// assert_eq!(shifted.pixels, vec![20, 4]);
/// ```
pub fn shift_channels(image: &PixelBuffer, offset: i32) -> PixelBuffer {
    debug!(
        width = image.width,
        height = image.height,
        offset,
        "shift channels"
    );

    let wrapped = offset.rem_euclid(256) as u8;
    let mut output = image.clone();
    if wrapped != 0 {
        for c in output.pixels.iter_mut() {
            *c = c.wrapping_add(wrapped);
        }
    }
    output
}
