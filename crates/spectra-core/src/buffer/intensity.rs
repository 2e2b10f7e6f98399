//! Intensity (gray level) calculation from RGB.
//!
//! Uses the integer weighting `(11 R + 16 G + 5 B) / 32`, which is what every
//! filter here means by "the intensity of a pixel".

/// Weight of the red channel, out of [`INTENSITY_DIVISOR`].
pub const INTENSITY_R: u32 = 11;

/// Weight of the green channel, out of [`INTENSITY_DIVISOR`].
pub const INTENSITY_G: u32 = 16;

/// Weight of the blue channel, out of [`INTENSITY_DIVISOR`].
pub const INTENSITY_B: u32 = 5;

/// Sum of the channel weights.
pub const INTENSITY_DIVISOR: u32 = 32;

/// Calculate the 8-bit intensity of an RGB pixel.
///
/// Integer arithmetic, truncating.
#[inline]
pub fn intensity_u8(r: u8, g: u8, b: u8) -> u8 {
    let sum = INTENSITY_R * r as u32 + INTENSITY_G * g as u32 + INTENSITY_B * b as u32;
    (sum / INTENSITY_DIVISOR) as u8
}
