//! Pixel buffers: the boundary type every operation consumes and produces.
//!
//! This module provides:
//! - [`PixelBuffer`], an 8-bit intensity or 24-bit RGB image
//! - Intensity conversion from RGB
//! - Resizing, including the power-of-two square resize used ahead of
//!   every FFT

mod intensity;
mod resize;
mod types;

pub use intensity::{
    intensity_u8, INTENSITY_B, INTENSITY_DIVISOR, INTENSITY_G, INTENSITY_R,
};
pub use resize::{resize, resize_to_working_square, working_size};
pub use types::{PixelBuffer, PixelFormat, ResizeFilter};
