//! Image rotation about the center with nearest-neighbor or bilinear
//! sampling.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each pixel in the output image we
//! compute the source coordinate it came from and sample there. Every output
//! pixel is written once and there are no holes.
//!
//! With pivot `(cx, cy) = (width/2, height/2)` and angle θ:
//! ```text
//! src_x =  (dst_x - cx) * cos θ + (dst_y - cy) * sin θ + cx
//! src_y = -(dst_x - cx) * sin θ + (dst_y - cy) * cos θ + cy
//! ```
//!
//! Output pixels whose source falls outside the image are black. The canvas
//! is not expanded: the output has the input's dimensions.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::buffer::PixelBuffer;
use crate::parallel::for_each_row;

/// Sampling method for rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    /// Truncate the source coordinate to the containing pixel.
    #[default]
    Nearest,
    /// Distance-weighted blend of the four surrounding pixels.
    Bilinear,
}

/// Sine and cosine of an angle in degrees, exact at multiples of 90.
///
/// The angle is reduced into `[0, 360)` first, so 360 behaves like 0.
pub fn sin_cos_degrees(angle_degrees: f64) -> (f64, f64) {
    let normalized = angle_degrees.rem_euclid(360.0);
    match normalized {
        a if a == 0.0 => (0.0, 1.0),
        a if a == 90.0 => (1.0, 0.0),
        a if a == 180.0 => (0.0, -1.0),
        a if a == 270.0 => (-1.0, 0.0),
        a => a.to_radians().sin_cos(),
    }
}

/// Rotate an image by `angle_degrees` about its center.
///
/// The output has the same dimensions and format as the input; pixels that
/// map outside the source are black. A buffer whose pixel data does not
/// match its dimensions rotates to all black.
pub fn rotate(image: &PixelBuffer, angle_degrees: f64, mode: InterpolationMode) -> PixelBuffer {
    let mut output = PixelBuffer::black(image.width, image.height, image.format);
    if image.is_empty() {
        return output;
    }
    if !image.is_well_formed() {
        warn!(
            width = image.width,
            height = image.height,
            len = image.pixels.len(),
            "pixel data does not match dimensions"
        );
        return output;
    }

    let (sin, cos) = sin_cos_degrees(angle_degrees);
    debug!(
        width = image.width,
        height = image.height,
        angle_degrees,
        ?mode,
        "rotate"
    );

    let (w, h) = (image.width as f64, image.height as f64);
    let pivot_x = (image.width / 2) as f64;
    let pivot_y = (image.height / 2) as f64;
    let ch = image.channels();
    let row_len = image.width as usize * ch;

    for_each_row(&mut output.pixels, row_len, |dst_y, row| {
        let dy = dst_y as f64 - pivot_y;
        for (dst_x, out) in row.chunks_exact_mut(ch).enumerate() {
            let dx = dst_x as f64 - pivot_x;
            let src_x = dx * cos + dy * sin + pivot_x;
            let src_y = -dx * sin + dy * cos + pivot_y;

            if !(src_x >= 0.0 && src_x < w && src_y >= 0.0 && src_y < h) {
                continue;
            }

            let pixel = match mode {
                InterpolationMode::Nearest => sample_nearest(image, src_x, src_y),
                InterpolationMode::Bilinear => sample_bilinear(image, src_x, src_y),
            };
            out.copy_from_slice(&pixel[..ch]);
        }
    });

    output
}

/// Sample the pixel containing `(x, y)`. Caller guarantees it is in bounds.
#[inline]
fn sample_nearest(image: &PixelBuffer, x: f64, y: f64) -> [u8; 3] {
    image.rgb_at(x as usize, y as usize)
}

/// Sample with bilinear interpolation of the four pixels around `(x, y)`,
/// each channel independently.
///
/// Falls back to nearest sampling when the right or bottom neighbor is
/// outside the image.
fn sample_bilinear(image: &PixelBuffer, x: f64, y: f64) -> [u8; 3] {
    let x0 = x as usize;
    let y0 = y as usize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    if x1 >= image.width as usize || y1 >= image.height as usize {
        return sample_nearest(image, x, y);
    }

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = image.rgb_at(x0, y0);
    let p10 = image.rgb_at(x1, y0);
    let p01 = image.rgb_at(x0, y1);
    let p11 = image.rgb_at(x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] as f64 * (1.0 - fx) * (1.0 - fy)
            + p10[i] as f64 * fx * (1.0 - fy)
            + p01[i] as f64 * (1.0 - fx) * fy
            + p11[i] as f64 * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}
