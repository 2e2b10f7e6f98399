//! 3x3 spatial convolution over 8-bit intensity: Sobel and Prewitt edge
//! detection, and box blur.
//!
//! # Processed region
//!
//! Output pixel `(x, y)` is computed for `1 <= x < width - 2` and
//! `1 <= y < height - 2`. That excludes the one-pixel border and also the
//! second-to-last row and column. Pixels outside the processed region are
//! written as 0, but that value is not part of the contract: callers must
//! not rely on border content.
//!
//! RGB input is reduced to intensity first; output is always Gray8. A
//! buffer whose pixel data does not match its dimensions yields an all-zero
//! output.

mod kernel;

pub use kernel::{
    correlate, Kernel3, KernelKind, ThresholdPolicy, PREWITT_X, PREWITT_Y, SOBEL_X, SOBEL_Y,
};

use tracing::{debug, warn};

use crate::buffer::{PixelBuffer, PixelFormat};
use crate::parallel::for_each_row;

/// Convolve an image with a fixed kernel.
///
/// For Sobel and Prewitt, the output is `ceil(sqrt(Gx² + Gy²))` passed
/// through `policy` with `[min_threshold, max_threshold]`. For blur it is the
/// truncated mean of the neighborhood and the thresholds are ignored.
pub fn convolve(
    image: &PixelBuffer,
    kernel: KernelKind,
    min_threshold: i32,
    max_threshold: i32,
    policy: ThresholdPolicy,
) -> PixelBuffer {
    let (width, height) = (image.width as usize, image.height as usize);
    debug!(
        width,
        height,
        ?kernel,
        min_threshold,
        max_threshold,
        ?policy,
        "convolve"
    );

    let mut output = vec![0u8; width * height];
    if !image.is_well_formed() {
        warn!(
            width,
            height,
            len = image.pixels.len(),
            "pixel data does not match dimensions"
        );
        return PixelBuffer {
            width: image.width,
            height: image.height,
            format: PixelFormat::Gray8,
            pixels: output,
        };
    }

    let plane = image.intensities();
    let gradients = kernel.gradient_pair();

    for_each_row(&mut output, width, |y, row| {
        if y < 1 || y + 2 >= height {
            return;
        }
        for (x, out) in row.iter_mut().enumerate().take(width.saturating_sub(2)).skip(1) {
            let window = neighborhood(&plane, width, x, y);
            *out = match gradients {
                Some((kx, ky)) => {
                    let gx = correlate(kx, &window);
                    let gy = correlate(ky, &window);
                    let magnitude = ((gx * gx + gy * gy) as f64).sqrt().ceil() as i32;
                    policy.apply(magnitude, min_threshold, max_threshold)
                }
                None => (window.iter().flatten().sum::<i32>() / 9) as u8,
            };
        }
    });

    PixelBuffer {
        width: image.width,
        height: image.height,
        format: PixelFormat::Gray8,
        pixels: output,
    }
}

/// Sobel edge magnitude with hard-zero thresholds.
pub fn sobel_filter(image: &PixelBuffer, min_threshold: i32, max_threshold: i32) -> PixelBuffer {
    convolve(
        image,
        KernelKind::Sobel,
        min_threshold,
        max_threshold,
        ThresholdPolicy::HardZero,
    )
}

/// Prewitt edge magnitude with hard-zero thresholds.
pub fn prewitt_filter(image: &PixelBuffer, min_threshold: i32, max_threshold: i32) -> PixelBuffer {
    convolve(
        image,
        KernelKind::Prewitt,
        min_threshold,
        max_threshold,
        ThresholdPolicy::HardZero,
    )
}

/// 3x3 box blur.
pub fn blur(image: &PixelBuffer) -> PixelBuffer {
    convolve(image, KernelKind::Blur, 0, 255, ThresholdPolicy::HardZero)
}

/// The 3x3 window around `(x, y)`; caller guarantees it is in bounds.
#[inline]
fn neighborhood(plane: &[u8], width: usize, x: usize, y: usize) -> [[i32; 3]; 3] {
    let mut window = [[0i32; 3]; 3];
    for (dy, window_row) in window.iter_mut().enumerate() {
        let base = (y + dy - 1) * width + x - 1;
        for (dx, v) in window_row.iter_mut().enumerate() {
            *v = plane[base + dx] as i32;
        }
    }
    window
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, value: u8) -> PixelBuffer {
        PixelBuffer::gray(width, height, vec![value; (width * height) as usize]).unwrap()
    }

    /// Left half `low`, right half `high`.
    fn step_edge(width: u32, height: u32, low: u8, high: u8) -> PixelBuffer {
        let pixels = (0..height)
            .flat_map(|_| (0..width).map(move |x| if x < width / 2 { low } else { high }))
            .collect();
        PixelBuffer::gray(width, height, pixels).unwrap()
    }

    fn at(img: &PixelBuffer, x: usize, y: usize) -> u8 {
        img.pixels[y * img.width as usize + x]
    }

    fn processed(width: u32, height: u32) -> impl Iterator<Item = (usize, usize)> {
        let (w, h) = (width as usize, height as usize);
        (1..h.saturating_sub(2)).flat_map(move |y| (1..w.saturating_sub(2)).map(move |x| (x, y)))
    }

    #[test]
    fn test_blur_uniform_returns_value() {
        let img = uniform(12, 9, 97);
        let out = blur(&img);
        for (x, y) in processed(12, 9) {
            assert_eq!(at(&out, x, y), 97);
        }
    }

    #[test]
    fn test_blur_truncates_mean() {
        // Single bright pixel: 100 / 9 = 11
        let mut img = uniform(5, 5, 0);
        img.pixels[2 * 5 + 2] = 100;
        let out = blur(&img);
        assert_eq!(at(&out, 2, 2), 11);
        assert_eq!(at(&out, 1, 1), 11);
    }

    #[test]
    fn test_unprocessed_region_is_zero() {
        let out = blur(&uniform(6, 6, 200));
        for y in 0..6 {
            for x in 0..6 {
                let inside = (1..4).contains(&x) && (1..4).contains(&y);
                assert_eq!(at(&out, x, y) != 0, inside, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_output_is_gray() {
        let img = PixelBuffer::rgb(8, 8, vec![50; 8 * 8 * 3]).unwrap();
        let out = sobel_filter(&img, 0, 255);
        assert_eq!(out.format, PixelFormat::Gray8);
        assert_eq!(out.pixels.len(), 64);
    }

    #[test]
    fn test_tiny_images_do_not_panic() {
        for (w, h) in [(0, 0), (1, 1), (2, 2), (3, 3), (1, 10), (10, 1)] {
            let out = blur(&uniform(w, h, 9));
            assert!(out.pixels.iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn test_sobel_step_edge() {
        let img = step_edge(10, 8, 0, 40);
        let out = sobel_filter(&img, 0, 255);
        for y in 1..6 {
            // Columns 4 and 5 straddle the step: 40 * (1 + 2 + 1)
            assert_eq!(at(&out, 4, y), 160);
            assert_eq!(at(&out, 5, y), 160);
            for x in [1, 2, 3, 6, 7] {
                assert_eq!(at(&out, x, y), 0, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_prewitt_step_edge() {
        let img = step_edge(10, 8, 0, 40);
        let out = prewitt_filter(&img, 0, 255);
        for y in 1..6 {
            assert_eq!(at(&out, 4, y), 120);
            assert_eq!(at(&out, 5, y), 120);
            assert_eq!(at(&out, 2, y), 0);
            assert_eq!(at(&out, 7, y), 0);
        }
    }

    #[test]
    fn test_full_contrast_edge_per_policy() {
        // 255 * 4 = 1020 overflows the 8-bit range
        let img = step_edge(10, 8, 0, 255);

        let hard = convolve(&img, KernelKind::Sobel, 0, 255, ThresholdPolicy::HardZero);
        let clamp = convolve(&img, KernelKind::Sobel, 0, 255, ThresholdPolicy::Clamp);

        for y in 1..6 {
            assert_eq!(at(&hard, 4, y), 0);
            assert_eq!(at(&clamp, 4, y), 255);
            assert_eq!(at(&clamp, 5, y), 255);
            assert_eq!(at(&clamp, 2, y), 0);
        }

        // Prewitt: 255 * 3 = 765
        let hard = convolve(&img, KernelKind::Prewitt, 0, 255, ThresholdPolicy::HardZero);
        let clamp = convolve(&img, KernelKind::Prewitt, 0, 255, ThresholdPolicy::Clamp);

        for y in 1..6 {
            for x in 0..10 {
                let on_edge = x == 4 || x == 5;
                assert_eq!(at(&hard, x, y), 0, "({}, {})", x, y);
                assert_eq!(at(&clamp, x, y), if on_edge { 255 } else { 0 }, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_malformed_buffer_gives_blank_output() {
        let img = PixelBuffer {
            width: 8,
            height: 8,
            format: PixelFormat::Gray8,
            pixels: vec![50; 10],
        };
        let out = sobel_filter(&img, 0, 255);
        assert_eq!(out.pixels.len(), 64);
        assert!(out.pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_thresholds_apply_to_edges() {
        let img = step_edge(10, 8, 0, 40);

        // 160 above max
        let hard = convolve(&img, KernelKind::Sobel, 0, 100, ThresholdPolicy::HardZero);
        let clamp = convolve(&img, KernelKind::Sobel, 0, 100, ThresholdPolicy::Clamp);
        assert_eq!(at(&hard, 4, 3), 0);
        assert_eq!(at(&clamp, 4, 3), 255);

        // 160 below min
        let hard = convolve(&img, KernelKind::Sobel, 200, 255, ThresholdPolicy::HardZero);
        let clamp = convolve(&img, KernelKind::Sobel, 200, 255, ThresholdPolicy::Clamp);
        assert_eq!(at(&hard, 4, 3), 0);
        assert_eq!(at(&clamp, 4, 3), 0);
    }

    #[test]
    fn test_diagonal_magnitude_rounds_up() {
        // Bright bottom-right quadrant; the window at (2, 2) is
        // [[0, 0, 0], [0, 10, 10], [0, 10, 10]]
        let pixels = (0..5)
            .flat_map(|y| (0..5).map(move |x| if x >= 2 && y >= 2 { 10 } else { 0 }))
            .collect();
        let img = PixelBuffer::gray(5, 5, pixels).unwrap();

        let window = neighborhood(&img.pixels, 5, 2, 2);
        assert_eq!(correlate(&SOBEL_X, &window), 30);
        assert_eq!(correlate(&SOBEL_Y, &window), 30);

        // sqrt(1800) = 42.43
        let out = sobel_filter(&img, 0, 255);
        assert_eq!(at(&out, 2, 2), 43);
    }
}
