//! In-place 2D Fast Fourier Transform over a [`ComplexBuffer`].
//!
//! # Algorithm
//!
//! Row-column decomposition: a 1D transform over every row, then over every
//! column. Each 1D transform is an iterative radix-2 Cooley-Tukey butterfly
//! preceded by a bit-reversal permutation, with twiddle factors taken from a
//! per-length table.
//!
//! # Scaling convention
//!
//! The forward transform divides every output sample by `width * height`
//! (each 1D forward pass divides by its length); the inverse transform is
//! unscaled. The zero-frequency term of a forward transform is therefore the
//! mean of the input, and `inverse(forward(b)) == b`.
//!
//! The forward kernel is `exp(-2πi·k·n/N)`, the inverse `exp(+2πi·k·n/N)`.

use std::f64::consts::PI;

use num_complex::Complex64;
use tracing::trace;

use super::ComplexBuffer;
use crate::error::{FilterError, FilterResult};
use crate::parallel::for_each_row;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Spatial to frequency domain (scaled by `1/N`).
    Forward,
    /// Frequency to spatial domain (unscaled).
    Inverse,
}

impl Direction {
    /// Conventional direction flag: `+1` forward, `-1` inverse.
    pub fn flag(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Inverse => -1,
        }
    }

    /// Sign of the exponent in the transform kernel.
    fn exponent_sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

/// Precomputed twiddle table for one power-of-two length and direction.
struct Radix2Plan {
    len: usize,
    twiddles: Vec<Complex64>,
    scale: f64,
}

impl Radix2Plan {
    fn new(len: usize, direction: Direction) -> Self {
        let step = direction.exponent_sign() * 2.0 * PI / len as f64;
        let twiddles = (0..len / 2)
            .map(|k| Complex64::from_polar(1.0, step * k as f64))
            .collect();
        let scale = match direction {
            Direction::Forward => 1.0 / len as f64,
            Direction::Inverse => 1.0,
        };
        Self {
            len,
            twiddles,
            scale,
        }
    }

    /// Transform `data` in place. `data.len()` must equal the plan length.
    fn process(&self, data: &mut [Complex64]) {
        debug_assert_eq!(data.len(), self.len);
        let n = self.len;
        if n <= 1 {
            return;
        }

        bit_reverse_permute(data);

        let mut size = 2;
        while size <= n {
            let half = size / 2;
            let stride = n / size;
            for start in (0..n).step_by(size) {
                for k in 0..half {
                    let w = self.twiddles[k * stride];
                    let a = data[start + k];
                    let b = data[start + k + half] * w;
                    data[start + k] = a + b;
                    data[start + k + half] = a - b;
                }
            }
            size <<= 1;
        }

        if self.scale != 1.0 {
            for c in data.iter_mut() {
                *c *= self.scale;
            }
        }
    }
}

/// Reorder `data` by bit-reversed index. Length must be a power of two >= 2.
fn bit_reverse_permute(data: &mut [Complex64]) {
    let n = data.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if j > i {
            data.swap(i, j);
        }
    }
}

/// Transform a 1D sequence in place.
///
/// # Errors
///
/// Returns `FilterError::InvalidDimension` if the length is not a power of two.
pub fn fft1d(data: &mut [Complex64], direction: Direction) -> FilterResult<()> {
    if !data.len().is_power_of_two() {
        return Err(FilterError::InvalidDimension {
            width: data.len(),
            height: 1,
        });
    }
    Radix2Plan::new(data.len(), direction).process(data);
    Ok(())
}

/// Transform a buffer in place: every row, then every column.
///
/// # Errors
///
/// Returns `FilterError::InvalidDimension` if either side is not a power of
/// two. The buffer is left untouched in that case.
pub fn fft2d(buffer: &mut ComplexBuffer, direction: Direction) -> FilterResult<()> {
    let (width, height) = (buffer.width(), buffer.height());
    if !buffer.has_power_of_two_dims() {
        return Err(FilterError::InvalidDimension { width, height });
    }

    trace!(width, height, dir = direction.flag(), "fft2d");

    let row_plan = Radix2Plan::new(width, direction);
    for_each_row(buffer.samples_mut(), width, |_, row| row_plan.process(row));

    // Columns are gathered into one scratch buffer, transformed, scattered back
    let col_plan = Radix2Plan::new(height, direction);
    let mut column = vec![Complex64::new(0.0, 0.0); height];
    let samples = buffer.samples_mut();
    for x in 0..width {
        for (y, c) in column.iter_mut().enumerate() {
            *c = samples[y * width + x];
        }
        col_plan.process(&mut column);
        for (y, c) in column.iter().enumerate() {
            samples[y * width + x] = *c;
        }
    }

    Ok(())
}

/// Forward 2D transform (scaled by `1 / (width * height)`).
pub fn forward_fft2d(buffer: &mut ComplexBuffer) -> FilterResult<()> {
    fft2d(buffer, Direction::Forward)
}

/// Inverse 2D transform (unscaled).
pub fn inverse_fft2d(buffer: &mut ComplexBuffer) -> FilterResult<()> {
    fft2d(buffer, Direction::Inverse)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for power-of-two sides (1..=64) and matching sample values.
    fn buffer_strategy() -> impl Strategy<Value = ComplexBuffer> {
        (0u32..=6, 0u32..=6).prop_flat_map(|(wx, hx)| {
            let (w, h) = (1usize << wx, 1usize << hx);
            prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), w * h).prop_map(
                move |values| {
                    let data = values
                        .into_iter()
                        .map(|(re, im)| Complex64::new(re, im))
                        .collect();
                    ComplexBuffer::from_samples(w, h, data).unwrap()
                },
            )
        })
    }

    proptest! {
        /// Property: inverse(forward(b)) reproduces b.
        #[test]
        fn prop_round_trip(input in buffer_strategy()) {
            let mut buf = input.clone();
            forward_fft2d(&mut buf).unwrap();
            inverse_fft2d(&mut buf).unwrap();

            for (a, b) in buf.samples().iter().zip(input.samples()) {
                let tol = 1e-9 * b.norm().max(1.0);
                prop_assert!((a - b).norm() <= tol, "{} vs {}", a, b);
            }
        }

        /// Property: forward DC term equals the mean of the input.
        #[test]
        fn prop_dc_is_mean(input in buffer_strategy()) {
            let n = input.samples().len() as f64;
            let mean: Complex64 = input.samples().iter().sum::<Complex64>() / n;

            let mut buf = input;
            forward_fft2d(&mut buf).unwrap();
            prop_assert!((buf.get(0, 0) - mean).norm() < 1e-9 * mean.norm().max(1.0));
        }
    }
}
