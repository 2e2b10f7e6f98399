//! 2D grid of complex samples used during frequency-domain processing.

use num_complex::Complex64;

/// A row-major `width x height` grid of complex samples.
///
/// FFT2D requires both sides to be powers of two; the buffer itself accepts
/// any size so the precondition can be checked (and reported) by the
/// transform.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexBuffer {
    width: usize,
    height: usize,
    data: Vec<Complex64>,
}

impl ComplexBuffer {
    /// Create a zero-filled buffer.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![Complex64::new(0.0, 0.0); width * height],
        }
    }

    /// Create a buffer from row-major samples.
    ///
    /// Returns `None` if `data.len() != width * height`.
    pub fn from_samples(width: usize, height: usize, data: Vec<Complex64>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer by evaluating `f(x, y)` for every sample.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Complex64,
    {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when both sides are powers of two (the FFT2D precondition).
    pub fn has_power_of_two_dims(&self) -> bool {
        self.width.is_power_of_two() && self.height.is_power_of_two()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Complex64 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: Complex64) {
        self.data[y * self.width + x] = value;
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[Complex64] {
        &self.data
    }

    /// All samples, row-major, mutable.
    pub fn samples_mut(&mut self) -> &mut [Complex64] {
        &mut self.data
    }

    /// Iterate over `(x, y, sample)` triples.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, usize, &Complex64)> {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, c)| (i % width, i / width, c))
    }

    /// Largest sample magnitude, or 0 for an empty buffer.
    pub fn max_magnitude(&self) -> f64 {
        self.data.iter().map(|c| c.norm()).fold(0.0, f64::max)
    }
}
