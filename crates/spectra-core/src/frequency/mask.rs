//! Distance-based masks over a centered spectrum.
//!
//! A mask zeroes every sample whose Euclidean distance from the buffer center
//! `(width/2, height/2)` fails the mask's predicate:
//!
//! | Kind      | Zeroed where                          |
//! |-----------|---------------------------------------|
//! | Low-pass  | `d >= radius`                         |
//! | High-pass | `d < radius`                          |
//! | Band-pass | `d < min_radius` or `d > max_radius`  |
//!
//! Radii arrive as percentages and are mapped to pixels with a cubic curve,
//! see [`percent_to_pixel_radius`].

use std::f64::consts::SQRT_2;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::ComplexBuffer;
use crate::parallel::for_each_row;

/// Which band of frequencies a filter keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyFilterKind {
    /// Keep frequencies closer to the center than the radius.
    #[default]
    LowPass,
    /// Keep frequencies at or beyond the radius.
    HighPass,
    /// Keep frequencies between the two radii (inclusive).
    BandPass,
}

/// Map a radius percentage to a pixel distance for a square spectrum of
/// side `side`.
///
/// `(percent / 100)^3 * (side / 2) * sqrt(2)`. 100% is the half-diagonal.
/// The cubic curve spends most of the percentage range on small radii,
/// where the visible effect changes fastest. `percent` is clamped to
/// `[0, 100]`.
pub fn percent_to_pixel_radius(percent: f64, side: usize) -> f64 {
    let fraction = percent.clamp(0.0, 100.0) / 100.0;
    fraction.powi(3) * (side / 2) as f64 * SQRT_2
}

/// Distance of `(x, y)` from the center `(width/2, height/2)`.
#[inline]
pub fn center_distance(x: usize, y: usize, width: usize, height: usize) -> f64 {
    let dx = x as f64 - (width / 2) as f64;
    let dy = y as f64 - (height / 2) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// A frequency mask with radii in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrequencyMask {
    LowPass { radius: f64 },
    HighPass { radius: f64 },
    BandPass { min_radius: f64, max_radius: f64 },
}

impl FrequencyMask {
    /// Build a mask from radius percentages for a square spectrum of side
    /// `side`. `max_radius_percent` is only used by band-pass.
    pub fn from_percent(
        kind: FrequencyFilterKind,
        radius_percent: f64,
        max_radius_percent: f64,
        side: usize,
    ) -> Self {
        let radius = percent_to_pixel_radius(radius_percent, side);
        match kind {
            FrequencyFilterKind::LowPass => FrequencyMask::LowPass { radius },
            FrequencyFilterKind::HighPass => FrequencyMask::HighPass { radius },
            FrequencyFilterKind::BandPass => FrequencyMask::BandPass {
                min_radius: radius,
                max_radius: percent_to_pixel_radius(max_radius_percent, side),
            },
        }
    }

    /// Whether a sample at `distance` from the center survives.
    #[inline]
    pub fn keeps(&self, distance: f64) -> bool {
        match *self {
            FrequencyMask::LowPass { radius } => distance < radius,
            FrequencyMask::HighPass { radius } => distance >= radius,
            FrequencyMask::BandPass {
                min_radius,
                max_radius,
            } => distance >= min_radius && distance <= max_radius,
        }
    }

    /// Zero (real and imaginary) every sample the mask rejects.
    pub fn apply(&self, buffer: &mut ComplexBuffer) {
        let (width, height) = (buffer.width(), buffer.height());
        for_each_row(buffer.samples_mut(), width, |y, row| {
            for (x, sample) in row.iter_mut().enumerate() {
                if !self.keeps(center_distance(x, y, width, height)) {
                    *sample = Complex64::new(0.0, 0.0);
                }
            }
        });
    }
}
