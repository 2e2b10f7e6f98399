//! Fixed 3x3 kernels and threshold policies.

use serde::{Deserialize, Serialize};

/// A 3x3 integer kernel, indexed `[row][col]`.
pub type Kernel3 = [[i32; 3]; 3];

/// Sobel horizontal gradient.
pub const SOBEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Sobel vertical gradient.
pub const SOBEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Prewitt horizontal gradient.
pub const PREWITT_X: Kernel3 = [[-1, 0, 1], [-1, 0, 1], [-1, 0, 1]];

/// Prewitt vertical gradient.
pub const PREWITT_Y: Kernel3 = [[-1, -1, -1], [0, 0, 0], [1, 1, 1]];

/// Which fixed kernel a convolution applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    /// Sobel gradient magnitude.
    #[default]
    Sobel,
    /// Prewitt gradient magnitude.
    Prewitt,
    /// Unweighted 3x3 mean. Thresholds do not apply.
    Blur,
}

impl KernelKind {
    /// The `(Kx, Ky)` gradient pair, or `None` for blur.
    pub fn gradient_pair(self) -> Option<(&'static Kernel3, &'static Kernel3)> {
        match self {
            KernelKind::Sobel => Some((&SOBEL_X, &SOBEL_Y)),
            KernelKind::Prewitt => Some((&PREWITT_X, &PREWITT_Y)),
            KernelKind::Blur => None,
        }
    }
}

/// How gradient magnitudes outside `[min, max]` are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// Anything outside `[min, max]`, or above 255, becomes 0.
    #[default]
    HardZero,
    /// Above `max` saturates to 255, below `min` to 0.
    Clamp,
}

impl ThresholdPolicy {
    /// Map a gradient magnitude to an output intensity.
    #[inline]
    pub fn apply(self, magnitude: i32, min: i32, max: i32) -> u8 {
        match self {
            ThresholdPolicy::HardZero => {
                if magnitude > 255 || magnitude < min || magnitude > max {
                    0
                } else {
                    magnitude as u8
                }
            }
            ThresholdPolicy::Clamp => {
                if magnitude > max {
                    255
                } else if magnitude < min {
                    0
                } else {
                    magnitude.clamp(0, 255) as u8
                }
            }
        }
    }
}

/// `Σ kernel · window` over a 3x3 neighborhood.
#[inline]
pub fn correlate(kernel: &Kernel3, window: &[[i32; 3]; 3]) -> i32 {
    let mut sum = 0;
    for row in 0..3 {
        for col in 0..3 {
            sum += kernel[row][col] * window[row][col];
        }
    }
    sum
}
