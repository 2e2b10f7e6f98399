//! Geometric transforms.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees; positive turns the image clockwise on
//!   screen (y grows downward)
//! - The pivot is `(width/2, height/2)` with integer division
//! - Origin is the top-left corner

mod rotation;

pub use rotation::{rotate, sin_cos_degrees, InterpolationMode};
