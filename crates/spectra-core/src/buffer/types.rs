//! Core pixel buffer types.

use serde::{Deserialize, Serialize};

use super::intensity::intensity_u8;
use crate::error::{FilterError, FilterResult};

/// Sample layout of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// Single-channel 8-bit intensity.
    #[default]
    Gray8,
    /// Packed 24-bit RGB (3 bytes per pixel).
    Rgb8,
}

impl PixelFormat {
    /// Number of bytes per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb8 => 3,
        }
    }
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeFilter {
    /// Nearest neighbor sampling (fastest, used by the frequency pipeline).
    #[default]
    Nearest,
    /// Bilinear interpolation.
    Bilinear,
    /// Lanczos3 interpolation (slowest, highest quality).
    Lanczos3,
}

impl ResizeFilter {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Bilinear => image::imageops::FilterType::Triangle,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// A rectangular 8-bit image, either intensity or RGB.
///
/// Pixels are stored row-major. Operations never mutate a caller's buffer;
/// they return a freshly allocated one.
///
/// Fields are public, so prefer [`PixelBuffer::new`] (or `gray`/`rgb`),
/// which checks the data length. Filters check [`is_well_formed`] and
/// treat a mismatched buffer as blank rather than indexing past its data.
///
/// [`is_well_formed`]: PixelBuffer::is_well_formed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Sample layout.
    pub format: PixelFormat,
    /// Pixel data, `width * height * format.channels()` bytes.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, validating the data length against the dimensions.
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> FilterResult<Self> {
        let expected = expected_len(width, height, format);
        if pixels.len() != expected {
            return Err(FilterError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// Create an intensity buffer.
    pub fn gray(width: u32, height: u32, pixels: Vec<u8>) -> FilterResult<Self> {
        Self::new(width, height, PixelFormat::Gray8, pixels)
    }

    /// Create an RGB buffer.
    pub fn rgb(width: u32, height: u32, pixels: Vec<u8>) -> FilterResult<Self> {
        Self::new(width, height, PixelFormat::Rgb8, pixels)
    }

    /// Create a zero-filled (black) buffer.
    pub fn black(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            pixels: vec![0; expected_len(width, height, format)],
        }
    }

    /// Number of bytes per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.format.channels()
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// True when `pixels.len()` equals `width * height * channels`.
    pub fn is_well_formed(&self) -> bool {
        self.pixels.len() == expected_len(self.width, self.height, self.format)
    }

    /// Bytes of the pixel at `(x, y)`; one byte for Gray8, three for Rgb8.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let ch = self.channels();
        let idx = (y * self.width as usize + x) * ch;
        &self.pixels[idx..idx + ch]
    }

    /// Pixel at `(x, y)` expanded to RGB.
    #[inline]
    pub fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        match self.pixel(x, y) {
            [v] => [*v, *v, *v],
            [r, g, b] => [*r, *g, *b],
            _ => unreachable!("pixel slices are 1 or 3 bytes"),
        }
    }

    /// 8-bit intensity of the pixel at `(x, y)`.
    #[inline]
    pub fn intensity_at(&self, x: usize, y: usize) -> u8 {
        match self.pixel(x, y) {
            [v] => *v,
            [r, g, b] => intensity_u8(*r, *g, *b),
            _ => unreachable!("pixel slices are 1 or 3 bytes"),
        }
    }

    /// Intensity plane of the whole image, one byte per pixel.
    pub fn intensities(&self) -> Vec<u8> {
        match self.format {
            PixelFormat::Gray8 => self.pixels.clone(),
            PixelFormat::Rgb8 => self
                .pixels
                .chunks_exact(3)
                .map(|p| intensity_u8(p[0], p[1], p[2]))
                .collect(),
        }
    }

    /// Build a buffer of `format` from an intensity plane, replicating the
    /// intensity across channels for RGB.
    pub fn from_intensities(
        width: u32,
        height: u32,
        format: PixelFormat,
        plane: Vec<u8>,
    ) -> FilterResult<Self> {
        match format {
            PixelFormat::Gray8 => Self::gray(width, height, plane),
            PixelFormat::Rgb8 => {
                let pixels = plane.iter().flat_map(|&v| [v, v, v]).collect();
                Self::rgb(width, height, pixels)
            }
        }
    }

    /// Convert to an image::GrayImage (RGB is reduced to intensity).
    pub fn to_gray_image(&self) -> Option<image::GrayImage> {
        image::GrayImage::from_raw(self.width, self.height, self.intensities())
    }

    /// Convert to an image::RgbImage (intensity is replicated).
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let pixels = match self.format {
            PixelFormat::Rgb8 => self.pixels.clone(),
            PixelFormat::Gray8 => self.pixels.iter().flat_map(|&v| [v, v, v]).collect(),
        };
        image::RgbImage::from_raw(self.width, self.height, pixels)
    }

    /// Create a Gray8 buffer from an image::GrayImage.
    pub fn from_gray_image(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            format: PixelFormat::Gray8,
            pixels: img.into_raw(),
        }
    }

    /// Create an Rgb8 buffer from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            format: PixelFormat::Rgb8,
            pixels: img.into_raw(),
        }
    }
}

fn expected_len(width: u32, height: u32, format: PixelFormat) -> usize {
    width as usize * height as usize * format.channels()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_filter_conversion() {
        assert!(matches!(
            ResizeFilter::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            ResizeFilter::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            ResizeFilter::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_buffer_creation() {
        let img = PixelBuffer::rgb(100, 50, vec![0u8; 100 * 50 * 3]).unwrap();
        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.channels(), 3);
        assert_eq!(img.pixel_count(), 5000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let err = PixelBuffer::gray(4, 4, vec![0u8; 15]).unwrap_err();
        assert_eq!(
            err,
            FilterError::BufferSizeMismatch {
                expected: 16,
                actual: 15
            }
        );

        // An RGB-sized buffer is not a valid gray buffer
        assert!(PixelBuffer::gray(2, 2, vec![0u8; 12]).is_err());
    }

    #[test]
    fn test_empty_buffer() {
        let img = PixelBuffer::gray(0, 0, vec![]).unwrap();
        assert!(img.is_empty());
    }

    #[test]
    fn test_intensity_at_gray_and_rgb() {
        let gray = PixelBuffer::gray(2, 1, vec![10, 200]).unwrap();
        assert_eq!(gray.intensity_at(1, 0), 200);
        assert_eq!(gray.rgb_at(0, 0), [10, 10, 10]);

        let rgb = PixelBuffer::rgb(1, 1, vec![255, 255, 255]).unwrap();
        assert_eq!(rgb.intensity_at(0, 0), 255);
        assert_eq!(rgb.rgb_at(0, 0), [255, 255, 255]);
    }

    #[test]
    fn test_from_intensities_replicates_rgb() {
        let img = PixelBuffer::from_intensities(2, 1, PixelFormat::Rgb8, vec![7, 9]).unwrap();
        assert_eq!(img.pixels, vec![7, 7, 7, 9, 9, 9]);
        assert_eq!(img.intensities(), vec![7, 9]);
    }

    #[test]
    fn test_image_crate_round_trip() {
        let img = PixelBuffer::rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rgb = img.to_rgb_image().unwrap();
        assert_eq!(PixelBuffer::from_rgb_image(rgb), img);

        let gray = PixelBuffer::gray(2, 1, vec![30, 40]).unwrap();
        let luma = gray.to_gray_image().unwrap();
        assert_eq!(PixelBuffer::from_gray_image(luma), gray);
    }

    #[test]
    fn test_is_well_formed() {
        assert!(PixelBuffer::rgb(2, 2, vec![0; 12]).unwrap().is_well_formed());

        let mut img = PixelBuffer::gray(2, 2, vec![0; 4]).unwrap();
        img.pixels.pop();
        assert!(!img.is_well_formed());
    }

    #[test]
    fn test_black_buffer() {
        let img = PixelBuffer::black(3, 2, PixelFormat::Rgb8);
        assert_eq!(img.pixels.len(), 18);
        assert!(img.pixels.iter().all(|&v| v == 0));
    }
}
