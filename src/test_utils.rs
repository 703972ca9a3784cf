//! Test utilities for regiongrow
//!
//! This module provides synthetic image builders shared by the unit
//! tests. It is only compiled when running tests.

use image::Luma;

use crate::Image;

/// Creates a grayscale image with every pixel set to `value`.
pub fn create_uniform_luma_image(width: u32, height: u32, value: u8) -> Image<Luma<u8>> {
    Image::from_pixel(width, height, Luma([value]))
}

/// Creates a 1-pixel-tall strip with the given intensity sequence.
///
/// Growth seeded at (0, 0) absorbs the values strictly left to right,
/// which makes the running-mean recurrence easy to replay in a test.
pub fn create_strip_image(values: &[u8]) -> Image<Luma<u8>> {
    let mut image: Image<Luma<u8>> = Image::new(values.len() as u32, 1);
    for (x, &value) in values.iter().enumerate() {
        image.put_pixel(x as u32, 0, Luma([value]));
    }
    image
}
