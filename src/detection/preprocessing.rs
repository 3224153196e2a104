use image::{DynamicImage, GrayImage};
use imageproc::edges::canny;
use imageproc::filter::bilateral_filter;

/// Fixed color/space sigmas for the bilateral filter
const BILATERAL_SIGMA: f32 = 17.0;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Apply edge-preserving bilateral smoothing
pub fn smooth(img: &GrayImage, filter_size: u32) -> GrayImage {
    bilateral_filter(img, filter_size, BILATERAL_SIGMA, BILATERAL_SIGMA)
}

/// Detect edges using Canny edge detector
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    canny(img, low_threshold, high_threshold)
}
