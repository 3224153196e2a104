use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Dark scene with a single bright filled rectangle
pub fn scene_with_rectangle(width: u32, height: u32, rect: Rect) -> DynamicImage {
    let mut img = RgbImage::from_pixel(width, height, Rgb([24, 24, 24]));
    draw_filled_rect_mut(&mut img, rect, Rgb([235, 235, 235]));
    DynamicImage::ImageRgb8(img)
}

/// Scene with nothing in it
pub fn blank_scene(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([24, 24, 24])))
}
