use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::models::PlateCandidate;

const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Draw the accepted plate outline on an RGB copy of the original image.
///
/// Each polygon edge is drawn with offset passes to thicken the line to
/// roughly three pixels.
pub fn draw_plate_outline(img: &DynamicImage, candidate: &PlateCandidate) -> RgbImage {
    let mut out = img.to_rgb8();
    let n = candidate.corners.len();

    for i in 0..n {
        let p1 = candidate.corners[i];
        let p2 = candidate.corners[(i + 1) % n];
        let (x1, y1) = (p1.x as f32, p1.y as f32);
        let (x2, y2) = (p2.x as f32, p2.y as f32);

        for offset in -1..=1 {
            let offset = offset as f32;
            draw_line_segment_mut(&mut out, (x1 + offset, y1), (x2 + offset, y2), OUTLINE_COLOR);
            draw_line_segment_mut(&mut out, (x1, y1 + offset), (x2, y2 + offset), OUTLINE_COLOR);
        }
    }

    out
}
