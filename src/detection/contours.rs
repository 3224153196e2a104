use image::GrayImage;
use imageproc::contours::find_contours;

use crate::models::Contour;

/// Extract all contours from a binary edge image.
///
/// The full hierarchy is retained: outer borders and hole borders both
/// become candidates.
pub fn extract_contours(edges: &GrayImage) -> Vec<Contour> {
    find_contours::<i32>(edges)
        .into_iter()
        .map(|c| Contour::new(c.points))
        .collect()
}

/// Keep the `limit` largest contours by enclosed area, in descending order
pub fn largest_by_area(mut contours: Vec<Contour>, limit: usize) -> Vec<Contour> {
    contours.sort_by(|a, b| b.area().total_cmp(&a.area()));
    contours.truncate(limit);
    contours
}
