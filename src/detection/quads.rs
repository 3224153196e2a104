use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point;

use crate::models::{BoundingBox, Contour, PlateCandidate};

/// Approximation tolerance as a fraction of the closed perimeter
const EPSILON_FRACTION: f64 = 0.02;

/// Approximate a contour to a polygon using Douglas-Peucker
pub fn approximate_polygon(contour: &Contour) -> Vec<Point<i32>> {
    let epsilon = EPSILON_FRACTION * contour.perimeter();
    approximate_polygon_dp(&contour.points, epsilon, true)
}

/// Select the first contour, in the given order, whose approximated polygon
/// has exactly four vertices and whose bounding box starts below the top
/// exclusion band. Later candidates never override an accepted one.
pub fn select_candidate(
    contours: &[Contour],
    image_height: u32,
    exclusion_band: f32,
) -> Option<PlateCandidate> {
    let band_floor = (image_height as f32 * exclusion_band) as u32;

    for contour in contours {
        let corners = approximate_polygon(contour);
        if corners.len() != 4 {
            continue;
        }

        let Some(bbox) = BoundingBox::enclosing(&corners) else {
            continue;
        };

        if bbox.y > band_floor {
            return Some(PlateCandidate { corners, bbox });
        }
    }

    None
}
