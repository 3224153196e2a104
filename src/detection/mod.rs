pub mod contours;
pub mod ocr;
pub mod preprocessing;
pub mod quads;

use image::{DynamicImage, GrayImage, RgbImage};
use tracing::debug;

use crate::models::PlateCandidate;
use crate::render;

/// Main detection pipeline orchestrator.
///
/// One linear pass per image: grayscale conversion, bilateral smoothing,
/// Canny edge detection, contour ranking, quad/position filtering, crop.
/// `detect` is a pure function of the image and these parameters.
pub struct PlateDetector {
    /// Lower Canny threshold
    pub low_threshold: f32,
    /// Upper Canny threshold
    pub high_threshold: f32,
    /// Bilateral filter window size
    pub filter_size: u32,
    /// How many of the largest contours are considered
    pub max_candidates: usize,
    /// Fraction of the image height excluded at the top
    pub exclusion_band: f32,
}

/// The selected plate region together with its crop from the original image
#[derive(Debug, Clone)]
pub struct PlateRegion {
    pub candidate: PlateCandidate,
    pub image: DynamicImage,
}

/// Every stage image produced by one pipeline pass
pub struct DetectionOutcome {
    pub grayscale: GrayImage,
    pub edges: GrayImage,
    /// Copy of the original with the accepted outline drawn on it
    pub outlined: RgbImage,
    pub plate: Option<PlateRegion>,
}

impl PlateDetector {
    pub fn new() -> Self {
        Self {
            low_threshold: 30.0,
            high_threshold: 200.0,
            filter_size: 11,
            max_candidates: 30,
            exclusion_band: 0.3,
        }
    }

    pub fn with_thresholds(mut self, low: f32, high: f32) -> Self {
        self.low_threshold = low;
        self.high_threshold = high;
        self
    }

    pub fn with_filter_size(mut self, filter_size: u32) -> Self {
        self.filter_size = filter_size;
        self
    }

    /// Run the full detection pipeline on an image
    pub fn detect(&self, img: &DynamicImage) -> DetectionOutcome {
        // Step 1: Preprocess image
        let gray = preprocessing::to_grayscale(img);
        let smoothed = preprocessing::smooth(&gray, self.filter_size);

        // Step 2: Detect edges
        let edges =
            preprocessing::detect_edges(&smoothed, self.low_threshold, self.high_threshold);

        // Step 3: Find contours, largest first
        let all_contours = contours::extract_contours(&edges);
        debug!(total = all_contours.len(), "contours extracted");

        let ranked = contours::largest_by_area(all_contours, self.max_candidates);

        // Step 4: First quad below the exclusion band wins
        let candidate = quads::select_candidate(&ranked, img.height(), self.exclusion_band);
        match &candidate {
            Some(c) => debug!(
                x = c.bbox.x,
                y = c.bbox.y,
                width = c.bbox.width,
                height = c.bbox.height,
                "plate candidate accepted"
            ),
            None => debug!("no plate-shaped contour below the exclusion band"),
        }

        // Step 5: Draw the outline and crop the region
        let outlined = match &candidate {
            Some(c) => render::draw_plate_outline(img, c),
            None => img.to_rgb8(),
        };

        let plate = candidate.map(|candidate| {
            let image = img.crop_imm(
                candidate.bbox.x,
                candidate.bbox.y,
                candidate.bbox.width,
                candidate.bbox.height,
            );
            PlateRegion { candidate, image }
        });

        DetectionOutcome {
            grayscale: gray,
            edges,
            outlined,
            plate,
        }
    }
}

impl Default for PlateDetector {
    fn default() -> Self {
        Self::new()
    }
}
