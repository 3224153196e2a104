pub mod detection;
pub mod models;
pub mod render;
pub mod server;

pub use detection::{DetectionOutcome, PlateDetector, PlateRegion};
pub use models::{BoundingBox, Contour, PlateCandidate, ScanStatus, TextFragment};
