//! Scan parameters and validation

/// The three user-adjustable pipeline parameters, one set per request.
///
/// Ranges match the UI sliders; values outside them are rejected rather
/// than clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanParams {
    /// Min threshold for Canny edge detection (0-100)
    pub min_threshold: f32,
    /// Max threshold for Canny edge detection (100-300)
    pub max_threshold: f32,
    /// Bilateral filter size (1-20)
    pub filter_size: u32,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            min_threshold: 30.0,
            max_threshold: 200.0,
            filter_size: 11,
        }
    }
}

impl ScanParams {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.min_threshold) {
            return Err(format!(
                "minThreshold must be between 0 and 100, got {}",
                self.min_threshold
            ));
        }

        if !(100.0..=300.0).contains(&self.max_threshold) {
            return Err(format!(
                "maxThreshold must be between 100 and 300, got {}",
                self.max_threshold
            ));
        }

        if !(1..=20).contains(&self.filter_size) {
            return Err(format!(
                "filterSize must be between 1 and 20, got {}",
                self.filter_size
            ));
        }

        // The edge detector requires a strictly increasing threshold pair
        if self.min_threshold >= self.max_threshold {
            return Err(format!(
                "minThreshold ({}) must be below maxThreshold ({})",
                self.min_threshold, self.max_threshold
            ));
        }

        Ok(())
    }
}
