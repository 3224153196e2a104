use std::path::{Path, PathBuf};

use anyhow::Result;
use image::DynamicImage;
use imageproc::point::Point;
pub use ocrs::{ImageSource, OcrEngine};
use ocrs::{OcrEngineParams, TextItem};
use rten::Model;

use crate::models::{BoundingBox, TextFragment};

// The line-level API does not surface per-line scores, so fragments carry a
// fixed default.
const DEFAULT_CONFIDENCE: f32 = 0.9;

fn models_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    let home_dir = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;

    Ok(Path::new(&home_dir).join(".cache/ocrs"))
}

/// Initialize OCR engine with models from the standard cache location,
/// or from an explicit model directory
pub fn init_ocr_engine(override_dir: Option<&Path>) -> Result<OcrEngine> {
    let cache_dir = models_dir(override_dir)?;
    let detection_model_path = cache_dir.join("text-detection.rten");
    let recognition_model_path = cache_dir.join("text-recognition.rten");

    // Check if models exist
    if !detection_model_path.exists() || !recognition_model_path.exists() {
        anyhow::bail!(
            "OCR models not found. Please run: ocrs-cli --help (or download models manually)\n\
             Expected locations:\n  - {}\n  - {}",
            detection_model_path.display(),
            recognition_model_path.display()
        );
    }

    // Load models
    let detection_model = Model::load_file(&detection_model_path)?;
    let recognition_model = Model::load_file(&recognition_model_path)?;

    // Create engine
    let engine = OcrEngine::new(OcrEngineParams {
        detection_model: Some(detection_model),
        recognition_model: Some(recognition_model),
        ..Default::default()
    })?;

    Ok(engine)
}

/// Result of reading a cropped plate region
#[derive(Debug, Clone)]
pub struct PlateReading {
    /// Fragments in the engine's return order
    pub fragments: Vec<TextFragment>,
    /// Fragment texts joined with single spaces; `None` when nothing was readable
    pub text: Option<String>,
}

/// Recognize text fragments on a cropped plate region.
///
/// One fragment per recognized text line, in return order. Empty lines are
/// dropped.
pub fn recognize_fragments(engine: &OcrEngine, plate: &DynamicImage) -> Result<Vec<TextFragment>> {
    // Convert to RGB8 format for OCR
    let img = plate.to_rgb8();

    let img_source = ImageSource::from_bytes(img.as_raw(), img.dimensions())?;
    let ocr_input = engine.prepare_input(img_source)?;

    let word_rects = engine.detect_words(&ocr_input)?;
    let line_rects = engine.find_text_lines(&ocr_input, &word_rects);
    let lines = engine.recognize_text(&ocr_input, &line_rects)?;

    let mut fragments = Vec::new();
    for line in lines.into_iter().flatten() {
        let text = line.to_string().trim().to_string();
        if text.is_empty() {
            continue;
        }

        let corners: Vec<Point<i32>> = line
            .rotated_rect()
            .corners()
            .iter()
            .map(|c| Point::new(c.x.round() as i32, c.y.round() as i32))
            .collect();

        let Some(bbox) = BoundingBox::enclosing(&corners) else {
            continue;
        };

        fragments.push(TextFragment {
            text,
            bbox,
            confidence: DEFAULT_CONFIDENCE,
        });
    }

    Ok(fragments)
}

/// Join fragment texts in return order with exactly one space between them
pub fn join_fragments(fragments: &[TextFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read a plate crop and reduce the fragments to a single string
pub fn read_plate(engine: &OcrEngine, plate: &DynamicImage) -> Result<PlateReading> {
    let fragments = recognize_fragments(engine, plate)?;
    let text = if fragments.is_empty() {
        None
    } else {
        Some(join_fragments(&fragments))
    };

    Ok(PlateReading { fragments, text })
}
