//! Scan response types

use serde::Serialize;

use crate::models::{ScanStatus, TextFragment};

/// Bounding box of a text fragment, in crop coordinates
#[derive(Debug, Clone, Serialize)]
pub struct FragmentBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A recognized text fragment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentInfo {
    pub text: String,
    pub confidence: f32,
    pub bounding_box: FragmentBox,
}

impl From<&TextFragment> for FragmentInfo {
    fn from(fragment: &TextFragment) -> Self {
        Self {
            text: fragment.text.clone(),
            confidence: fragment.confidence,
            bounding_box: FragmentBox {
                x: fragment.bbox.x,
                y: fragment.bbox.y,
                width: fragment.bbox.width,
                height: fragment.bbox.height,
            },
        }
    }
}

/// Stage images as PNG data URIs, in pipeline order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageImages {
    pub original: String,
    pub grayscale: String,
    pub edges: String,
    pub outlined: String,
}

/// Response for one scan
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    /// One of "text_found", "no_readable_text", "no_plate_found"
    pub status: &'static str,
    /// Informational message for the two "not found" states
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// Fragment texts joined with single spaces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub fragments: Vec<FragmentInfo>,
    pub stages: StageImages,
    /// Cropped plate region, when one was selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_image: Option<String>,
    pub processing_time_ms: u64,
}

pub fn status_label(status: ScanStatus) -> &'static str {
    match status {
        ScanStatus::TextFound => "text_found",
        ScanStatus::NoReadableText => "no_readable_text",
        ScanStatus::NoPlateFound => "no_plate_found",
    }
}

pub fn status_message(status: ScanStatus) -> Option<&'static str> {
    match status {
        ScanStatus::TextFound => None,
        ScanStatus::NoReadableText => Some("No readable text detected on the plate."),
        ScanStatus::NoPlateFound => {
            Some("No number plate detected from the lower 70% of the image.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BoundingBox;

    #[test]
    fn fragment_info_conversion() {
        let fragment = TextFragment {
            text: "KL 01 AB 1234".to_string(),
            bbox: BoundingBox {
                x: 4,
                y: 2,
                width: 90,
                height: 20,
            },
            confidence: 0.9,
        };

        let info = FragmentInfo::from(&fragment);
        assert_eq!(info.text, "KL 01 AB 1234");
        assert_eq!(info.bounding_box.x, 4);
        assert_eq!(info.bounding_box.height, 20);
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = ScanResponse {
            status: status_label(ScanStatus::NoPlateFound),
            message: status_message(ScanStatus::NoPlateFound),
            text: None,
            fragments: vec![],
            stages: StageImages {
                original: "o".into(),
                grayscale: "g".into(),
                edges: "e".into(),
                outlined: "d".into(),
            },
            plate_image: None,
            processing_time_ms: 12,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "no_plate_found");
        assert_eq!(json["processingTimeMs"], 12);
        assert!(json.get("text").is_none());
        assert!(json.get("plateImage").is_none());
    }

    #[test]
    fn status_messages_cover_not_found_states() {
        assert!(status_message(ScanStatus::TextFound).is_none());
        assert!(
            status_message(ScanStatus::NoPlateFound)
                .unwrap()
                .contains("lower 70%")
        );
        assert!(
            status_message(ScanStatus::NoReadableText)
                .unwrap()
                .contains("readable text")
        );
    }
}
