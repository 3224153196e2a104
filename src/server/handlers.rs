//! HTTP handlers for the scan UI

use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::detection::{PlateDetector, ocr};
use crate::models::ScanStatus;

use super::AppState;
use super::image_utils;
use super::request::ScanParams;
use super::response::{self, FragmentInfo, ScanResponse, StageImages};

const INDEX_HTML: &str = include_str!("index.html");

/// GET / - the single-page UI
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health - liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/scan - run one full pipeline pass on an uploaded image
///
/// Multipart fields: `image` (required, JPEG/PNG), `minThreshold`,
/// `maxThreshold`, `filterSize` (optional, slider defaults apply).
///
/// # Errors
/// - 400 Bad Request: missing/undecodable image or out-of-range parameters
/// - 500 Internal Server Error: OCR processing failed
pub async fn scan(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScanResponse>, (StatusCode, String)> {
    let started = Instant::now();

    let mut image_bytes: Option<Vec<u8>> = None;
    let mut params = ScanParams::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
        // Field readers consume the field, so take the name first
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                image_bytes = Some(field.bytes().await.map_err(bad_request)?.to_vec());
            }
            "minThreshold" => {
                params.min_threshold = field
                    .text()
                    .await
                    .map_err(bad_request)?
                    .parse()
                    .map_err(bad_request)?;
            }
            "maxThreshold" => {
                params.max_threshold = field
                    .text()
                    .await
                    .map_err(bad_request)?
                    .parse()
                    .map_err(bad_request)?;
            }
            "filterSize" => {
                params.filter_size = field
                    .text()
                    .await
                    .map_err(bad_request)?
                    .parse()
                    .map_err(bad_request)?;
            }
            _ => {}
        }
    }

    let Some(bytes) = image_bytes else {
        return Err((StatusCode::BAD_REQUEST, "image field is required".to_string()));
    };

    params
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

    let img = image_utils::decode_upload(&bytes).map_err(|e| {
        warn!("failed to decode upload: {}", e);
        (StatusCode::BAD_REQUEST, format!("Invalid image: {}", e))
    })?;

    debug!(
        width = img.width(),
        height = img.height(),
        "upload decoded"
    );

    let detector = PlateDetector::new()
        .with_thresholds(params.min_threshold, params.max_threshold)
        .with_filter_size(params.filter_size);
    let outcome = detector.detect(&img);

    let (status, text, fragments, plate_image) = match &outcome.plate {
        None => (ScanStatus::NoPlateFound, None, Vec::new(), None),
        Some(region) => {
            let reading = ocr::read_plate(&state.engine, &region.image).map_err(internal_error)?;
            let status = if reading.text.is_some() {
                ScanStatus::TextFound
            } else {
                ScanStatus::NoReadableText
            };
            let plate_png = image_utils::png_data_uri(&region.image).map_err(internal_error)?;
            (status, reading.text, reading.fragments, Some(plate_png))
        }
    };

    let stages = StageImages {
        original: image_utils::png_data_uri(&img).map_err(internal_error)?,
        grayscale: image_utils::png_data_uri(&DynamicImage::ImageLuma8(outcome.grayscale))
            .map_err(internal_error)?,
        edges: image_utils::png_data_uri(&DynamicImage::ImageLuma8(outcome.edges))
            .map_err(internal_error)?,
        outlined: image_utils::png_data_uri(&DynamicImage::ImageRgb8(outcome.outlined))
            .map_err(internal_error)?,
    };

    let elapsed = started.elapsed().as_millis() as u64;
    info!(
        status = response::status_label(status),
        elapsed_ms = elapsed,
        "scan complete"
    );

    Ok(Json(ScanResponse {
        status: response::status_label(status),
        message: response::status_message(status),
        text,
        fragments: fragments.iter().map(FragmentInfo::from).collect(),
        stages,
        plate_image,
        processing_time_ms: elapsed,
    }))
}

fn bad_request<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, e.to_string())
}

fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    warn!("scan failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
