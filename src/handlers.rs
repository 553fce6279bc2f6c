use std::time::Duration;

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{info, warn};
use uuid::Uuid;

use crate::app::AppState;
use crate::classifier::ClassifyInput;
use crate::error::Result;
use crate::models::{ClassifyResponse, HealthResponse};
use crate::upload::{self, CleanupOutcome};

/// Latency reported to callers, and slept for, on every classification.
pub const SIMULATED_PROCESSING_MS: u64 = 50;

pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

pub async fn test_classify(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let form = upload::read_form(&req, payload, &state.uploads).await?;

    info!("Received test classification request");
    info!(tags = ?form.tags, metadata = ?form.metadata, "form fields");
    match &form.file {
        Some(file) => info!(
            field = %file.field_name,
            file_name = %file.file_name,
            content_type = ?file.content_type,
            size = file.size,
            path = %file.path().display(),
            "image file"
        ),
        None => info!("no image file attached"),
    }

    actix_rt::time::sleep(Duration::from_millis(SIMULATED_PROCESSING_MS)).await;

    let request_id = form
        .request_id()
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let results = state.classifier.classify(&ClassifyInput {
        image: form.file.as_ref().map(|file| file.path()),
        tags: form.tags.as_deref(),
        metadata: form.metadata.as_deref(),
    });

    if let Some(file) = form.file {
        match upload::discard_upload(file).await {
            CleanupOutcome::Deleted { path } => {
                info!(path = %path.display(), "test file deleted")
            }
            CleanupOutcome::Failed { path, reason } => {
                warn!(path = %path.display(), %reason, "error deleting test file")
            }
        }
    }

    Ok(HttpResponse::Ok().json(ClassifyResponse {
        request_id,
        results,
        processing_time_ms: SIMULATED_PROCESSING_MS,
    }))
}
