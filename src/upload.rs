//! Multipart form extraction and temporary upload storage.
//!
//! The first file part of a request is streamed into a `classify-upload-*`
//! temp file. Ownership of that file passes to the handler through
//! [`UploadedFile`]; if the request fails before the handler gets it, the
//! file is removed when the value is dropped.

use std::io::Write;
use std::path::{Path, PathBuf};

use actix_multipart::{Field, Multipart};
use actix_web::http::header;
use actix_web::{web, HttpRequest};
use futures_util::StreamExt;
use tempfile::{Builder, TempPath};
use tracing::{debug, warn};

use crate::error::{AppError, Result};

pub const UPLOAD_PREFIX: &str = "classify-upload-";
pub const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub max_file_bytes: usize,
}

#[derive(Debug)]
pub struct UploadedFile {
    pub field_name: String,
    pub file_name: String,
    pub content_type: Option<String>,
    pub size: usize,
    temp_path: TempPath,
}

impl UploadedFile {
    pub fn path(&self) -> &Path {
        &self.temp_path
    }
}

/// Fields of a classification request. Everything is optional.
#[derive(Debug, Default)]
pub struct ClassifyForm {
    pub tags: Option<String>,
    pub metadata: Option<String>,
    pub request_id: Option<String>,
    pub file: Option<UploadedFile>,
}

impl ClassifyForm {
    /// Caller-supplied request id. An empty string counts as absent.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// What happened when the handler tried to remove an upload.
#[derive(Debug)]
pub enum CleanupOutcome {
    Deleted { path: PathBuf },
    Failed { path: PathBuf, reason: String },
}

pub fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().to_ascii_lowercase().starts_with("multipart/"))
        .unwrap_or(false)
}

pub async fn read_form(
    req: &HttpRequest,
    payload: web::Payload,
    settings: &UploadSettings,
) -> Result<ClassifyForm> {
    let mut form = ClassifyForm::default();
    if !is_multipart(req) {
        debug!("request body is not multipart, treating as empty form");
        return Ok(form);
    }

    let mut multipart = Multipart::new(req.headers(), payload);
    while let Some(item) = multipart.next().await {
        let mut field = item?;
        let disposition = field.content_disposition().clone();
        let name = disposition.get_name().unwrap_or_default().to_owned();

        if let Some(file_name) = disposition.get_filename() {
            if form.file.is_some() {
                warn!(field = %name, file_name, "ignoring additional file part");
                drain(&mut field).await?;
                continue;
            }
            let file = store_file(&mut field, name, file_name.to_owned(), settings).await?;
            form.file = Some(file);
            continue;
        }

        match name.as_str() {
            "tags" => form.tags = Some(read_text(&mut field, &name).await?),
            "metadata" => form.metadata = Some(read_text(&mut field, &name).await?),
            "request_id" => form.request_id = Some(read_text(&mut field, &name).await?),
            _ => {
                debug!(field = %name, "ignoring unknown form field");
                drain(&mut field).await?;
            }
        }
    }

    Ok(form)
}

async fn store_file(
    field: &mut Field,
    field_name: String,
    file_name: String,
    settings: &UploadSettings,
) -> Result<UploadedFile> {
    let content_type = field
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let dir = settings.dir.clone();
    let mut file = web::block(move || Builder::new().prefix(UPLOAD_PREFIX).tempfile_in(dir)).await??;

    let mut size = 0usize;
    while let Some(chunk) = field.next().await {
        let data = chunk?;
        size += data.len();
        if size > settings.max_file_bytes {
            return Err(AppError::TooLarge {
                field: field_name,
                limit: settings.max_file_bytes,
            });
        }
        file = web::block(move || file.write_all(&data).map(|_| file)).await??;
    }

    Ok(UploadedFile {
        field_name,
        file_name,
        content_type,
        size,
        temp_path: file.into_temp_path(),
    })
}

async fn read_text(field: &mut Field, name: &str) -> Result<String> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        let data = chunk?;
        if buf.len() + data.len() > MAX_TEXT_FIELD_BYTES {
            return Err(AppError::TooLarge {
                field: name.to_owned(),
                limit: MAX_TEXT_FIELD_BYTES,
            });
        }
        buf.extend_from_slice(&data);
    }
    String::from_utf8(buf).map_err(|_| AppError::InvalidText(name.to_owned()))
}

async fn drain(field: &mut Field) -> Result<()> {
    while let Some(chunk) = field.next().await {
        chunk?;
    }
    Ok(())
}

/// Delete an upload, reporting rather than propagating failure.
pub async fn discard_upload(file: UploadedFile) -> CleanupOutcome {
    let path = file.path().to_path_buf();
    match web::block(move || file.temp_path.close()).await {
        Ok(Ok(())) => CleanupOutcome::Deleted { path },
        Ok(Err(err)) => CleanupOutcome::Failed {
            path,
            reason: err.to_string(),
        },
        Err(err) => CleanupOutcome::Failed {
            path,
            reason: err.to_string(),
        },
    }
}
