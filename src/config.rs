//! Command-line and environment configuration

use std::path::PathBuf;

use clap::Parser;

use crate::upload::UploadSettings;

pub const DEFAULT_ROUTE: &str = "/api/test-classify";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Mock image classification service
#[derive(Parser, Debug, Clone)]
#[command(name = "mock-classifier")]
#[command(about = "Mock image classification service returning a fixed report")]
#[command(version)]
pub struct Settings {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "CLASSIFIER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "CLASSIFIER_PORT")]
    pub port: u16,

    /// Path the classification endpoint is mounted on
    #[arg(long, default_value = DEFAULT_ROUTE, env = "CLASSIFIER_ROUTE")]
    pub route: String,

    /// Directory for temporary uploads (defaults to the system temp dir)
    #[arg(long, env = "CLASSIFIER_UPLOAD_DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Largest accepted image upload in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES, env = "CLASSIFIER_MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: usize,

    /// Directory for daily-rolling log files; stdout only when unset
    #[arg(long, env = "CLASSIFIER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    pub fn upload_dir(&self) -> PathBuf {
        self.upload_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn upload_settings(&self) -> UploadSettings {
        UploadSettings {
            dir: self.upload_dir(),
            max_file_bytes: self.max_upload_bytes,
        }
    }

    /// The route with and without a trailing slash.
    pub fn route_patterns(&self) -> Vec<String> {
        let trimmed = self.route.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return vec!["/".to_string()];
        }
        let base = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        vec![base.clone(), format!("{base}/")]
    }
}
