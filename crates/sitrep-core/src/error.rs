use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SitrepError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to download report: {0}")]
    Http(#[from] reqwest::Error),

    #[error("report source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("no text content found in report")]
    NoText,

    #[error("failed to load layout profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid layout profile: {0}")]
    ProfileInvalid(String),

    #[error("invalid date '{0}' (expected YYYYMMDD)")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
