use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("EPUB packaging error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Download error: {0}")]
    Download(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
