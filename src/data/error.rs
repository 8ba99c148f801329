use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the (mock) digitization call.
///
/// The stub generator cannot actually fail; the variants exist so the worker
/// channel carries a `Result` and the error path stays exercised.
#[derive(Debug, Error)]
pub enum DigitizeError {
    #[error("processing failed: {0}")]
    Failed(String),
    #[error("digitizer worker disappeared before delivering a result")]
    WorkerGone,
}

/// Rejection reasons from the image acceptance check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("unsupported file type: {}", .path.display())]
    UnsupportedType { path: PathBuf },
    #[error("drop contained no files")]
    Empty,
}
