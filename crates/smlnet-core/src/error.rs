use std::path::PathBuf;

use thiserror::Error;

/// Errors from explicit file I/O entry points (site config, saved visitor
/// profiles).
///
/// The consent and language stores never produce this type. Their read
/// paths degrade to "nothing stored" by contract: a malformed cookie or an
/// unrecognized language code is not an error, it is a visitor who has not
/// decided yet.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}
