// src/io/error.rs
use crate::math::error::MathError;
use std::path::PathBuf;
use thiserror::Error;

/// Fehler beim Lesen und Schreiben von Diagramm-Dateien.
///
/// `Json` only arises from JSON configs and `--json` record export.
#[derive(Error, Debug)]
pub enum DiagramIoError {
    #[error("Failed to {action} '{}': {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Math(#[from] MathError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type IoResult<T> = Result<T, DiagramIoError>;
