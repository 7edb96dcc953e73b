//! Dataset loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the reference dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset file not found: {0}")]
    NotFound(PathBuf),

    #[error("Malformed CSV at line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("Dataset contains no records")]
    Empty,
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            if let csv::ErrorKind::Io(io) = err.into_kind() {
                return DatasetError::Io(io);
            }
            return DatasetError::Csv {
                line: 0,
                message: "unreadable input".to_string(),
            };
        }

        DatasetError::Csv {
            line: err.position().map(|p| p.line()).unwrap_or(0),
            message: err.to_string(),
        }
    }
}
