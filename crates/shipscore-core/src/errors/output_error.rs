//! Output persistence errors. All of these are fatal for the invocation.

use std::path::PathBuf;

use super::error_code::{self, ShipscoreErrorCode};

/// Errors raised while writing scores, decision records, or proposals.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },

    #[error("Decision record already exists: {}", path.display())]
    RecordExists { path: PathBuf },
}

impl ShipscoreErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RecordExists { .. } => error_code::RECORD_EXISTS,
            _ => error_code::OUTPUT_ERROR,
        }
    }
}
