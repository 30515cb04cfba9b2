//! Artifact read errors.
//!
//! These never leave the artifact reader: each one is converted into the
//! artifact's documented default and kept only as provenance.

use super::error_code::{self, ShipscoreErrorCode};

/// Why a gate artifact could not be used as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {path}")]
    NotFound { path: String },

    #[error("Artifact unreadable: {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Artifact malformed: {path}: {message}")]
    Malformed { path: String, message: String },
}

impl ShipscoreErrorCode for ArtifactError {
    fn error_code(&self) -> &'static str {
        error_code::ARTIFACT_ERROR
    }
}
