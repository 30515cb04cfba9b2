//! Pipeline errors.

use super::{ConfigError, OutputError, ShipscoreErrorCode};

/// Errors that can abort a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl ShipscoreErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
        }
    }
}
