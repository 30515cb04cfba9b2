//! Error handling for ShipScore.
//! One error enum per subsystem, `thiserror` only.

pub mod artifact_error;
pub mod config_error;
pub mod error_code;
pub mod output_error;
pub mod pipeline_error;

pub use artifact_error::ArtifactError;
pub use config_error::ConfigError;
pub use error_code::ShipscoreErrorCode;
pub use output_error::OutputError;
pub use pipeline_error::PipelineError;
