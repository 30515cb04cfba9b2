//! ShipscoreErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string,
/// printed by the CLI next to the human-readable message.
pub trait ShipscoreErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ARTIFACT_ERROR: &str = "ARTIFACT_ERROR";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
pub const RECORD_EXISTS: &str = "RECORD_EXISTS";
