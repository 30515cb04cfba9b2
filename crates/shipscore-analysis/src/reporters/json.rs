//! JSON reporter: the same document persisted as the score artifact.

use shipscore_core::errors::OutputError;

use super::Reporter;
use crate::scoring::ScoreReport;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &ScoreReport) -> Result<String, OutputError> {
        serde_json::to_string_pretty(report).map_err(|e| OutputError::Serialize {
            what: "score report",
            message: e.to_string(),
        })
    }
}
