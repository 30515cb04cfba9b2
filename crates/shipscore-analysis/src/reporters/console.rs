//! Console reporter: the short markdown summary printed after scoring.

use shipscore_core::errors::OutputError;

use super::Reporter;
use crate::scoring::{Dimension, ScoreReport};

pub struct ConsoleReporter;

/// Render a percentage with at least one decimal: `40.0`, `76.14`.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &ScoreReport) -> Result<String, OutputError> {
        let mut output = String::from("### ShipScore\n");
        for dimension in Dimension::ALL {
            output.push_str(&format!(
                "- {}: {}%\n",
                dimension.label(),
                format_percent(report.scores.get(dimension))
            ));
        }
        output.push_str(&format!(
            "\n**Final ShipScore: {}%**\n",
            format_percent(report.final_score)
        ));
        Ok(output)
    }
}
