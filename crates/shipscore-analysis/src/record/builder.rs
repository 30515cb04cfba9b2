//! Pure assembly of a [`DecisionRecord`] from a scored snapshot.

use serde::{Deserialize, Serialize};

use shipscore_core::errors::OutputError;

use super::timestamp::RecordTimestamp;
use crate::artifacts::{
    ArtifactSnapshot, CostSignal, IacFindings, LoadTestResult, PolicyDenials, VulnerabilityCounts,
};
use crate::recommendations::Recommendation;
use crate::scoring::{AggregateResult, DimensionScores};

pub const RECORD_ID_PREFIX: &str = "cdr-";

/// Raw gate values, echoed verbatim (defaults included) and keyed by the
/// producing tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordInputs {
    pub trivy: VulnerabilityCounts,
    pub checkov: IacFindings,
    pub opa: PolicyDenials,
    pub k6: LoadTestResult,
    pub cost: CostSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub shipscore: f64,
    pub scores: DimensionScores,
}

/// One scoring run, as persisted. Created once and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub id: String,
    pub actor: String,
    pub summary: RecordSummary,
    pub inputs: RecordInputs,
    pub recommendations: Vec<String>,
}

impl DecisionRecord {
    /// File name under the records directory: `<timestamp>.yaml`.
    pub fn file_name(&self) -> String {
        let stem = self.id.strip_prefix(RECORD_ID_PREFIX).unwrap_or(&self.id);
        format!("{stem}.yaml")
    }

    /// Render the record as YAML. Recommendations are always emitted as
    /// double-quoted scalars, one `  - "..."` line each.
    pub fn to_yaml(&self) -> Result<String, OutputError> {
        let head = RecordHead {
            id: &self.id,
            actor: &self.actor,
            summary: &self.summary,
            inputs: &self.inputs,
        };
        let mut yaml = serde_yaml::to_string(&head).map_err(|e| serialize_error(e.to_string()))?;

        if self.recommendations.is_empty() {
            yaml.push_str("recommendations: []\n");
            return Ok(yaml);
        }
        yaml.push_str("recommendations:\n");
        for message in &self.recommendations {
            // A JSON string literal is a valid YAML double-quoted scalar.
            let quoted = serde_json::to_string(message).map_err(|e| serialize_error(e.to_string()))?;
            yaml.push_str(&format!("  - {quoted}\n"));
        }
        Ok(yaml)
    }
}

#[derive(Serialize)]
struct RecordHead<'a> {
    id: &'a str,
    actor: &'a str,
    summary: &'a RecordSummary,
    inputs: &'a RecordInputs,
}

fn serialize_error(message: String) -> OutputError {
    OutputError::Serialize {
        what: "decision record",
        message,
    }
}

/// Assemble a record. No I/O; the caller persists the result.
pub fn build(
    snapshot: &ArtifactSnapshot,
    aggregate: &AggregateResult,
    recommendations: &[Recommendation],
    actor: &str,
    timestamp: &RecordTimestamp,
) -> DecisionRecord {
    DecisionRecord {
        id: format!("{RECORD_ID_PREFIX}{}", timestamp.stamp()),
        actor: actor.to_string(),
        summary: RecordSummary {
            shipscore: aggregate.ship_score,
            scores: aggregate.scores,
        },
        inputs: RecordInputs {
            trivy: snapshot.vulnerabilities,
            checkov: snapshot.iac_findings,
            opa: snapshot.policy_denials,
            k6: snapshot.load_test,
            cost: snapshot.cost_signal,
        },
        recommendations: recommendations.iter().map(|r| r.message.to_string()).collect(),
    }
}
