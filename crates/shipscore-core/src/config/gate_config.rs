//! Ship gate configuration.

use serde::{Deserialize, Serialize};

/// Optional pass/fail gate on the composite score.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum ShipScore (0-100) to pass. Unset: no gating.
    pub min_score: Option<u32>,
}

impl GateConfig {
    /// Returns true when a minimum is configured and `score` is below it.
    pub fn blocks(&self, score: f64) -> bool {
        self.min_score.is_some_and(|min| score < f64::from(min))
    }
}
