//! Weighted aggregation of the five dimension scores into the ShipScore.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::normalizer;
use crate::artifacts::ArtifactSnapshot;

/// Quality dimensions, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Security,
    Policy,
    Performance,
    Reliability,
    Cost,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::Security,
        Dimension::Policy,
        Dimension::Performance,
        Dimension::Reliability,
        Dimension::Cost,
    ];

    /// Fixed aggregation weight. The five weights sum to 1.0.
    pub fn weight(self) -> f64 {
        match self {
            Self::Security => 0.40,
            Self::Policy => 0.20,
            Self::Performance => 0.20,
            Self::Reliability => 0.10,
            Self::Cost => 0.10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Policy => "policy",
            Self::Performance => "performance",
            Self::Reliability => "reliability",
            Self::Cost => "cost",
        }
    }

    /// Capitalized label for human-readable output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Security => "Security",
            Self::Policy => "Policy",
            Self::Performance => "Performance",
            Self::Reliability => "Reliability",
            Self::Cost => "Cost",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrounded normalizer outputs in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionFractions {
    pub security: f64,
    pub policy: f64,
    pub performance: f64,
    pub reliability: f64,
    pub cost: f64,
}

impl DimensionFractions {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Security => self.security,
            Dimension::Policy => self.policy,
            Dimension::Performance => self.performance,
            Dimension::Reliability => self.reliability,
            Dimension::Cost => self.cost,
        }
    }

    /// Weighted sum on the 0-100 scale, clamped, not yet rounded.
    pub fn weighted_percent(&self) -> f64 {
        let sum: f64 = Dimension::ALL
            .iter()
            .map(|&d| self.get(d) * d.weight())
            .sum();
        (sum * 100.0).clamp(0.0, 100.0)
    }
}

/// Per-dimension display scores: percentages rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub security: f64,
    pub policy: f64,
    pub performance: f64,
    pub reliability: f64,
    pub cost: f64,
}

impl DimensionScores {
    fn from_fractions(f: &DimensionFractions) -> Self {
        Self {
            security: round2(f.security * 100.0),
            policy: round2(f.policy * 100.0),
            performance: round2(f.performance * 100.0),
            reliability: round2(f.reliability * 100.0),
            cost: round2(f.cost * 100.0),
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Security => self.security,
            Dimension::Policy => self.policy,
            Dimension::Performance => self.performance,
            Dimension::Reliability => self.reliability,
            Dimension::Cost => self.cost,
        }
    }
}

/// Output of [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateResult {
    pub fractions: DimensionFractions,
    pub scores: DimensionScores,
    /// Composite in [0, 100], rounded once to 2 decimals.
    pub ship_score: f64,
}

impl AggregateResult {
    pub fn report(&self) -> ScoreReport {
        ScoreReport {
            scores: self.scores,
            final_score: self.ship_score,
        }
    }
}

/// Persisted score artifact: `{ "scores": {...}, "final": n }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub scores: DimensionScores,
    #[serde(rename = "final")]
    pub final_score: f64,
}

/// Round to 2 decimal places, correctly rounded from the exact binary value.
///
/// Goes through the fixed-precision decimal rendering; `(x * 100).round()`
/// rounds an already-inexact product and disagrees on values like 99.985.
pub fn round2(x: f64) -> f64 {
    format!("{x:.2}").parse().unwrap_or(x)
}

/// Score a snapshot.
///
/// The ShipScore is summed from the unrounded fractions and rounded once;
/// re-deriving it from the rounded display percentages can differ in the
/// last digit.
pub fn aggregate(snapshot: &ArtifactSnapshot) -> AggregateResult {
    let fractions = DimensionFractions {
        security: normalizer::security(&snapshot.vulnerabilities, &snapshot.iac_findings),
        policy: normalizer::policy(snapshot.policy_denials.deny),
        performance: normalizer::performance(snapshot.load_test.p95_ms),
        reliability: normalizer::reliability(snapshot.load_test.error_rate),
        cost: normalizer::cost(snapshot.cost_signal.signal),
    };

    AggregateResult {
        fractions,
        scores: DimensionScores::from_fractions(&fractions),
        ship_score: round2(fractions.weighted_percent()),
    }
}
