//! Raw gate outputs as read from disk.
//!
//! Counts are signed so that bad upstream data (negative counts) still
//! parses; the normalizer clamps it rather than the reader rejecting it.
//! Tools that emit counts as JSON floats (`2.0`) are accepted too: a
//! fractional count rounds away from zero, so a nonzero count never reads
//! back as a clean gate.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use shipscore_core::constants;
use shipscore_core::errors::ArtifactError;

/// The five gates that feed a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Vulnerabilities,
    IacFindings,
    PolicyDenials,
    LoadTest,
    CostSignal,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Vulnerabilities,
        ArtifactKind::IacFindings,
        ArtifactKind::PolicyDenials,
        ArtifactKind::LoadTest,
        ArtifactKind::CostSignal,
    ];

    /// Logical name, matching the producing tool.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vulnerabilities => "trivy",
            Self::IacFindings => "checkov",
            Self::PolicyDenials => "opa",
            Self::LoadTest => "k6",
            Self::CostSignal => "cost",
        }
    }

    /// Conventional file name inside the artifacts directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Vulnerabilities => constants::TRIVY_ARTIFACT,
            Self::IacFindings => constants::CHECKOV_ARTIFACT,
            Self::PolicyDenials => constants::OPA_ARTIFACT,
            Self::LoadTest => constants::K6_ARTIFACT,
            Self::CostSignal => constants::COST_ARTIFACT,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Int(i64),
    Float(f64),
}

/// Nonzero fractions round away from zero; out-of-range or non-finite
/// values yield `None`.
fn count_from_f64(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = if value >= 0.0 { value.ceil() } else { value.floor() };
    // i64::MAX is not representable as f64; the cast rounds it up to 2^63.
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match CountRepr::deserialize(deserializer)? {
        CountRepr::Int(n) => Ok(n),
        CountRepr::Float(f) => count_from_f64(f)
            .ok_or_else(|| D::Error::custom(format!("count {f} is out of range"))),
    }
}

/// Vulnerability scan severity counts. Default: all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityCounts {
    #[serde(deserialize_with = "deserialize_count")]
    pub critical: i64,
    #[serde(deserialize_with = "deserialize_count")]
    pub high: i64,
    #[serde(deserialize_with = "deserialize_count")]
    pub medium: i64,
    #[serde(deserialize_with = "deserialize_count")]
    pub low: i64,
}

/// IaC policy check failures. Default: 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IacFindings {
    #[serde(deserialize_with = "deserialize_count")]
    pub failed: i64,
}

/// Policy-engine denials. Default: 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyDenials {
    #[serde(deserialize_with = "deserialize_count")]
    pub deny: i64,
}

/// Load-test results. Default: p95 300ms, no errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadTestResult {
    #[serde(alias = "p95Ms")]
    pub p95_ms: f64,
    #[serde(alias = "errorRate")]
    pub error_rate: f64,
}

impl Default for LoadTestResult {
    fn default() -> Self {
        Self {
            p95_ms: 300.0,
            error_rate: 0.0,
        }
    }
}

/// Cost risk indicator, nominally in [0,1]. Default: 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostSignal {
    pub signal: f64,
}

/// Where an artifact's values came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Parsed from the file on disk.
    Loaded,
    /// The documented default was substituted.
    Defaulted(ArtifactError),
}

impl ArtifactSource {
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}

/// Provenance entry for one artifact of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactProvenance {
    pub kind: ArtifactKind,
    pub source: ArtifactSource,
}

/// All raw gate outputs for one evaluation. Read once, never mutated.
///
/// Provenance is informational only: scoring, recommendations, and the
/// persisted record see the same values whether a gate was loaded or
/// defaulted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtifactSnapshot {
    pub vulnerabilities: VulnerabilityCounts,
    pub iac_findings: IacFindings,
    pub policy_denials: PolicyDenials,
    pub load_test: LoadTestResult,
    pub cost_signal: CostSignal,
    pub provenance: Vec<ArtifactProvenance>,
}

impl ArtifactSnapshot {
    /// Gates whose output was unavailable and replaced by defaults.
    pub fn defaulted_artifacts(&self) -> Vec<ArtifactKind> {
        self.provenance
            .iter()
            .filter(|p| p.source.is_defaulted())
            .map(|p| p.kind)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_floats_are_exact_counts() {
        let counts: VulnerabilityCounts =
            serde_json::from_str(r#"{"critical": 2.0, "high": 3}"#).unwrap();
        assert_eq!(counts.critical, 2);
        assert_eq!(counts.high, 3);
    }

    #[test]
    fn fractional_counts_round_away_from_zero() {
        assert_eq!(count_from_f64(0.2), Some(1));
        assert_eq!(count_from_f64(-0.2), Some(-1));
        assert_eq!(count_from_f64(0.0), Some(0));
        assert_eq!(count_from_f64(f64::NAN), None);
        assert_eq!(count_from_f64(1e300), None);
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        assert!(serde_json::from_str::<PolicyDenials>(r#"{"deny": "3"}"#).is_err());
        assert!(serde_json::from_str::<PolicyDenials>(r#"{"deny": null}"#).is_err());
    }
}
