//! Threshold rules turning raw gate values into remediation advice.
//!
//! Rules read raw artifact values, never normalized scores, so changes to
//! the scoring curves cannot change which advice fires. Output order is the
//! declaration order of [`RULES`], independent of which subset fires.

use std::fmt;

use serde::Serialize;

use shipscore_core::tracing::fields;

use crate::artifacts::ArtifactSnapshot;
use crate::scoring::normalizer::LATENCY_BUDGET_MS;

/// Message emitted when no rule fires.
pub const ALL_CLEAR: &str = "All gates clean. Ready to ship.";

/// Rule id of the all-clear fallback.
pub const ALL_CLEAR_ID: &str = "all-clear";

/// A condition over raw gate values paired with the advice it triggers.
pub struct RecommendationRule {
    pub id: &'static str,
    pub condition: fn(&ArtifactSnapshot) -> bool,
    pub message: &'static str,
}

impl fmt::Debug for RecommendationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("id", &self.id)
            .field("message", &self.message)
            .finish()
    }
}

/// Evaluation order: security, IaC policy, policy engine, performance.
pub static RULES: [RecommendationRule; 4] = [
    RecommendationRule {
        id: "critical-vulnerabilities",
        condition: has_critical_vulnerabilities,
        message: "Remove critical image vulns or pin a safer base image.",
    },
    RecommendationRule {
        id: "iac-failures",
        condition: has_iac_failures,
        message: "Fix failing IaC checks (encryption, least-privilege, no-public).",
    },
    RecommendationRule {
        id: "policy-denials",
        condition: has_policy_denials,
        message: "Satisfy policy gates (e.g., no public S3).",
    },
    RecommendationRule {
        id: "latency-budget",
        condition: exceeds_latency_budget,
        message: "Optimize latency: enable gzip/cache, reduce N+1 calls.",
    },
];

fn has_critical_vulnerabilities(s: &ArtifactSnapshot) -> bool {
    s.vulnerabilities.critical > 0
}

fn has_iac_failures(s: &ArtifactSnapshot) -> bool {
    s.iac_findings.failed > 0
}

fn has_policy_denials(s: &ArtifactSnapshot) -> bool {
    s.policy_denials.deny > 0
}

fn exceeds_latency_budget(s: &ArtifactSnapshot) -> bool {
    s.load_test.p95_ms > LATENCY_BUDGET_MS
}

/// One piece of advice, tied to the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub rule_id: &'static str,
    pub message: &'static str,
}

impl Recommendation {
    pub fn is_all_clear(&self) -> bool {
        self.rule_id == ALL_CLEAR_ID
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Evaluate every rule in order. Never empty: falls back to [`ALL_CLEAR`].
pub fn recommend(snapshot: &ArtifactSnapshot) -> Vec<Recommendation> {
    let mut out: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| (rule.condition)(snapshot))
        .map(|rule| Recommendation {
            rule_id: rule.id,
            message: rule.message,
        })
        .collect();

    if out.is_empty() {
        out.push(Recommendation {
            rule_id: ALL_CLEAR_ID,
            message: ALL_CLEAR,
        });
    }

    tracing::debug!({ fields::RECOMMENDATION_COUNT } = out.len(), "recommendations evaluated");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{IacFindings, LoadTestResult, PolicyDenials, VulnerabilityCounts};

    fn messages(recs: &[Recommendation]) -> Vec<&'static str> {
        recs.iter().map(|r| r.message).collect()
    }

    #[test]
    fn clean_snapshot_is_all_clear() {
        let recs = recommend(&ArtifactSnapshot::default());
        assert_eq!(messages(&recs), vec![ALL_CLEAR]);
        assert!(recs[0].is_all_clear());
    }

    #[test]
    fn subset_keeps_declaration_order() {
        let snapshot = ArtifactSnapshot {
            vulnerabilities: VulnerabilityCounts {
                critical: 1,
                ..Default::default()
            },
            policy_denials: PolicyDenials { deny: 1 },
            load_test: LoadTestResult {
                p95_ms: 100.0,
                error_rate: 0.0,
            },
            ..Default::default()
        };
        let recs = recommend(&snapshot);
        assert_eq!(
            recs.iter().map(|r| r.rule_id).collect::<Vec<_>>(),
            vec!["critical-vulnerabilities", "policy-denials"]
        );
    }

    #[test]
    fn all_rules_fire_in_order() {
        let snapshot = ArtifactSnapshot {
            vulnerabilities: VulnerabilityCounts {
                critical: 3,
                ..Default::default()
            },
            iac_findings: IacFindings { failed: 2 },
            policy_denials: PolicyDenials { deny: 4 },
            load_test: LoadTestResult {
                p95_ms: 812.0,
                error_rate: 0.0,
            },
            ..Default::default()
        };
        let recs = recommend(&snapshot);
        assert_eq!(
            messages(&recs),
            RULES.iter().map(|r| r.message).collect::<Vec<_>>()
        );
    }

    #[test]
    fn latency_threshold_is_strict() {
        let at_budget = ArtifactSnapshot {
            load_test: LoadTestResult {
                p95_ms: 500.0,
                error_rate: 0.0,
            },
            ..Default::default()
        };
        assert!(recommend(&at_budget)[0].is_all_clear());
    }

    #[test]
    fn high_and_error_rate_alone_do_not_fire() {
        // Only raw thresholds count; a poor score alone is not a trigger.
        let snapshot = ArtifactSnapshot {
            vulnerabilities: VulnerabilityCounts {
                high: 40,
                medium: 12,
                ..Default::default()
            },
            load_test: LoadTestResult {
                p95_ms: 300.0,
                error_rate: 0.4,
            },
            ..Default::default()
        };
        assert!(recommend(&snapshot)[0].is_all_clear());
    }
}
