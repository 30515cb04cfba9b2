use proptest::prelude::*;
use shipscore_analysis::artifacts::*;
use shipscore_analysis::recommendations::{recommend, RULES};
use shipscore_analysis::scoring::{aggregate, normalizer, Dimension};

fn snapshot_strategy() -> impl Strategy<Value = ArtifactSnapshot> {
    (
        (-50i64..5_000, -50i64..5_000, -50i64..5_000, -50i64..5_000),
        -50i64..5_000,
        -50i64..200,
        (-1_000.0f64..100_000.0, -1.0f64..5.0),
        -10.0f64..10.0,
    )
        .prop_map(|((critical, high, medium, low), failed, deny, (p95_ms, error_rate), signal)| {
            ArtifactSnapshot {
                vulnerabilities: VulnerabilityCounts {
                    critical,
                    high,
                    medium,
                    low,
                },
                iac_findings: IacFindings { failed },
                policy_denials: PolicyDenials { deny },
                load_test: LoadTestResult { p95_ms, error_rate },
                cost_signal: CostSignal { signal },
                provenance: Vec::new(),
            }
        })
}

proptest! {
    #[test]
    fn scores_stay_in_bounds(s in snapshot_strategy()) {
        let result = aggregate(&s);
        for d in Dimension::ALL {
            let fraction = result.fractions.get(d);
            prop_assert!((0.0..=1.0).contains(&fraction), "{} fraction {}", d, fraction);
            let pct = result.scores.get(d);
            prop_assert!((0.0..=100.0).contains(&pct), "{} score {}", d, pct);
        }
        prop_assert!((0.0..=100.0).contains(&result.ship_score));
    }

    #[test]
    fn aggregate_is_idempotent(s in snapshot_strategy()) {
        prop_assert_eq!(aggregate(&s), aggregate(&s.clone()));
    }

    #[test]
    fn security_perfect_iff_no_weighted_findings(
        critical in 0i64..1_000,
        high in 0i64..1_000,
        failed in 0i64..1_000,
        medium in 0i64..1_000,
    ) {
        let vulns = VulnerabilityCounts { critical, high, medium, low: 0 };
        let score = normalizer::security(&vulns, &IacFindings { failed });
        let clean = critical == 0 && high == 0 && failed == 0;
        prop_assert_eq!(score == 1.0, clean);
    }

    #[test]
    fn ship_score_non_increasing_in_each_risk_input(
        s in snapshot_strategy(),
        bump_i in 1i64..500,
        bump_f in 0.001f64..1_000.0,
    ) {
        let base = aggregate(&s).ship_score;
        let mut variants = Vec::new();

        let mut v = s.clone();
        v.vulnerabilities.critical += bump_i;
        variants.push(("critical", v));
        let mut v = s.clone();
        v.vulnerabilities.high += bump_i;
        variants.push(("high", v));
        let mut v = s.clone();
        v.iac_findings.failed += bump_i;
        variants.push(("failed", v));
        let mut v = s.clone();
        v.policy_denials.deny += bump_i;
        variants.push(("deny", v));
        let mut v = s.clone();
        v.load_test.p95_ms += bump_f;
        variants.push(("p95_ms", v));
        let mut v = s.clone();
        v.load_test.error_rate += bump_f;
        variants.push(("error_rate", v));
        let mut v = s.clone();
        v.cost_signal.signal += bump_f;
        variants.push(("signal", v));

        for (input, variant) in variants {
            let worse = aggregate(&variant).ship_score;
            prop_assert!(worse <= base, "{} increased score {} -> {}", input, base, worse);
        }
    }

    #[test]
    fn recommendations_follow_rule_order(s in snapshot_strategy()) {
        let recs = recommend(&s);
        prop_assert!(!recs.is_empty());
        let fired: Vec<&str> = RULES
            .iter()
            .filter(|r| (r.condition)(&s))
            .map(|r| r.id)
            .collect();
        if fired.is_empty() {
            prop_assert_eq!(recs.len(), 1);
            prop_assert!(recs[0].is_all_clear());
        } else {
            let ids: Vec<&str> = recs.iter().map(|r| r.rule_id).collect();
            prop_assert_eq!(ids, fired);
        }
    }

    #[test]
    fn recommendations_ignore_score_only_inputs(
        s in snapshot_strategy(),
        error_rate in 0.0f64..1.0,
        signal in -5.0f64..5.0,
        medium in 0i64..1_000,
    ) {
        let mut v = s.clone();
        v.load_test.error_rate = error_rate;
        v.cost_signal.signal = signal;
        v.vulnerabilities.medium = medium;
        prop_assert_eq!(recommend(&s), recommend(&v));
    }
}
