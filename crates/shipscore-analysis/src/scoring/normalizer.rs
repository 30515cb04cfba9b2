//! Normalizers: one pure function per quality dimension, each mapping a raw
//! gate signal to a score in [0.0, 1.0].
//!
//! Every function is total: negative counts, out-of-range rates and extreme
//! latencies degrade to boundary scores instead of erroring. `clamp01` is
//! applied to every output, including ones that are bounded analytically.

use crate::artifacts::{IacFindings, VulnerabilityCounts};

/// Latency budget for the performance ramp.
pub const LATENCY_BUDGET_MS: f64 = 500.0;

/// Severity weights feeding the security raw score.
pub const CRITICAL_WEIGHT: f64 = 1.0;
pub const HIGH_WEIGHT: f64 = 0.5;
pub const IAC_FAILED_WEIGHT: f64 = 0.2;

/// Score lost per policy denial.
pub const POLICY_DENY_PENALTY: f64 = 0.1;

/// Error rate multiplier; 10% errors floors reliability at zero.
pub const ERROR_RATE_FACTOR: f64 = 10.0;

/// Clamp to [0.0, 1.0]. NaN maps to 0.0.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Weighted severity: critical×1.0 + high×0.5 + iac_failed×0.2.
/// Medium and low findings do not contribute.
pub fn security_raw(vulns: &VulnerabilityCounts, iac: &IacFindings) -> f64 {
    vulns.critical as f64 * CRITICAL_WEIGHT
        + vulns.high as f64 * HIGH_WEIGHT
        + iac.failed as f64 * IAC_FAILED_WEIGHT
}

/// Security score with log-scaled penalty.
///
/// ```text
/// raw == 0  -> 1.0
/// raw  > 0  -> 1 - min(1, log10(1 + raw) / 2)
/// ```
///
/// Marginal penalty shrinks as findings accumulate; the score reaches 0.0
/// only at raw >= 99. Non-positive raw (bad data) scores as clean.
pub fn security(vulns: &VulnerabilityCounts, iac: &IacFindings) -> f64 {
    let raw = security_raw(vulns, iac);
    if raw <= 0.0 {
        return 1.0;
    }
    clamp01(1.0 - ((1.0 + raw).log10() / 2.0).min(1.0))
}

/// Policy score: linear 0.1 penalty per denial, 0.0 from 10 denials on.
pub fn policy(deny: i64) -> f64 {
    if deny == 0 {
        return 1.0;
    }
    clamp01(1.0 - deny as f64 * POLICY_DENY_PENALTY)
}

/// Performance score: 1.0 at 0ms, 0.0 at or beyond the latency budget.
pub fn performance(p95_ms: f64) -> f64 {
    clamp01((LATENCY_BUDGET_MS - p95_ms) / LATENCY_BUDGET_MS)
}

/// Reliability score: 1.0 at no errors, 0.0 at an error rate of 0.1 or more.
pub fn reliability(error_rate: f64) -> f64 {
    clamp01(1.0 - error_rate * ERROR_RATE_FACTOR)
}

/// Cost score: the signal is clamped to [0,1] first, then inverted.
/// A NaN signal is treated as maximal risk.
pub fn cost(signal: f64) -> f64 {
    if signal.is_nan() {
        return 0.0;
    }
    clamp01(1.0 - clamp01(signal))
}
