//! Standard span and field names shared by every ShipScore crate.
//!
//! Use them with tracing's constant-name syntax:
//! `tracing::info!({ fields::OUTPUT_PATH } = %path.display(), "written")`.

/// Span names, one per pipeline stage.
pub mod spans {
    pub const SNAPSHOT: &str = "shipscore.snapshot";
    pub const SCORE: &str = "shipscore.score";
    pub const RECORD: &str = "shipscore.record";
    pub const PROPOSE: &str = "shipscore.propose";
}

// Inputs
pub const ARTIFACT: &str = "artifact";
pub const ARTIFACTS_DIR: &str = "artifacts_dir";
pub const DEFAULTED: &str = "defaulted";
pub const DENY_COUNT: &str = "deny_count";

// Results
pub const SHIP_SCORE: &str = "ship_score";
pub const MIN_SCORE: &str = "min_score";
pub const RECOMMENDATION_COUNT: &str = "recommendation_count";
pub const RECORD_ID: &str = "record_id";
pub const VIOLATION: &str = "violation";
pub const OUTPUT_PATH: &str = "output_path";

// Context
pub const ACTOR: &str = "actor";
pub const ROOT: &str = "root";
pub const COMMAND: &str = "command";

// Failures
pub const ERROR_CODE: &str = "error_code";
pub const REASON: &str = "reason";

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn field_names_are_unique() {
        let all = [
            ARTIFACT,
            ARTIFACTS_DIR,
            DEFAULTED,
            DENY_COUNT,
            SHIP_SCORE,
            MIN_SCORE,
            RECOMMENDATION_COUNT,
            RECORD_ID,
            VIOLATION,
            OUTPUT_PATH,
            ACTOR,
            ROOT,
            COMMAND,
            ERROR_CODE,
            REASON,
        ];
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn span_names_share_prefix() {
        for name in [spans::SNAPSHOT, spans::SCORE, spans::RECORD, spans::PROPOSE] {
            assert!(name.starts_with("shipscore."), "{name}");
        }
    }
}
