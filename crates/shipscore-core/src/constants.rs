//! Well-known file names and directory defaults.

/// Vulnerability scan artifact.
pub const TRIVY_ARTIFACT: &str = "trivy.json";
/// Infrastructure-as-code policy check artifact.
pub const CHECKOV_ARTIFACT: &str = "checkov.json";
/// Policy-engine denial artifact.
pub const OPA_ARTIFACT: &str = "opa.json";
/// Load-test latency/error artifact.
pub const K6_ARTIFACT: &str = "k6.json";
/// Cost signal artifact.
pub const COST_ARTIFACT: &str = "cost.json";

pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
pub const DEFAULT_SCORES_PATH: &str = "artifacts/shipscores/score.json";
pub const DEFAULT_RECORDS_DIR: &str = "cdrs";
pub const DEFAULT_PROPOSALS_DIR: &str = "proposals";

/// Identity stamped on every decision record unless overridden.
pub const DEFAULT_ACTOR: &str = "harsh";

/// Project-level config file name, looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "shipscore.toml";

/// Timestamp layout for record ids and output file names.
/// Lexically sortable and safe in file names on every platform.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";
