//! ShipScore analysis engine.
//!
//! Reads quality-gate artifacts into an [`artifacts::ArtifactSnapshot`],
//! normalizes each gate into a bounded dimension score, combines them into
//! one weighted ShipScore, derives remediation recommendations from raw
//! thresholds, and assembles the decision record persisted for audit.

pub mod artifacts;
pub mod output;
pub mod pipeline;
pub mod recommendations;
pub mod record;
pub mod remediation;
pub mod reporters;
pub mod scoring;
