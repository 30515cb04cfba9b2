//! The score, record, and proposal pipelines.
//!
//! Stages pass the snapshot and aggregate in memory; the filesystem is used
//! only to read gate artifacts and to persist outputs.

use std::path::{Path, PathBuf};

use shipscore_core::config::ShipscoreConfig;
use shipscore_core::errors::PipelineError;
use shipscore_core::tracing::fields::{self, spans};

use crate::artifacts::{ArtifactReader, ArtifactSnapshot};
use crate::output;
use crate::recommendations::recommend;
use crate::record::{self, DecisionRecord, RecordTimestamp};
use crate::remediation::{self, RemediationProposal};
use crate::scoring::{aggregate, AggregateResult};

/// Resolved input and output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub artifacts_dir: PathBuf,
    pub scores_path: PathBuf,
    pub records_dir: PathBuf,
    pub proposals_dir: PathBuf,
}

impl PipelinePaths {
    /// All outputs placed under `root` with the default layout.
    pub fn under(root: &Path) -> Self {
        Self::from_config(&ShipscoreConfig::default(), root)
    }

    pub fn from_config(config: &ShipscoreConfig, root: &Path) -> Self {
        Self {
            artifacts_dir: config.paths.effective_artifacts_dir(root),
            scores_path: config.paths.effective_scores_path(root),
            records_dir: config.paths.effective_records_dir(root),
            proposals_dir: config.paths.effective_proposals_dir(root),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    pub aggregate: AggregateResult,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    pub record: DecisionRecord,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalOutcome {
    pub proposal: RemediationProposal,
    pub path: PathBuf,
}

/// Everything produced by [`Pipeline::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub snapshot: ArtifactSnapshot,
    pub score: ScoreOutcome,
    pub record: RecordOutcome,
    pub proposal: Option<ProposalOutcome>,
}

/// Single-shot pipeline over one artifact directory.
#[derive(Debug, Clone)]
pub struct Pipeline {
    paths: PipelinePaths,
    actor: String,
}

impl Pipeline {
    pub fn new(paths: PipelinePaths, actor: impl Into<String>) -> Self {
        Self {
            paths,
            actor: actor.into(),
        }
    }

    pub fn from_config(config: &ShipscoreConfig, root: &Path) -> Self {
        Self::new(
            PipelinePaths::from_config(config, root),
            config.record.effective_actor(),
        )
    }

    pub fn paths(&self) -> &PipelinePaths {
        &self.paths
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Read the gate artifacts once. Never fails (fail-open defaults).
    pub fn read_snapshot(&self) -> ArtifactSnapshot {
        ArtifactReader::new(&self.paths.artifacts_dir).snapshot()
    }

    /// Aggregate and overwrite the score artifact.
    pub fn score(&self, snapshot: &ArtifactSnapshot) -> Result<ScoreOutcome, PipelineError> {
        self.persist_score(aggregate(snapshot))
    }

    fn persist_score(&self, result: AggregateResult) -> Result<ScoreOutcome, PipelineError> {
        let _span = tracing::info_span!(spans::SCORE).entered();
        tracing::info!({ fields::SHIP_SCORE } = result.ship_score, "snapshot scored");
        output::write_scores(&self.paths.scores_path, &result.report())?;
        Ok(ScoreOutcome {
            aggregate: result,
            path: self.paths.scores_path.clone(),
        })
    }

    /// Build and persist a new decision record.
    pub fn record(
        &self,
        snapshot: &ArtifactSnapshot,
        aggregate: &AggregateResult,
        timestamp: &RecordTimestamp,
    ) -> Result<RecordOutcome, PipelineError> {
        let _span = tracing::info_span!(spans::RECORD).entered();
        let recommendations = recommend(snapshot);
        let record = record::build(snapshot, aggregate, &recommendations, &self.actor, timestamp);
        let path = output::write_record(&self.paths.records_dir, &record)?;
        Ok(RecordOutcome { record, path })
    }

    /// Write a remediation proposal if the snapshot warrants one.
    pub fn propose(
        &self,
        snapshot: &ArtifactSnapshot,
        timestamp: &RecordTimestamp,
    ) -> Result<Option<ProposalOutcome>, PipelineError> {
        let _span = tracing::info_span!(spans::PROPOSE).entered();
        let Some(proposal) = remediation::propose(snapshot, timestamp) else {
            tracing::debug!("no remediation needed");
            return Ok(None);
        };
        let path = output::write_proposal(&self.paths.proposals_dir, &proposal)?;
        Ok(Some(ProposalOutcome { proposal, path }))
    }

    /// Score, record, and propose from one snapshot and one timestamp.
    ///
    /// The record is persisted before the score artifact: it is the only
    /// write that can collide, and a collision must leave the previous
    /// run's score artifact in place.
    pub fn run(&self, timestamp: &RecordTimestamp) -> Result<RunOutcome, PipelineError> {
        let snapshot = self.read_snapshot();
        let result = aggregate(&snapshot);
        let record = self.record(&snapshot, &result, timestamp)?;
        let score = self.persist_score(result)?;
        let proposal = self.propose(&snapshot, timestamp)?;
        Ok(RunOutcome {
            snapshot,
            score,
            record,
            proposal,
        })
    }
}
