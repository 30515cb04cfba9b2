//! Command handlers. Each returns the text destined for stdout.

use std::path::Path;

use shipscore_analysis::pipeline::Pipeline;
use shipscore_analysis::record::RecordTimestamp;
use shipscore_analysis::reporters::{available_formats, create_reporter};
use shipscore_analysis::scoring::{AggregateResult, ScoreReport};
use shipscore_core::config::ShipscoreConfig;
use shipscore_core::errors::{OutputError, PipelineError};
use shipscore_core::tracing::fields;

use crate::{CommandOutput, ExitCode};

const NO_REMEDIATION: &str = "no remediation needed";

fn render(report: &ScoreReport, format: &str) -> Result<String, OutputError> {
    let reporter = create_reporter(format).ok_or_else(|| OutputError::Serialize {
        what: "score report",
        message: format!(
            "unknown format '{format}', expected one of: {}",
            available_formats().join(", ")
        ),
    })?;
    let mut text = reporter.generate(report)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

fn configured_pipeline(config: &ShipscoreConfig, root: &Path) -> Pipeline {
    let pipeline = Pipeline::from_config(config, root);
    tracing::debug!(
        { fields::ARTIFACTS_DIR } = %pipeline.paths().artifacts_dir.display(),
        { fields::ACTOR } = pipeline.actor(),
        "pipeline configured"
    );
    pipeline
}

fn gated(config: &ShipscoreConfig, aggregate: &AggregateResult, text: String) -> CommandOutput {
    let exit_code = if config.gate.blocks(aggregate.ship_score) {
        tracing::warn!(
            { fields::SHIP_SCORE } = aggregate.ship_score,
            { fields::MIN_SCORE } = config.gate.min_score,
            "ShipScore below gate minimum"
        );
        ExitCode::GateFailed
    } else {
        ExitCode::Success
    };
    CommandOutput { text, exit_code }
}

pub(crate) fn score(
    config: &ShipscoreConfig,
    root: &Path,
    format: &str,
) -> Result<CommandOutput, PipelineError> {
    let pipeline = configured_pipeline(config, root);
    let snapshot = pipeline.read_snapshot();
    let outcome = pipeline.score(&snapshot)?;
    let text = render(&outcome.aggregate.report(), format)?;
    Ok(gated(config, &outcome.aggregate, text))
}

pub(crate) fn record(config: &ShipscoreConfig, root: &Path) -> Result<CommandOutput, PipelineError> {
    let pipeline = configured_pipeline(config, root);
    let snapshot = pipeline.read_snapshot();
    let aggregate = shipscore_analysis::scoring::aggregate(&snapshot);
    let outcome = pipeline.record(&snapshot, &aggregate, &RecordTimestamp::now())?;
    Ok(CommandOutput {
        text: format!("{}\n", outcome.path.display()),
        exit_code: ExitCode::Success,
    })
}

pub(crate) fn propose(config: &ShipscoreConfig, root: &Path) -> Result<CommandOutput, PipelineError> {
    let pipeline = configured_pipeline(config, root);
    let snapshot = pipeline.read_snapshot();
    let text = match pipeline.propose(&snapshot, &RecordTimestamp::now())? {
        Some(outcome) => format!("{}\n", outcome.path.display()),
        None => format!("{NO_REMEDIATION}\n"),
    };
    Ok(CommandOutput {
        text,
        exit_code: ExitCode::Success,
    })
}

pub(crate) fn run(
    config: &ShipscoreConfig,
    root: &Path,
    format: &str,
) -> Result<CommandOutput, PipelineError> {
    let pipeline = configured_pipeline(config, root);
    let outcome = pipeline.run(&RecordTimestamp::now())?;

    let mut text = render(&outcome.score.aggregate.report(), format)?;
    text.push_str(&format!("\nrecord: {}\n", outcome.record.path.display()));
    match &outcome.proposal {
        Some(proposal) => text.push_str(&format!("proposal: {}\n", proposal.path.display())),
        None => text.push_str(&format!("proposal: {NO_REMEDIATION}\n")),
    }
    Ok(gated(config, &outcome.score.aggregate, text))
}
