#![forbid(unsafe_code)]
//! Argument parsing and command dispatch for the `shipscore` binary.
//!
//! Handlers return their stdout text instead of printing, so the binary
//! stays a thin wrapper and commands are testable in-process.

mod commands;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use shipscore_core::config::{CliOverrides, ShipscoreConfig};
use shipscore_core::errors::PipelineError;
use shipscore_core::tracing::fields;

#[derive(Parser, Debug)]
#[command(name = "shipscore")]
#[command(version)]
#[command(about = "Deployment-readiness scoring and decision records")]
#[command(
    after_help = "Environment:\n  SHIPSCORE_LOG            Log filter, e.g. shipscore_analysis=debug\n  SHIPSCORE_ARTIFACTS_DIR  Gate artifact directory\n  SHIPSCORE_MIN_SCORE      Minimum passing ShipScore"
)]
pub struct Cli {
    /// Working root; relative paths resolve against it.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
    /// Project config file, relative to --root (replaces <root>/shipscore.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Directory holding the gate JSON artifacts.
    #[arg(long, global = true)]
    pub artifacts_dir: Option<PathBuf>,
    /// Identity stamped on decision records.
    #[arg(long, global = true)]
    pub actor: Option<String>,
    /// Fail with exit code 2 when the ShipScore is below this value.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_score: Option<u32>,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score the gate artifacts and overwrite the score artifact.
    Score {
        #[arg(long, value_enum, default_value_t = Format::Console)]
        format: Format,
    },
    /// Write a new decision record.
    Record,
    /// Draft a remediation proposal when a policy gate denied.
    Propose,
    /// Score, record, and propose from a single read of the artifacts.
    Run {
        #[arg(long, value_enum, default_value_t = Format::Console)]
        format: Format,
    },
    /// Print the resolved configuration as TOML.
    Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Console,
    Json,
}

impl Format {
    fn reporter_name(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Json => "json",
        }
    }
}

/// Process exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Error = 1,
    GateFailed = 2,
}

impl ExitCode {
    /// Exit code for a finished command: its own code on success, `Error`
    /// for any pipeline, config, or IO failure.
    pub fn of(result: &Result<CommandOutput, PipelineError>) -> Self {
        match result {
            Ok(output) => output.exit_code,
            Err(_) => Self::Error,
        }
    }
}

/// What a command wants printed and how the process should exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: ExitCode,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            exit_code: ExitCode::Success,
        }
    }
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            project_config: self.config.as_ref().map(|p| self.root.join(p)),
            artifacts_dir: self.artifacts_dir.clone(),
            actor: self.actor.clone(),
            min_score: self.min_score,
        }
    }

    /// Resolve configuration for this invocation.
    pub fn load_config(&self) -> Result<ShipscoreConfig, PipelineError> {
        Ok(ShipscoreConfig::load(&self.root, Some(&self.overrides()))?)
    }
}

/// Run the parsed command.
pub fn execute(cli: &Cli) -> Result<CommandOutput, PipelineError> {
    let config = cli.load_config()?;
    tracing::debug!(
        { fields::ROOT } = %cli.root.display(),
        { fields::COMMAND } = ?cli.command,
        "dispatching"
    );

    match cli.command {
        Commands::Score { format } => commands::score(&config, &cli.root, format.reporter_name()),
        Commands::Record => commands::record(&config, &cli.root),
        Commands::Propose => commands::propose(&config, &cli.root),
        Commands::Run { format } => commands::run(&config, &cli.root, format.reporter_name()),
        Commands::Config => Ok(CommandOutput::success(config.to_toml()?)),
    }
}
