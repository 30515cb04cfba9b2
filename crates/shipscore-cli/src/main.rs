#![forbid(unsafe_code)]

use std::process::ExitCode as ProcessExitCode;

use clap::Parser;
use shipscore_cli::{execute, Cli, ExitCode};
use shipscore_core::errors::ShipscoreErrorCode;
use shipscore_core::tracing::{directive_for_verbosity, init_tracing};

fn main() -> ProcessExitCode {
    let cli = Cli::parse();
    init_tracing(&directive_for_verbosity(cli.verbose, cli.quiet));

    let result = execute(&cli);
    match &result {
        Ok(output) => print!("{}", output.text),
        Err(err) => eprintln!("{}", err.coded_string()),
    }
    ProcessExitCode::from(ExitCode::of(&result) as u8)
}
