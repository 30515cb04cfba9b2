//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the ShipScore logging system.
///
/// Reads `SHIPSCORE_LOG` for per-crate log levels, e.g.
/// `SHIPSCORE_LOG=shipscore_analysis=debug,shipscore_cli=info`.
/// Falls back to `default_directive` when unset or invalid.
///
/// Logs are written to stderr; stdout is reserved for command output.
/// Idempotent: later calls are no-ops.
pub fn init_tracing(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SHIPSCORE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}

/// Default filter directive for a CLI verbosity level.
/// `quiet` wins over any number of `-v` flags.
pub fn directive_for_verbosity(verbose: u8, quiet: bool) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    format!("shipscore_core={level},shipscore_analysis={level},shipscore_cli={level}")
}
