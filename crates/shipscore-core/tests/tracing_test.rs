//! Tests for tracing initialisation and the default filter.
//!
//! The global subscriber can be installed once per process, so everything
//! that depends on it lives in a single test.

use shipscore_core::tracing::fields::{self, spans};
use shipscore_core::tracing::{directive_for_verbosity, init_tracing};
use tracing::Level;

#[test]
fn test_default_verbosity_surfaces_info_events() {
    std::env::remove_var("SHIPSCORE_LOG");
    init_tracing(&directive_for_verbosity(0, false));
    // Later calls are no-ops and must not panic.
    init_tracing("trace");

    assert!(tracing::enabled!(target: "shipscore_analysis::artifacts::reader", Level::INFO));
    assert!(!tracing::enabled!(target: "shipscore_analysis::artifacts::reader", Level::DEBUG));

    let _span = tracing::info_span!(spans::SCORE).entered();
    tracing::info!(
        { fields::SHIP_SCORE } = 88.0,
        { fields::OUTPUT_PATH } = "artifacts/shipscores/score.json",
        "standard fields accepted"
    );
}
