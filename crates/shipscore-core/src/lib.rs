//! ShipScore core: configuration, error taxonomy, tracing setup, and the
//! constants shared by the analysis engine and the CLI.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
