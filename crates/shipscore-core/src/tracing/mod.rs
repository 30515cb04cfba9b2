//! Observability for ShipScore.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

pub mod fields;
pub mod setup;

pub use setup::{directive_for_verbosity, init_tracing};
