//! Configuration system for ShipScore.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod gate_config;
pub mod paths_config;
pub mod record_config;
pub mod shipscore_config;

pub use gate_config::GateConfig;
pub use paths_config::PathsConfig;
pub use record_config::RecordConfig;
pub use shipscore_config::{CliOverrides, ShipscoreConfig};
