//! Decision record configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for decision record assembly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecordConfig {
    /// Identity stamped on every record. Default: "harsh".
    pub actor: Option<String>,
}

impl RecordConfig {
    /// Returns the effective actor, defaulting to the fixed identity.
    pub fn effective_actor(&self) -> &str {
        self.actor.as_deref().unwrap_or(constants::DEFAULT_ACTOR)
    }
}
