//! Second-resolution timestamps for record ids and output file names.

use std::fmt;

use chrono::{DateTime, Utc};

use shipscore_core::constants::TIMESTAMP_FORMAT;

/// A UTC instant rendered as `YYYY-MM-DDTHH-MM-SS`.
///
/// The rendering sorts chronologically as a string. Two invocations within
/// the same second render identically; the record writer refuses to
/// overwrite in that case instead of silently replacing a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordTimestamp(DateTime<Utc>);

impl RecordTimestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// The sortable, file-name-safe rendering.
    pub fn stamp(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for RecordTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stamp())
    }
}
