//! Decision records: the persisted audit trail of one scoring run.

pub mod builder;
pub mod timestamp;

pub use builder::{build, DecisionRecord, RecordInputs, RecordSummary, RECORD_ID_PREFIX};
pub use timestamp::RecordTimestamp;
