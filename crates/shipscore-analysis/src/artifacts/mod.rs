//! Gate artifacts and the immutable snapshot built from them.

pub mod reader;
pub mod types;

pub use reader::{ArtifactReader, RawArtifact};
pub use types::*;
