//! Scoring: per-dimension normalization and weighted aggregation.

pub mod aggregator;
pub mod normalizer;

pub use aggregator::{aggregate, round2, AggregateResult, Dimension, DimensionFractions, DimensionScores, ScoreReport};
pub use normalizer::clamp01;
