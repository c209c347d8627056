//! Scoring, categorization and the analysis pipeline.

mod categorize;
mod pipeline;
mod score;

pub use categorize::{categorize, Acknowledgements, Buckets};
pub use pipeline::{Depth, Pipeline};
