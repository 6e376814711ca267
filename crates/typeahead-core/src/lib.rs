//! String metrics for typeahead suggestions.
//!
//! - [`distance`] -- edit distances usable as a metric-tree metric
//! - [`similarity`] -- normalized similarity scores used for ranking
//! - [`case`] -- lowercase normalization of words and queries

pub mod case;
pub mod distance;
pub mod similarity;

pub use distance::{DamerauLevenshtein, Levenshtein, MAX_WORD_LEN, Metric};
