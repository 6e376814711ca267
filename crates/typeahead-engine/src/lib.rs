//! Typeahead suggestion engine.
//!
//! Given a partial or misspelled query, the engine first looks for
//! completions in a prefix trie. When there are none it falls back to
//! corrections from a BK-tree within a fixed edit distance. Candidates are
//! scored against the query, ranked, and truncated to a caller-supplied
//! limit.
//!
//! # Architecture
//!
//! - [`vocabulary`] -- one-word-per-line word list loading and normalization
//! - [`options`] -- named constants and tunable search options
//! - [`suggestion`] -- result types (`Word`, `Suggestion`, `SuggestionKind`)
//! - [`searcher`] -- completion/correction strategy and ranking
//! - [`engine`] -- the build-once, query-many facade
//!
//! The engine is immutable after construction and `Send + Sync`; share it by
//! reference or `Arc` across request handlers.

pub mod engine;
pub mod options;
pub mod searcher;
pub mod suggestion;
pub mod vocabulary;

pub use engine::{Engine, EngineStats};
pub use options::{DEFAULT_LIMIT, DISTANCE_THRESHOLD, MAX_LIMIT, Scoring, SearchOptions};
pub use suggestion::{Suggestion, SuggestionKind, Word};
pub use vocabulary::{Vocabulary, VocabularyError};
