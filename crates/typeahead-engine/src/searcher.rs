// Suggestion strategy: prefix completion first, edit-distance correction as
// the fallback, then scoring, ranking and truncation

use tracing::trace;
use typeahead_core::distance::{DamerauLevenshtein, Metric};
use typeahead_core::similarity::{edit_distance_similarity_chars, jaro_winkler_chars};
use typeahead_index::{BkTree, Trie};

use crate::options::{Scoring, SearchOptions};
use crate::suggestion::{Suggestion, SuggestionKind, Word};

// ---------------------------------------------------------------------------
// Index traits
// ---------------------------------------------------------------------------

/// Source of prefix completions.
pub trait Completer {
    /// All vocabulary words starting with `prefix`, in a deterministic order.
    fn complete(&self, prefix: &str) -> Vec<String>;
}

/// Source of approximate matches.
pub trait Corrector {
    /// All vocabulary words within `threshold` edits of `query`, in a
    /// deterministic order.
    fn correct(&self, query: &str, threshold: usize) -> Vec<String>;
}

impl Completer for Trie {
    fn complete(&self, prefix: &str) -> Vec<String> {
        self.search(prefix)
    }
}

impl<M: Metric + Clone> Corrector for BkTree<M> {
    fn correct(&self, query: &str, threshold: usize) -> Vec<String> {
        self.search(query, threshold)
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Combines a completer and a corrector into a ranked suggestion list.
///
/// Holds no mutable state: `suggest` is a pure function of its arguments
/// and the indexes.
#[derive(Debug, Clone)]
pub struct Searcher<P = Trie, F = BkTree> {
    completer: P,
    corrector: F,
    options: SearchOptions,
}

impl<P: Completer, F: Corrector> Searcher<P, F> {
    pub fn new(completer: P, corrector: F, options: SearchOptions) -> Self {
        Self {
            completer,
            corrector,
            options,
        }
    }

    /// Unranked completions for `query`.
    pub fn complete(&self, query: &str) -> Vec<String> {
        self.completer.complete(query)
    }

    /// Unranked corrections for `query` at the configured threshold.
    pub fn correct(&self, query: &str) -> Vec<String> {
        self.corrector.correct(query, self.options.distance_threshold)
    }

    /// Suggest up to `limit` words for `query`.
    ///
    /// Completions are used when there are any; the corrector is consulted
    /// only when the completer returns nothing. Words are sorted by
    /// descending score with a stable sort, so equal scores keep the order
    /// the index produced them in. `limit` is clamped by
    /// [`SearchOptions::clamp_limit`].
    ///
    /// `query` is expected to be normalized the same way as the vocabulary
    /// (lowercase).
    pub fn suggest(&self, query: &str, limit: i64) -> Suggestion {
        let mut kind = SuggestionKind::Completion;
        let mut candidates = self.complete(query);
        if candidates.is_empty() {
            kind = SuggestionKind::Correction;
            candidates = self.correct(query);
        }
        trace!(query, %kind, candidates = candidates.len(), "suggest");
        if candidates.is_empty() {
            return Suggestion::empty(kind);
        }

        let mut words = self.score(candidates, query);
        words.sort_by(|a, b| b.score.total_cmp(&a.score));
        words.truncate(self.options.clamp_limit(limit));

        Suggestion { words, kind }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SearchOptions {
        &mut self.options
    }

    pub fn completer(&self) -> &P {
        &self.completer
    }

    pub fn corrector(&self) -> &F {
        &self.corrector
    }

    fn score(&self, candidates: Vec<String>, query: &str) -> Vec<Word> {
        let query: Vec<char> = query.chars().collect();
        let mut metric = match self.options.scoring {
            Scoring::JaroWinkler => None,
            Scoring::EditDistance => Some(DamerauLevenshtein::default()),
        };
        let mut chars = Vec::new();

        candidates
            .into_iter()
            .map(|text| {
                chars.clear();
                chars.extend(text.chars());
                let score = match metric.as_mut() {
                    None => jaro_winkler_chars(&chars, &query),
                    Some(metric) => edit_distance_similarity_chars(metric, &chars, &query),
                };
                Word { text, score }
            })
            .collect()
    }
}
