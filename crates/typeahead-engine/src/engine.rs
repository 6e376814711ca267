// Engine: build-once, query-many entry point.
//
// Owns both indexes (behind a Searcher) and the search options. All indexes
// are populated during construction; afterwards the only operations are
// `&self` queries, so one Engine can serve any number of threads without
// locking. The option setters take `&mut self` and are meant for the setup
// phase, before the engine is shared.

use std::io::BufRead;
use std::path::Path;

use tracing::debug;
use typeahead_core::case;
use typeahead_index::{BkTree, Trie};

use crate::options::{Scoring, SearchOptions};
use crate::searcher::Searcher;
use crate::suggestion::Suggestion;
use crate::vocabulary::{Vocabulary, VocabularyError};

/// Sizes of the built indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    /// Distinct vocabulary words.
    pub words: usize,
    /// Trie nodes, including the root.
    pub trie_nodes: usize,
    /// BK-tree nodes (one per word).
    pub bktree_nodes: usize,
    /// Longest root-to-leaf path in the BK-tree, in nodes.
    pub bktree_depth: usize,
}

/// Typeahead suggestion engine over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct Engine {
    searcher: Searcher<Trie, BkTree>,
}

impl Engine {
    /// Build both indexes from a vocabulary.
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self::with_options(vocabulary, SearchOptions::default())
    }

    /// Build both indexes from a vocabulary with explicit search options.
    pub fn with_options(vocabulary: &Vocabulary, options: SearchOptions) -> Self {
        let mut trie = Trie::new();
        let mut bktree = BkTree::new();
        for word in vocabulary.words() {
            trie.insert(word);
            bktree.insert(word);
        }

        let engine = Self {
            searcher: Searcher::new(trie, bktree, options),
        };
        let stats = engine.stats();
        debug!(
            words = stats.words,
            trie_nodes = stats.trie_nodes,
            bktree_nodes = stats.bktree_nodes,
            bktree_depth = stats.bktree_depth,
            "built indexes"
        );
        engine
    }

    /// Load a word list file and build the engine.
    ///
    /// Fails only if the file cannot be read; callers treat that as fatal at
    /// startup.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        Ok(Self::new(&Vocabulary::from_path(path)?))
    }

    /// Read a word list from `reader` and build the engine.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, VocabularyError> {
        Ok(Self::new(&Vocabulary::from_reader(reader)?))
    }

    /// Build the engine from individual words (normalized on the way in).
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(&Vocabulary::from_words(words))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Suggest up to `limit` words for an already-lowercased `query`.
    ///
    /// Never fails: unknown prefixes, empty queries and an empty vocabulary
    /// all produce an empty (or completion-only) result. See
    /// [`Searcher::suggest`] for the strategy.
    pub fn suggest(&self, query: &str, limit: i64) -> Suggestion {
        self.searcher.suggest(query, limit)
    }

    /// Lowercase `query` the way vocabulary words were, then [`suggest`].
    ///
    /// [`suggest`]: Engine::suggest
    pub fn suggest_normalized(&self, query: &str, limit: i64) -> Suggestion {
        self.suggest(&case::normalize(query), limit)
    }

    /// Raw, unranked completions for `prefix`.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.searcher.complete(prefix)
    }

    /// Raw, unranked corrections for `query` at the configured threshold.
    pub fn correct(&self, query: &str) -> Vec<String> {
        self.searcher.correct(query)
    }

    /// Returns `true` if `word` is a vocabulary entry.
    pub fn contains(&self, word: &str) -> bool {
        self.searcher.completer().contains(word)
    }

    /// Number of distinct vocabulary words.
    pub fn len(&self) -> usize {
        self.searcher.completer().len()
    }

    pub fn is_empty(&self) -> bool {
        self.searcher.completer().is_empty()
    }

    pub fn stats(&self) -> EngineStats {
        let trie = self.searcher.completer();
        let bktree = self.searcher.corrector();
        EngineStats {
            words: trie.len(),
            trie_nodes: trie.node_count(),
            bktree_nodes: bktree.len(),
            bktree_depth: bktree.depth(),
        }
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn options(&self) -> &SearchOptions {
        self.searcher.options()
    }

    /// Set the maximum edit distance for corrections.
    pub fn set_distance_threshold(&mut self, value: usize) {
        self.searcher.options_mut().distance_threshold = value;
    }

    /// Set the limit used for non-positive requested limits.
    pub fn set_default_limit(&mut self, value: usize) {
        self.searcher.options_mut().default_limit = value;
    }

    /// Set the ceiling on results per query.
    pub fn set_max_limit(&mut self, value: usize) {
        self.searcher.options_mut().max_limit = value;
    }

    /// Set the scoring function used for ranking.
    pub fn set_scoring(&mut self, value: Scoring) {
        self.searcher.options_mut().scoring = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::SuggestionKind;

    fn sample() -> Engine {
        Engine::from_words(["Cat", "car", "cart", "dog", "CAR"])
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }

    #[test]
    fn stats_count_distinct_words() {
        let stats = sample().stats();
        assert_eq!(stats.words, 4);
        assert_eq!(stats.bktree_nodes, 4);
        assert_eq!(stats.trie_nodes, 9);
        assert!(stats.bktree_depth >= 2);
    }

    #[test]
    fn empty_vocabulary_never_fails() {
        let engine = Engine::from_words(Vec::<String>::new());
        assert!(engine.is_empty());
        for query in ["", "a", "anything at all"] {
            let suggestion = engine.suggest(query, 10);
            assert_eq!(suggestion.kind, SuggestionKind::Correction);
            assert!(suggestion.is_empty());
        }
    }

    #[test]
    fn empty_query_completes_whole_vocabulary() {
        let engine = sample();
        let suggestion = engine.suggest("", 10);
        assert_eq!(suggestion.kind, SuggestionKind::Completion);
        assert_eq!(
            suggestion.texts().collect::<Vec<_>>(),
            vec!["car", "cart", "cat", "dog"]
        );
        assert!(suggestion.words.iter().all(|w| w.score == 0.0));
    }

    #[test]
    fn suggest_normalized_lowercases_query() {
        let engine = sample();
        assert_eq!(engine.suggest("CA", 10).kind, SuggestionKind::Correction);
        assert_eq!(engine.suggest_normalized("CA", 10).kind, SuggestionKind::Completion);
    }

    #[test]
    fn contains_and_raw_strategies() {
        let engine = sample();
        assert!(engine.contains("cart"));
        assert!(!engine.contains("ca"));
        assert_eq!(engine.complete("car"), vec!["car", "cart"]);
        assert_eq!(engine.correct("xdog"), vec!["dog"]);
    }

    #[test]
    fn setters_update_options() {
        let mut engine = sample();
        engine.set_distance_threshold(0);
        engine.set_default_limit(1);
        engine.set_max_limit(2);
        engine.set_scoring(Scoring::EditDistance);
        assert_eq!(
            *engine.options(),
            SearchOptions {
                distance_threshold: 0,
                default_limit: 1,
                max_limit: 2,
                scoring: Scoring::EditDistance,
            }
        );
        assert!(engine.suggest("xdog", 10).is_empty());
        assert_eq!(engine.suggest("ca", 0).len(), 1);
        assert_eq!(engine.suggest("ca", 50).len(), 2);
    }

    #[test]
    fn from_reader_builds_engine() {
        let engine = Engine::from_reader(std::io::Cursor::new("dog\ncat\n")).unwrap();
        assert_eq!(engine.len(), 2);
    }
}
