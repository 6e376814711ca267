// Query results: scored words and the strategy that produced them

use serde::{Deserialize, Serialize};

/// A suggested word with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// The vocabulary entry.
    pub text: String,
    /// Similarity to the query in `[0, 1]` (higher is better).
    pub score: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Which index produced a suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Words that start with the query (prefix index).
    Completion,
    /// Words within the edit-distance threshold of the query (metric index).
    Correction,
}

impl SuggestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Completion => "completion",
            SuggestionKind::Correction => "correction",
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranked result of a single query.
///
/// Serializes as `{"data": [{"text": .., "score": ..}, ..], "type": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Words ordered by descending score.
    #[serde(rename = "data")]
    pub words: Vec<Word>,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
}

impl Suggestion {
    /// An empty result for the given strategy.
    pub fn empty(kind: SuggestionKind) -> Self {
        Self {
            words: Vec::new(),
            kind,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The suggested words' text, best first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.text.as_str())
    }
}
