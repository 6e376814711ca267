// WASM bindings for the typeahead suggestion engine.
//
// Provides a `WasmTypeahead` class exported via wasm-bindgen that wraps the
// `Engine` from typeahead-engine. Structured results (Suggestion, stats) are
// serialized to JavaScript values using serde-wasm-bindgen; a suggestion has
// the same `{ data: [{ text, score }], type }` shape as the CLI's JSON output.
//
// Usage from JavaScript:
//
//   const typeahead = new WasmTypeahead(wordListText);
//   typeahead.suggest("ca", 10);   // => { data: [{ text: "car", score: 0.93 }, ...], type: "completion" }
//   typeahead.complete("ca");      // => ["car", "cart", "cat"]
//   typeahead.correct("xdog");     // => ["dog"]
//   typeahead.contains("dog");     // => true

use serde::Serialize;
use wasm_bindgen::prelude::*;

use typeahead_engine::{Engine, EngineStats, Scoring, Vocabulary};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of engine statistics.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStats {
    words: usize,
    trie_nodes: usize,
    bktree_nodes: usize,
    bktree_depth: usize,
}

impl From<EngineStats> for JsStats {
    fn from(stats: EngineStats) -> Self {
        Self {
            words: stats.words,
            trie_nodes: stats.trie_nodes,
            bktree_nodes: stats.bktree_nodes,
            bktree_depth: stats.bktree_depth,
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmTypeahead
// ============================================================================

/// Typeahead suggestion engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmTypeahead {
    engine: Engine,
}

#[wasm_bindgen]
impl WasmTypeahead {
    /// Build an engine from word list text (one word per line).
    #[wasm_bindgen(constructor)]
    pub fn new(word_list: &str) -> WasmTypeahead {
        WasmTypeahead {
            engine: Engine::new(&Vocabulary::from_text(word_list)),
        }
    }

    /// Suggest up to `limit` words for `query`.
    ///
    /// The query is lowercased first. Non-positive limits use the default of
    /// 10; limits above 100 are capped.
    pub fn suggest(&self, query: &str, limit: i32) -> Result<JsValue, JsError> {
        to_js(&self.engine.suggest_normalized(query, i64::from(limit)))
    }

    /// Unranked words starting with `prefix`, in lexicographic order.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.engine.complete(prefix)
    }

    /// Unranked words within the configured edit distance of `query`.
    pub fn correct(&self, query: &str) -> Vec<String> {
        self.engine.correct(query)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.engine.contains(word)
    }

    /// Number of distinct words in the vocabulary.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.engine.len()
    }

    pub fn stats(&self) -> Result<JsValue, JsError> {
        to_js(&JsStats::from(self.engine.stats()))
    }

    // ========================================================================
    // Options
    // ========================================================================

    #[wasm_bindgen(js_name = "setDistanceThreshold")]
    pub fn set_distance_threshold(&mut self, value: usize) {
        self.engine.set_distance_threshold(value);
    }

    /// Rank by `1 - distance / max_len` instead of Jaro-Winkler.
    #[wasm_bindgen(js_name = "setEditDistanceScoring")]
    pub fn set_edit_distance_scoring(&mut self, value: bool) {
        self.engine.set_scoring(if value {
            Scoring::EditDistance
        } else {
            Scoring::JaroWinkler
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WasmTypeahead {
        WasmTypeahead::new("cat\ncar\ncart\nDog\n\n")
    }

    #[test]
    fn builds_from_word_list_text() {
        let typeahead = sample();
        assert_eq!(typeahead.size(), 4);
        assert!(typeahead.contains("dog"));
    }

    #[test]
    fn raw_strategies() {
        let mut typeahead = sample();
        assert_eq!(typeahead.complete("ca"), vec!["car", "cart", "cat"]);
        assert_eq!(typeahead.correct("xdog"), vec!["dog"]);
        typeahead.set_distance_threshold(0);
        assert!(typeahead.correct("xdog").is_empty());
    }
}
