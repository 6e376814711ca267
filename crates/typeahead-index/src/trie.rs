// Prefix trie over the vocabulary, used for completions

use crate::NodeId;

const ROOT: NodeId = 0;

/// One character position in the trie.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Children sorted by character, so traversal yields words in
    /// code point order and lookup can binary search.
    children: Vec<(char, NodeId)>,
    /// A vocabulary word ends at this node.
    terminal: bool,
}

impl TrieNode {
    fn child(&self, ch: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|pos| self.children[pos].1)
    }
}

/// Character trie answering "which words start with this prefix".
///
/// The root is node 0 and represents the empty prefix. Every node is
/// reachable from the root, and each terminal node's root path spells exactly
/// one stored word.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Trie {
    /// Create an empty trie (a lone root node).
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Insert a word, creating the missing part of its character path.
    ///
    /// Returns `true` if the word was not present before. Inserting a word
    /// twice is a no-op. The empty string is not a word and is ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = ROOT;
        for ch in word.chars() {
            let children = &self.nodes[node as usize].children;
            node = match children.binary_search_by_key(&ch, |&(c, _)| c) {
                Ok(pos) => children[pos].1,
                Err(pos) => {
                    let id = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node as usize].children.insert(pos, (ch, id));
                    id
                }
            };
        }

        let terminal = &mut self.nodes[node as usize].terminal;
        if *terminal {
            return false;
        }
        *terminal = true;
        self.word_count += 1;
        true
    }

    /// Returns `true` if `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty()
            && self
                .find(word)
                .is_some_and(|node| self.nodes[node as usize].terminal)
    }

    /// Return every stored word that starts with `prefix`, including
    /// `prefix` itself when it is a stored word.
    ///
    /// A prefix with no path in the trie yields an empty list. The empty
    /// prefix yields the whole vocabulary. Words come out in code point
    /// order.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        self.collect(start, prefix)
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk the path for `prefix`.
    fn find(&self, prefix: &str) -> Option<NodeId> {
        let mut node = ROOT;
        for ch in prefix.chars() {
            node = self.nodes[node as usize].child(ch)?;
        }
        Some(node)
    }

    /// Depth-first collection of all words below `start`, whose path is
    /// `prefix`.
    ///
    /// Uses an explicit stack, so word length is bounded by memory rather
    /// than by the thread stack. Each entry carries the byte length of the
    /// parent's path; `buffer` is truncated back to it before the node's own
    /// character is appended.
    fn collect(&self, start: NodeId, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut buffer = String::from(prefix);
        let mut stack: Vec<(NodeId, Option<char>, usize)> = vec![(start, None, prefix.len())];

        while let Some((id, ch, parent_len)) = stack.pop() {
            buffer.truncate(parent_len);
            if let Some(ch) = ch {
                buffer.push(ch);
            }

            let node = &self.nodes[id as usize];
            if node.terminal {
                results.push(buffer.clone());
            }
            // Reversed so the smallest character is popped first.
            let len = buffer.len();
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .map(|&(ch, child)| (child, Some(ch), len)),
            );
        }

        results
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        ["cat", "car", "cart", "dog"].into_iter().collect()
    }

    #[test]
    fn new_trie_is_empty() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.search("a").is_empty());
    }

    #[test]
    fn search_returns_words_with_prefix_in_order() {
        let trie = sample();
        assert_eq!(trie.search("ca"), vec!["car", "cart", "cat"]);
        assert_eq!(trie.search("d"), vec!["dog"]);
    }

    #[test]
    fn missing_path_returns_empty() {
        let trie = sample();
        assert!(trie.search("x").is_empty());
        assert!(trie.search("cats").is_empty());
        assert!(trie.search("dogma").is_empty());
    }

    #[test]
    fn full_word_prefix_includes_the_word() {
        let trie = sample();
        assert_eq!(trie.search("car"), vec!["car", "cart"]);
        assert_eq!(trie.search("cart"), vec!["cart"]);
    }

    #[test]
    fn inner_node_that_is_not_a_word_is_excluded() {
        let trie = sample();
        assert!(!trie.contains("ca"));
        assert!(!trie.search("ca").contains(&"ca".to_string()));
    }

    #[test]
    fn empty_prefix_returns_whole_vocabulary() {
        let trie = sample();
        assert_eq!(trie.search(""), vec!["car", "cart", "cat", "dog"]);
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut trie = sample();
        let nodes = trie.node_count();
        assert!(!trie.insert("cart"));
        assert_eq!(trie.len(), 4);
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.search("ca"), vec!["car", "cart", "cat"]);
    }

    #[test]
    fn empty_word_is_ignored() {
        let mut trie = Trie::new();
        assert!(!trie.insert(""));
        assert!(trie.is_empty());
        assert!(trie.search("").is_empty());
    }

    #[test]
    fn contains_checks_terminal_flag() {
        let trie = sample();
        assert!(trie.contains("car"));
        assert!(trie.contains("cart"));
        assert!(!trie.contains("c"));
        assert!(!trie.contains("carts"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = sample();
        // root + c a t r t(cart) + d o g
        assert_eq!(trie.node_count(), 1 + 5 + 3);
    }

    #[test]
    fn non_ascii_words() {
        let trie: Trie = ["\u{00E4}iti", "\u{00E4}ly", "aamu"].into_iter().collect();
        assert_eq!(trie.search("\u{00E4}"), vec!["\u{00E4}iti", "\u{00E4}ly"]);
        assert_eq!(trie.search(""), vec!["aamu", "\u{00E4}iti", "\u{00E4}ly"]);
    }

    #[test]
    fn search_matches_starts_with_for_every_prefix() {
        let words = ["a", "ab", "abc", "abd", "b", "ba", "bab", "c"];
        let trie: Trie = words.into_iter().collect();
        let prefixes = ["", "a", "ab", "abc", "abx", "b", "ba", "bb", "c", "d"];
        for prefix in prefixes {
            let mut expected: Vec<&str> =
                words.iter().copied().filter(|w| w.starts_with(prefix)).collect();
            expected.sort_unstable();
            assert_eq!(trie.search(prefix), expected, "prefix {prefix:?}");
        }
    }

    #[test]
    fn very_long_word_is_collected_without_recursion() {
        let long = "a".repeat(200_000);
        let mut trie: Trie = ["ab", "b"].into_iter().collect();
        assert!(trie.insert(&long));
        assert!(trie.contains(&long));

        let found = trie.search("a");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], long);
        assert_eq!(found[1], "ab");

        let all = trie.search("");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].len(), 200_000);
        assert_eq!(&all[1..], ["ab", "b"]);
    }
}
