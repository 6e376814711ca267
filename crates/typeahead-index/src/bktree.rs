// BK-tree (Burkhard-Keller metric tree) over the vocabulary, used for
// edit-distance corrections

use hashbrown::HashMap;
use typeahead_core::distance::{DamerauLevenshtein, Metric};

use crate::NodeId;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct BkNode {
    word: String,
    chars: Box<[char]>,
    /// Child reached by an edge labelled `d` holds a word at distance exactly
    /// `d` from this node's word.
    children: HashMap<usize, NodeId>,
}

impl BkNode {
    fn new(word: &str, chars: Vec<char>) -> Self {
        Self {
            word: word.to_string(),
            chars: chars.into_boxed_slice(),
            children: HashMap::new(),
        }
    }
}

/// A metric tree supporting "all words within distance `t` of the query".
///
/// Generic over the [`Metric`]; the metric must satisfy the triangle
/// inequality, otherwise pruned searches miss results. The metric value
/// given at construction is used for inserts and cloned once per search, so
/// concurrent searches never share scratch space.
#[derive(Debug, Clone)]
pub struct BkTree<M = DamerauLevenshtein> {
    nodes: Vec<BkNode>,
    metric: M,
}

impl BkTree<DamerauLevenshtein> {
    /// Create an empty tree using Damerau-Levenshtein distance.
    pub fn new() -> Self {
        Self::with_metric(DamerauLevenshtein::default())
    }
}

impl Default for BkTree<DamerauLevenshtein> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Metric + Clone> BkTree<M> {
    /// Create an empty tree using the given metric.
    pub fn with_metric(metric: M) -> Self {
        Self {
            nodes: Vec::new(),
            metric,
        }
    }

    /// Insert a word.
    ///
    /// Returns `true` if the word was added; `false` if a word at distance 0
    /// is already stored (or `word` is empty, which is ignored).
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let chars: Vec<char> = word.chars().collect();
        if self.nodes.is_empty() {
            self.nodes.push(BkNode::new(word, chars));
            return true;
        }

        let mut current = ROOT;
        loop {
            let node = &self.nodes[current as usize];
            let distance = self.metric.distance(&node.chars, &chars);
            if distance == 0 {
                return false;
            }
            match node.children.get(&distance).copied() {
                Some(child) => current = child,
                None => {
                    let id = self.nodes.len() as NodeId;
                    self.nodes.push(BkNode::new(word, chars));
                    self.nodes[current as usize].children.insert(distance, id);
                    return true;
                }
            }
        }
    }

    /// Return every stored word within `threshold` of `query`, paired with
    /// its distance.
    ///
    /// Only children whose edge label lies in
    /// `[d - threshold, d + threshold]` are visited, where `d` is the
    /// distance from the query to the current node. Results come out in
    /// depth-first order with children taken in ascending edge order.
    pub fn find(&self, query: &str, threshold: usize) -> Vec<(&str, usize)> {
        let mut results = Vec::new();
        if self.nodes.is_empty() {
            return results;
        }

        let query: Vec<char> = query.chars().collect();
        let mut metric = self.metric.clone();
        let mut stack = vec![ROOT];

        while let Some(id) = stack.pop() {
            let node = &self.nodes[id as usize];
            let distance = metric.distance(&node.chars, &query);
            if distance <= threshold {
                results.push((node.word.as_str(), distance));
            }
            if node.children.is_empty() {
                continue;
            }

            let low = distance.saturating_sub(threshold);
            let high = distance.saturating_add(threshold);
            // Pushed in reverse so the smallest edge is popped first.
            if high - low < node.children.len() {
                for edge in (low..=high).rev() {
                    if let Some(&child) = node.children.get(&edge) {
                        stack.push(child);
                    }
                }
            } else {
                let mut edges: Vec<(usize, NodeId)> = node
                    .children
                    .iter()
                    .filter(|&(&edge, _)| (low..=high).contains(&edge))
                    .map(|(&edge, &child)| (edge, child))
                    .collect();
                edges.sort_unstable_by(|a, b| b.0.cmp(&a.0));
                stack.extend(edges.into_iter().map(|(_, child)| child));
            }
        }

        results
    }

    /// Return every stored word within `threshold` of `query`.
    pub fn search(&self, query: &str, threshold: usize) -> Vec<String> {
        self.find(query, threshold)
            .into_iter()
            .map(|(word, _)| word.to_string())
            .collect()
    }

    /// Number of stored words (one node per word).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Length of the longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(ROOT, 1usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for &child in self.nodes[id as usize].children.values() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}

impl<S: AsRef<str>> FromIterator<S> for BkTree<DamerauLevenshtein> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = BkTree::new();
        for word in iter {
            tree.insert(word.as_ref());
        }
        tree
    }
}
