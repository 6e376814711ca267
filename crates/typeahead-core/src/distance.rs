// Edit distance metrics: Damerau-Levenshtein and plain Levenshtein
//
// Both metrics work on char slices so callers that compare one query against
// many words can decode the query once. The working buffers live inside the
// metric value and are reused between calls; they are preallocated for words
// up to MAX_WORD_LEN characters and grow on demand for longer inputs.

use hashbrown::HashMap;

/// Word length (in characters) the working buffers are sized for up front.
///
/// Longer inputs are still measured exactly; the buffers are reallocated to
/// fit them.
pub const MAX_WORD_LEN: usize = 32;

/// A distance function over character sequences.
///
/// Implementations must be a metric: `distance(a, a) == 0`, symmetric, and
/// obeying the triangle inequality. The metric index relies on the latter to
/// prune its search.
///
/// `&mut self` gives implementations access to reusable scratch space.
/// Cloning a metric yields an independent scratch area.
pub trait Metric {
    fn distance(&mut self, a: &[char], b: &[char]) -> usize;
}

// ---------------------------------------------------------------------------
// Damerau-Levenshtein
// ---------------------------------------------------------------------------

/// Unrestricted Damerau-Levenshtein distance (insertions, deletions,
/// substitutions and transpositions of adjacent characters).
///
/// Unlike the optimal string alignment variant, a substring may be edited
/// after being transposed, which keeps the triangle inequality intact:
/// `distance("ca", "abc") == 2`.
#[derive(Debug, Clone)]
pub struct DamerauLevenshtein {
    /// Row-major `(len_a + 2) x (len_b + 2)` matrix.
    matrix: Vec<usize>,
    /// Last row (1-based) in which each character of `a` was seen.
    last_row: HashMap<char, usize>,
}

impl DamerauLevenshtein {
    /// Create a metric whose buffers fit words of up to `max_word_len`
    /// characters without reallocating.
    pub fn new(max_word_len: usize) -> Self {
        let side = max_word_len + 2;
        Self {
            matrix: Vec::with_capacity(side * side),
            last_row: HashMap::with_capacity(max_word_len),
        }
    }
}

impl Default for DamerauLevenshtein {
    fn default() -> Self {
        Self::new(MAX_WORD_LEN)
    }
}

impl Metric for DamerauLevenshtein {
    fn distance(&mut self, a: &[char], b: &[char]) -> usize {
        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        let (m, n) = (a.len(), b.len());
        let width = n + 2;
        let infinity = m + n;

        self.matrix.clear();
        self.matrix.resize((m + 2) * width, 0);
        self.last_row.clear();

        let h = &mut self.matrix;
        h[0] = infinity;
        for i in 0..=m {
            h[(i + 1) * width] = infinity;
            h[(i + 1) * width + 1] = i;
        }
        for j in 0..=n {
            h[j + 1] = infinity;
            h[width + j + 1] = j;
        }

        for i in 1..=m {
            let mut last_match_col = 0;
            for j in 1..=n {
                let i1 = self.last_row.get(&b[j - 1]).copied().unwrap_or(0);
                let j1 = last_match_col;
                let cost = if a[i - 1] == b[j - 1] {
                    last_match_col = j;
                    0
                } else {
                    1
                };

                let substitution = h[i * width + j] + cost;
                let insertion = h[(i + 1) * width + j] + 1;
                let deletion = h[i * width + j + 1] + 1;
                let transposition = h[i1 * width + j1] + (i - i1 - 1) + 1 + (j - j1 - 1);

                h[(i + 1) * width + j + 1] = substitution
                    .min(insertion)
                    .min(deletion)
                    .min(transposition);
            }
            self.last_row.insert(a[i - 1], i);
        }

        h[(m + 1) * width + n + 1]
    }
}

// ---------------------------------------------------------------------------
// Levenshtein
// ---------------------------------------------------------------------------

/// Classic Levenshtein distance (no transpositions), computed with two rows.
#[derive(Debug, Clone)]
pub struct Levenshtein {
    previous: Vec<usize>,
    current: Vec<usize>,
}

impl Levenshtein {
    pub fn new(max_word_len: usize) -> Self {
        Self {
            previous: Vec::with_capacity(max_word_len + 1),
            current: Vec::with_capacity(max_word_len + 1),
        }
    }
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self::new(MAX_WORD_LEN)
    }
}

impl Metric for Levenshtein {
    fn distance(&mut self, a: &[char], b: &[char]) -> usize {
        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        self.previous.clear();
        self.previous.extend(0..=b.len());
        self.current.clear();
        self.current.resize(b.len() + 1, 0);

        for (i, &ca) in a.iter().enumerate() {
            self.current[0] = i + 1;
            for (j, &cb) in b.iter().enumerate() {
                let cost = usize::from(ca != cb);
                self.current[j + 1] = (self.previous[j] + cost)
                    .min(self.previous[j + 1] + 1)
                    .min(self.current[j] + 1);
            }
            std::mem::swap(&mut self.previous, &mut self.current);
        }

        self.previous[b.len()]
    }
}

// ---------------------------------------------------------------------------
// Convenience functions
// ---------------------------------------------------------------------------

/// Damerau-Levenshtein distance between two strings, counted in characters.
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    DamerauLevenshtein::default().distance(&a, &b)
}

/// Levenshtein distance between two strings, counted in characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    Levenshtein::default().distance(&a, &b)
}
