// Normalized similarity scores in [0, 1] used for ranking suggestions

use crate::distance::{DamerauLevenshtein, Metric};

/// Scaling factor applied to the common prefix in Jaro-Winkler.
pub const WINKLER_PREFIX_SCALE: f64 = 0.1;

/// Longest common prefix (in characters) that earns the Winkler bonus.
pub const WINKLER_MAX_PREFIX: usize = 4;

/// Jaro similarity between two character sequences.
///
/// Two empty sequences are identical (1.0); one empty sequence matches
/// nothing (0.0).
pub fn jaro(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());
        for j in start..end {
            if !b_matched[j] && b[j] == ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Count matched characters that appear in a different order.
    let mut half_transpositions = 0usize;
    let mut k = 0;
    for (i, &ca) in a.iter().enumerate() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if ca != b[k] {
            half_transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity of `word` against `query` as char slices.
///
/// The Jaro score is boosted by `WINKLER_PREFIX_SCALE` for each leading
/// character the two share, up to `WINKLER_MAX_PREFIX` characters.
pub fn jaro_winkler_chars(word: &[char], query: &[char]) -> f64 {
    let jaro = jaro(word, query);
    let prefix = word
        .iter()
        .zip(query)
        .take(WINKLER_MAX_PREFIX)
        .take_while(|(a, b)| a == b)
        .count();
    let score = jaro + prefix as f64 * WINKLER_PREFIX_SCALE * (1.0 - jaro);
    score.clamp(0.0, 1.0)
}

/// Jaro-Winkler similarity of a candidate `word` against the user's `query`.
///
/// Higher is more similar; 1.0 means identical. Argument order is part of
/// the contract: the candidate `word` comes first and the `query` second,
/// matching the prefix bonus to the characters the user has typed.
pub fn jaro_winkler(word: &str, query: &str) -> f64 {
    let word: Vec<char> = word.chars().collect();
    let query: Vec<char> = query.chars().collect();
    jaro_winkler_chars(&word, &query)
}

/// Similarity derived from Damerau-Levenshtein distance:
/// `1 - distance / max(len(word), len(query))`.
///
/// Two empty strings score 1.0.
pub fn edit_distance_similarity_chars(
    metric: &mut DamerauLevenshtein,
    word: &[char],
    query: &[char],
) -> f64 {
    let longest = word.len().max(query.len());
    if longest == 0 {
        return 1.0;
    }
    let distance = metric.distance(word, query);
    (1.0 - distance as f64 / longest as f64).clamp(0.0, 1.0)
}

/// String form of [`edit_distance_similarity_chars`].
pub fn edit_distance_similarity(word: &str, query: &str) -> f64 {
    let word: Vec<char> = word.chars().collect();
    let query: Vec<char> = query.chars().collect();
    edit_distance_similarity_chars(&mut DamerauLevenshtein::default(), &word, &query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn jaro_reference_values() {
        let martha: Vec<char> = "martha".chars().collect();
        let marhta: Vec<char> = "marhta".chars().collect();
        assert!(close(jaro(&martha, &marhta), 0.9444));
    }

    #[test]
    fn jaro_winkler_reference_values() {
        assert!(close(jaro_winkler("martha", "marhta"), 0.9611));
        assert!(close(jaro_winkler("dixon", "dicksonx"), 0.8133));
        assert!(close(jaro_winkler("dwayne", "duane"), 0.84));
    }

    #[test]
    fn identical_words_score_one() {
        assert_eq!(jaro_winkler("cart", "cart"), 1.0);
        assert_eq!(jaro_winkler("", ""), 1.0);
        assert_eq!(edit_distance_similarity("cart", "cart"), 1.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(jaro_winkler("cat", ""), 0.0);
        assert_eq!(jaro_winkler("", "cat"), 0.0);
        assert_eq!(edit_distance_similarity("", "cat"), 0.0);
    }

    #[test]
    fn disjoint_words_score_zero() {
        assert_eq!(jaro_winkler("abc", "xyz"), 0.0);
    }

    #[test]
    fn shared_prefix_ranks_shorter_completion_higher() {
        let cat = jaro_winkler("cat", "ca");
        let cart = jaro_winkler("cart", "ca");
        assert!(close(cat, 0.9111));
        assert!(close(cart, 0.8667));
        assert!(cat > cart);
        assert_eq!(jaro_winkler("car", "ca"), cat);
    }

    #[test]
    fn prefix_bonus_is_capped_at_four_characters() {
        let with_long_prefix = jaro_winkler("abcdefgz", "abcdefgy");
        let jaro_only = jaro(
            &"abcdefgz".chars().collect::<Vec<_>>(),
            &"abcdefgy".chars().collect::<Vec<_>>(),
        );
        let expected = jaro_only + 4.0 * WINKLER_PREFIX_SCALE * (1.0 - jaro_only);
        assert!(close(with_long_prefix, expected));
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let words = ["", "a", "ab", "abba", "xdog", "dog", "cart", "\u{00E4}iti"];
        for w in words {
            for q in words {
                let jw = jaro_winkler(w, q);
                let ed = edit_distance_similarity(w, q);
                assert!((0.0..=1.0).contains(&jw), "{w} {q} {jw}");
                assert!((0.0..=1.0).contains(&ed), "{w} {q} {ed}");
            }
        }
    }

    #[test]
    fn edit_distance_similarity_uses_longer_length() {
        // distance("xdog", "dog") == 1, longest == 4
        assert!(close(edit_distance_similarity("dog", "xdog"), 0.75));
        assert!(close(edit_distance_similarity("ab", "ba"), 0.5));
    }
}
