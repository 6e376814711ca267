// Case normalization shared by vocabulary loading and query handling

/// Lowercase a word the way vocabulary entries are stored.
///
/// This is full Unicode lowercasing (`str::to_lowercase`); no other
/// normalization is applied.
pub fn normalize(word: &str) -> String {
    if is_normalized(word) {
        return word.to_string();
    }
    word.to_lowercase()
}

/// Returns `true` if `word` is already in its stored (lowercase) form.
pub fn is_normalized(word: &str) -> bool {
    word.chars().all(|c| {
        let mut lower = c.to_lowercase();
        lower.next() == Some(c) && lower.next().is_none()
    })
}
