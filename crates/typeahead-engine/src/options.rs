// Search options and their defaults

/// Maximum edit distance for corrections. Higher values find more
/// corrections for badly mangled queries at the cost of precision (and of
/// visiting more of the metric tree).
pub const DISTANCE_THRESHOLD: usize = 2;

/// Limit used when the caller asks for zero or a negative number of results.
pub const DEFAULT_LIMIT: usize = 10;

/// Hard ceiling on the number of results returned by one query.
pub const MAX_LIMIT: usize = 100;

/// How candidates are scored against the query before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scoring {
    /// Jaro-Winkler similarity (favors a shared prefix).
    #[default]
    JaroWinkler,
    /// `1 - distance / max_len` using Damerau-Levenshtein distance.
    EditDistance,
}

/// Tunable parameters of the suggestion strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum edit distance for corrections.
    pub distance_threshold: usize,
    /// Limit substituted for non-positive requested limits.
    pub default_limit: usize,
    /// Largest limit honored; larger requests are capped to this.
    pub max_limit: usize,
    /// Scoring function used for ranking.
    pub scoring: Scoring,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            distance_threshold: DISTANCE_THRESHOLD,
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            scoring: Scoring::default(),
        }
    }
}

impl SearchOptions {
    /// Map a caller-supplied limit onto the effective result count bound.
    ///
    /// Non-positive limits become `default_limit`; limits above `max_limit`
    /// are capped. Never fails.
    pub fn clamp_limit(&self, limit: i64) -> usize {
        if limit <= 0 {
            return self.default_limit;
        }
        usize::try_from(limit).map_or(self.max_limit, |limit| limit.min(self.max_limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let options = SearchOptions::default();
        assert_eq!(options.distance_threshold, 2);
        assert_eq!(options.default_limit, 10);
        assert_eq!(options.max_limit, 100);
        assert_eq!(options.scoring, Scoring::JaroWinkler);
    }

    #[test]
    fn non_positive_limit_uses_default() {
        let options = SearchOptions::default();
        assert_eq!(options.clamp_limit(0), 10);
        assert_eq!(options.clamp_limit(-5), 10);
        assert_eq!(options.clamp_limit(i64::MIN), 10);
    }

    #[test]
    fn large_limit_is_capped() {
        let options = SearchOptions::default();
        assert_eq!(options.clamp_limit(101), 100);
        assert_eq!(options.clamp_limit(1000), 100);
        assert_eq!(options.clamp_limit(i64::MAX), 100);
    }

    #[test]
    fn limit_in_range_passes_through() {
        let options = SearchOptions::default();
        assert_eq!(options.clamp_limit(1), 1);
        assert_eq!(options.clamp_limit(42), 42);
        assert_eq!(options.clamp_limit(100), 100);
    }

    #[test]
    fn custom_bounds_are_respected() {
        let options = SearchOptions {
            default_limit: 3,
            max_limit: 5,
            ..SearchOptions::default()
        };
        assert_eq!(options.clamp_limit(0), 3);
        assert_eq!(options.clamp_limit(7), 5);
    }
}
