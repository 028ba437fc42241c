//! Character-level edit metrics
//!
//! The algorithms themselves come from `strsim` (Levenshtein, Jaro,
//! Jaro-Winkler) and `rapidfuzz` (indel ratio). This module turns their
//! similarities into distances (0.0 = identical) and exposes the backend
//! behind the [`EditMetrics`] trait so it can be swapped.

/// Provider of character-level similarity measures.
///
/// Similarities are in [0.0, 1.0] with 1.0 meaning identical; `edit_distance`
/// is the raw Levenshtein count. All measures work on Unicode scalar values.
pub trait EditMetrics {
    /// Minimum number of single-character insertions, deletions and substitutions
    fn edit_distance(&self, a: &str, b: &str) -> usize;

    /// Jaro similarity
    fn jaro(&self, a: &str, b: &str) -> f64;

    /// Jaro-Winkler similarity (common-prefix boost on top of Jaro)
    fn jaro_winkler(&self, a: &str, b: &str) -> f64;

    /// Normalized indel similarity: `1 - indel(a, b) / (|a| + |b|)`,
    /// where indel distance allows insertions and deletions only
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// [`EditMetrics`] backed by the `strsim` and `rapidfuzz` crates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharMetrics;

impl EditMetrics for CharMetrics {
    #[inline]
    fn edit_distance(&self, a: &str, b: &str) -> usize {
        strsim::levenshtein(a, b)
    }

    #[inline]
    fn jaro(&self, a: &str, b: &str) -> f64 {
        strsim::jaro(a, b)
    }

    #[inline]
    fn jaro_winkler(&self, a: &str, b: &str) -> f64 {
        strsim::jaro_winkler(a, b)
    }

    #[inline]
    fn ratio(&self, a: &str, b: &str) -> f64 {
        rapidfuzz::distance::indel::normalized_similarity(a.chars(), b.chars())
    }
}

/// Levenshtein edit distance
pub fn edit_distance(t1: &str, t2: &str) -> usize {
    CharMetrics.edit_distance(t1, t2)
}

/// `1 - jaro(t1, t2)`
pub fn jaro_distance(t1: &str, t2: &str) -> f64 {
    similarity_to_distance(CharMetrics.jaro(t1, t2))
}

/// `1 - jaro_winkler(t1, t2)`
pub fn jaro_winkler_distance(t1: &str, t2: &str) -> f64 {
    similarity_to_distance(CharMetrics.jaro_winkler(t1, t2))
}

/// `1 - ratio(t1, t2)`
pub fn ratio_distance(t1: &str, t2: &str) -> f64 {
    similarity_to_distance(CharMetrics.ratio(t1, t2))
}

#[inline]
pub(crate) fn similarity_to_distance(similarity: f64) -> f64 {
    (1.0 - similarity).clamp(0.0, 1.0)
}
