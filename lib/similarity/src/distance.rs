//! Distance functions between pairs of texts
//!
//! Every function is pure and symmetric. Normalized distances lie in
//! [0.0, 1.0] where 0.0 means identical; the scalar deltas are plain counts.

use ahash::AHashSet;
use std::hash::Hash;
use strdist_core::{snap_similarity, tokenize, Result, TermSequence, Vocabulary, BIGRAM, TRIGRAM};

/// Jaccard-style distance over word unigrams (distinct terms)
///
/// Term frequency is ignored: 0.0 when both texts use the same set of
/// words, 1.0 when they share none.
pub fn unigram_distance(t1: &str, t2: &str) -> f64 {
    let a = tokenize(t1);
    let b = tokenize(t2);
    jaccard_distance(&a.term_set(), &b.term_set())
}

/// Jaccard-style distance over word bigrams
///
/// A single-word text has no bigrams, so two equal one-word texts are
/// at distance 1.0.
pub fn bigram_distance(t1: &str, t2: &str) -> f64 {
    let a = tokenize(t1);
    let b = tokenize(t2);
    jaccard_distance(&a.ngram_set(BIGRAM), &b.ngram_set(BIGRAM))
}

/// Jaccard-style distance over word trigrams
pub fn trigram_distance(t1: &str, t2: &str) -> f64 {
    let a = tokenize(t1);
    let b = tokenize(t2);
    jaccard_distance(&a.ngram_set(TRIGRAM), &b.ngram_set(TRIGRAM))
}

/// Jaccard-style distance over word n-grams of order `n`
///
/// # Arguments
/// * `t1` - First text
/// * `t2` - Second text
/// * `n` - N-gram order, at least 1
///
/// # Returns
/// `1 - |shared| / |all|`, or 1.0 when neither text has an n-gram of this order
pub fn set_overlap_distance(t1: &str, t2: &str, n: usize) -> Result<f64> {
    let a = tokenize(t1);
    let b = tokenize(t2);
    Ok(jaccard_distance(&a.try_ngram_set(n)?, &b.try_ngram_set(n)?))
}

/// `1 - |a ∩ b| / |a ∪ b|`, with two empty sets at the maximum distance
fn jaccard_distance<K: Hash + Eq>(a: &AHashSet<K>, b: &AHashSet<K>) -> f64 {
    let shared = a.intersection(b).count();
    let all = a.len() + b.len() - shared;

    if all == 0 {
        return 1.0;
    }

    1.0 - shared as f64 / all as f64
}

/// Cosine distance between the term-frequency vectors of two texts
///
/// The vectors span the union vocabulary of both texts. Two texts without
/// any terms are identical (0.0); a text without terms against one with
/// terms is at 1.0.
pub fn cosine_distance(t1: &str, t2: &str) -> Result<f64> {
    let a = tokenize(t1);
    let b = tokenize(t2);

    if a.is_empty() && b.is_empty() {
        return Ok(0.0);
    }

    let vocab = Vocabulary::from_sequences(&a, &b);
    let va = vocab.vectorize(&a)?;
    let vb = vocab.vectorize(&b)?;

    let similarity = snap_similarity(va.cosine_similarity(&vb)?)?;
    Ok(1.0 - similarity)
}

/// Difference in length, counted in Unicode scalar values
#[inline]
pub fn length_distance(t1: &str, t2: &str) -> usize {
    t1.chars().count().abs_diff(t2.chars().count())
}

/// Difference in the number of terms of two tokenized texts
#[inline]
pub fn term_count_distance(seq1: &TermSequence<'_>, seq2: &TermSequence<'_>) -> usize {
    seq1.len().abs_diff(seq2.len())
}

/// [`term_count_distance`] for raw texts
pub fn term_count_distance_text(t1: &str, t2: &str) -> usize {
    term_count_distance(&tokenize(t1), &tokenize(t2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strdist_core::Error;

    const S1: &str = "string1 some thing else";
    const S2: &str = "string2 some thing else";

    #[test]
    fn test_unigram_distance_four_words() {
        assert_eq!(unigram_distance(S1, S1), 0.0);
        assert_eq!(unigram_distance(S1, S2), 0.4);
    }

    #[test]
    fn test_bigram_distance_four_words() {
        assert_eq!(bigram_distance(S1, S1), 0.0);
        assert_eq!(bigram_distance(S1, S2), 0.5);
    }

    #[test]
    fn test_trigram_distance_four_words() {
        assert_eq!(trigram_distance(S1, S1), 0.0);
        let dist = trigram_distance(S1, S2);
        assert!((dist - 2.0 / 3.0).abs() < 0.01, "got {dist}");
    }

    #[test]
    fn test_ngram_distances_one_word() {
        assert_eq!(unigram_distance("string1", "string1"), 0.0);
        assert_eq!(unigram_distance("string1", "string2"), 1.0);

        // no bigrams or trigrams exist, so equal words still count as different
        assert_eq!(bigram_distance("string1", "string1"), 1.0);
        assert_eq!(bigram_distance("string1", "string2"), 1.0);
        assert_eq!(trigram_distance("string1", "string1"), 1.0);
        assert_eq!(trigram_distance("string1", "string2"), 1.0);
    }

    #[test]
    fn test_unigram_distance_empty() {
        assert_eq!(unigram_distance("", ""), 1.0);
        assert_eq!(unigram_distance("word", ""), 1.0);
    }

    #[test]
    fn test_unigram_ignores_frequency_and_order() {
        assert_eq!(unigram_distance("a b c", "c c b a a"), 0.0);
    }

    #[test]
    fn test_set_overlap_matches_named_orders() {
        let pairs = [(S1, S2), ("a b c d e", "a b x d e"), ("one", "one two three")];
        for (a, b) in pairs {
            assert_eq!(set_overlap_distance(a, b, 1).unwrap(), unigram_distance(a, b));
            assert_eq!(set_overlap_distance(a, b, 2).unwrap(), bigram_distance(a, b));
            assert_eq!(set_overlap_distance(a, b, 3).unwrap(), trigram_distance(a, b));
        }
    }

    #[test]
    fn test_set_overlap_higher_order() {
        let text = "the quick brown fox jumps";
        assert_eq!(set_overlap_distance(text, text, 5).unwrap(), 0.0);
        assert_eq!(set_overlap_distance(text, text, 6).unwrap(), 1.0);
    }

    #[test]
    fn test_set_overlap_zero_order() {
        assert!(matches!(
            set_overlap_distance(S1, S2, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cosine_distance_identity() {
        assert_eq!(cosine_distance("string1", "string1").unwrap(), 0.0);
        assert_eq!(cosine_distance("string1", "string2").unwrap(), 1.0);
        assert_eq!(cosine_distance("mary had a little lamb", "mary had a little lamb").unwrap(), 0.0);
        assert_eq!(cosine_distance("to be or not to be", "to be or not to be").unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_distance_mary() {
        let dist = cosine_distance("mary had a little lamb", "mary had another little lamb").unwrap();
        assert!(dist > 0.19 && dist < 0.21, "got {dist}");

        let dist = cosine_distance("mary had a little lamb", "mary had little lamb").unwrap();
        assert!((dist - 0.105572809).abs() < 0.005, "got {dist}");
    }

    #[test]
    fn test_cosine_distance_empty_inputs() {
        assert_eq!(cosine_distance("", "").unwrap(), 0.0);
        assert_eq!(cosine_distance("  \t", "\n").unwrap(), 0.0);
        assert_eq!(cosine_distance("", "lamb").unwrap(), 1.0);
        assert_eq!(cosine_distance("lamb", " ").unwrap(), 1.0);
    }

    #[test]
    fn test_cosine_distance_proportional_counts() {
        assert_eq!(cosine_distance("a b", "a b a b").unwrap(), 0.0);
        assert_eq!(cosine_distance("b a", "a b").unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_distance_symmetric() {
        let a = "the cat sat on the mat";
        let b = "the dog sat on the log";
        assert_eq!(cosine_distance(a, b).unwrap(), cosine_distance(b, a).unwrap());
    }

    #[test]
    fn test_length_distance() {
        assert_eq!(length_distance("string1", "string1"), 0);
        assert_eq!(length_distance("string1", "string2"), 0);
        assert_eq!(length_distance("abc", "a"), 2);
        assert_eq!(length_distance("a", "abc"), 2);
        // counted in chars, not bytes
        assert_eq!(length_distance("héllo", "hello"), 0);
    }

    #[test]
    fn test_term_count_distance() {
        let a = tokenize("string1");
        let b = tokenize("string2");
        assert_eq!(term_count_distance(&a, &a), 0);
        assert_eq!(term_count_distance(&a, &b), 0);

        let c = tokenize("a title");
        let d = tokenize("title");
        assert_eq!(term_count_distance(&c, &d), 1);
        assert_eq!(term_count_distance_text("a title", "title"), 1);
        assert_eq!(term_count_distance_text("", "one two three"), 3);
    }
}
