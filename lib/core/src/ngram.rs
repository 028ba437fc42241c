//! Sliding-window n-gram extraction over arbitrary sequences.
//!
//! Windows borrow from the input slice, so extracting n-grams from a
//! [`TermSequence`](crate::TermSequence) never copies the terms themselves.

use crate::error::{Error, Result};
use ahash::AHashSet;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Order used for bigram comparisons
pub const BIGRAM: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(n) => n,
    None => unreachable!(),
};

/// Order used for trigram comparisons
pub const TRIGRAM: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// Extract the n-grams of `sequence` in order of their starting position.
///
/// A sequence of length `L` yields `max(0, L - n + 1)` windows; a sequence
/// shorter than `n` yields none. `n == 0` is rejected.
///
/// ```rust
/// use strdist_core::ngrams;
///
/// let grams = ngrams(&[1, 2, 3, 4], 2).unwrap();
/// assert_eq!(grams, vec![&[1, 2][..], &[2, 3][..], &[3, 4][..]]);
/// assert!(ngrams(&[1], 2).unwrap().is_empty());
/// ```
pub fn ngrams<T>(sequence: &[T], n: usize) -> Result<Vec<&[T]>> {
    let n = checked_order(n)?;
    Ok(windows(sequence, n).collect())
}

/// Collect the distinct n-grams of `sequence`
pub fn ngram_set<T: Hash + Eq>(sequence: &[T], n: NonZeroUsize) -> AHashSet<&[T]> {
    windows(sequence, n).collect()
}

/// Validate a runtime n-gram order
pub fn checked_order(n: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(n)
        .ok_or_else(|| Error::InvalidArgument("n-gram order must be at least 1".to_string()))
}

#[inline]
fn windows<T>(sequence: &[T], n: NonZeroUsize) -> std::slice::Windows<'_, T> {
    sequence.windows(n.get())
}
