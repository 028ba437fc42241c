use crate::error::{Error, Result};
use crate::tokenizer::{Term, TermSequence};
use ahash::AHashMap;
use serde::Serialize;
use tracing::error;

/// Rounding slack tolerated above a cosine similarity of 1.0
pub const SIMILARITY_TOLERANCE: f64 = 5e-10;

/// Column index for every distinct term of a pair of sequences
///
/// Indices follow first appearance, scanning the first sequence and then
/// the second, and are only meaningful within one comparison.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary<'a> {
    index: AHashMap<Term<'a>, usize>,
}

impl<'a> Vocabulary<'a> {
    /// Build the union vocabulary of two sequences
    #[must_use]
    pub fn from_sequences(a: &TermSequence<'a>, b: &TermSequence<'a>) -> Self {
        let mut index = AHashMap::with_capacity(a.len() + b.len());
        for term in a.iter().chain(b.iter()) {
            let next = index.len();
            index.entry(term).or_insert(next);
        }
        Self { index }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Count the occurrences of every vocabulary term in `sequence`
    pub fn vectorize(&self, sequence: &TermSequence<'_>) -> Result<TermFrequencyVector> {
        let mut counts = vec![0.0; self.len()];
        for term in sequence.iter() {
            let column = self.index_of(term).ok_or_else(|| {
                error!(term, vocabulary_size = self.len(), "term missing from vocabulary");
                Error::InternalInvariantViolation(format!("term {term:?} missing from vocabulary"))
            })?;
            counts[column] += 1.0;
        }
        Ok(TermFrequencyVector { counts })
    }
}

/// Per-term occurrence counts over a [`Vocabulary`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermFrequencyVector {
    counts: Vec<f64>,
}

impl TermFrequencyVector {
    #[inline]
    #[must_use]
    pub fn new(counts: Vec<f64>) -> Self {
        Self { counts }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.counts
    }

    #[inline]
    pub fn dot(&self, other: &TermFrequencyVector) -> f64 {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.counts.iter().map(|x| x * x).sum()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Raw cosine similarity, 0.0 when either vector has zero norm
    ///
    /// The denominator is `sqrt(|a|² |b|²)`: for integral counts a single
    /// square root keeps identical and proportional vectors at exactly 1.0.
    ///
    /// Both vectors must come from the same [`Vocabulary`]; differing
    /// dimensions are an [`Error::InternalInvariantViolation`].
    pub fn cosine_similarity(&self, other: &TermFrequencyVector) -> Result<f64> {
        if self.dim() != other.dim() {
            error!(
                left = self.dim(),
                right = other.dim(),
                "term-frequency vector dimension mismatch"
            );
            return Err(Error::InternalInvariantViolation(format!(
                "cannot compare vectors of dimension {} and {}",
                self.dim(),
                other.dim()
            )));
        }

        let denominator = (self.norm_squared() * other.norm_squared()).sqrt();
        if denominator == 0.0 {
            return Ok(0.0);
        }

        Ok(self.dot(other) / denominator)
    }
}

/// Snap rounding overshoot above 1.0 and reject anything else outside [0, 1]
pub fn snap_similarity(similarity: f64) -> Result<f64> {
    if similarity > 1.0 && similarity <= 1.0 + SIMILARITY_TOLERANCE {
        return Ok(1.0);
    }
    if (0.0..=1.0).contains(&similarity) {
        return Ok(similarity);
    }

    error!(similarity, tolerance = SIMILARITY_TOLERANCE, "cosine similarity out of range");
    Err(Error::InternalInvariantViolation(format!(
        "cosine similarity {similarity} outside [0, 1]"
    )))
}
