//! Whitespace tokenizer
//!
//! Terms are borrowed `&str` slices of the input. No case folding,
//! punctuation stripping or stemming is applied.

use crate::ngram::{self, checked_order};
use crate::error::Result;
use ahash::AHashSet;
use serde::Serialize;
use std::num::NonZeroUsize;

/// A whitespace-delimited unit of text
pub type Term<'a> = &'a str;

/// Ordered terms of one input string
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TermSequence<'a> {
    terms: Vec<Term<'a>>,
}

/// Split `text` on runs of Unicode whitespace.
///
/// The ASCII information separators U+001C..=U+001F also separate terms.
/// Empty and all-whitespace input yields an empty sequence.
#[inline]
#[must_use]
pub fn tokenize(text: &str) -> TermSequence<'_> {
    TermSequence {
        terms: text
            .split(is_separator)
            .filter(|term| !term.is_empty())
            .collect(),
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl<'a> TermSequence<'a> {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn terms(&self) -> &[Term<'a>] {
        &self.terms
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Term<'a>> + '_ {
        self.terms.iter().copied()
    }

    /// Distinct terms, order discarded
    pub fn term_set(&self) -> AHashSet<Term<'a>> {
        self.iter().collect()
    }

    /// Ordered n-grams of this sequence; see [`ngram::ngrams`]
    pub fn ngrams(&self, n: usize) -> Result<Vec<&[Term<'a>]>> {
        ngram::ngrams(&self.terms, n)
    }

    /// Distinct n-grams of order `n`
    pub fn ngram_set(&self, n: NonZeroUsize) -> AHashSet<&[Term<'a>]> {
        ngram::ngram_set(&self.terms, n)
    }

    /// Distinct n-grams for a runtime order, rejecting `n == 0`
    pub fn try_ngram_set(&self, n: usize) -> Result<AHashSet<&[Term<'a>]>> {
        Ok(self.ngram_set(checked_order(n)?))
    }
}
