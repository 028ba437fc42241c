//! # strdist Core
//!
//! Core text model for the strdist string distance library.
//!
//! This crate provides the building blocks the distance metrics are built on:
//!
//! - [`tokenize`] / [`TermSequence`] - Whitespace tokenization into borrowed terms
//! - [`ngrams`] / [`ngram_set`] - Sliding-window n-gram extraction over any slice
//! - [`Vocabulary`] - Per-comparison term to column index mapping
//! - [`TermFrequencyVector`] - Term counts with dot product, norm and cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use strdist_core::{tokenize, Vocabulary};
//!
//! let a = tokenize("mary had a little lamb");
//! let b = tokenize("mary had little lamb");
//!
//! let vocab = Vocabulary::from_sequences(&a, &b);
//! let va = vocab.vectorize(&a).unwrap();
//! let vb = vocab.vectorize(&b).unwrap();
//!
//! let similarity = va.cosine_similarity(&vb).unwrap();
//! assert!((similarity - 0.8944).abs() < 1e-3);
//! ```

pub mod error;
pub mod ngram;
pub mod tokenizer;
pub mod vector;

pub use error::{Error, Result};
pub use ngram::{ngram_set, ngrams, BIGRAM, TRIGRAM};
pub use tokenizer::{tokenize, Term, TermSequence};
pub use vector::{snap_similarity, TermFrequencyVector, Vocabulary, SIMILARITY_TOLERANCE};
