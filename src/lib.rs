//! # strdist
//!
//! String distance metrics for comparing short texts such as titles.
//!
//! strdist scores a pair of strings with several independent metrics, all
//! oriented so that 0 means identical:
//!
//! - **Word n-gram overlap**: unigram, bigram and trigram Jaccard-style distances
//! - **Cosine distance**: over term-frequency vectors of the pair's vocabulary
//! - **Edit distances**: Levenshtein, Jaro, Jaro-Winkler and indel ratio
//! - **Scalar deltas**: length and term-count differences
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install strdist
//! strdist "mary had a little lamb" "mary had another little lamb"
//! strdist -m cosine,bigram -f json "string1 some thing else" "string2 some thing else"
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use strdist::prelude::*;
//!
//! let terms = tokenize("mary had a little lamb");
//! assert_eq!(terms.len(), 5);
//!
//! let dist = cosine_distance("mary had a little lamb", "mary had another little lamb").unwrap();
//! assert!((dist - 0.2).abs() < 0.01);
//!
//! // single words have no bigrams, so they are never bigram-identical
//! assert_eq!(bigram_distance("lamb", "lamb"), 1.0);
//!
//! let report = DistanceReport::compute("string1", "string2").unwrap();
//! assert_eq!(report.levenshtein, 1);
//! ```
//!
//! ## Crate Structure
//!
//! strdist is composed of several crates:
//!
//! - [`strdist-core`](https://docs.rs/strdist-core) - Text model (tokenizer, n-grams, term-frequency vectors)
//! - [`strdist-similarity`](https://docs.rs/strdist-similarity) - Distance metrics and reports

// Re-export core types
pub use strdist_core::{
    ngrams, tokenize,
    Error, Result,
    Term, TermSequence,
    TermFrequencyVector, Vocabulary,
};

// Re-export metrics
pub use strdist_similarity::{
    bigram_distance, cosine_distance, edit_distance,
    jaro_distance, jaro_winkler_distance, length_distance,
    ratio_distance, set_overlap_distance, term_count_distance,
    term_count_distance_text, trigram_distance, unigram_distance,
    CharMetrics, DistanceReport, EditMetrics, Metric, MetricScore, ParseMetricError,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ngrams, tokenize,
        Error, Result,
        TermSequence,
        bigram_distance, cosine_distance, edit_distance,
        jaro_distance, jaro_winkler_distance, length_distance,
        ratio_distance, set_overlap_distance, term_count_distance,
        trigram_distance, unigram_distance,
        DistanceReport, Metric,
    };
}
