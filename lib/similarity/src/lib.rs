//! # strdist Similarity
//!
//! Distance metrics between pairs of strings.
//!
//! Every metric is 0.0 for identical inputs and grows with dissimilarity.
//!
//! ## Features
//!
//! - **N-gram overlap**: unigram/bigram/trigram Jaccard-style distances over words
//! - **Cosine distance**: term-frequency vectors over the pair's shared vocabulary
//! - **Scalar deltas**: character length and term count differences
//! - **Edit distances**: Levenshtein, Jaro, Jaro-Winkler via `strsim`, indel ratio via `rapidfuzz`
//! - **Reports**: every metric for one pair, serializable with serde
//!
//! ## Example
//!
//! ```rust
//! use strdist_similarity::{bigram_distance, cosine_distance, unigram_distance, DistanceReport, Metric};
//!
//! let a = "string1 some thing else";
//! let b = "string2 some thing else";
//!
//! assert_eq!(unigram_distance(a, b), 0.4);
//! assert_eq!(bigram_distance(a, b), 0.5);
//!
//! let cosine = cosine_distance("mary had a little lamb", "mary had little lamb").unwrap();
//! assert!((cosine - 0.1056).abs() < 0.005);
//!
//! let report = DistanceReport::compute(a, b).unwrap();
//! assert_eq!(report.get(Metric::Levenshtein), 1.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Tokenizer  │────>│   N-grams   │────>│ Set overlap │
//! │ (text→terms)│     │  (windows)  │     │  (Jaccard)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │
//!       │              ┌─────────────┐     ┌─────────────┐
//!       └─────────────>│ Vocabulary  │────>│   Cosine    │
//!                      │ (tf vectors)│     │  distance   │
//!                      └─────────────┘     └─────────────┘
//! ```

pub mod distance;
pub mod edit;
pub mod metric;
pub mod report;

// Re-export main types for convenience
pub use distance::{
    bigram_distance,
    cosine_distance,
    length_distance,
    set_overlap_distance,
    term_count_distance,
    term_count_distance_text,
    trigram_distance,
    unigram_distance,
};
pub use edit::{edit_distance, jaro_distance, jaro_winkler_distance, ratio_distance, CharMetrics, EditMetrics};
pub use metric::{Metric, ParseMetricError};
pub use report::{DistanceReport, MetricScore};
