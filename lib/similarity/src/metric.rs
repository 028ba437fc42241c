//! Metric selection
//!
//! Names every distance the crate computes so callers (and the CLI) can
//! pick metrics by name and evaluate them uniformly.

use crate::distance::{
    bigram_distance, cosine_distance, length_distance, term_count_distance_text,
    trigram_distance, unigram_distance,
};
use crate::edit::{edit_distance, jaro_distance, jaro_winkler_distance, ratio_distance};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strdist_core::Result;

/// A distance metric between two texts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Levenshtein edit distance (unbounded count)
    Levenshtein,
    /// 1 - Jaro similarity
    Jaro,
    /// 1 - Jaro-Winkler similarity
    JaroWinkler,
    /// 1 - normalized Levenshtein similarity
    Ratio,
    /// Difference in character count (unbounded count)
    Length,
    /// Difference in term count (unbounded count)
    TermCount,
    /// Word unigram set overlap
    Unigram,
    /// Word bigram set overlap
    Bigram,
    /// Word trigram set overlap
    Trigram,
    /// Term-frequency cosine distance
    Cosine,
}

impl Metric {
    /// Every metric, in report order
    pub const ALL: [Metric; 10] = [
        Metric::Levenshtein,
        Metric::Jaro,
        Metric::JaroWinkler,
        Metric::Ratio,
        Metric::Length,
        Metric::TermCount,
        Metric::Unigram,
        Metric::Bigram,
        Metric::Trigram,
        Metric::Cosine,
    ];

    /// Canonical snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::Jaro => "jaro",
            Metric::JaroWinkler => "jaro_winkler",
            Metric::Ratio => "ratio",
            Metric::Length => "length",
            Metric::TermCount => "term_count",
            Metric::Unigram => "unigram",
            Metric::Bigram => "bigram",
            Metric::Trigram => "trigram",
            Metric::Cosine => "cosine",
        }
    }

    /// Whether the metric is normalized to [0.0, 1.0]
    ///
    /// Unbounded metrics are non-negative integer counts.
    pub fn is_bounded(self) -> bool {
        !matches!(self, Metric::Levenshtein | Metric::Length | Metric::TermCount)
    }

    /// Evaluate this metric on a pair of texts
    pub fn evaluate(self, t1: &str, t2: &str) -> Result<f64> {
        let value = match self {
            Metric::Levenshtein => edit_distance(t1, t2) as f64,
            Metric::Jaro => jaro_distance(t1, t2),
            Metric::JaroWinkler => jaro_winkler_distance(t1, t2),
            Metric::Ratio => ratio_distance(t1, t2),
            Metric::Length => length_distance(t1, t2) as f64,
            Metric::TermCount => term_count_distance_text(t1, t2) as f64,
            Metric::Unigram => unigram_distance(t1, t2),
            Metric::Bigram => bigram_distance(t1, t2),
            Metric::Trigram => trigram_distance(t1, t2),
            Metric::Cosine => cosine_distance(t1, t2)?,
        };
        Ok(value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let metric = match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "levenshtein" | "lev" | "edit" => Metric::Levenshtein,
            "jaro" => Metric::Jaro,
            "jaro_winkler" | "jw" => Metric::JaroWinkler,
            "ratio" => Metric::Ratio,
            "length" | "len" => Metric::Length,
            "term_count" | "terms" => Metric::TermCount,
            "unigram" | "unigrams" => Metric::Unigram,
            "bigram" | "bigrams" => Metric::Bigram,
            "trigram" | "trigrams" => Metric::Trigram,
            "cosine" | "cos" => Metric::Cosine,
            _ => return Err(ParseMetricError::UnknownMetric(s.to_string())),
        };
        Ok(metric)
    }
}

/// Errors that can occur when parsing a metric name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMetricError {
    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>().unwrap(), metric);
        }
        assert_eq!("jaro-winkler".parse::<Metric>().unwrap(), Metric::JaroWinkler);
        assert_eq!("JW".parse::<Metric>().unwrap(), Metric::JaroWinkler);
        assert_eq!(" cos ".parse::<Metric>().unwrap(), Metric::Cosine);
        assert_eq!("term-count".parse::<Metric>().unwrap(), Metric::TermCount);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "soundex".parse::<Metric>(),
            Err(ParseMetricError::UnknownMetric("soundex".to_string()))
        );
    }

    #[test]
    fn test_display_matches_serde() {
        for metric in Metric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{metric}\""));
            let parsed: Metric = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn test_bounded() {
        assert!(!Metric::Levenshtein.is_bounded());
        assert!(!Metric::Length.is_bounded());
        assert!(!Metric::TermCount.is_bounded());
        assert!(Metric::Cosine.is_bounded());
        assert!(Metric::Trigram.is_bounded());
    }

    #[test]
    fn test_evaluate_dispatch() {
        let (a, b) = ("string1 some thing else", "string2 some thing else");
        assert_eq!(Metric::Unigram.evaluate(a, b).unwrap(), 0.4);
        assert_eq!(Metric::Bigram.evaluate(a, b).unwrap(), 0.5);
        assert_eq!(Metric::Levenshtein.evaluate(a, b).unwrap(), 1.0);
        assert_eq!(Metric::Length.evaluate(a, b).unwrap(), 0.0);
        assert_eq!(Metric::TermCount.evaluate(a, "else").unwrap(), 3.0);
        assert_eq!(Metric::Cosine.evaluate("", "").unwrap(), 0.0);
    }
}
