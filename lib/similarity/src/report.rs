//! All-metrics report for a single pair of texts

use crate::distance::{
    bigram_distance, cosine_distance, length_distance, term_count_distance, trigram_distance,
    unigram_distance,
};
use crate::edit::{similarity_to_distance, CharMetrics, EditMetrics};
use crate::metric::Metric;
use serde::Serialize;
use strdist_core::{tokenize, Result};
use tracing::debug;

/// Every distance between two texts
///
/// Serializes as an object keyed by metric name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceReport {
    pub levenshtein: usize,
    pub jaro: f64,
    pub jaro_winkler: f64,
    pub ratio: f64,
    pub length: usize,
    pub term_count: usize,
    pub unigram: f64,
    pub bigram: f64,
    pub trigram: f64,
    pub cosine: f64,
}

/// One named metric value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricScore {
    pub metric: Metric,
    pub value: f64,
}

impl DistanceReport {
    /// Compute every metric using the default [`CharMetrics`] backend
    pub fn compute(t1: &str, t2: &str) -> Result<Self> {
        Self::compute_with(&CharMetrics, t1, t2)
    }

    /// Compute every metric, taking the character-level ones from `edit`
    pub fn compute_with<E: EditMetrics + ?Sized>(edit: &E, t1: &str, t2: &str) -> Result<Self> {
        let report = Self {
            levenshtein: edit.edit_distance(t1, t2),
            jaro: similarity_to_distance(edit.jaro(t1, t2)),
            jaro_winkler: similarity_to_distance(edit.jaro_winkler(t1, t2)),
            ratio: similarity_to_distance(edit.ratio(t1, t2)),
            length: length_distance(t1, t2),
            term_count: term_count_distance(&tokenize(t1), &tokenize(t2)),
            unigram: unigram_distance(t1, t2),
            bigram: bigram_distance(t1, t2),
            trigram: trigram_distance(t1, t2),
            cosine: cosine_distance(t1, t2)?,
        };

        debug!(
            levenshtein = report.levenshtein,
            cosine = report.cosine,
            unigram = report.unigram,
            "Computed distance report"
        );

        Ok(report)
    }

    /// Value of a single metric, integer counts widened to `f64`
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Levenshtein => self.levenshtein as f64,
            Metric::Jaro => self.jaro,
            Metric::JaroWinkler => self.jaro_winkler,
            Metric::Ratio => self.ratio,
            Metric::Length => self.length as f64,
            Metric::TermCount => self.term_count as f64,
            Metric::Unigram => self.unigram,
            Metric::Bigram => self.bigram,
            Metric::Trigram => self.trigram,
            Metric::Cosine => self.cosine,
        }
    }

    /// Scores for all metrics in [`Metric::ALL`] order
    pub fn entries(&self) -> Vec<MetricScore> {
        self.select(&Metric::ALL)
    }

    /// Scores for the requested metrics, in the order given
    pub fn select(&self, metrics: &[Metric]) -> Vec<MetricScore> {
        metrics
            .iter()
            .map(|&metric| MetricScore {
                metric,
                value: self.get(metric),
            })
            .collect()
    }
}
