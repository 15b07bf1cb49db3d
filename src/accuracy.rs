// WHY: scores human verdicts against dataset labels; only annotated cases enter
// the denominator so partial progress does not distort the ratios

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::data_class::DataClass;
use crate::dataset::{cases_for, LabeledCase};

/// Four-way breakdown of annotated cases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positives: u64,
    pub true_negatives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
}

impl ConfusionCounts {
    /// Count one verdict; `predicted` is the annotator's answer, `actual` the label
    pub fn record(&mut self, predicted: bool, actual: bool) {
        match (predicted, actual) {
            (true, true) => self.true_positives += 1,
            (false, false) => self.true_negatives += 1,
            (true, false) => self.false_positives += 1,
            (false, true) => self.false_negatives += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    pub fn correct(&self) -> u64 {
        self.true_positives + self.true_negatives
    }

    /// Derive ratios; any zero denominator yields 0
    pub fn metrics(&self) -> AccuracyMetrics {
        let precision = ratio(self.true_positives, self.true_positives + self.false_positives);
        let recall = ratio(self.true_positives, self.true_positives + self.false_negatives);
        let f1_score = if precision + recall > 0.0 {
            2.0 * (precision * recall) / (precision + recall)
        } else {
            0.0
        };

        AccuracyMetrics {
            total_cases: self.total(),
            correct_predictions: self.correct(),
            accuracy: ratio(self.correct(), self.total()),
            true_positives: self.true_positives,
            true_negatives: self.true_negatives,
            false_positives: self.false_positives,
            false_negatives: self.false_negatives,
            precision,
            recall,
            f1_score,
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Confusion counts plus derived ratios in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    pub total_cases: u64,
    pub correct_predictions: u64,
    pub accuracy: f64,
    pub true_positives: u64,
    pub true_negatives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// Score annotated cases; cases without a verdict are skipped
pub fn compute_metrics<'a, I>(cases: I, annotations: &HashMap<String, bool>) -> AccuracyMetrics
where
    I: IntoIterator<Item = &'a LabeledCase>,
{
    let mut counts = ConfusionCounts::default();
    let mut skipped = 0usize;

    for case in cases {
        match annotations.get(&case.id) {
            Some(&predicted) => counts.record(predicted, case.expected_match),
            None => skipped += 1,
        }
    }

    debug!(annotated = counts.total(), skipped, "Computed confusion counts");
    counts.metrics()
}

/// Human verdict and free-text note for one case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// `None` until the annotator marks match / no match
    #[serde(default)]
    pub verdict: Option<bool>,
    #[serde(default)]
    pub comment: String,
}

/// Mutable annotation map owned by an interactive QA session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationSession {
    annotations: HashMap<String, Annotation>,
}

impl AnnotationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verdict for a case, keeping any existing comment
    pub fn annotate(&mut self, id: &str, verdict: bool) {
        self.annotations.entry(id.to_string()).or_default().verdict = Some(verdict);
    }

    /// Set the comment for a case, keeping any existing verdict
    pub fn comment(&mut self, id: &str, comment: impl Into<String>) {
        self.annotations.entry(id.to_string()).or_default().comment = comment.into();
    }

    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.annotations.get(id)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Snapshot of the cases that carry a verdict
    pub fn verdicts(&self) -> HashMap<String, bool> {
        self.annotations
            .iter()
            .filter_map(|(id, a)| a.verdict.map(|v| (id.clone(), v)))
            .collect()
    }

    /// Metrics restricted to one class
    pub fn metrics_for(&self, cases: &[LabeledCase], class: DataClass) -> AccuracyMetrics {
        compute_metrics(cases_for(cases, class), &self.verdicts())
    }

    /// (annotated, total) for one class; comment-only entries count as annotated
    pub fn progress(&self, cases: &[LabeledCase], class: DataClass) -> (usize, usize) {
        let class_cases = cases_for(cases, class);
        let annotated = class_cases
            .iter()
            .filter(|case| self.annotations.contains_key(&case.id))
            .count();
        (annotated, class_cases.len())
    }

    /// Exportable QA report for one class, stamped with `generated_at`
    pub fn report(&self, cases: &[LabeledCase], class: DataClass, generated_at: DateTime<Utc>) -> QaReport {
        let results = cases_for(cases, class)
            .into_iter()
            .map(|case| {
                let annotation = self.annotations.get(&case.id);
                QaResult {
                    id: case.id.clone(),
                    value: case.value.clone(),
                    expected: case.expected_match,
                    annotated: annotation.and_then(|a| a.verdict),
                    comment: annotation.map(|a| a.comment.clone()).unwrap_or_default(),
                    category: case.category.clone(),
                }
            })
            .collect();

        QaReport {
            class,
            results,
            metrics: self.metrics_for(cases, class),
            timestamp: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// One row of a QA report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaResult {
    pub id: String,
    pub value: String,
    pub expected: bool,
    pub annotated: Option<bool>,
    pub comment: String,
    pub category: String,
}

/// Per-class QA results with metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaReport {
    pub class: DataClass,
    pub results: Vec<QaResult>,
    pub metrics: AccuracyMetrics,
    /// ISO-8601 UTC with millisecond precision, e.g. `2023-11-14T22:13:20.000Z`
    pub timestamp: String,
}
