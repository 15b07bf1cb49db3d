pub mod accuracy;
pub mod data_class;
pub mod dataset;
pub mod extractor;
pub mod patterns;
pub mod reader;
pub mod validator;

// Re-export main types for convenient access
pub use data_class::DataClass;
pub use patterns::{describe, registry, PatternDescription, PatternRegistry, PatternSpec};
pub use validator::{validate, Validator};

pub use accuracy::{
    compute_metrics, AccuracyMetrics, Annotation, AnnotationSession, ConfusionCounts, QaReport, QaResult,
};
pub use dataset::{generate_test_dataset, LabeledCase, SAMPLE_SENTENCES};

pub use extractor::{extract, ExtractedSpan, ExtractionResult, MarkerStyle, Segment, SpanExtractor};
