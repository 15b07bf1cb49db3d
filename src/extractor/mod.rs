// WHY: span extraction over free text; scans every class pattern, orders the
// candidates, drops overlaps and rebuilds the text as highlight segments

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data_class::DataClass;
use crate::patterns::{registry, PatternRegistry};

pub mod render;
pub mod scanner;

pub use render::{render, render_into, MarkerStyle};

/// Substring of the source text recognised as one data class
///
/// `start` and `end` are byte offsets into the source, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSpan {
    pub class: DataClass,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

impl ExtractedSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when the two byte ranges share at least one byte
    pub fn overlaps(&self, other: &ExtractedSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Piece of the reconstructed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Untouched source text between highlights
    Plain(&'a str),
    /// Source text recognised as `class`
    Highlight { class: DataClass, text: &'a str },
}

/// Output of one extraction call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub original_text: String,
    /// Kept spans, ascending by start and pairwise non-overlapping
    pub spans: Vec<ExtractedSpan>,
    /// Candidates dropped because they overlapped an earlier kept span
    pub discarded: Vec<ExtractedSpan>,
    /// Source text with kept spans in bracket markers
    pub annotated_text: String,
}

impl ExtractionResult {
    /// Plain and highlighted pieces covering the source text exactly once
    pub fn segments(&self) -> Vec<Segment<'_>> {
        build_segments(&self.original_text, &self.spans)
    }

    /// Render the kept spans in the requested marker style
    pub fn render(&self, style: MarkerStyle) -> String {
        render(&self.segments(), style)
    }

    pub fn has_overlaps(&self) -> bool {
        !self.discarded.is_empty()
    }

    /// Kept spans of a single class
    pub fn spans_of(&self, class: DataClass) -> impl Iterator<Item = &ExtractedSpan> {
        self.spans.iter().filter(move |s| s.class == class)
    }
}

/// Walk sorted, non-overlapping spans once and split the text around them
fn build_segments<'a>(text: &'a str, spans: &[ExtractedSpan]) -> Vec<Segment<'a>> {
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last_end = 0;

    for span in spans {
        if span.start > last_end {
            segments.push(Segment::Plain(&text[last_end..span.start]));
        }
        segments.push(Segment::Highlight {
            class: span.class,
            text: &text[span.start..span.end],
        });
        last_end = span.end;
    }

    if last_end < text.len() {
        segments.push(Segment::Plain(&text[last_end..]));
    }

    segments
}

/// Sentence extractor bound to a pattern registry
#[derive(Debug, Clone, Copy)]
pub struct SpanExtractor<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> SpanExtractor<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }

    /// Extract names, phone numbers and emails from `text`
    pub fn extract(&self, text: &str) -> ExtractionResult {
        debug!("Starting span extraction on {} bytes", text.len());

        let mut candidates = scanner::scan(self.registry, text);
        // WHY: stable sort keeps scan order (name, phone, email) on equal starts
        candidates.sort_by_key(|span| span.start);
        let (spans, discarded) = scanner::resolve_overlaps(candidates);

        if !discarded.is_empty() {
            debug!(discarded = discarded.len(), "Dropped overlapping candidate spans");
        }

        let annotated_text = render(&build_segments(text, &spans), MarkerStyle::Bracket);
        debug!(spans = spans.len(), "Span extraction complete");

        ExtractionResult {
            original_text: text.to_string(),
            spans,
            discarded,
            annotated_text,
        }
    }
}

impl Default for SpanExtractor<'static> {
    fn default() -> Self {
        Self::new(registry())
    }
}

/// Extract against the process-wide registry
pub fn extract(text: &str) -> ExtractionResult {
    SpanExtractor::default().extract(text)
}
