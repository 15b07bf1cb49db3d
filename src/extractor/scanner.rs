// WHY: per-class regex passes; a single pass never yields overlapping matches
// of its own pattern, so overlap can only arise across classes

use crate::patterns::PatternRegistry;

use super::ExtractedSpan;

/// Collect every sentence-pattern match, class by class in scan order
pub fn scan(registry: &PatternRegistry, text: &str) -> Vec<ExtractedSpan> {
    let mut spans = Vec::new();

    for spec in registry.specs() {
        for mat in spec.sentence_matcher.find_iter(text) {
            spans.push(ExtractedSpan {
                class: spec.class,
                value: text[mat.start()..mat.end()].to_string(),
                start: mat.start(),
                end: mat.end(),
            });
        }
    }

    spans
}

/// Split start-sorted candidates into kept and discarded spans
///
/// First-wins: a candidate that begins before the end of the last kept span
/// is discarded. Input must already be sorted by `start`.
pub fn resolve_overlaps(sorted: Vec<ExtractedSpan>) -> (Vec<ExtractedSpan>, Vec<ExtractedSpan>) {
    let mut kept: Vec<ExtractedSpan> = Vec::with_capacity(sorted.len());
    let mut discarded = Vec::new();

    for span in sorted {
        match kept.last() {
            Some(last) if span.start < last.end => discarded.push(span),
            _ => kept.push(span),
        }
    }

    (kept, discarded)
}
