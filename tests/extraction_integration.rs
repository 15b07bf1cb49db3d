// Sentence extraction over the sample sentences and crafted edge cases

use corak::{extract, DataClass, ExtractionResult, MarkerStyle, PatternRegistry, Segment, SpanExtractor, SAMPLE_SENTENCES};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::assert_golden_file;
use test_utils::fixtures::{SAMPLE_ANNOTATED, SAMPLE_SPAN_COUNTS};

fn assert_span_invariants(text: &str, result: &ExtractionResult) {
    assert_eq!(result.original_text, text);
    for span in result.spans.iter().chain(result.discarded.iter()) {
        assert!(span.start < span.end, "empty span {span:?}");
        assert!(span.end <= text.len(), "span past end {span:?}");
        assert_eq!(&text[span.start..span.end], span.value);
    }
    for pair in result.spans.windows(2) {
        assert!(pair[0].start <= pair[1].start);
        assert!(pair[0].end <= pair[1].start, "kept spans overlap: {pair:?}");
    }
}

#[test]
fn test_sample_sentences_golden() {
    let actual: Vec<String> = SAMPLE_SENTENCES.iter().map(|s| extract(s).annotated_text).collect();
    assert_golden_file(&actual.join("\n"), SAMPLE_ANNOTATED, "sample sentences");
}

#[test]
fn test_sample_sentences_span_counts_and_invariants() {
    for (text, expected) in SAMPLE_SENTENCES.iter().zip(SAMPLE_SPAN_COUNTS) {
        let result = extract(text);
        assert_eq!(result.spans.len(), *expected, "span count for {text:?}");
        assert!(result.discarded.is_empty(), "unexpected overlap in {text:?}");
        assert_span_invariants(text, &result);
    }
}

#[test]
fn test_intro_sentence_order() {
    let result = extract(SAMPLE_SENTENCES[0]);
    let classes: Vec<_> = result.spans.iter().map(|s| s.class).collect();
    assert_eq!(classes, vec![DataClass::Name, DataClass::Phone, DataClass::Email]);
    assert_eq!(result.spans[0].value, "Ahmad bin Abdullah");
    assert_eq!(result.spans[1].value, "012-3456789");
    assert_eq!(result.spans[2].value, "ahmad.abdullah@gmail.com");
}

#[test]
fn test_name_overlapping_email_keeps_name() {
    let text = "Contact Ali Baba@example.com";
    let result = extract(text);

    assert_eq!(result.spans.len(), 1);
    assert_eq!(result.spans[0].class, DataClass::Name);
    assert_eq!(result.spans[0].value, "Contact Ali Baba");

    assert!(result.has_overlaps());
    assert_eq!(result.discarded.len(), 1);
    assert_eq!(result.discarded[0].class, DataClass::Email);
    assert_eq!(result.discarded[0].value, "Baba@example.com");

    assert_eq!(result.annotated_text, "[NAME: Contact Ali Baba]@example.com");
    assert_span_invariants(text, &result);
}

#[test]
fn test_equal_start_keeps_scan_order() {
    let text = "0123456789@mail.com";
    let result = extract(text);

    assert_eq!(result.spans.len(), 1);
    assert_eq!(result.spans[0].class, DataClass::Phone);
    assert_eq!(result.spans[0].value, "0123456789");
    assert_eq!(result.discarded[0].class, DataClass::Email);
    assert_eq!(result.discarded[0].start, 0);
    assert_eq!(result.annotated_text, "[PHONE: 0123456789]@mail.com");
}

#[test]
fn test_email_swallowing_phone_keeps_email() {
    let text = "write to siti0123456789@yahoo.com today";
    let result = extract(text);

    assert_eq!(result.spans.len(), 1);
    assert_eq!(result.spans[0].class, DataClass::Email);
    assert_eq!(result.discarded.len(), 1);
    assert_eq!(result.discarded[0].class, DataClass::Phone);
    assert_eq!(result.annotated_text, "write to [EMAIL: siti0123456789@yahoo.com] today");
}

#[test]
fn test_non_ascii_text_keeps_byte_offsets() {
    let text = "Café owner Nurul Ain — call 012-3456789";
    let result = extract(text);
    assert_span_invariants(text, &result);

    let values: Vec<_> = result.spans.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, vec!["Nurul Ain", "012-3456789"]);
    assert_eq!(result.annotated_text, "Café owner [NAME: Nurul Ain] — call [PHONE: 012-3456789]");
}

#[test]
fn test_word_boundaries_are_ascii() {
    let result = extract("éAhmad Ali here");
    let values: Vec<_> = result.spans.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, ["Ahmad Ali"]);
    assert_eq!(result.spans[0].start, "é".len());

    let result = extract("Siti Noörhaliza called");
    let values: Vec<_> = result.spans.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, ["Siti No"]);

    let result = extract("mail ñuser@example.com");
    let values: Vec<_> = result.spans.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, ["user@example.com"]);
    assert_span_invariants("mail ñuser@example.com", &result);
}

#[test]
fn test_no_candidates_and_empty_input() {
    for text in ["", "lowercase words only", "12345 is too short"] {
        let result = extract(text);
        assert!(result.spans.is_empty(), "{text:?}");
        assert_eq!(result.annotated_text, text);
    }
}

#[test]
fn test_html_rendering_of_sample() {
    let result = extract("ask Lee Chong Wei at 04-1234567");
    assert_eq!(
        result.render(MarkerStyle::Html),
        "ask <span class=\"bg-yellow-200 px-1 rounded font-medium\">Lee Chong Wei</span> at \
         <span class=\"bg-blue-200 px-1 rounded font-medium\">04-1234567</span>"
    );
}

#[test]
fn test_extraction_is_repeatable() {
    let registry = PatternRegistry::new().expect("patterns compile");
    let extractor = SpanExtractor::new(&registry);
    for text in SAMPLE_SENTENCES {
        let first = extractor.extract(text);
        assert_eq!(first, extractor.extract(text));
        assert_eq!(first, extract(text));
    }
}

#[test]
fn test_segments_alternate_and_cover_text() {
    let text = SAMPLE_SENTENCES[2];
    let result = extract(text);
    let segments = result.segments();

    let highlights = segments.iter().filter(|s| matches!(s, Segment::Highlight { .. })).count();
    assert_eq!(highlights, result.spans.len());

    let rebuilt: String = segments
        .iter()
        .map(|seg| match seg {
            Segment::Plain(t) | Segment::Highlight { text: t, .. } => *t,
        })
        .collect();
    assert_eq!(rebuilt, text);
}
