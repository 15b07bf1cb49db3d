// WHY: whole-string validation used for QA scoring; anchored patterns, trimmed input

use crate::data_class::DataClass;
use crate::patterns::{registry, PatternRegistry};

/// Whole-string validator bound to a pattern registry
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }

    /// Test whether the trimmed candidate matches the class pattern in full
    pub fn validate(&self, class: DataClass, candidate: &str) -> bool {
        self.registry.spec(class).matcher.is_match(trim_padding(candidate))
    }
}

/// Strip surrounding whitespace and byte order marks
fn trim_padding(candidate: &str) -> &str {
    candidate.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new(registry())
    }
}

/// Validate against the process-wide registry
pub fn validate(class: DataClass, candidate: &str) -> bool {
    Validator::default().validate(class, candidate)
}
