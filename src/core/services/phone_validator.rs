use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::PhoneError;

/// One accepted phone number shape.
#[derive(Debug)]
pub struct Grammar {
    /// Stable identifier, e.g. `area-dash-subscriber`.
    pub name: &'static str,
    /// A number this grammar accepts.
    pub example: &'static str,
    pattern: Regex,
}

impl Grammar {
    pub fn is_match(&self, number: &str) -> bool {
        self.pattern.is_match(number)
    }
}

pub const EXTENSION: &str = "extension";
pub const SHORT_SUBSCRIBER: &str = "short-subscriber";

/// `(name, example, pattern)` for every accepted format.
///
/// `extension` and `short-subscriber` are only consulted for their own
/// length buckets; the rest form the catalog for numbers longer than 8
/// characters.
const GRAMMAR_SOURCES: &[(&str, &str, &str)] = &[
    ("area-dash-subscriber", "670-123-4567", r"^\d{3}-\d{3}-\d{4}$"),
    ("area-parens", "(670)123-4567", r"^\(\d{3}\)\d{3}-\d{4}$"),
    ("country1-dash", "1-670-123-4567", r"^1-\d{3}-\d{3}-\d{4}$"),
    ("country1-parens", "1(670)123-4567", r"^1\(\d{3}\)\d{3}-\d{4}$"),
    ("area-space", "670 123 4567", r"^\d{3}\s\d{3}\s\d{4}$"),
    ("periods", "670.123.4567", r"^\d{3}\.\d{3}\.\d{4}$"),
    ("country1-space", "+1 670 123 4567", r"^\+?1\s\d{3}\s\d{3}\s\d{4}$"),
    ("country1-period", "+1.670.123.4567", r"^\+?1\.\d{3}\.\d{3}\.\d{4}$"),
    (SHORT_SUBSCRIBER, "123-4567", r"^\d{3}-\d{4}$"),
    (EXTENSION, "12345", r"^[0-9]{5}$"),
    ("triple-group", "011 701 111 1234", r"^\d{3}\s\d{3}\s\d{3}\s\d{4}$"),
    ("quint-dot", "12345.12345", r"^\d{5}\.\d{5}$"),
    (
        "variable-country",
        "011 1 703 111 1234",
        r"^\d{1,3}\s\d{1,3}\s\d{3}\s\d{3}\s\d{4}$",
    ),
    ("plus-one-parens", "+1(703)111-2121", r"^\+?\d\(\d{3}\)\d{3}-\d{4}$"),
    (
        "long-country",
        "+32 (21) 212-2324",
        r"^\+?\d{1,2}\s\(\d{1,2}\)\s\d{3}-\d{4}$",
    ),
    (
        "danish-pairs",
        "+4512 34 56 78",
        r"^(\+?45)?\d{2}[ .]\d{2}[ .]\d{2}[ .]\d{2}$",
    ),
    ("danish-quads", "4512 3456", r"^(\+?45)?\d{4}[ .]\d{4}$"),
];

/// The compiled grammar catalog, in declaration order.
pub static GRAMMARS: LazyLock<Vec<Grammar>> = LazyLock::new(|| {
    GRAMMAR_SOURCES
        .iter()
        .map(|&(name, example, pattern)| Grammar {
            name,
            example,
            pattern: Regex::new(pattern).expect("grammar patterns are valid"),
        })
        .collect()
});

/// Characters and length accepted at the entry boundary.
static ALLOWED_CHARACTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\d()\-.+\s]{5,20}$").expect("boundary pattern is valid")
});

fn grammar(name: &str) -> &'static Grammar {
    GRAMMARS
        .iter()
        .find(|g| g.name == name)
        .expect("grammar is declared in GRAMMAR_SOURCES")
}

/// Which grammars apply to a number, decided by its length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    /// Fewer than 6 characters: must be a 5-digit extension.
    Extension,
    /// 6 or 7 characters: no grammar is enforced.
    Unchecked,
    /// Exactly 8 characters: must be `DDD-DDDD`.
    Subscriber,
    /// More than 8 characters: any grammar of the general catalog.
    Catalog,
}

impl Bucket {
    fn of(number: &str) -> Self {
        match number.chars().count() {
            0..=5 => Bucket::Extension,
            8 => Bucket::Subscriber,
            6 | 7 => Bucket::Unchecked,
            _ => Bucket::Catalog,
        }
    }
}

/// Accepts or rejects raw phone numbers. Accepted numbers are stored
/// verbatim; no normalization takes place.
#[derive(Debug, Clone, Default)]
pub struct PhoneNumberValidator;

impl PhoneNumberValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate `raw` against the grammar catalog for its length bucket.
    ///
    /// Numbers of length 6 or 7 are not checked against any grammar and
    /// only need to pass the character check. Line breaks are never
    /// accepted, even where a grammar's `\s` would match them.
    pub fn validate(&self, raw: &str) -> Result<(), PhoneError> {
        let number = raw.to_string();
        match Bucket::of(raw) {
            Bucket::Extension if !grammar(EXTENSION).is_match(raw) => {
                return Err(PhoneError::InvalidExtension { number });
            }
            Bucket::Subscriber if !grammar(SHORT_SUBSCRIBER).is_match(raw) => {
                return Err(PhoneError::InvalidSubscriber { number });
            }
            Bucket::Catalog if Self::catalog().all(|g| !g.is_match(raw)) => {
                return Err(PhoneError::NoFormatMatch { number });
            }
            _ => {}
        }

        if raw.contains(['\r', '\n']) || !ALLOWED_CHARACTERS.is_match(raw) {
            return Err(PhoneError::InvalidCharacters { number });
        }

        Ok(())
    }

    /// The grammar that accepts `raw`, if any. Numbers in the unchecked
    /// 6/7-character range never report a grammar.
    pub fn matching_grammar(&self, raw: &str) -> Option<&'static Grammar> {
        match Bucket::of(raw) {
            Bucket::Extension => Some(grammar(EXTENSION)).filter(|g| g.is_match(raw)),
            Bucket::Subscriber => Some(grammar(SHORT_SUBSCRIBER)).filter(|g| g.is_match(raw)),
            Bucket::Catalog => Self::catalog().find(|g| g.is_match(raw)),
            Bucket::Unchecked => None,
        }
    }

    /// Grammars consulted for numbers longer than 8 characters.
    fn catalog() -> impl Iterator<Item = &'static Grammar> {
        GRAMMARS
            .iter()
            .filter(|g| g.name != EXTENSION && g.name != SHORT_SUBSCRIBER)
    }
}
