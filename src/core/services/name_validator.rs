use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::NameError;

/// Maximum number of whitespace-separated words in a name.
pub const MAX_TOKENS: usize = 3;

/// Maximum name length, in characters.
pub const MAX_NAME_LEN: usize = 60;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Decimal digits in any script (Unicode category Nd).
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Nd}").expect("digit pattern is valid"));

/// One to three word groups of letters, each allowing a single apostrophe,
/// joined by spaces, commas, periods or hyphens.
static NAME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([a-zA-Z]+['’]*[a-zA-Z]*[\s,.\-]*[a-zA-Z]+['’]*[\s,.\-]*[a-zA-Z]*\s*){1,3}$",
    )
    .expect("name shape pattern is valid")
});

/// Accepts, rejects and normalizes raw contact names.
///
/// Rules are applied in order and the first failure is returned:
/// 1. non-blank
/// 2. no digits
/// 3. at most three whitespace-separated words
/// 4. at most one apostrophe (`'` and `’` count as the same character)
/// 5. at most one hyphen
/// 6. no line breaks, which would split the stored record
/// 7. the declarative shape check (optional, see `with_shape_check`)
///
/// A name containing a comma is then reinterpreted as `Last, First` and
/// rewritten to `First Last`.
#[derive(Debug, Clone)]
pub struct NameValidator {
    enforce_shape: bool,
}

impl Default for NameValidator {
    fn default() -> Self {
        Self {
            enforce_shape: true,
        }
    }
}

impl NameValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the declarative shape and length check.
    pub fn with_shape_check(mut self, enforce: bool) -> Self {
        self.enforce_shape = enforce;
        self
    }

    /// Validate `raw` and return the normalized name used as directory key.
    pub fn validate(&self, raw: &str) -> Result<String, NameError> {
        if raw.trim().is_empty() {
            return Err(NameError::EmptyName);
        }

        if DIGIT.is_match(raw) {
            return Err(NameError::ContainsDigits);
        }

        let count = raw.split_whitespace().count();
        if count > MAX_TOKENS {
            return Err(NameError::TooManyTokens { count });
        }

        if raw.chars().filter(|c| APOSTROPHES.contains(c)).count() > 1 {
            return Err(NameError::MultipleApostrophes);
        }

        if raw.chars().filter(|&c| c == '-').count() > 1 {
            return Err(NameError::MultipleHyphens);
        }

        if raw.contains(['\r', '\n']) || (self.enforce_shape && !has_name_shape(raw)) {
            return Err(NameError::ShapeMismatch {
                name: raw.to_string(),
            });
        }

        normalize(raw)
    }
}

/// Whether `raw` fits the accepted name shape and length bound.
pub fn has_name_shape(raw: &str) -> bool {
    let len = raw.chars().count();
    (1..=MAX_NAME_LEN).contains(&len) && NAME_SHAPE.is_match(raw)
}

/// Rewrite `Last, First` as `First Last`. Names without a comma are
/// returned unchanged.
///
/// Only the first two non-empty comma segments are used, so
/// `"Doe, John, Jr"` becomes `"John Doe"`.
pub fn normalize(raw: &str) -> Result<String, NameError> {
    if !raw.contains(',') {
        return Ok(raw.to_string());
    }

    let segments: Vec<&str> = raw.split(',').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [last, first, ..] => Ok(format!("{} {}", first.trim(), last.trim())),
        _ => Err(NameError::ShapeMismatch {
            name: raw.to_string(),
        }),
    }
}
