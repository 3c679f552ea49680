use std::fmt;
use std::path::PathBuf;

/// Reasons a raw name is rejected by the `NameValidator`.
///
/// Variants are ordered the same way the rules are applied; the first
/// failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Name is required")]
    EmptyName,

    #[error("Name must not contain digits")]
    ContainsDigits,

    #[error("Name has {count} words; at most 3 are allowed")]
    TooManyTokens { count: usize },

    #[error("Name may contain at most one apostrophe")]
    MultipleApostrophes,

    #[error("Name may contain at most one hyphen")]
    MultipleHyphens,

    #[error(
        "Name '{name}' does not look like a name\n\n  \
         Use 1 to 3 words made of letters (at most 60 characters).\n  \
         Words may be joined by spaces, commas, periods or a single hyphen,\n  \
         and may contain a single apostrophe, e.g. \"Mary-Ann O'Neil\" or \"Doe, John\"."
    )]
    ShapeMismatch { name: String },
}

/// Reasons a raw phone number is rejected by the `PhoneNumberValidator`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    #[error(
        "'{number}' is not a valid extension\n\n  \
         Numbers shorter than 6 characters must be a 5-digit extension, e.g. 12345."
    )]
    InvalidExtension { number: String },

    #[error(
        "'{number}' is not a valid subscriber number\n\n  \
         8-character numbers must have the form 123-4567."
    )]
    InvalidSubscriber { number: String },

    #[error(
        "'{number}' does not match any accepted format\n\n  \
         Accepted formats include:\n    \
         670-123-4567, (670)123-4567, 1-670-123-4567, 1(670)123-4567,\n    \
         670 123 4567, 670.123.4567, +1 670 123 4567, +1.670.123.4567,\n    \
         011 701 111 1234, 12345.12345, 011 1 703 111 1234, +1(703)111-2121,\n    \
         +32 (21) 212-2324, +4512 34 56 78, 4512 3456"
    )]
    NoFormatMatch { number: String },

    #[error(
        "'{number}' contains characters that are not allowed in a phone number\n\n  \
         Use 5 to 20 characters: digits, spaces and ( ) - . +"
    )]
    InvalidCharacters { number: String },
}

/// How a failed directory lookup was keyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Name(String),
    Number(String),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Name(name) => write!(f, "name {name}"),
            Lookup::Number(number) => write!(f, "phone number {number}"),
        }
    }
}

/// All domain errors for the phone book.
#[derive(Debug, thiserror::Error)]
pub enum PhonebookError {
    #[error("Invalid name: {0}")]
    Name(#[from] NameError),

    #[error("Invalid phone number: {0}")]
    Phone(#[from] PhoneError),

    #[error(
        "An entry for '{name}' already exists\n\n  \
         Delete it first: phonebook delete --name \"{name}\""
    )]
    DuplicateName { name: String },

    #[error(
        "No phone book entry found containing {lookup}\n\n  \
         Run 'phonebook list' to see stored entries."
    )]
    NotFound { lookup: Lookup },

    #[error("Storage error at {path}: {detail}")]
    StorageError { path: PathBuf, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Audit log error: {detail}")]
    AuditError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PhonebookError>;
