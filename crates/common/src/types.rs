use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Character count of a national ID.
pub const NATIONAL_ID_LEN: usize = 13;

/// Character count of a passport number.
pub const PASSPORT_LEN: usize = 9;

/// Hint returned to callers whenever an identifier is rejected.
pub const USAGE_HINT: &str = "Please enter numerical 13 digit ID or 9 character passport number starting with a letter [A-Z].";

static PASSPORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][0-9]{8}$").expect("passport pattern is valid"));

/// Result of syntax-checking a raw identifier.
pub type ValidationOutcome = Result<Identifier, ValidationError>;

/// Reasons an identifier is rejected before any lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No identifier was supplied.
    #[error("{}", USAGE_HINT)]
    Missing,

    /// The identifier has neither the national ID nor the passport shape.
    #[error("{}", USAGE_HINT)]
    InvalidSyntax,
}

/// How strictly 13-character national IDs are checked.
///
/// `Lenient` accepts any 13 characters, digits or not, even though the usage
/// hint asks for digits. `Strict` requires all 13 to be ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    #[default]
    Lenient,
    Strict,
}

/// The two identifier families the service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    NationalId,
    Passport,
}

impl IdentifierKind {
    /// Classifies by length only: 13 characters is a national ID,
    /// anything else is reported as a passport.
    pub fn classify(raw: &str) -> Self {
        if raw.chars().count() == NATIONAL_ID_LEN {
            Self::NationalId
        } else {
            Self::Passport
        }
    }

    /// Human-readable acknowledgement echoed back in responses.
    pub fn received_message(&self, id: &str) -> String {
        match self {
            Self::NationalId => format!("Received ID: {id}"),
            Self::Passport => format!("Received Passport: {id}"),
        }
    }
}

/// A syntactically valid national ID or passport number.
///
/// Only constructed through validation; deserializing runs the same lenient
/// checks as [`Identifier::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Validates `raw` under the default (lenient) policy.
    pub fn parse(raw: &str) -> ValidationOutcome {
        Self::parse_with(raw, ValidationPolicy::default())
    }

    /// Validates `raw` under the given policy.
    pub fn parse_with(raw: &str, policy: ValidationPolicy) -> ValidationOutcome {
        if raw.is_empty() {
            return Err(ValidationError::Missing);
        }

        let valid = match raw.chars().count() {
            NATIONAL_ID_LEN => match policy {
                ValidationPolicy::Lenient => true,
                ValidationPolicy::Strict => raw.chars().all(|c| c.is_ascii_digit()),
            },
            PASSPORT_LEN => PASSPORT_PATTERN.is_match(raw),
            _ => false,
        };

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidSyntax)
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies the identifier by its length.
    pub fn kind(&self) -> IdentifierKind {
        IdentifierKind::classify(&self.0)
    }
}

impl TryFrom<String> for Identifier {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}
