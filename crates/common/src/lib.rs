//! Shared identifier types for the vaccination status service.

pub mod types;

pub use types::{
    Identifier, IdentifierKind, NATIONAL_ID_LEN, PASSPORT_LEN, USAGE_HINT, ValidationError,
    ValidationOutcome, ValidationPolicy,
};
