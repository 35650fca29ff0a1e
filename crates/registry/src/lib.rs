//! Vaccination status registry.
//!
//! This crate provides:
//! - `VaccinationRecord`, the externally visible record shape
//! - `VaccinationDataset` trait with JSON-file and in-memory implementations
//! - `VaccinationRegistry`, which resolves an identifier to a record,
//!   synthesizing a not-vaccinated record when the dataset has no match

pub mod dataset;
pub mod error;
pub mod file;
pub mod memory;
pub mod record;
pub mod registry;

pub use common::Identifier;
pub use dataset::VaccinationDataset;
pub use error::{DatasetError, Result};
pub use file::JsonFileDataset;
pub use memory::InMemoryDataset;
pub use record::VaccinationRecord;
pub use registry::VaccinationRegistry;
