//! Identifier lookup over a vaccination dataset.

use common::Identifier;

use crate::{Result, VaccinationDataset, VaccinationRecord};

/// Resolves identifiers to vaccination records.
///
/// The dataset is re-loaded on every lookup. The first record whose
/// identifier matches exactly wins; when none matches, a not-vaccinated
/// record is synthesized for the requested identifier.
pub struct VaccinationRegistry<D: VaccinationDataset> {
    dataset: D,
}

impl<D: VaccinationDataset> VaccinationRegistry<D> {
    /// Creates a registry over the given dataset.
    pub fn new(dataset: D) -> Self {
        Self { dataset }
    }

    /// Looks up the vaccination status for `identifier`.
    #[tracing::instrument(skip_all)]
    pub async fn lookup(&self, identifier: &Identifier) -> Result<VaccinationRecord> {
        let records = self.dataset.load().await?;
        let found = records.into_iter().find(|record| record.matches(identifier));

        let label = if found.is_some() { "true" } else { "false" };
        metrics::counter!("vaccination_lookups_total", "found" => label).increment(1);

        Ok(found.unwrap_or_else(|| VaccinationRecord::not_vaccinated(identifier)))
    }
}
