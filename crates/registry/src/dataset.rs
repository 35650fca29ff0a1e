use async_trait::async_trait;

use crate::{Result, VaccinationRecord};

/// Source of vaccination records.
///
/// Implementations return the full record list in dataset order on every
/// call; nothing is cached between calls. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait VaccinationDataset: Send + Sync {
    /// Loads every record in the dataset.
    async fn load(&self) -> Result<Vec<VaccinationRecord>>;
}
