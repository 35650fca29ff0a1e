use std::sync::Arc;

use async_trait::async_trait;

use crate::{Result, VaccinationDataset, VaccinationRecord};

/// In-memory dataset for testing.
///
/// Holds a fixed record list and hands out a copy on every `load`, the same
/// contract the file-backed dataset provides.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    records: Arc<Vec<VaccinationRecord>>,
}

impl InMemoryDataset {
    /// Creates a dataset holding the given records, in order.
    pub fn new(records: Vec<VaccinationRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

#[async_trait]
impl VaccinationDataset for InMemoryDataset {
    async fn load(&self) -> Result<Vec<VaccinationRecord>> {
        Ok(self.records.as_ref().clone())
    }
}
