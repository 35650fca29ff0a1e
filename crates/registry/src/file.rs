//! Dataset backed by a JSON file on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::record::DatasetRow;
use crate::{DatasetError, Result, VaccinationDataset, VaccinationRecord};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads a JSON array of records from `path` on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFileDataset {
    path: PathBuf,
}

impl JsonFileDataset {
    /// Creates a dataset reading from the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl VaccinationDataset for JsonFileDataset {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<VaccinationRecord>> {
        let result = match tokio::fs::read(&self.path).await {
            Ok(bytes) => parse_records(&self.path, &bytes),
            Err(source) => Err(DatasetError::Unavailable {
                path: self.path.clone(),
                source,
            }),
        };

        match &result {
            Ok(records) => {
                metrics::counter!("dataset_loads_total").increment(1);
                tracing::debug!(records = records.len(), "dataset loaded");
            }
            Err(err) => {
                metrics::counter!("dataset_load_failures_total", "kind" => err.kind())
                    .increment(1);
            }
        }

        result
    }
}

/// Parses dataset file content, tolerating a leading UTF-8 byte order mark.
pub fn parse_records(path: &Path, bytes: &[u8]) -> Result<Vec<VaccinationRecord>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let malformed = |source: serde_json::Error| DatasetError::Malformed {
        path: path.to_path_buf(),
        source,
    };

    let objects: Vec<Map<String, Value>> = serde_json::from_slice(bytes).map_err(malformed)?;

    objects
        .into_iter()
        .map(|object| {
            DatasetRow::from_object(object)
                .map(VaccinationRecord::from)
                .map_err(malformed)
        })
        .collect()
}
