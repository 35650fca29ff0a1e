//! Vaccination record types.

use common::Identifier;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One person's vaccination status as returned to callers.
///
/// Serialized with camelCase keys; absent optional fields are written as
/// `null` rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationRecord {
    pub identifier: String,
    pub vaccinated: bool,
    pub vaccination_date: Option<String>,
    pub name: Option<String>,
    pub clinic: Option<String>,
}

impl VaccinationRecord {
    /// Record reported for identifiers the dataset does not know about.
    pub fn not_vaccinated(identifier: &Identifier) -> Self {
        Self {
            identifier: identifier.as_str().to_string(),
            vaccinated: false,
            vaccination_date: None,
            name: None,
            clinic: None,
        }
    }

    /// Exact, case-sensitive identifier comparison.
    pub fn matches(&self, identifier: &Identifier) -> bool {
        self.identifier == identifier.as_str()
    }
}

/// A row of the dataset file.
///
/// Keys are matched without regard to case (`Identifier`, `identifier` and
/// `IDENTIFIER` are the same field). `Identifier` and `Vaccinated` are
/// required, the rest may be missing or `null`. Unknown keys, and keys that
/// collide once case is ignored, make the row malformed.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DatasetRow {
    identifier: String,
    vaccinated: bool,
    #[serde(rename = "vaccinationdate")]
    vaccination_date: Option<String>,
    name: Option<String>,
    clinic: Option<String>,
}

impl DatasetRow {
    /// Builds a row from one JSON object of the dataset array.
    pub(crate) fn from_object(object: Map<String, Value>) -> serde_json::Result<Self> {
        let mut folded = Map::with_capacity(object.len());

        for (key, value) in object {
            if folded.insert(key.to_lowercase(), value).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "duplicate field `{key}` (keys are case-insensitive)"
                )));
            }
        }

        serde_json::from_value(Value::Object(folded))
    }
}

impl From<DatasetRow> for VaccinationRecord {
    fn from(row: DatasetRow) -> Self {
        Self {
            identifier: row.identifier,
            vaccinated: row.vaccinated,
            vaccination_date: row.vaccination_date,
            name: row.name,
            clinic: row.clinic,
        }
    }
}
