//! Integration tests for file-backed lookups.

use std::io::Write;

use registry::{DatasetError, Identifier, JsonFileDataset, VaccinationRecord, VaccinationRegistry};

const DATASET: &str = r#"[
    {
        "Identifier": "1234567890123",
        "Vaccinated": true,
        "VaccinationDate": "2021-07-14",
        "Name": "Thandi Mokoena",
        "Clinic": "Greenpoint Clinic"
    },
    {
        "Identifier": "B87654321",
        "Vaccinated": false,
        "VaccinationDate": null,
        "Name": "Jon Smith",
        "Clinic": null
    }
]"#;

fn write_dataset(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("vaccinations.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[tokio::test]
async fn lookup_reads_national_id_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let registry = VaccinationRegistry::new(JsonFileDataset::new(write_dataset(&dir, DATASET)));

    let record = registry
        .lookup(&Identifier::parse("1234567890123").unwrap())
        .await
        .unwrap();

    assert!(record.vaccinated);
    assert_eq!(record.vaccination_date.as_deref(), Some("2021-07-14"));
    assert_eq!(record.clinic.as_deref(), Some("Greenpoint Clinic"));
}

#[tokio::test]
async fn lookup_reads_passport_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let registry = VaccinationRegistry::new(JsonFileDataset::new(write_dataset(&dir, DATASET)));

    let record = registry
        .lookup(&Identifier::parse("B87654321").unwrap())
        .await
        .unwrap();

    assert!(!record.vaccinated);
    assert_eq!(record.name.as_deref(), Some("Jon Smith"));
}

#[tokio::test]
async fn unknown_identifier_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let registry = VaccinationRegistry::new(JsonFileDataset::new(write_dataset(&dir, DATASET)));
    let id = Identifier::parse("9999999999999").unwrap();

    let record = registry.lookup(&id).await.unwrap();

    assert_eq!(record, VaccinationRecord::not_vaccinated(&id));
}

#[tokio::test]
async fn dataset_changes_are_seen_on_next_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir, "[]");
    let registry = VaccinationRegistry::new(JsonFileDataset::new(&path));
    let id = Identifier::parse("1234567890123").unwrap();

    assert!(!registry.lookup(&id).await.unwrap().vaccinated);

    write_dataset(&dir, DATASET);
    assert!(registry.lookup(&id).await.unwrap().vaccinated);
}

#[tokio::test]
async fn repeated_lookups_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let registry = VaccinationRegistry::new(JsonFileDataset::new(write_dataset(&dir, DATASET)));
    let id = Identifier::parse("1234567890123").unwrap();

    let first = serde_json::to_vec(&registry.lookup(&id).await.unwrap()).unwrap();
    let second = serde_json::to_vec(&registry.lookup(&id).await.unwrap()).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_file_surfaces_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let registry = VaccinationRegistry::new(JsonFileDataset::new(dir.path().join("absent.json")));

    let err = registry
        .lookup(&Identifier::parse("A12345678").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, DatasetError::Unavailable { .. }));
}

#[tokio::test]
async fn row_missing_required_field_surfaces_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir, r#"[{"Identifier":"A12345678","Name":"No flag"}]"#);
    let registry = VaccinationRegistry::new(JsonFileDataset::new(path));

    let err = registry
        .lookup(&Identifier::parse("A12345678").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, DatasetError::Malformed { .. }));
}
