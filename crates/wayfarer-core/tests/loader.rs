mod common;

use std::io::Write;
use wayfarer_core::prelude::*;

#[test]
fn bundled_dataset_loads_from_disk() {
    let db = DefaultDataset::load().unwrap();
    let stats = db.stats();
    assert_eq!(stats.countries, 3);
    assert_eq!(stats.cities, 6);
    assert_eq!(stats.temples, 2);
    assert_eq!(stats.beaches, 2);
    assert!(db.find_country("japan").is_some());
    assert_eq!(db.cities().count(), 6);
}

#[test]
fn missing_top_level_keys_are_empty() {
    let db = DefaultDataset::from_json_str("{}").unwrap();
    assert!(db.is_empty());

    let db = DefaultDataset::from_json_str(r#"{"countries":[{"name":"Japan"}]}"#).unwrap();
    assert_eq!(db.countries()[0].cities().len(), 0);
}

#[test]
fn malformed_json_is_an_error() {
    let err = DefaultDataset::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, TravelError::Json(_)));
}

#[test]
fn missing_file_is_not_found() {
    let err = DefaultDataset::load_from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, TravelError::NotFound(_)));
}

#[test]
fn loads_plain_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(common::BUNDLED.as_bytes()).unwrap();
    let db = DefaultDataset::load_from_path(file.path()).unwrap();
    assert_eq!(db.stats().beaches, 2);
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_file() {
    use flate2::{write::GzEncoder, Compression};

    let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
    let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
    encoder.write_all(common::BUNDLED.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let db = DefaultDataset::load_from_path(file.path()).unwrap();
    assert_eq!(db.stats().temples, 2);
}

#[test]
fn catalog_retries_after_failure() {
    let mut attempts = 0;
    let mut catalog = Catalog::new(|| {
        attempts += 1;
        if attempts == 1 {
            DefaultDataset::from_json_str("{ broken")
        } else {
            Ok(common::bundled())
        }
    });

    let first = catalog.search("tokyo");
    assert!(matches!(first, Err(TravelError::DataUnavailable(_))));
    assert!(!catalog.is_loaded());

    let second = catalog.search("tokyo").unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Tokyo, Japan");
    assert!(catalog.is_loaded());
}

#[test]
fn catalog_loads_once() {
    let mut loads = 0;
    let mut catalog = Catalog::new(|| {
        loads += 1;
        Ok(common::bundled())
    });
    catalog.search("beach").unwrap();
    catalog.search("temple").unwrap();
    drop(catalog);
    assert_eq!(loads, 1);
}

#[test]
fn reload_replaces_dataset_wholesale() {
    let mut catalog = Catalog::with_dataset(common::bundled(), || {
        DefaultDataset::from_json_str(r#"{"temples":[{"name":"Borobudur, Indonesia"}]}"#)
    });
    assert_eq!(catalog.get().unwrap().stats().cities, 6);

    let db = catalog.reload().unwrap();
    assert_eq!(db.stats().cities, 0);
    assert_eq!(catalog.search("temple").unwrap()[0].name, "Borobudur, Indonesia");
}

#[test]
fn country_lookup_ignores_case_and_accents() {
    let db = DefaultDataset::from_json_str(
        r#"{"countries":[{"name":"Perú","cities":[{"name":"Cusco, Perú"}]}]}"#,
    )
    .unwrap();
    let peru = db.find_country("  PERU ").unwrap();
    assert!(peru.is_named("peru"));
    assert!(peru.cities()[0].name_contains("cusco"));
    assert!(db.find_country("Chile").is_none());
}

#[cfg(feature = "compact")]
#[test]
fn corrupt_gzip_is_reported_as_malformed_data() {
    let mut file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
    file.write_all(b"definitely not gzip").unwrap();
    let err = DefaultDataset::load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, TravelError::Json(_)));
    assert_eq!(
        err.user_message(),
        "Unable to load travel data. Please try again later."
    );
}
