use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;
use working_hours::{DailyHours, HoursStore, InMemoryHoursStore, JsonFileHoursStore, PersistenceError};

fn record(day: u32, hours: f64) -> DailyHours {
    DailyHours::new(NaiveDate::from_ymd_opt(2024, 1, day).unwrap(), hours).unwrap()
}

#[test]
fn in_memory_store_is_last_write_wins() {
    let mut store = InMemoryHoursStore::new();
    store.save(record(1, 8.0)).unwrap();
    store.save(record(1, 6.0)).unwrap();
    store.save(record(2, 8.0)).unwrap();

    assert_eq!(store.len(), 2);
    let found = store
        .find_by_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .unwrap();
    assert_eq!(found, Some(record(1, 6.0)));
    let missing = store
        .find_by_date(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
        .unwrap();
    assert_eq!(missing, None);
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("hours.json");

    {
        let mut store = JsonFileHoursStore::open(&path).unwrap();
        assert!(store.is_empty());
        store.save_all(&[record(1, 8.0), record(2, 8.0)]).unwrap();
        store.save(record(2, 4.0)).unwrap();
    }

    let reopened = JsonFileHoursStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    let day2 = reopened
        .find_by_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
        .unwrap();
    assert_eq!(day2, Some(record(2, 4.0)));
}

#[test]
fn file_store_rejects_duplicate_dates_and_negative_hours() {
    let dir = tempdir().expect("create temp dir");

    let duplicate = dir.path().join("duplicate.json");
    fs::write(
        &duplicate,
        r#"{"records":[{"date":"2024-01-01","hours":8.0},{"date":"2024-01-01","hours":4.0}]}"#,
    )
    .unwrap();
    assert!(matches!(
        JsonFileHoursStore::open(&duplicate),
        Err(PersistenceError::InvalidData(_))
    ));

    let negative = dir.path().join("negative.json");
    fs::write(&negative, r#"{"records":[{"date":"2024-01-01","hours":-8.0}]}"#).unwrap();
    assert!(matches!(
        JsonFileHoursStore::open(&negative),
        Err(PersistenceError::Serialization(_))
    ));
}

#[test]
fn failed_write_leaves_loaded_records_unchanged() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("missing-dir").join("hours.json");

    let mut store = JsonFileHoursStore::open(&path).unwrap();
    assert!(store.save(record(1, 8.0)).is_err());
    assert!(store.save_all(&[record(2, 8.0)]).is_err());

    assert!(store.is_empty());
    let day1 = store
        .find_by_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .unwrap();
    assert_eq!(day1, None);
}
