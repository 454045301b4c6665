use crate::DailyHours;
use chrono::NaiveDate;
use serde_json::Error as SerdeJsonError;
use std::collections::BTreeMap;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

impl From<PersistenceError> for crate::WorkingHoursError {
    fn from(value: PersistenceError) -> Self {
        Self::Storage(value.to_string())
    }
}

/// Keyed storage of daily records, one per calendar date.
pub trait HoursStore {
    /// Inserts or replaces the record for `record.date()`.
    fn save(&mut self, record: DailyHours) -> PersistenceResult<()>;
    fn find_by_date(&self, date: NaiveDate) -> PersistenceResult<Option<DailyHours>>;

    fn save_all(&mut self, records: &[DailyHours]) -> PersistenceResult<()> {
        for record in records {
            self.save(*record)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryHoursStore {
    records: BTreeMap<NaiveDate, DailyHours>,
}

impl InMemoryHoursStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored records in date order.
    pub fn records(&self) -> impl Iterator<Item = &DailyHours> {
        self.records.values()
    }
}

impl HoursStore for InMemoryHoursStore {
    fn save(&mut self, record: DailyHours) -> PersistenceResult<()> {
        self.records.insert(record.date(), record);
        Ok(())
    }

    fn find_by_date(&self, date: NaiveDate) -> PersistenceResult<Option<DailyHours>> {
        Ok(self.records.get(&date).copied())
    }
}

pub mod file;

pub use file::JsonFileHoursStore;
