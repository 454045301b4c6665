use super::{HoursStore, InMemoryHoursStore, PersistenceError, PersistenceResult};
use crate::DailyHours;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize)]
struct HoursSnapshot {
    records: Vec<DailyHours>,
}

impl HoursSnapshot {
    fn from_store(store: &InMemoryHoursStore) -> Self {
        Self {
            records: store.records().copied().collect(),
        }
    }

    fn into_store(self) -> PersistenceResult<InMemoryHoursStore> {
        let mut seen = HashSet::with_capacity(self.records.len());
        let mut store = InMemoryHoursStore::new();
        for record in self.records {
            if !seen.insert(record.date()) {
                return Err(PersistenceError::InvalidData(format!(
                    "duplicate record for {}",
                    record.date()
                )));
            }
            store.save(record)?;
        }
        Ok(store)
    }
}

/// A store backed by a JSON file. The whole snapshot is rewritten on every save.
#[derive(Debug)]
pub struct JsonFileHoursStore {
    path: PathBuf,
    inner: InMemoryHoursStore,
}

impl JsonFileHoursStore {
    /// Opens `path`, loading existing records; a missing file starts empty.
    pub fn open<P: AsRef<Path>>(path: P) -> PersistenceResult<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            let file = File::open(&path)?;
            let snapshot: HoursSnapshot = serde_json::from_reader(file)?;
            snapshot.into_store()?
        } else {
            InMemoryHoursStore::new()
        };
        tracing::debug!(path = %path.display(), records = inner.len(), "opened hours store");
        Ok(Self { path, inner })
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Writes `next` to disk and only then adopts it, so a failed write leaves
    /// the loaded records untouched.
    fn commit(&mut self, next: InMemoryHoursStore) -> PersistenceResult<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &HoursSnapshot::from_store(&next))?;
        writer.flush()?;
        self.inner = next;
        Ok(())
    }
}

impl HoursStore for JsonFileHoursStore {
    fn save(&mut self, record: DailyHours) -> PersistenceResult<()> {
        let mut next = self.inner.clone();
        next.save(record)?;
        self.commit(next)
    }

    fn find_by_date(&self, date: NaiveDate) -> PersistenceResult<Option<DailyHours>> {
        self.inner.find_by_date(date)
    }

    fn save_all(&mut self, records: &[DailyHours]) -> PersistenceResult<()> {
        let mut next = self.inner.clone();
        next.save_all(records)?;
        self.commit(next)
    }
}
