use chrono::{NaiveDate, SecondsFormat};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Result, WorkingHoursError};

/// Hours worked on a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredDailyHours")]
pub struct DailyHours {
    date: NaiveDate,
    hours: f64,
}

impl DailyHours {
    pub fn new(date: NaiveDate, hours: f64) -> Result<Self> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(WorkingHoursError::InvalidHours(format!(
                "hours for {date} must be a non-negative number (got {hours})"
            )));
        }
        Ok(Self { date, hours })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }
}

#[derive(Deserialize)]
struct StoredDailyHours {
    date: NaiveDate,
    hours: f64,
}

impl TryFrom<StoredDailyHours> for DailyHours {
    type Error = WorkingHoursError;

    fn try_from(raw: StoredDailyHours) -> Result<Self> {
        Self::new(raw.date, raw.hours)
    }
}

/// Presentation form used by the JSON formatter: the date as a full UTC
/// date-time at midnight, whole hours as integers.
#[derive(Debug, Serialize)]
pub(crate) struct DailyHoursView {
    #[serde(serialize_with = "serialize_midnight_utc")]
    date: NaiveDate,
    #[serde(serialize_with = "serialize_hours")]
    hours: f64,
}

impl From<&DailyHours> for DailyHoursView {
    fn from(record: &DailyHours) -> Self {
        Self {
            date: record.date,
            hours: record.hours,
        }
    }
}

/// Largest integer an f64 represents exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

fn serialize_midnight_utc<S>(date: &NaiveDate, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rendered = date
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    serializer.serialize_str(&rendered)
}

fn serialize_hours<S>(hours: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if hours.fract() == 0.0 && hours.abs() <= MAX_EXACT_INT {
        serializer.serialize_i64(*hours as i64)
    } else {
        serializer.serialize_f64(*hours)
    }
}
