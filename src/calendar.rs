use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Result, WorkingHoursError};

/// The weekdays that count as working days.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkWeek {
    non_working_days: HashSet<Weekday>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkWeekConfig {
    working_days: Vec<Weekday>,
}

impl Default for WorkWeek {
    /// Monday to Friday, with Saturday and Sunday off.
    fn default() -> Self {
        Self {
            non_working_days: HashSet::from([Weekday::Sat, Weekday::Sun]),
        }
    }
}

impl WorkWeek {
    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn custom<I>(working_days: I) -> Result<Self>
    where
        I: IntoIterator<Item = Weekday>,
    {
        Self::from_config(&WorkWeekConfig::new(working_days))
    }

    pub fn from_config(config: &WorkWeekConfig) -> Result<Self> {
        let working_set: HashSet<Weekday> = config.working_days.iter().copied().collect();
        if working_set.is_empty() {
            return Err(WorkingHoursError::Configuration(
                "work week requires at least one working day".to_string(),
            ));
        }

        let non_working_days = Self::ALL_WEEKDAYS
            .into_iter()
            .filter(|day| !working_set.contains(day))
            .collect();
        Ok(Self { non_working_days })
    }

    pub fn to_config(&self) -> WorkWeekConfig {
        WorkWeekConfig::from(self)
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !self.non_working_days.contains(&date.weekday())
    }

    /// Number of working days in one week; never zero.
    pub fn working_days_per_week(&self) -> usize {
        Self::ALL_WEEKDAYS.len() - self.non_working_days.len()
    }

    /// Working days in Monday-first order.
    pub fn working_days(&self) -> Vec<Weekday> {
        Self::ALL_WEEKDAYS
            .into_iter()
            .filter(|day| !self.non_working_days.contains(day))
            .collect()
    }
}

impl WorkWeekConfig {
    pub fn new<I>(working_days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut working_days: Vec<Weekday> = working_days.into_iter().collect();
        working_days.sort_by_key(|wd| wd.num_days_from_monday());
        working_days.dedup();
        Self { working_days }
    }

    pub fn working_days(&self) -> &[Weekday] {
        &self.working_days
    }

    /// Parses a comma separated list such as `mon,tue,wed`.
    pub fn parse_list(list: &str) -> Result<Self> {
        let days = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<Weekday>().map_err(|_| {
                    WorkingHoursError::Configuration(format!("unknown weekday '{s}'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(days))
    }
}

impl Default for WorkWeekConfig {
    fn default() -> Self {
        WorkWeek::default().to_config()
    }
}

impl From<&WorkWeek> for WorkWeekConfig {
    fn from(week: &WorkWeek) -> Self {
        Self::new(week.working_days())
    }
}
