use chrono::{DateTime, NaiveDate};
use std::iter::FusedIterator;

use crate::error::{Result, WorkingHoursError};

/// An inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(WorkingHoursError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from textual dates. Each side is either `YYYY-MM-DD` or an
    /// RFC 3339 date-time, in which case only its calendar date is kept.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive number of days in the range.
    pub fn len_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn expand_days(self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

/// Consuming iterator over the days of a [`DateRange`], both endpoints included.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        // succ_opt steps one calendar day, so month ends and leap days come for free.
        self.next = current.succ_opt().filter(|day| *day <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |day| (self.end - day).num_days() as usize + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| WorkingHoursError::InvalidDate {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_takes_calendar_part_of_datetime() {
        let date = parse_date("2024-03-10T23:30:00+02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn parse_date_rejects_impossible_day() {
        assert!(matches!(
            parse_date("2023-02-29"),
            Err(WorkingHoursError::InvalidDate { .. })
        ));
    }

    #[test]
    fn size_hint_shrinks_as_days_are_taken() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let mut days = DateRange::new(start, end).unwrap().expand_days();
        assert_eq!(days.len(), 3);
        days.next();
        assert_eq!(days.len(), 2);
        days.by_ref().for_each(drop);
        assert_eq!(days.len(), 0);
        assert_eq!(days.next(), None);
    }
}
