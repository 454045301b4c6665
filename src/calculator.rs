use crate::calendar::WorkWeek;
use crate::daily_hours::DailyHours;
use crate::date_range::DateRange;
use crate::error::{Result, WorkingHoursError};

/// Spreads a weekly quota evenly over the working days of a range.
#[derive(Debug, Clone, Default)]
pub struct WorkingHoursCalculator {
    week: WorkWeek,
}

impl WorkingHoursCalculator {
    pub fn new(week: WorkWeek) -> Self {
        Self { week }
    }

    /// Nominal hours for one working day.
    pub fn daily_quota(&self, hours_per_week: f64) -> f64 {
        hours_per_week / self.week.working_days_per_week() as f64
    }

    /// One record per day of `range`, in calendar order. Non-working days get zero hours.
    pub fn calculate(&self, range: &DateRange, hours_per_week: f64) -> Result<Vec<DailyHours>> {
        let quota = self.daily_quota(hours_per_week);
        tracing::debug!(
            start = %range.start(),
            end = %range.end(),
            days = range.len_days(),
            quota,
            "calculating working hours"
        );

        range
            .expand_days()
            .map(|day| {
                let hours = if self.week.is_working_day(day) { quota } else { 0.0 };
                DailyHours::new(day, hours)
            })
            .collect()
    }
}

/// Parses a weekly quota, rejecting anything that is not a finite, non-negative number.
pub fn parse_hours_per_week(input: &str) -> Result<f64> {
    let hours: f64 = input.trim().parse().map_err(|_| {
        WorkingHoursError::InvalidHours(format!("hours per week '{input}' is not a number"))
    })?;
    validate_hours_per_week(hours)
}

pub fn validate_hours_per_week(hours: f64) -> Result<f64> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(WorkingHoursError::InvalidHours(format!(
            "hours per week must be a non-negative number (got {hours})"
        )));
    }
    // -0.0 would otherwise survive the check and print as "-0".
    Ok(hours + 0.0)
}
