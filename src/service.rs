use crate::calculator::{WorkingHoursCalculator, validate_hours_per_week};
use crate::daily_hours::DailyHours;
use crate::date_range::DateRange;
use crate::error::Result;
use crate::output::{CalculationOutput, OutputMode, OutputStrategy};
use crate::persistence::HoursStore;

/// Runs one calculation request end to end: parse the range, compute the
/// schedule, then aggregate or format it.
#[derive(Debug)]
pub struct CalculateWorkingHoursService {
    calculator: WorkingHoursCalculator,
    output: OutputStrategy,
}

impl CalculateWorkingHoursService {
    pub fn new(calculator: WorkingHoursCalculator, output: OutputStrategy) -> Self {
        Self { calculator, output }
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self::new(WorkingHoursCalculator::default(), mode.into())
    }

    pub fn schedule(
        &self,
        start: &str,
        end: &str,
        hours_per_week: f64,
    ) -> Result<Vec<DailyHours>> {
        let hours_per_week = validate_hours_per_week(hours_per_week)?;
        let range = DateRange::parse(start, end)?;
        self.calculator.calculate(&range, hours_per_week)
    }

    pub fn calculate(
        &self,
        start: &str,
        end: &str,
        hours_per_week: f64,
    ) -> Result<CalculationOutput> {
        let records = self.schedule(start, end, hours_per_week)?;
        self.output.apply(&records)
    }

    /// Like [`calculate`](Self::calculate), but also records every day in `store`.
    /// Nothing is written when validation fails.
    pub fn calculate_into<S: HoursStore + ?Sized>(
        &self,
        store: &mut S,
        start: &str,
        end: &str,
        hours_per_week: f64,
    ) -> Result<CalculationOutput> {
        let records = self.schedule(start, end, hours_per_week)?;
        let output = self.output.apply(&records)?;
        store.save_all(&records)?;
        tracing::info!(records = records.len(), "stored daily hours");
        Ok(output)
    }
}
