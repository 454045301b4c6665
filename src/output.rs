use std::fmt;
use std::str::FromStr;

use crate::daily_hours::{DailyHours, DailyHoursView};
use crate::error::{Result, WorkingHoursError};

/// Reduces a schedule to a single number.
pub trait Aggregator {
    fn aggregate(&self, records: &[DailyHours]) -> f64;
}

/// Serializes a schedule to text.
pub trait Formatter {
    fn format(&self, records: &[DailyHours]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SumAggregator;

impl Aggregator for SumAggregator {
    fn aggregate(&self, records: &[DailyHours]) -> f64 {
        records.iter().fold(0.0, |total, record| total + record.hours())
    }
}

/// Pretty-printed JSON array of `{date, hours}` objects, two-space indented.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, records: &[DailyHours]) -> Result<String> {
        let views: Vec<DailyHoursView> = records.iter().map(DailyHoursView::from).collect();
        serde_json::to_string_pretty(&views)
            .map_err(|err| WorkingHoursError::Serialization(err.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Sum,
    Json,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Sum => "sum",
            OutputMode::Json => "json",
        }
    }
}

impl FromStr for OutputMode {
    type Err = WorkingHoursError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(OutputMode::Sum),
            "json" => Ok(OutputMode::Json),
            other => Err(WorkingHoursError::Usage(format!(
                "unknown output mode '{other}', use \"json\" or \"sum\""
            ))),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exactly one way of turning a schedule into output.
pub enum OutputStrategy {
    Aggregate(Box<dyn Aggregator>),
    Format(Box<dyn Formatter>),
}

impl OutputStrategy {
    /// Picks a strategy from optional parts; neither or both is a configuration error.
    pub fn from_parts(
        aggregator: Option<Box<dyn Aggregator>>,
        formatter: Option<Box<dyn Formatter>>,
    ) -> Result<Self> {
        match (aggregator, formatter) {
            (Some(aggregator), None) => Ok(OutputStrategy::Aggregate(aggregator)),
            (None, Some(formatter)) => Ok(OutputStrategy::Format(formatter)),
            (None, None) => Err(WorkingHoursError::Configuration(
                "no aggregator or formatter provided".to_string(),
            )),
            (Some(_), Some(_)) => Err(WorkingHoursError::Configuration(
                "provide either an aggregator or a formatter, not both".to_string(),
            )),
        }
    }

    pub fn apply(&self, records: &[DailyHours]) -> Result<CalculationOutput> {
        match self {
            OutputStrategy::Aggregate(aggregator) => {
                let total = aggregator.aggregate(records);
                if !total.is_finite() {
                    return Err(WorkingHoursError::InvalidHours(format!(
                        "total of {} days overflows ({total})",
                        records.len()
                    )));
                }
                Ok(CalculationOutput::Total(total))
            }
            OutputStrategy::Format(formatter) => {
                formatter.format(records).map(CalculationOutput::Rendered)
            }
        }
    }
}

impl From<OutputMode> for OutputStrategy {
    fn from(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Sum => OutputStrategy::Aggregate(Box::new(SumAggregator)),
            OutputMode::Json => OutputStrategy::Format(Box::new(JsonFormatter)),
        }
    }
}

impl fmt::Debug for OutputStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStrategy::Aggregate(_) => f.write_str("OutputStrategy::Aggregate"),
            OutputStrategy::Format(_) => f.write_str("OutputStrategy::Format"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalculationOutput {
    Total(f64),
    Rendered(String),
}

impl fmt::Display for CalculationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationOutput::Total(total) => write!(f, "{total}"),
            CalculationOutput::Rendered(text) => f.write_str(text),
        }
    }
}
