pub mod calculator;
pub mod calendar;
pub mod config;
pub mod daily_hours;
pub mod date_range;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod output;
pub mod persistence;
pub mod service;

pub use calculator::{WorkingHoursCalculator, parse_hours_per_week};
pub use calendar::{WorkWeek, WorkWeekConfig};
pub use config::AppConfig;
pub use daily_hours::DailyHours;
pub use date_range::{DateRange, Days};
pub use error::{Result, WorkingHoursError};
pub use output::{
    Aggregator, CalculationOutput, Formatter, JsonFormatter, OutputMode, OutputStrategy,
    SumAggregator,
};
pub use persistence::{
    HoursStore, InMemoryHoursStore, JsonFileHoursStore, PersistenceError, PersistenceResult,
};
pub use service::CalculateWorkingHoursService;
