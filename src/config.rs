use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::calendar::{WorkWeek, WorkWeekConfig};
use crate::error::{Result, WorkingHoursError};

/// Top-level configuration file.
///
/// ```toml
/// [work_week]
/// working_days = ["Mon", "Tue", "Wed", "Thu", "Fri"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub work_week: WorkWeekConfig,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|err| WorkingHoursError::Configuration(format!("invalid config: {err}")))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            WorkingHoursError::Configuration(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn work_week(&self) -> Result<WorkWeek> {
        WorkWeek::from_config(&self.work_week)
    }
}
