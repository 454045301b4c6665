use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use working_hours::{
    AppConfig, CalculateWorkingHoursService, JsonFileHoursStore, OutputMode, WorkWeek,
    WorkWeekConfig, WorkingHoursCalculator, logging, parse_hours_per_week,
};

/// Spread a weekly hour quota over the working days of a date range.
#[derive(Parser, Debug)]
#[command(name = "working-hours", version)]
struct Cli {
    /// First day of the range (YYYY-MM-DD).
    start: String,

    /// Last day of the range, inclusive (YYYY-MM-DD).
    end: String,

    /// Weekly hour quota.
    #[arg(allow_negative_numbers = true)]
    hours_per_week: String,

    /// Output mode: "sum" or "json".
    #[arg(value_parser = OutputMode::from_str)]
    mode: OutputMode,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma separated working days, overriding the config file (e.g. mon,tue,wed,thu,fri).
    #[arg(long = "working-days")]
    working_days: Option<String>,

    /// Also record every computed day in this JSON file.
    #[arg(long)]
    store: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn work_week(cli: &Cli) -> Result<WorkWeek> {
    if let Some(list) = &cli.working_days {
        return Ok(WorkWeek::from_config(&WorkWeekConfig::parse_list(list)?)?);
    }
    match &cli.config {
        Some(path) => {
            let config = AppConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            Ok(config.work_week()?)
        }
        None => Ok(WorkWeek::default()),
    }
}

fn run(cli: &Cli) -> Result<String> {
    let hours_per_week = parse_hours_per_week(&cli.hours_per_week)?;
    let week = work_week(cli)?;
    tracing::debug!(
        mode = %cli.mode,
        working_days = ?week.working_days(),
        "starting calculation"
    );

    let calculator = WorkingHoursCalculator::new(week);
    let service = CalculateWorkingHoursService::new(calculator, cli.mode.into());
    let output = match &cli.store {
        Some(path) => {
            let mut store = JsonFileHoursStore::open(path)
                .with_context(|| format!("opening store {}", path.display()))?;
            service.calculate_into(&mut store, &cli.start, &cli.end, hours_per_week)?
        }
        None => service.calculate(&cli.start, &cli.end, hours_per_week)?,
    };
    Ok(output.to_string())
}
