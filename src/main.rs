use clap::Parser;
use goodday::application::{
    init, ConfigService, DayHistoryService, InsightsService, RecordMoodService,
};
use goodday::cli::{format_day_history, format_insight_report, Cli, Commands};
use goodday::domain::{CaptureMode, CaptureValue, RangePolicy};
use goodday::error::GooddayError;
use goodday::infrastructure::JsonFileStore;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), GooddayError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Log { mode, value, notes }) => {
            let mode = CaptureMode::from_str(&mode).map_err(GooddayError::InvalidArgument)?;
            let capture = match mode {
                CaptureMode::Timeline => CaptureValue::Timeline(value),
                CaptureMode::Points => CaptureValue::Point(value),
                CaptureMode::Realtime => CaptureValue::Realtime(value),
            };

            let store = JsonFileStore::discover()?;
            let service = RecordMoodService::new(store);
            let entry = service.execute(capture, &notes)?;

            println!(
                "Recorded mood {:+} ({})",
                entry.mood_value,
                entry.mode.as_str()
            );
            Ok(())
        }
        Some(Commands::History { date }) => {
            let date = match date {
                Some(s) => chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|_| GooddayError::InvalidArgument(format!("Invalid date: '{}'", s)))?,
                None => chrono::Local::now().date_naive(),
            };

            let store = JsonFileStore::discover()?;
            let service = DayHistoryService::new(store);
            let history = service.execute(date)?;

            print!("{}", format_day_history(&history));
            Ok(())
        }
        Some(Commands::Insights { range }) => {
            let range = RangePolicy::from_str(&range).map_err(GooddayError::InvalidArgument)?;

            let store = JsonFileStore::discover()?;
            let service = InsightsService::new(store);
            let report = service.execute(range)?;

            print!("{}", format_insight_report(&report));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let store = JsonFileStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("wake = {}", config.wake);
                println!("bed = {}", config.bed);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: goodday config [--list | <key> [<value>]]");
                println!("Valid keys: wake, bed, created");
                Ok(())
            }
        }
        None => {
            println!("goodday - Terminal mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
