mod app;
mod config;
mod geo;
mod keys;
mod log;
mod states;
mod store;
mod tracker;
mod ui;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};

use config::Config;
use store::{JsonFileStore, RecordStore, StoreError, TrackingRecord};
use tracker::{MarkOutcome, Progress, TrackerError};

#[derive(Parser)]
#[command(
    name = "beerstates",
    about = "Track which US states you've had a beer in and see your progress on a map",
    version,
    after_help = "\
Examples:
  beerstates                    Show the map
  beerstates --complete TX      Mark Texas as completed
  beerstates --status           Print progress without the map"
)]
struct Cli {
    /// Mark a state as completed (postal code, case-insensitive)
    #[arg(long, value_name = "STATE", group = "action")]
    complete: Option<String>,

    /// Put a state back on the not-had list
    #[arg(long, value_name = "STATE", group = "action")]
    uncomplete: Option<String>,

    /// Print progress and the remaining states instead of showing the map
    #[arg(long, group = "action")]
    status: bool,

    /// Data file to read and update
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// GeoJSON file with state boundaries (Natural Earth admin-1 layer)
    #[arg(long, value_name = "PATH")]
    boundaries: Option<PathBuf>,

    /// Config directory override
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    log::initialize(true);
    let config = load_config(cli.config_dir).with_overrides(cli.data, cli.boundaries);
    let store = JsonFileStore::new(&config.data_file);

    if let Some(code) = cli.complete {
        return toggle(&store, &code, tracker::mark_completed);
    }
    if let Some(code) = cli.uncomplete {
        return toggle(&store, &code, tracker::mark_not_had);
    }

    let record = load_record(&store);
    if !record.validate() {
        eprintln!(
            "Warning: Invalid states in not_had list: {:?}",
            record.invalid_codes()
        );
        return ExitCode::FAILURE;
    }

    if cli.status {
        print_status(&record);
        return ExitCode::SUCCESS;
    }

    let views = match app::load_views(&config, &record) {
        Ok(views) => views,
        Err(e) => {
            error!(error = %e, "failed to load map geometry");
            eprintln!("Error loading geographic data: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = app::run(&config, record, views) {
        error!(error = %e, "map view failed");
        eprintln!("Error showing map: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Load settings, falling back to defaults when the file is unusable.
fn load_config(dir_override: Option<PathBuf>) -> Config {
    let dir = match dir_override.map_or_else(config::get_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            warn!(error = %e, "no config directory");
            return Config::default();
        }
    };
    Config::load(&dir).unwrap_or_else(|e| {
        warn!(error = %e, dir = %dir.display(), "ignoring config file");
        eprintln!("Warning: {}; using default settings", e);
        Config::default()
    })
}

/// Load the record, telling the user when a broken file was replaced by
/// defaults.
fn load_record(store: &dyn RecordStore) -> TrackingRecord {
    let (record, err) = store::load_or_default(store);
    if let Some(e) = err {
        report_load_error(&e);
    }
    record
}

fn report_load_error(e: &StoreError) {
    eprintln!("Error reading data: {}", e);
    eprintln!("Using default data...");
}

fn toggle(
    store: &dyn RecordStore,
    code: &str,
    op: fn(&mut TrackingRecord, &str) -> Result<MarkOutcome, TrackerError>,
) -> ExitCode {
    let report = match tracker::toggle_and_save(store, code, op) {
        Ok(report) => report,
        Err(e) => {
            error!(error = %e, "toggle failed");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(e) = &report.load_error {
        report_load_error(e);
    }
    if report.outcome.changed() {
        match &report.save_error {
            // Save is best-effort: report it and carry on.
            Some(e) => eprintln!("Error saving data: {}", e),
            None => println!("Data saved to {}", store.location()),
        }
    }
    println!("{}", report.outcome.message());
    println!("{}", Progress::of(&report.record).summary());
    ExitCode::SUCCESS
}

fn print_status(record: &TrackingRecord) {
    let progress = Progress::of(record);
    println!("{}", progress.summary());
    println!("{}", progress.had_label());
    println!("{}", progress.not_had_label());
    if !record.not_had.is_empty() {
        println!();
        println!("Still to go:");
        for code in &record.not_had {
            println!("  {:<3} {}", code, states::display_name(code));
        }
    }
}
