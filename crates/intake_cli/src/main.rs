//! Loader entry point.
//!
//! # Responsibility
//! - Bootstrap logging and the three entity stores, then run the demo load
//!   and render its report.
//!
//! # Invariants
//! - Takes no arguments; the run is fully determined by the embedded data.
//! - Store bootstrap failure aborts with a nonzero exit.
//! - Batch failures are reported per store and do not fail the process.

mod sample;

use intake_core::{
    default_log_level, init_logging, init_stores, run_load, BatchReport, StoreOutcome, StorePaths,
};
use log::error;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

const DATA_DIR: &str = "data";
const LOG_DIR: &str = "logs";

fn main() -> ExitCode {
    if let Err(err) = setup_logging() {
        eprintln!("intake: logging disabled: {err}");
    }

    println!("intake {} loading demo batches", intake_core::core_version());

    if let Err(err) = std::fs::create_dir_all(DATA_DIR) {
        eprintln!("intake: cannot create data directory `{DATA_DIR}`: {err}");
        return ExitCode::FAILURE;
    }

    let paths = StorePaths::under(DATA_DIR);
    if let Err(err) = init_stores(&paths) {
        error!("event=store_init module=cli status=error error={err}");
        eprintln!("intake: cannot initialize stores: {err}");
        return ExitCode::FAILURE;
    }

    let report = run_load(&paths, sample::demo_batches());

    render_outcome("products", &report.products);
    render_outcome("users", &report.users);
    render_outcome("orders", &report.orders);

    ExitCode::SUCCESS
}

fn setup_logging() -> Result<(), String> {
    let log_dir: PathBuf = std::env::current_dir()
        .map_err(|err| format!("cannot resolve working directory: {err}"))?
        .join(LOG_DIR);
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| "log directory path is not valid UTF-8".to_string())?;
    init_logging(default_log_level(), log_dir)
}

fn render_outcome<R: Display>(store: &str, outcome: &StoreOutcome<R>) {
    match outcome {
        StoreOutcome::Completed(report) => render_report(report),
        StoreOutcome::Failed { error } => {
            println!("{store}: load failed: {error}");
        }
    }
}

fn render_report<R: Display>(report: &BatchReport<R>) {
    println!(
        "{}: inserted {} of {} records",
        report.table,
        report.inserted,
        report.total()
    );
    for rejected in &report.rejected {
        println!("  rejected {} | reason: {}", rejected.record, rejected.reason);
    }
}
