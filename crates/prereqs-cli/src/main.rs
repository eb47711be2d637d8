//! prereqs CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use prereqs_cli::{
    Args,
    error_adapter::{Reportable, failures_to_reportables, to_reportables},
};

/// Exit status of a run that finished with some departments not exported.
const EXIT_PARTIAL: i32 = 2;

fn report(reportables: &[Reportable<'_>]) {
    let reporter = miette::GraphicalReportHandler::new();

    // Render each diagnostic independently
    for reportable in reportables {
        let mut writer = String::new();
        if reporter.render_report(&mut writer, reportable).is_err() {
            writer = reportable.to_string();
        }
        error!("{writer}");
    }
}

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting prereqs");
    debug!(args:?; "Parsed arguments");

    match prereqs_cli::run(&args) {
        Ok(run_report) if run_report.is_success() => info!("Completed successfully"),
        Ok(run_report) => {
            report(&failures_to_reportables(&run_report));
            error!(failed = run_report.failures.len(); "Completed with failed departments");
            process::exit(EXIT_PARTIAL);
        }
        Err(err) => {
            report(&to_reportables(&err));
            process::exit(1);
        }
    }
}
