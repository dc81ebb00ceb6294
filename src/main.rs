//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_sweep` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Input validation and exit codes
//! - Writing the report to stdout
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use dns_sweep::app::input_error_message;
use dns_sweep::initialization::init_logger_with;
use dns_sweep::{render_report, sweep_target, Config, Target};

#[tokio::main]
async fn main() -> Result<()> {
    // Usage errors share exit status 1 with invalid input; help and version still exit 0
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format, !config.no_color)
        .context("Failed to initialize logger")?;

    if config.no_color {
        colored::control::set_override(false);
    }

    // Validation happens before any resolver exists, so bad input never hits the network
    let target = match Target::from_arg(config.target.as_deref()) {
        Ok(target) => target,
        Err(e) => {
            print!("{}", input_error_message(&e));
            let _ = io::stdout().flush();
            process::exit(1);
        }
    };

    let report = match sweep_target(&config, &target).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("dns_sweep error: {:#}", e);
            process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    render_report(&mut stdout, &report, config.format, !config.no_color)
        .context("Failed to write report")?;
    stdout.flush().context("Failed to flush report")?;
    Ok(())
}
