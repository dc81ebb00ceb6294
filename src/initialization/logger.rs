//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::{Color, Colorize};
use log::{Level, LevelFilter};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (emoji prefix, colored level when `color` is set) and JSON formats for
/// structured logging. Logs go to stderr so they never mix with the report on
/// stdout.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
/// * `color` - Color the level and target in plain output
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Show every query and DKIM miss
/// dns_sweep example.com --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=hickory_resolver=debug dns_sweep example.com
/// ```
pub fn init_logger_with(
    level: LevelFilter,
    format: LogFormat,
    color: bool,
) -> Result<(), InitializationError> {
    // try_init() so a second initialization (tests) is an error, not a panic
    build_logger(level, format, color)
        .try_init()
        .map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the configured `env_logger` builder without installing it.
fn build_logger(level: LevelFilter, format: LogFormat, color: bool) -> env_logger::Builder {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // hickory reports truncated/malformed UDP answers it already recovers from
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    builder.filter_module("dns_sweep", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "ts": chrono::Utc::now().timestamp_millis(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "msg": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(move |buf, record| {
                let level = record.level();
                let (emoji, tint) = level_style(level);
                if color {
                    writeln!(
                        buf,
                        "{emoji} {} [{}] {}",
                        record.target().cyan(),
                        level.as_str().color(tint),
                        record.args()
                    )
                } else {
                    writeln!(
                        buf,
                        "{emoji} {} [{level}] {}",
                        record.target(),
                        record.args()
                    )
                }
            });
        }
    }

    builder
}

fn level_style(level: Level) -> (&'static str, Color) {
    match level {
        Level::Error => ("❌", Color::Red),
        Level::Warn => ("⚠️", Color::Yellow),
        Level::Info => ("✔️", Color::Green),
        Level::Debug => ("🔍", Color::Blue),
        Level::Trace => ("🔬", Color::Magenta),
    }
}
