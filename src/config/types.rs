//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned console text (default)
    Text,
    /// The whole report as one pretty-printed JSON document
    Json,
}

/// Command-line options and configuration.
///
/// The target is optional at the parser level so a missing argument can be
/// answered with the tool's own usage text and exit status. It may start with
/// `-` so such input reaches validation, and anything after it is ignored.
///
/// # Examples
///
/// ```bash
/// # Sweep the domain of an email address
/// dns_sweep user@example.org
///
/// # Sweep a bare domain, all categories at once, as JSON
/// dns_sweep google.com --parallel --format json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_sweep",
    about = "Looks up MX, A, AAAA, SPF, DMARC, DKIM, NS and TXT records for an email address or domain."
)]
pub struct Config {
    /// Email address or domain to sweep
    #[arg(allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Arguments after the target; accepted and ignored
    #[arg(hide = true)]
    pub extra_args: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Run all record categories (and DKIM selector probes) concurrently.
    ///
    /// Output order is unchanged.
    #[arg(long)]
    pub parallel: bool,

    /// Per-query resolver timeout in seconds (resolver default when unset)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Disable colors in the text report
    #[arg(long)]
    pub no_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: None,
            extra_args: Vec::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            format: OutputFormat::Text,
            parallel: false,
            timeout_seconds: None,
            no_color: false,
        }
    }
}
