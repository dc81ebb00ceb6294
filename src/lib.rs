//! dns_sweep library: mail-oriented DNS sweep of an email address or domain
//!
//! Given an email address or a domain, the library looks up MX, A, AAAA, SPF,
//! DMARC, common DKIM selectors, NS and raw TXT records, isolating each
//! category so a failure in one never stops the others.
//!
//! # Example
//!
//! ```no_run
//! use dns_sweep::{render_report, sweep_target, Config, OutputFormat, Target};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let target = Target::parse("user@example.org")?;
//!
//! let report = sweep_target(&config, &target).await?;
//! render_report(&mut std::io::stdout(), &report, OutputFormat::Text, false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod render;
pub mod sweep;
pub mod target;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dns::{HickoryRecordSource, MxRecord, RecordSource, TxtQuery, TxtRecord};
pub use error_handling::{InitializationError, InputError, LookupError};
pub use render::{render_report, TextRenderer};
pub use sweep::{
    run_sweep, Category, Section, SectionBody, SelectorHit, SweepMode, SweepReport,
};
pub use target::Target;

use initialization::init_record_source;

/// Builds a resolver from `config` and sweeps `target` with it.
///
/// # Errors
///
/// Returns `InitializationError` if the resolver cannot be set up. Query
/// failures never surface here; they are recorded in the report.
pub async fn sweep_target(
    config: &Config,
    target: &Target,
) -> Result<SweepReport, InitializationError> {
    let source = init_record_source(config.timeout_seconds)?;
    let mode = if config.parallel {
        SweepMode::Concurrent
    } else {
        SweepMode::Sequential
    };
    Ok(run_sweep(&source, target, mode).await)
}
