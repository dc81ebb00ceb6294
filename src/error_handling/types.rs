//! Error type definitions.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Rejected command-line input.
///
/// Display text is the first line shown to the user; `expected_format` gives
/// the hint line that follows it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No target was given on the command line.
    #[error("Please provide an email address or domain")]
    MissingTarget,

    /// The argument contains `@` but is not shaped like an email address.
    #[error("Invalid email format")]
    InvalidEmail(String),

    /// The argument has no `@` and is not shaped like a domain name.
    #[error("Invalid domain format")]
    InvalidDomain(String),
}

impl InputError {
    /// Example of the shape the input should have had, if any.
    pub fn expected_format(&self) -> Option<&'static str> {
        match self {
            InputError::MissingTarget => None,
            InputError::InvalidEmail(_) => Some("user@domain.com"),
            InputError::InvalidDomain(_) => Some("domain.com"),
        }
    }
}

/// A single DNS query that did not produce records.
///
/// The message is the resolver's own error text and is what ends up in the
/// report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name does not exist or has no records of the requested type.
    #[error("{0}")]
    NotFound(String),

    /// The query timed out.
    #[error("{0}")]
    Timeout(String),

    /// Any other resolver failure (network, protocol, configuration).
    #[error("{0}")]
    Resolver(String),
}

impl LookupError {
    /// Whether this error only means "nothing there".
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }
}

impl From<ResolveError> for LookupError {
    fn from(e: ResolveError) -> Self {
        let message = e.to_string();
        match e.kind() {
            ResolveErrorKind::NoRecordsFound { .. } => LookupError::NotFound(message),
            ResolveErrorKind::Timeout => LookupError::Timeout(message),
            _ => LookupError::Resolver(message),
        }
    }
}
