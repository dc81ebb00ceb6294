//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver the sweep
//! queries through.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::dns::HickoryRecordSource;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` or the platform
/// equivalent) so results match what the host itself sees. If it cannot be
/// read, falls back to the library default upstreams.
///
/// The per-query timeout is left at the resolver default unless
/// `timeout_seconds` is given.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `timeout_seconds` is zero.
pub fn init_resolver(
    timeout_seconds: Option<u64>,
) -> Result<TokioAsyncResolver, InitializationError> {
    let (config, mut opts) = match read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    if let Some(secs) = timeout_seconds {
        if secs == 0 {
            return Err(InitializationError::DnsResolverError(
                "timeout must be at least one second".to_string(),
            ));
        }
        opts.timeout = Duration::from_secs(secs);
    }
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    log::debug!(
        "DNS resolver using {} name server(s), timeout {:?}",
        config.name_servers().len(),
        opts.timeout
    );
    Ok(TokioAsyncResolver::tokio(config, opts))
}

/// Initializes the resolver and wraps it as the sweep's record source.
///
/// # Errors
///
/// See [`init_resolver`].
pub fn init_record_source(
    timeout_seconds: Option<u64>,
) -> Result<HickoryRecordSource, InitializationError> {
    init_resolver(timeout_seconds).map(HickoryRecordSource::new)
}
