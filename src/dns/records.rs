//! DNS record queries (MX, A, AAAA, NS, TXT).
//!
//! `RecordSource` is the seam between the sweep and the network. Every method
//! answers one query for one name and either returns the records in the order
//! the resolver gave them or a `LookupError` carrying the resolver's message.
//! Nothing is sorted, cached or retried here.

use std::net::{Ipv4Addr, Ipv6Addr};

use async_trait::async_trait;
use hickory_resolver::proto::rr::Name;
use hickory_resolver::TokioAsyncResolver;
use serde::Serialize;

use super::txt::TxtRecord;
use crate::error_handling::LookupError;

/// One mail exchanger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxRecord {
    /// Preference value (lower is preferred)
    pub priority: u16,
    /// Exchange hostname, without the trailing root dot
    pub exchange: String,
}

/// Async source of DNS records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Queries MX records for `name`.
    async fn mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError>;

    /// Queries A records for `name`.
    async fn ipv4(&self, name: &str) -> Result<Vec<Ipv4Addr>, LookupError>;

    /// Queries AAAA records for `name`.
    async fn ipv6(&self, name: &str) -> Result<Vec<Ipv6Addr>, LookupError>;

    /// Queries NS records for `name`, returning nameserver hostnames.
    async fn ns(&self, name: &str) -> Result<Vec<String>, LookupError>;

    /// Queries TXT records for `name`, keeping each record's segments apart.
    async fn txt(&self, name: &str) -> Result<Vec<TxtRecord>, LookupError>;
}

/// `RecordSource` backed by a `hickory-resolver` Tokio resolver.
pub struct HickoryRecordSource {
    resolver: TokioAsyncResolver,
}

impl HickoryRecordSource {
    /// Wraps an already configured resolver.
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl RecordSource for HickoryRecordSource {
    async fn mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError> {
        log::debug!("Querying MX records for {name}");
        let lookup = self
            .resolver
            .mx_lookup(name)
            .await
            .map_err(|e| failed("MX", name, e.into()))?;
        Ok(lookup
            .iter()
            .map(|mx| MxRecord {
                priority: mx.preference(),
                exchange: host_name(mx.exchange()),
            })
            .collect())
    }

    async fn ipv4(&self, name: &str) -> Result<Vec<Ipv4Addr>, LookupError> {
        log::debug!("Querying A records for {name}");
        let lookup = self
            .resolver
            .ipv4_lookup(name)
            .await
            .map_err(|e| failed("A", name, e.into()))?;
        Ok(lookup.iter().map(|a| a.0).collect())
    }

    async fn ipv6(&self, name: &str) -> Result<Vec<Ipv6Addr>, LookupError> {
        log::debug!("Querying AAAA records for {name}");
        let lookup = self
            .resolver
            .ipv6_lookup(name)
            .await
            .map_err(|e| failed("AAAA", name, e.into()))?;
        Ok(lookup.iter().map(|aaaa| aaaa.0).collect())
    }

    async fn ns(&self, name: &str) -> Result<Vec<String>, LookupError> {
        log::debug!("Querying NS records for {name}");
        let lookup = self
            .resolver
            .ns_lookup(name)
            .await
            .map_err(|e| failed("NS", name, e.into()))?;
        Ok(lookup.iter().map(|ns| host_name(&ns.0)).collect())
    }

    async fn txt(&self, name: &str) -> Result<Vec<TxtRecord>, LookupError> {
        log::debug!("Querying TXT records for {name}");
        let lookup = self
            .resolver
            .txt_lookup(name)
            .await
            .map_err(|e| failed("TXT", name, e.into()))?;
        Ok(lookup
            .iter()
            .map(|txt| {
                // TXT records can contain multiple strings - keep them separate
                TxtRecord::new(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                        .collect(),
                )
            })
            .collect())
    }
}

/// Logs a failed query and hands the error back.
fn failed(record_type: &str, name: &str, err: LookupError) -> LookupError {
    if err.is_not_found() {
        // Expected for plenty of names (no AAAA, no _dmarc, unused DKIM selectors)
        log::debug!("No {record_type} records for {name}: {err}");
    } else if matches!(err, LookupError::Timeout(_)) {
        log::info!("{record_type} record lookup timed out for {name}: {err}");
    } else {
        log::info!("Failed to lookup {record_type} records for {name}: {err}");
    }
    err
}

/// Renders a DNS name the way it is usually written, without the root dot.
fn host_name(name: &Name) -> String {
    let utf8 = name.to_utf8();
    match utf8.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => utf8,
    }
}
