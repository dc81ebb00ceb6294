//! The lookup sweep.
//!
//! Runs the fixed list of record categories against one domain and collects a
//! `Section` per category. A failing category only affects its own section.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::{DKIM_LABEL, DKIM_SELECTORS, DMARC_LABEL};
use crate::dns::{Absence, MxRecord, RecordSource, TxtQuery};
use crate::error_handling::LookupError;
use crate::target::Target;

/// Record categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Mail exchangers
    Mx,
    /// IPv4 addresses
    A,
    /// IPv6 addresses
    Aaaa,
    /// SPF policies among the domain's TXT records
    Spf,
    /// DMARC policy at `_dmarc.<domain>`
    Dmarc,
    /// DKIM keys under common selectors
    Dkim,
    /// Name servers
    Ns,
    /// Every TXT record of the domain
    Txt,
}

impl Category {
    /// Section heading shown in the text report.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Mx => "MX Records (Mail Exchange)",
            Category::A => "A Records (IPv4)",
            Category::Aaaa => "AAAA Records (IPv6)",
            Category::Spf => "SPF Records (Sender Policy Framework)",
            Category::Dmarc => "DMARC Records",
            Category::Dkim => "DKIM Records (Common Selectors)",
            Category::Ns => "NS Records (Name Servers)",
            Category::Txt => "All TXT Records",
        }
    }
}

/// Whether queries run one after another or all at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepMode {
    /// One query at a time, in report order
    #[default]
    Sequential,
    /// All categories and DKIM selectors concurrently; report order unchanged
    Concurrent,
}

/// A DKIM selector that answered with at least one key record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorHit {
    /// Selector label, e.g. `google`
    pub selector: String,
    /// Display text of each qualifying record
    pub records: Vec<String>,
}

/// Outcome of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum SectionBody {
    /// MX answers
    Exchanges(Vec<MxRecord>),
    /// Plain answers (addresses, hostnames, record text)
    Entries(Vec<String>),
    /// Query worked but nothing qualified
    NoneFound(String),
    /// Query failed; holds the resolver's message
    Failed(String),
    /// DKIM selectors that had keys (may be empty)
    Selectors(Vec<SelectorHit>),
}

/// One category's section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Which lookup this is
    pub category: Category,
    /// What it found
    pub body: SectionBody,
}

/// Everything one sweep found, in report order.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    /// The validated input
    pub target: Target,
    /// When the sweep started
    pub started_at: DateTime<Utc>,
    /// One section per category, in `Category` order
    pub sections: Vec<Section>,
}

impl SweepReport {
    /// Section for `category`, if it was run.
    #[cfg(test)]
    pub(crate) fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Number of categories whose query failed.
    pub fn failed_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s.body, SectionBody::Failed(_)))
            .count()
    }
}

/// Runs every category against the target's domain.
///
/// Never fails: query errors end up inside their sections.
pub async fn run_sweep<S>(source: &S, target: &Target, mode: SweepMode) -> SweepReport
where
    S: RecordSource + ?Sized,
{
    let started_at = Utc::now();
    let domain = target.domain();
    log::info!("Starting DNS sweep for {domain} ({mode:?})");

    let sections = match mode {
        SweepMode::Sequential => {
            let mut sections = Vec::new();
            for category in Category::iter() {
                sections.push(lookup_category(source, domain, category, mode).await);
            }
            sections
        }
        // join_all yields results in input order
        SweepMode::Concurrent => {
            join_all(Category::iter().map(|c| lookup_category(source, domain, c, mode))).await
        }
    };

    let report = SweepReport {
        target: target.clone(),
        started_at,
        sections,
    };
    log::info!(
        "DNS sweep for {domain} finished with {} failed categor{}",
        report.failed_count(),
        if report.failed_count() == 1 { "y" } else { "ies" }
    );
    report
}

/// Runs one category and turns its outcome into a section.
pub async fn lookup_category<S>(
    source: &S,
    domain: &str,
    category: Category,
    mode: SweepMode,
) -> Section
where
    S: RecordSource + ?Sized,
{
    let body = match category {
        Category::Mx => outcome(source.mx(domain).await, SectionBody::Exchanges),
        Category::A => outcome(source.ipv4(domain).await, |ips| {
            SectionBody::Entries(ips.iter().map(|ip| ip.to_string()).collect())
        }),
        Category::Aaaa => outcome(source.ipv6(domain).await, |ips| {
            SectionBody::Entries(ips.iter().map(|ip| ip.to_string()).collect())
        }),
        Category::Spf => txt_section(source, domain, TxtQuery::spf()).await,
        Category::Dmarc => {
            let host = format!("{DMARC_LABEL}.{domain}");
            txt_section(source, &host, TxtQuery::dmarc()).await
        }
        Category::Dkim => SectionBody::Selectors(dkim_sweep(source, domain, mode).await),
        Category::Ns => outcome(source.ns(domain).await, SectionBody::Entries),
        Category::Txt => txt_section(source, domain, TxtQuery::raw()).await,
    };
    Section { category, body }
}

/// Maps a query result to a section body; errors become `Failed`.
fn outcome<T>(
    result: Result<T, LookupError>,
    on_success: impl FnOnce(T) -> SectionBody,
) -> SectionBody {
    match result {
        Ok(records) => on_success(records),
        Err(e) => SectionBody::Failed(e.to_string()),
    }
}

async fn txt_section<S>(source: &S, host: &str, query: TxtQuery) -> SectionBody
where
    S: RecordSource + ?Sized,
{
    outcome(query.run(source, host).await, |shown| {
        match (shown.is_empty(), query.absence) {
            (true, Absence::Report(message)) => SectionBody::NoneFound(message.to_string()),
            _ => SectionBody::Entries(shown),
        }
    })
}

/// Probes every DKIM selector; misses and failures are dropped.
async fn dkim_sweep<S>(source: &S, domain: &str, mode: SweepMode) -> Vec<SelectorHit>
where
    S: RecordSource + ?Sized,
{
    let results = match mode {
        SweepMode::Sequential => {
            let mut results = Vec::with_capacity(DKIM_SELECTORS.len());
            for selector in DKIM_SELECTORS {
                results.push(probe_selector(source, domain, selector).await);
            }
            results
        }
        SweepMode::Concurrent => {
            join_all(
                DKIM_SELECTORS
                    .iter()
                    .map(|selector| probe_selector(source, domain, selector)),
            )
            .await
        }
    };
    results.into_iter().flatten().collect()
}

async fn probe_selector<S>(source: &S, domain: &str, selector: &str) -> Option<SelectorHit>
where
    S: RecordSource + ?Sized,
{
    let host = format!("{selector}.{DKIM_LABEL}.{domain}");
    match TxtQuery::dkim().run(source, &host).await {
        Ok(records) if !records.is_empty() => Some(SelectorHit {
            selector: selector.to_string(),
            records,
        }),
        Ok(_) => {
            log::debug!("DKIM selector {selector} has no key records");
            None
        }
        Err(e) => {
            log::debug!("DKIM selector {selector} not usable: {e}");
            None
        }
    }
}
