//! TXT records and the filter query shared by SPF, DMARC, DKIM and raw TXT.

use serde::Serialize;

use super::records::RecordSource;
use crate::config::{
    DKIM_DISPLAY_LIMIT, DKIM_MARKERS, DMARC_PREFIX, SPF_PREFIX, TRUNCATION_MARKER,
};
use crate::error_handling::LookupError;

/// One TXT record as the resolver returned it: a list of character-strings.
///
/// Qualification checks look at individual segments; display joins them with
/// no separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TxtRecord {
    segments: Vec<String>,
}

impl TxtRecord {
    /// Builds a record from its segments, in wire order.
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// All segments concatenated.
    pub fn text(&self) -> String {
        self.segments.concat()
    }

    /// Whether any single segment satisfies `pred`.
    pub fn any_segment(&self, pred: impl Fn(&str) -> bool) -> bool {
        self.segments.iter().any(|s| pred(s))
    }
}

impl From<&str> for TxtRecord {
    fn from(text: &str) -> Self {
        Self::new(vec![text.to_string()])
    }
}

/// What a TXT query reports when nothing qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// Print this message in place of records.
    Report(&'static str),
    /// Print nothing.
    Silent,
}

/// A TXT lookup with a qualifying predicate and a display mode.
#[derive(Clone, Copy)]
pub struct TxtQuery {
    qualifies: fn(&TxtRecord) -> bool,
    /// Behaviour when no record qualifies
    pub absence: Absence,
    /// Maximum characters shown per record, if limited
    pub truncate_at: Option<usize>,
}

impl TxtQuery {
    /// Records with a segment starting with `v=spf1`.
    pub fn spf() -> Self {
        Self {
            qualifies: |r: &TxtRecord| r.any_segment(|s| s.starts_with(SPF_PREFIX)),
            absence: Absence::Report("No SPF records found"),
            truncate_at: None,
        }
    }

    /// Records with a segment starting with `v=DMARC1`.
    pub fn dmarc() -> Self {
        Self {
            qualifies: |r: &TxtRecord| r.any_segment(|s| s.starts_with(DMARC_PREFIX)),
            absence: Absence::Report("No DMARC records found"),
            truncate_at: None,
        }
    }

    /// Records with a segment containing `k=rsa` or `v=DKIM1`, shortened for display.
    pub fn dkim() -> Self {
        Self {
            qualifies: |r: &TxtRecord| {
                r.any_segment(|s| DKIM_MARKERS.iter().any(|m| s.contains(*m)))
            },
            absence: Absence::Silent,
            truncate_at: Some(DKIM_DISPLAY_LIMIT),
        }
    }

    /// Every record, unfiltered.
    pub fn raw() -> Self {
        Self {
            qualifies: |_: &TxtRecord| true,
            absence: Absence::Silent,
            truncate_at: None,
        }
    }

    /// Whether `record` passes this query's filter.
    pub fn qualifies(&self, record: &TxtRecord) -> bool {
        (self.qualifies)(record)
    }

    /// Display text for one record.
    pub fn display(&self, record: &TxtRecord) -> String {
        let text = record.text();
        match self.truncate_at {
            Some(limit) => truncate_for_display(&text, limit),
            None => text,
        }
    }

    /// Display text of every qualifying record, in resolver order.
    pub fn select(&self, records: &[TxtRecord]) -> Vec<String> {
        records
            .iter()
            .filter(|r| self.qualifies(r))
            .map(|r| self.display(r))
            .collect()
    }

    /// Looks up TXT records for `host` and keeps the qualifying ones.
    ///
    /// # Errors
    ///
    /// Returns the resolver's `LookupError` unchanged; deciding whether a
    /// failure is shown is left to the caller.
    pub async fn run<S>(&self, source: &S, host: &str) -> Result<Vec<String>, LookupError>
    where
        S: RecordSource + ?Sized,
    {
        let records = source.txt(host).await?;
        Ok(self.select(&records))
    }
}

/// Cuts `text` to `limit` characters, appending `...` when anything was cut.
pub fn truncate_for_display(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}
