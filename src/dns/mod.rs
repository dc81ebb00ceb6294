//! DNS record querying.
//!
//! This module provides the resolver seam the sweep runs against:
//! - `RecordSource`: async MX, A, AAAA, NS and TXT queries
//! - `HickoryRecordSource`: the `hickory-resolver` backed implementation
//! - `TxtRecord` / `TxtQuery`: TXT records kept as segments, and the single
//!   filter-and-format operation shared by SPF, DMARC, DKIM and raw TXT

mod records;
mod txt;

// Re-export public API
pub use records::{HickoryRecordSource, MxRecord, RecordSource};
pub use txt::{truncate_for_display, Absence, TxtQuery, TxtRecord};

#[cfg(test)]
mod tests;
