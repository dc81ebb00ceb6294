//! Configuration constants.
//!
//! This module defines the fixed values the sweep is built around: the DKIM
//! selectors probed, the record prefixes that qualify TXT records, and the
//! widths used when rendering the report.

/// Name the tool reports itself as in usage text.
pub const TOOL_NAME: &str = "dns_sweep";

/// DKIM selectors probed under `<selector>._domainkey.<domain>`, in probe order.
///
/// Selectors are operator-chosen labels, so this is a list of common guesses
/// rather than an exhaustive search.
pub const DKIM_SELECTORS: &[&str] = &[
    "default",
    "selector1",
    "selector2",
    "google",
    "k1",
    "s1",
    "s2",
];

/// Label prepended to the domain for DMARC lookups.
pub const DMARC_LABEL: &str = "_dmarc";
/// Label placed between selector and domain for DKIM lookups.
pub const DKIM_LABEL: &str = "_domainkey";

/// A TXT segment starting with this marks an SPF record.
pub const SPF_PREFIX: &str = "v=spf1";
/// A TXT segment starting with this marks a DMARC record.
pub const DMARC_PREFIX: &str = "v=DMARC1";
/// Substrings that mark a DKIM key record (any one is enough).
pub const DKIM_MARKERS: &[&str] = &["k=rsa", "v=DKIM1"];

/// DKIM record text longer than this is truncated in the report.
pub const DKIM_DISPLAY_LIMIT: usize = 100;
/// Appended to DKIM text that was truncated.
pub const TRUNCATION_MARKER: &str = "...";

/// Width of the `=` rule printed around the lookup sections.
pub const RULE_WIDTH: usize = 50;
