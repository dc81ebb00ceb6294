//! DNS module tests.

use super::*;

fn record(segments: &[&str]) -> TxtRecord {
    TxtRecord::new(segments.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_txt_record_text_joins_segments() {
    let txt = record(&["v=spf1 include:_spf.google.com", " ~all"]);
    assert_eq!(txt.text(), "v=spf1 include:_spf.google.com ~all");
}

#[test]
fn test_spf_qualifies_on_any_segment_prefix() {
    let spf = TxtQuery::spf();
    assert!(spf.qualifies(&record(&["v=spf1 -all"])));
    // Second segment carries the marker
    assert!(spf.qualifies(&record(&["google-site-verification=abc", "v=spf1 -all"])));
    // Prefix only, not substring
    assert!(!spf.qualifies(&record(&["x v=spf1 -all"])));
    // Case sensitive
    assert!(!spf.qualifies(&record(&["V=SPF1 -all"])));
}

#[test]
fn test_spf_select_keeps_resolver_order() {
    let records = vec![
        TxtRecord::from("v=spf1 include:a.example -all"),
        TxtRecord::from("google-site-verification=xyz"),
        record(&["v=spf1 ", "include:b.example -all"]),
    ];
    assert_eq!(
        TxtQuery::spf().select(&records),
        vec![
            "v=spf1 include:a.example -all".to_string(),
            "v=spf1 include:b.example -all".to_string(),
        ]
    );
}

#[test]
fn test_spf_select_empty_when_nothing_qualifies() {
    let records = vec![TxtRecord::from("MS=ms12345")];
    assert!(TxtQuery::spf().select(&records).is_empty());
    assert_eq!(TxtQuery::spf().absence, Absence::Report("No SPF records found"));
}

#[test]
fn test_dmarc_qualifies() {
    let dmarc = TxtQuery::dmarc();
    assert!(dmarc.qualifies(&TxtRecord::from("v=DMARC1; p=reject")));
    assert!(!dmarc.qualifies(&TxtRecord::from("v=dmarc1; p=reject")));
    assert_eq!(dmarc.absence, Absence::Report("No DMARC records found"));
}

#[test]
fn test_dkim_qualifies_on_substring() {
    let dkim = TxtQuery::dkim();
    assert!(dkim.qualifies(&TxtRecord::from("v=DKIM1; k=rsa; p=MIGf")));
    assert!(dkim.qualifies(&TxtRecord::from("k=rsa; p=MIGf")));
    // Substring anywhere in a segment is enough
    assert!(dkim.qualifies(&TxtRecord::from("t=y; v=DKIM1; p=abc")));
    assert!(!dkim.qualifies(&TxtRecord::from("k=ed25519; p=abc")));
    assert_eq!(dkim.absence, Absence::Silent);
}

#[test]
fn test_dkim_display_truncates_long_text() {
    let key = format!("v=DKIM1; k=rsa; p={}", "A".repeat(200));
    let shown = TxtQuery::dkim().display(&TxtRecord::from(key.as_str()));
    assert_eq!(shown.len(), 103);
    assert!(shown.ends_with("..."));
    assert_eq!(&shown[..100], &key[..100]);
}

#[test]
fn test_dkim_display_keeps_short_text() {
    let key = format!("v=DKIM1; k=rsa; p={}", "B".repeat(100 - 18));
    assert_eq!(key.len(), 100);
    let shown = TxtQuery::dkim().display(&TxtRecord::from(key.as_str()));
    assert_eq!(shown, key);
}

#[test]
fn test_raw_keeps_everything_untruncated() {
    let long = "x".repeat(500);
    let records = vec![TxtRecord::from(long.as_str()), TxtRecord::from("v=spf1 -all")];
    let shown = TxtQuery::raw().select(&records);
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0], long);
}

#[test]
fn test_truncate_for_display_boundaries() {
    assert_eq!(truncate_for_display("", 100), "");
    assert_eq!(truncate_for_display("abc", 3), "abc");
    assert_eq!(truncate_for_display("abcd", 3), "abc...");
    // Counts characters, not bytes
    assert_eq!(truncate_for_display("ééé", 2), "éé...");
}
