//! Rendering tests.

use chrono::{TimeZone, Utc};

use super::*;
use crate::dns::MxRecord;
use crate::sweep::{Section, SelectorHit};
use crate::target::Target;

fn report(sections: Vec<Section>) -> SweepReport {
    SweepReport {
        target: Target::parse("user@example.com").unwrap(),
        started_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        sections,
    }
}

fn section(category: Category, body: SectionBody) -> Section {
    Section { category, body }
}

fn render_text(report: &SweepReport) -> String {
    let mut out = Vec::new();
    TextRenderer::new(false)
        .write_report(&mut out, report)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_header_and_footer() {
    let text = render_text(&report(vec![]));
    assert!(text.starts_with("🚀 Starting DNS Lookup Tool\n"));
    assert!(text.contains("⏰ Timestamp: 2026-01-02T03:04:05.000Z\n"));
    assert!(text.contains("🎯 Target: user@example.com\n"));
    assert!(text.contains("📧 Domain: example.com\n"));
    assert!(text.contains("✅ DNS lookup completed successfully\n"));
    assert!(text.ends_with("🏁 DNS lookup tool finished\n"));
}

#[test]
fn test_mx_and_entries_are_numbered() {
    let text = render_text(&report(vec![
        section(
            Category::Mx,
            SectionBody::Exchanges(vec![
                MxRecord {
                    priority: 10,
                    exchange: "mx1.example.com".into(),
                },
                MxRecord {
                    priority: 20,
                    exchange: "mx2.example.com".into(),
                },
            ]),
        ),
        section(
            Category::A,
            SectionBody::Entries(vec!["192.0.2.1".into(), "192.0.2.2".into()]),
        ),
    ]));
    assert!(text.contains("📬 MX Records (Mail Exchange):\n"));
    assert!(text.contains("  1. Priority: 10, Exchange: mx1.example.com\n"));
    assert!(text.contains("  2. Priority: 20, Exchange: mx2.example.com\n"));
    assert!(text.contains("  1. 192.0.2.1\n  2. 192.0.2.2\n"));
}

#[test]
fn test_failure_and_absence_lines() {
    let text = render_text(&report(vec![
        section(
            Category::Aaaa,
            SectionBody::Failed("no record found for Query".into()),
        ),
        section(
            Category::Spf,
            SectionBody::NoneFound("No SPF records found".into()),
        ),
    ]));
    assert!(text.contains("AAAA Records (IPv6):\n  ❌ Error: no record found for Query\n"));
    assert!(text.contains("SPF Records (Sender Policy Framework):\n  ❌ No SPF records found\n"));
}

#[test]
fn test_dkim_section_without_hits_is_header_only() {
    let text = render_text(&report(vec![
        section(Category::Dkim, SectionBody::Selectors(vec![])),
        section(Category::Ns, SectionBody::Entries(vec!["ns1.example.com".into()])),
    ]));
    assert!(text.contains("🔑 DKIM Records (Common Selectors):\n\n🌍 NS Records (Name Servers):\n"));
}

#[test]
fn test_dkim_hits() {
    let text = render_text(&report(vec![section(
        Category::Dkim,
        SectionBody::Selectors(vec![SelectorHit {
            selector: "google".into(),
            records: vec!["v=DKIM1; k=rsa; p=MIIB".into()],
        }]),
    )]));
    assert!(text.contains("  ✅ google: Found DKIM record\n     v=DKIM1; k=rsa; p=MIIB\n"));
}

#[test]
fn test_sections_printed_in_report_order() {
    let text = render_text(&report(vec![
        section(Category::Ns, SectionBody::Entries(vec![])),
        section(Category::Txt, SectionBody::Entries(vec![])),
    ]));
    let ns = text.find("NS Records").unwrap();
    let txt = text.find("All TXT Records").unwrap();
    assert!(ns < txt);
}

#[test]
fn test_json_output() {
    let mut out = Vec::new();
    let report = report(vec![
        section(Category::Aaaa, SectionBody::Failed("timed out".into())),
        section(Category::Spf, SectionBody::Entries(vec!["v=spf1 -all".into()])),
    ]);
    render_report(&mut out, &report, OutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value["target"]["kind"], "email");
    assert_eq!(value["target"]["domain"], "example.com");
    assert_eq!(value["sections"][0]["category"], "aaaa");
    assert_eq!(value["sections"][0]["body"]["status"], "failed");
    assert_eq!(value["sections"][0]["body"]["data"], "timed out");
    assert_eq!(value["sections"][1]["body"]["data"][0], "v=spf1 -all");
}

#[test]
fn test_color_adds_escape_codes() {
    colored::control::set_override(true);
    let mut out = Vec::new();
    TextRenderer::new(true)
        .write_report(&mut out, &report(vec![]))
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\u{1b}["));
}
