//! Report rendering.
//!
//! The sweep produces a `SweepReport`; this module turns it into console text
//! or JSON. Rendering never touches the network and writes to any
//! `std::io::Write`, so the output can be checked in tests.

use std::io::{self, Write};

use chrono::SecondsFormat;
use colored::{Color, Colorize};

use crate::config::{OutputFormat, RULE_WIDTH};
use crate::sweep::{Category, SectionBody, SweepReport};

/// Writes `report` to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if writing to `out` fails or the report cannot be
/// serialized.
pub fn render_report<W: Write>(
    out: &mut W,
    report: &SweepReport,
    format: OutputFormat,
    color: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => TextRenderer::new(color).write_report(out, report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Renders a report as sectioned console text.
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    /// Creates a renderer; `color` enables ANSI colors.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Writes the banner, every section in order, and the closing lines.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `out`.
    pub fn write_report<W: Write>(&self, out: &mut W, report: &SweepReport) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let input = report.target.input();

        writeln!(out, "🚀 Starting DNS Lookup Tool")?;
        writeln!(
            out,
            "⏰ Timestamp: {}",
            report
                .started_at
                .to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        writeln!(out, "🎯 Target: {input}")?;
        writeln!(out)?;
        writeln!(out, "🔍 DNS Lookup for: {}", self.paint(input, Color::Cyan))?;
        writeln!(out, "📧 Domain: {}", self.paint(report.target.domain(), Color::Cyan))?;
        writeln!(out, "{rule}")?;

        for section in &report.sections {
            writeln!(out)?;
            writeln!(
                out,
                "{}{}:",
                category_icon(section.category),
                self.paint(section.category.heading(), Color::Blue)
            )?;
            self.write_body(out, &section.body)?;
        }

        writeln!(out)?;
        writeln!(out, "{rule}")?;
        writeln!(
            out,
            "✅ {}",
            self.paint("DNS lookup completed successfully", Color::Green)
        )?;
        writeln!(out)?;
        writeln!(out, "🏁 DNS lookup tool finished")?;
        Ok(())
    }

    fn write_body<W: Write>(&self, out: &mut W, body: &SectionBody) -> io::Result<()> {
        match body {
            SectionBody::Exchanges(records) => {
                for (index, mx) in records.iter().enumerate() {
                    writeln!(
                        out,
                        "  {}. Priority: {}, Exchange: {}",
                        index + 1,
                        mx.priority,
                        mx.exchange
                    )?;
                }
            }
            SectionBody::Entries(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    writeln!(out, "  {}. {entry}", index + 1)?;
                }
            }
            SectionBody::NoneFound(message) => {
                writeln!(out, "  ❌ {}", self.paint(message, Color::Yellow))?;
            }
            SectionBody::Failed(message) => {
                writeln!(
                    out,
                    "  ❌ {}",
                    self.paint(&format!("Error: {message}"), Color::Red)
                )?;
            }
            SectionBody::Selectors(hits) => {
                for hit in hits {
                    writeln!(
                        out,
                        "  ✅ {}",
                        self.paint(&format!("{}: Found DKIM record", hit.selector), Color::Green)
                    )?;
                    for record in &hit.records {
                        writeln!(out, "     {record}")?;
                    }
                }
            }
        }
        Ok(())
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Mx => "📬 ",
        Category::A | Category::Aaaa => "🌐 ",
        Category::Spf => "🛡️  ",
        Category::Dmarc => "🔒 ",
        Category::Dkim => "🔑 ",
        Category::Ns => "🌍 ",
        Category::Txt => "📝 ",
    }
}

#[cfg(test)]
mod tests;
