//! Usage and input-error text.

use crate::config::TOOL_NAME;
use crate::error_handling::InputError;

/// Example arguments shown in the usage text.
const EXAMPLE_TARGETS: &[&str] = &[
    "ammar.khalid@onespherelabs.com.au",
    "google.com",
    "user@example.org",
];

/// Usage text printed when no target is given.
pub fn usage_text() -> String {
    let mut text = String::from("📖 Usage:\n");
    text.push_str(&format!("  {TOOL_NAME} <email@domain.com>\n"));
    text.push_str(&format!("  {TOOL_NAME} <domain.com>\n"));
    text.push_str("\n📝 Examples:\n");
    for example in EXAMPLE_TARGETS {
        text.push_str(&format!("  {TOOL_NAME} {example}\n"));
    }
    text
}

/// Full message for a rejected input, including usage when nothing was given.
pub fn input_error_message(error: &InputError) -> String {
    let mut text = format!("❌ Error: {error}\n");
    match error.expected_format() {
        Some(expected) => text.push_str(&format!("   Expected format: {expected}\n")),
        None => {
            text.push('\n');
            text.push_str(&usage_text());
        }
    }
    text
}
