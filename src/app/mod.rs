//! User-facing messages for the command-line front end.
//!
//! This module provides the usage text and the input-error text printed
//! before a sweep is attempted.

pub mod usage;

// Re-export public API
pub use usage::{input_error_message, usage_text};
