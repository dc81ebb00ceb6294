//! Error types.
//!
//! Errors are split by how far they reach:
//! - **Input errors** stop the run before any network activity
//! - **Initialization errors** stop the run before the sweep starts
//! - **Lookup errors** stay inside the section of the category that raised them

mod types;

// Re-export public API
pub use types::{InitializationError, InputError, LookupError};
