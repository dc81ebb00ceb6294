//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources a sweep
//! needs:
//! - Logger
//! - DNS resolver
//!
//! All initialization functions return `InitializationError` on failure.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{init_record_source, init_resolver};
