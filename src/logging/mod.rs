//! Logging and observability
//!
//! Structured logging via `tracing`: a console layer for interactive use
//! plus an optional JSON file layer with rotation for unattended runs.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
