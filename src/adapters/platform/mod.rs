//! Survey platform adapter
//!
//! Talks to the remote survey platform over HTTP: asynchronous response
//! exports (submit, poll, download, unzip) and one-shot survey definition
//! fetches. The client is built once from an immutable [`PlatformConfig`]
//! and the operations take explicit request values — no ambient state.
//!
//! [`PlatformConfig`]: crate::config::PlatformConfig

pub mod archive;
pub mod client;
pub mod export;
pub mod models;
pub mod survey;

pub use client::PlatformClient;
pub use export::{ExportFilters, ExportRequest};
