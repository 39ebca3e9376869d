//! Artifact output
//!
//! Path construction and disk writers for the two artifact formats the tool
//! produces: pretty ASCII JSON and Arrow IPC tables.

pub mod path;
pub mod writer;

pub use path::artifact_path;
pub use writer::{write_frame, write_json};
