//! External system integrations for Surveyor.
//!
//! - [`platform`] - Survey platform HTTP API (export jobs, survey definitions)
//!
//! Adapters isolate external dependencies behind domain types: HTTP status
//! codes, archive formats, and wire envelopes stay inside this layer, and
//! the rest of the crate only sees [`crate::domain`] errors and raw JSON
//! payloads.

pub mod platform;
