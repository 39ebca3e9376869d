//! Tabular materialization
//!
//! Converts raw JSON survey payloads into rectangular [`TableFrame`]s ready
//! for columnar output. The caller picks the conversion path through a
//! [`TableSource`] variant; the materializer applies the columnar-safety
//! sanitization (no zero-length string cells) before handing the frame on.

pub mod frame;
pub mod source;

pub use frame::TableFrame;
pub use source::TableSource;
