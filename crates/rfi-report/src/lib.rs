//! RFI Review Reporting
//!
//! Merges per-document results into a single consolidated report and
//! persists it as JSON.
//!
//! The writer is atomic: the serialized report lands in a temporary file
//! next to the destination and is renamed over it, so a failed write
//! never corrupts a pre-existing report at the same path.

#![warn(missing_docs)]

mod consolidate;
mod error;
mod writer;

pub use consolidate::consolidate;
pub use error::WriteError;
pub use writer::write_report;
