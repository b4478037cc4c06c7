//! RFI Review Domain Layer
//!
//! This crate contains the core data model for the RFI review pipeline.
//! It defines the fundamental value objects and the trait interfaces that
//! all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Action**: An actionable commitment extracted from a document, with
//!   a timeframe and a priority
//! - **DocumentResult**: The per-document analysis record (themes,
//!   actions, summary, timestamp)
//! - **ConsolidatedReport**: The cross-document merge of every
//!   DocumentResult in a batch
//! - **AnalysisMode**: Provenance of an analysis (AI-derived or keyword
//!   heuristic)
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Infrastructure implementations (PDF parsing, LLM clients, report
//!   writing) live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod mode;
pub mod priority;
pub mod report;
pub mod result;
pub mod traits;

// Re-exports for convenience
pub use action::{Action, SourcedAction};
pub use mode::AnalysisMode;
pub use priority::Priority;
pub use report::ConsolidatedReport;
pub use result::DocumentResult;
