//! RFI Review Analyzer
//!
//! Classifies extracted document text into themes, actions, and
//! timeframes, using an LLM when one is configured and a keyword
//! heuristic otherwise.
//!
//! # Architecture
//!
//! ```text
//! Text → Reviewer → [AI classifier | keyword fallback] → DocumentResult
//! ```
//!
//! # Key Features
//!
//! - **Strategy selection**: AI or heuristic, chosen once at Reviewer
//!   construction, never scattered through the call path
//! - **Graceful degradation**: every LLM failure (auth, network,
//!   timeout, malformed response) downgrades the document to the
//!   heuristic classifier instead of failing the review
//! - **Configurable keyword tables**: action indicators, urgency words,
//!   and the theme lexicon are data, loadable from TOML
//!
//! # Example Usage
//!
//! ```
//! use rfi_analyzer::{AnalyzerConfig, Reviewer, Strategy};
//! use rfi_extract::PdfExtractor;
//! use rfi_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reviewer: Reviewer<PdfExtractor, MockProvider> =
//!     Reviewer::new(PdfExtractor, Strategy::Heuristic, AnalyzerConfig::default());
//!
//! let result = reviewer.review(std::path::Path::new("response.pdf")).await?;
//! println!("{} themes, {} actions", result.themes.len(), result.actions.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analysis;
mod config;
mod error;
pub mod fallback;
mod parser;
mod prompt;
mod reviewer;


pub use analysis::Analysis;
pub use config::{AnalyzerConfig, KeywordTables, LexiconEntry};
pub use error::{AnalyzerError, ReviewError};
pub use parser::parse_llm_response;
pub use prompt::PromptBuilder;
pub use reviewer::{Reviewer, Strategy};
