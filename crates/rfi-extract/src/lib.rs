//! RFI Review Text Extraction
//!
//! Pulls the plain-text layer out of PDF documents via the `pdf-extract`
//! crate and cleans it up for downstream classification.
//!
//! Scanned or image-only PDFs that parse successfully but carry no text
//! layer yield an empty string, not an error; only unreadable files and
//! parse failures are reported as [`ExtractError`].

#![warn(missing_docs)]

mod error;
mod pdf;

pub use error::ExtractError;
pub use pdf::{extract_text, PdfExtractor};
