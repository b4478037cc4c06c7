//! PDF text extraction

use crate::error::ExtractError;
use rfi_domain::traits::TextExtractor;
use std::path::Path;
use tracing::debug;

/// Extract text from a PDF file
///
/// Returns an empty string for PDFs that parse but have no text layer.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let cleaned = clean_pdf_text(&text);

    debug!(
        "Extracted {} chars from {} ({} raw)",
        cleaned.len(),
        path.display(),
        text.len()
    );

    Ok(cleaned)
}

/// Clean up extracted PDF text
///
/// Trims lines, drops blank ones, and strips common PDF artifacts.
fn clean_pdf_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .replace("  ", " ")
        .replace('\u{0}', "")
        .replace('\u{FEFF}', "")
}

/// [`TextExtractor`] implementation backed by `pdf-extract`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    type Error = ExtractError;

    fn extract(&self, path: &Path) -> Result<String, Self::Error> {
        extract_text(path)
    }
}
