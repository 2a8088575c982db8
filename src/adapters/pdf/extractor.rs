//! PDF text extraction.
//!
//! Opens a fetched file with `lopdf` and concatenates text from a bounded
//! page range, prefixing each page with a `--- Page N ---` marker. A single
//! corrupt page is logged and skipped; it never aborts the whole extraction.

use std::path::Path;

use lopdf::Document;

use crate::config::PdfConfig;
use crate::domain::{page_marker, DomainError, ExtractedDocument};

/// Extracts page text from local PDF files.
pub struct PdfTextExtractor {
    default_min_page: u32,
    default_max_page: u32,
}

impl PdfTextExtractor {
    /// Creates an extractor using the configured default page bounds.
    pub fn new(config: &PdfConfig) -> Self {
        Self {
            default_min_page: config.default_min_page,
            default_max_page: config.default_max_page,
        }
    }

    /// Extract text from `path`, bounded by the requested page range.
    ///
    /// Absent bounds fall back to the configured defaults, then both are
    /// clamped into `[1, total_pages]`. A clamped minimum above the clamped
    /// maximum is rejected.
    pub fn extract(
        &self,
        path: &Path,
        min_page: Option<u32>,
        max_page: Option<u32>,
        source_url: &str,
    ) -> Result<ExtractedDocument, DomainError> {
        let document = Document::load(path)
            .map_err(|e| DomainError::invalid_format(format!("Invalid PDF file format: {}", e)))?;
        let total_pages = document.get_pages().len() as u32;

        let min = min_page
            .unwrap_or(self.default_min_page)
            .clamp(1, total_pages.max(1));
        let max = max_page
            .unwrap_or_else(|| self.default_max_page.min(total_pages))
            .min(total_pages);
        if min > max {
            return Err(DomainError::page_range_invalid(min, max));
        }

        tracing::info!(
            path = %path.display(),
            min_page = min,
            max_page = max,
            total_pages,
            "Extracting text from PDF"
        );

        let mut text = String::new();
        let mut extracted_any = false;
        for page in min..=max {
            match document.extract_text(&[page]) {
                Ok(page_text) => {
                    text.push_str(&format!("\n\n{}\n", page_marker(page)));
                    text.push_str(&page_text);
                    if !page_text.trim().is_empty() {
                        extracted_any = true;
                    }
                }
                Err(e) => {
                    tracing::warn!(page, error = %e, "Error extracting page, skipping");
                }
            }
        }

        if !extracted_any {
            return Err(DomainError::extraction_failed(
                "No text could be extracted from PDF",
            ));
        }

        tracing::info!(pages = max - min + 1, "Successfully extracted text");
        Ok(ExtractedDocument::new(text, (min, max), source_url))
    }
}
