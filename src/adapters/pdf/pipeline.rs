//! Combined fetch + extract step with guaranteed cleanup.
//!
//! The downloaded file is a transient resource: it is deleted after
//! extraction whether extraction succeeded or failed.

use async_trait::async_trait;
use std::path::Path;

use crate::config::PdfConfig;
use crate::domain::{DomainError, ExtractedDocument};
use crate::ports::PdfProcessor;

use super::extractor::PdfTextExtractor;
use super::fetcher::HttpPdfFetcher;

/// Implements [`PdfProcessor`] by composing the HTTP fetcher and the text
/// extractor.
pub struct PdfPipeline {
    fetcher: HttpPdfFetcher,
    extractor: PdfTextExtractor,
}

impl PdfPipeline {
    /// Creates a pipeline from the PDF configuration.
    pub fn new(config: PdfConfig) -> Self {
        let extractor = PdfTextExtractor::new(&config);
        let fetcher = HttpPdfFetcher::new(config);
        Self { fetcher, extractor }
    }
}

#[async_trait]
impl PdfProcessor for PdfPipeline {
    async fn process_pdf(
        &self,
        url: &str,
        min_page: Option<u32>,
        max_page: Option<u32>,
    ) -> Result<ExtractedDocument, DomainError> {
        let path = self.fetcher.fetch(url).await?;
        let result = self.extractor.extract(&path, min_page, max_page, url);
        cleanup(&path).await;
        result
    }
}

async fn cleanup(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::info!(path = %path.display(), "Cleaned up file"),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to cleanup file");
        }
    }
}
