//! PDF Processor Port - combined fetch + extract step.
//!
//! The orchestration services only ever see this single operation: download
//! the document, extract a bounded page range, and guarantee the downloaded
//! file is deleted afterwards whatever the outcome.

use async_trait::async_trait;

use crate::domain::{DomainError, ExtractedDocument};

/// Port for turning a document URL into extracted text.
#[async_trait]
pub trait PdfProcessor: Send + Sync {
    /// Download `url`, extract text from the requested page range, and clean
    /// up the local file.
    ///
    /// Absent bounds fall back to configured defaults before being clamped
    /// into the document's real page count.
    async fn process_pdf(
        &self,
        url: &str,
        min_page: Option<u32>,
        max_page: Option<u32>,
    ) -> Result<ExtractedDocument, DomainError>;
}
