//! Extracted document value type.

/// Text pulled from a fetched PDF, annotated with the page range actually used.
///
/// Created by the text extractor, consumed once by the prompt builder, never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Concatenated page text, each page prefixed with a `--- Page N ---` marker.
    pub text: String,
    /// Inclusive 1-indexed page bounds the text was taken from.
    pub page_range: (u32, u32),
    /// URL the document was fetched from.
    pub source_url: String,
}

impl ExtractedDocument {
    pub fn new(text: impl Into<String>, page_range: (u32, u32), source_url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            page_range,
            source_url: source_url.into(),
        }
    }

    /// Number of pages covered by the range.
    pub fn page_count(&self) -> u32 {
        self.page_range.1 - self.page_range.0 + 1
    }
}

/// Marker prefixed to each page's text so consumers can attribute text to a page.
pub fn page_marker(page: u32) -> String {
    format!("--- Page {} ---", page)
}
