//! Error types for the conversation pipeline.
//!
//! Every failure below the HTTP boundary is a [`DomainError`]: a stable
//! machine-readable code, a human message, and optional structured details.
//! The error propagates unmodified up to the boundary, which is the single
//! place translating it into an HTTP status and JSON body.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // General errors
    ValidationError,
    InternalError,

    // PDF errors
    PdfUrlInvalid,
    PdfDownloadFailed,
    PdfDownloadTimeout,
    PdfInvalidFormat,
    PdfTooLarge,
    PdfExtractionFailed,
    PdfPageRangeInvalid,

    // Agent errors
    AgentInitializationFailed,
    AgentProcessingFailed,
    ProviderApiError,
    RateLimitExceeded,
    TimeoutError,
}

impl ErrorCode {
    /// Stable wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::PdfUrlInvalid => "PDF_URL_INVALID",
            ErrorCode::PdfDownloadFailed => "PDF_DOWNLOAD_FAILED",
            ErrorCode::PdfDownloadTimeout => "PDF_DOWNLOAD_TIMEOUT",
            ErrorCode::PdfInvalidFormat => "PDF_INVALID_FORMAT",
            ErrorCode::PdfTooLarge => "PDF_TOO_LARGE",
            ErrorCode::PdfExtractionFailed => "PDF_EXTRACTION_FAILED",
            ErrorCode::PdfPageRangeInvalid => "PDF_PAGE_RANGE_INVALID",
            ErrorCode::AgentInitializationFailed => "AGENT_INITIALIZATION_FAILED",
            ErrorCode::AgentProcessingFailed => "AGENT_PROCESSING_FAILED",
            ErrorCode::ProviderApiError => "PROVIDER_API_ERROR",
            ErrorCode::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            ErrorCode::TimeoutError => "TIMEOUT_ERROR",
        }
    }

    /// HTTP status the boundary maps this code to.
    ///
    /// Download and extraction failures count as caller-supplied-bad-input,
    /// not server fault, so they map to 400.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::ValidationError
            | ErrorCode::PdfUrlInvalid
            | ErrorCode::PdfDownloadFailed
            | ErrorCode::PdfDownloadTimeout
            | ErrorCode::PdfInvalidFormat
            | ErrorCode::PdfTooLarge
            | ErrorCode::PdfExtractionFailed
            | ErrorCode::PdfPageRangeInvalid => 400,
            ErrorCode::RateLimitExceeded => 429,
            ErrorCode::TimeoutError => 503,
            ErrorCode::AgentInitializationFailed
            | ErrorCode::AgentProcessingFailed
            | ErrorCode::ProviderApiError
            | ErrorCode::InternalError => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a request validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Creates a download failure carrying the offending URL.
    pub fn download_failed(message: impl Into<String>, url: &str) -> Self {
        Self::new(ErrorCode::PdfDownloadFailed, message).with_detail("url", url)
    }

    /// Creates a download timeout carrying the offending URL.
    pub fn download_timeout(url: &str) -> Self {
        Self::new(
            ErrorCode::PdfDownloadTimeout,
            "Timeout downloading PDF from URL",
        )
        .with_detail("url", url)
    }

    /// Creates an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PdfInvalidFormat, message)
    }

    /// Creates a too-large error carrying the configured limit.
    pub fn too_large(max_size_mb: u64) -> Self {
        Self::new(ErrorCode::PdfTooLarge, "PDF file is too large")
            .with_detail("max_size_mb", max_size_mb.to_string())
    }

    /// Creates an extraction failure.
    pub fn extraction_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PdfExtractionFailed, message)
    }

    /// Creates an invalid page range error.
    pub fn page_range_invalid(min_page: u32, max_page: u32) -> Self {
        Self::new(
            ErrorCode::PdfPageRangeInvalid,
            "Minimum page cannot be greater than maximum page",
        )
        .with_detail("min_page", min_page.to_string())
        .with_detail("max_page", max_page.to_string())
    }

    /// Creates an agent processing failure carrying the agent name.
    pub fn agent_processing(message: impl Into<String>, agent_name: &str) -> Self {
        Self::new(ErrorCode::AgentProcessingFailed, message)
            .with_detail("agent_name", agent_name)
    }

    /// Creates a provider API error.
    pub fn provider_api(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderApiError, message)
    }

    /// Creates a rate limit error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RateLimitExceeded, message)
    }

    /// Creates an agent-side timeout error.
    pub fn timeout(timeout_secs: u64) -> Self {
        Self::new(ErrorCode::TimeoutError, "Operation timed out")
            .with_detail("timeout_seconds", timeout_secs.to_string())
    }

    /// Creates a generic internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_to_stable_strings() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::PdfDownloadFailed.as_str(), "PDF_DOWNLOAD_FAILED");
        assert_eq!(ErrorCode::PdfTooLarge.as_str(), "PDF_TOO_LARGE");
        assert_eq!(ErrorCode::ProviderApiError.as_str(), "PROVIDER_API_ERROR");
        assert_eq!(ErrorCode::RateLimitExceeded.as_str(), "RATE_LIMIT_EXCEEDED");
    }

    #[test]
    fn pdf_errors_map_to_bad_request() {
        assert_eq!(ErrorCode::PdfDownloadFailed.http_status(), 400);
        assert_eq!(ErrorCode::PdfDownloadTimeout.http_status(), 400);
        assert_eq!(ErrorCode::PdfInvalidFormat.http_status(), 400);
        assert_eq!(ErrorCode::PdfTooLarge.http_status(), 400);
        assert_eq!(ErrorCode::PdfExtractionFailed.http_status(), 400);
        assert_eq!(ErrorCode::PdfPageRangeInvalid.http_status(), 400);
    }

    #[test]
    fn agent_errors_map_to_server_fault() {
        assert_eq!(ErrorCode::AgentProcessingFailed.http_status(), 500);
        assert_eq!(ErrorCode::ProviderApiError.http_status(), 500);
        assert_eq!(ErrorCode::RateLimitExceeded.http_status(), 429);
        assert_eq!(ErrorCode::TimeoutError.http_status(), 503);
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::validation("Question is required");
        assert_eq!(format!("{}", err), "[VALIDATION_ERROR] Question is required");
    }

    #[test]
    fn constructors_attach_details() {
        let err = DomainError::download_failed("Failed to download PDF", "https://x/doc.pdf");
        assert_eq!(err.code, ErrorCode::PdfDownloadFailed);
        assert_eq!(err.details.get("url").map(String::as_str), Some("https://x/doc.pdf"));

        let err = DomainError::too_large(50);
        assert_eq!(err.details.get("max_size_mb").map(String::as_str), Some("50"));

        let err = DomainError::page_range_invalid(5, 3);
        assert_eq!(err.details.get("min_page").map(String::as_str), Some("5"));
        assert_eq!(err.details.get("max_page").map(String::as_str), Some("3"));
    }

    #[test]
    fn with_detail_is_chainable() {
        let err = DomainError::internal("boom")
            .with_detail("a", "1")
            .with_detail("b", "2");
        assert_eq!(err.details.len(), 2);
    }
}
