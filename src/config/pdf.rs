//! PDF download and extraction configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// PDF processing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    /// Download timeout in seconds
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,

    /// Maximum accepted file size in MiB
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,

    /// Page used when the request omits min_page
    #[serde(default = "default_min_page")]
    pub default_min_page: u32,

    /// Page used when the request omits max_page
    #[serde(default = "default_max_page")]
    pub default_max_page: u32,

    /// Directory downloaded files are written to
    #[serde(default = "default_storage_path")]
    pub storage_path: String,

    /// Maximum download attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial delay between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Delay multiplier applied after each attempt
    #[serde(default = "default_retry_backoff")]
    pub retry_backoff: u32,
}

impl PdfConfig {
    /// Get download timeout as Duration
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    /// Get initial retry delay as Duration
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Maximum accepted file size in bytes
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }

    /// Validate PDF configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_file_size_mb == 0 {
            return Err(ValidationError::InvalidMaxFileSize);
        }
        if self.default_min_page == 0 || self.default_min_page > self.default_max_page {
            return Err(ValidationError::InvalidDefaultPageRange);
        }
        if self.retry_backoff == 0 {
            return Err(ValidationError::InvalidRetryBackoff);
        }
        if self.storage_path.trim().is_empty() {
            return Err(ValidationError::EmptyStoragePath);
        }
        Ok(())
    }
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            download_timeout_secs: default_download_timeout(),
            max_file_size_mb: default_max_file_size_mb(),
            default_min_page: default_min_page(),
            default_max_page: default_max_page(),
            storage_path: default_storage_path(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            retry_backoff: default_retry_backoff(),
        }
    }
}

fn default_download_timeout() -> u64 {
    30
}

fn default_max_file_size_mb() -> u64 {
    50
}

fn default_min_page() -> u32 {
    1
}

fn default_max_page() -> u32 {
    5
}

fn default_storage_path() -> String {
    "media/pdfs".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    2000
}

fn default_retry_backoff() -> u32 {
    2
}
