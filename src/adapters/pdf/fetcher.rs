//! HTTP PDF fetcher.
//!
//! Downloads a document from a URL into the configured storage directory,
//! streaming the body in chunks rather than buffering the whole response.
//! Transient transport failures (connect errors, timeouts, HTTP 5xx) are
//! retried with exponential backoff; 4xx responses and format/size
//! violations are permanent.

use std::path::{Path, PathBuf};

use chrono::Utc;
use futures::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;
use tokio::time::sleep;
use url::Url;
use uuid::Uuid;

use crate::config::PdfConfig;
use crate::domain::DomainError;

/// Downloads PDFs over HTTP with retry-on-transient-failure.
pub struct HttpPdfFetcher {
    client: Client,
    config: PdfConfig,
}

/// A failed download attempt, classified for the retry loop.
struct FetchFailure {
    error: DomainError,
    transient: bool,
}

impl FetchFailure {
    fn transient(error: DomainError) -> Self {
        Self { error, transient: true }
    }

    fn permanent(error: DomainError) -> Self {
        Self { error, transient: false }
    }
}

impl HttpPdfFetcher {
    /// Creates a new fetcher with the given configuration.
    pub fn new(config: PdfConfig) -> Self {
        let client = Client::builder()
            .timeout(config.download_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Download `url` to a uniquely named file under the storage directory.
    ///
    /// Returns the local path on success. The caller owns the file and is
    /// responsible for deleting it.
    pub async fn fetch(&self, url: &str) -> Result<PathBuf, DomainError> {
        let mut delay = self.config.retry_delay();
        let mut attempt: u32 = 1;

        loop {
            tracing::info!(url, attempt, "Downloading PDF");
            match self.fetch_once(url).await {
                Ok(path) => {
                    tracing::info!(url, path = %path.display(), "PDF downloaded successfully");
                    return Ok(path);
                }
                Err(failure) => {
                    if !failure.transient || attempt >= self.config.max_retries {
                        return Err(failure.error);
                    }
                    tracing::warn!(
                        url,
                        attempt,
                        max_attempts = self.config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %failure.error,
                        "PDF download failed, retrying"
                    );
                    sleep(delay).await;
                    delay *= self.config.retry_backoff;
                    attempt += 1;
                }
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<PathBuf, FetchFailure> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchFailure::transient(DomainError::download_timeout(url))
            } else if e.is_connect() {
                FetchFailure::transient(DomainError::download_failed(
                    format!("Connection failed: {}", e),
                    url,
                ))
            } else {
                FetchFailure::transient(DomainError::download_failed(
                    format!("Failed to download PDF: {}", e),
                    url,
                ))
            }
        })?;

        let status = response.status();
        if status.is_client_error() {
            return Err(FetchFailure::permanent(DomainError::download_failed(
                format!("Failed to download PDF: HTTP {}", status.as_u16()),
                url,
            )));
        }
        if !status.is_success() {
            return Err(FetchFailure::transient(DomainError::download_failed(
                format!("Failed to download PDF: HTTP {}", status.as_u16()),
                url,
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_lowercase();
        if !content_type.contains("pdf") && !url_path_is_pdf(url) {
            return Err(FetchFailure::permanent(DomainError::invalid_format(
                "URL does not point to a PDF file",
            )));
        }

        let max_bytes = self.config.max_file_size_bytes();
        if let Some(length) = response.content_length() {
            if length > max_bytes {
                return Err(FetchFailure::permanent(DomainError::too_large(
                    self.config.max_file_size_mb,
                )));
            }
        }

        self.write_to_storage(response, url, max_bytes).await
    }

    async fn write_to_storage(
        &self,
        response: reqwest::Response,
        url: &str,
        max_bytes: u64,
    ) -> Result<PathBuf, FetchFailure> {
        tokio::fs::create_dir_all(&self.config.storage_path)
            .await
            .map_err(|e| {
                FetchFailure::permanent(DomainError::download_failed(
                    format!("Failed to save PDF file: {}", e),
                    url,
                ))
            })?;

        let path = Path::new(&self.config.storage_path).join(unique_filename());
        let mut file = tokio::fs::File::create(&path).await.map_err(|e| {
            FetchFailure::permanent(DomainError::download_failed(
                format!("Failed to save PDF file: {}", e),
                url,
            ))
        })?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    discard(&path).await;
                    return Err(FetchFailure::transient(DomainError::download_failed(
                        format!("Failed to download PDF: {}", e),
                        url,
                    )));
                }
            };

            written += chunk.len() as u64;
            if written > max_bytes {
                discard(&path).await;
                return Err(FetchFailure::permanent(DomainError::too_large(
                    self.config.max_file_size_mb,
                )));
            }

            if let Err(e) = file.write_all(&chunk).await {
                discard(&path).await;
                return Err(FetchFailure::permanent(DomainError::download_failed(
                    format!("Failed to save PDF file: {}", e),
                    url,
                )));
            }
        }

        if let Err(e) = file.flush().await {
            discard(&path).await;
            return Err(FetchFailure::permanent(DomainError::download_failed(
                format!("Failed to save PDF file: {}", e),
                url,
            )));
        }

        Ok(path)
    }
}

/// Whether the URL path ends in `.pdf`, case-insensitive.
fn url_path_is_pdf(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_lowercase().ends_with(".pdf"),
        Err(_) => url.to_lowercase().ends_with(".pdf"),
    }
}

/// Timestamp + random suffix keeps concurrent downloads collision-free.
fn unique_filename() -> String {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let id = Uuid::new_v4().simple().to_string();
    format!("pdf_{}_{}.pdf", timestamp, &id[..8])
}

async fn discard(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial download");
    }
}
