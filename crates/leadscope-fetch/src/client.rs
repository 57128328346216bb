//! HTTP client for business home pages.

use std::time::Duration;

use leadscope_core::{FetchFailure, FetchedPage, PageFetch};
use reqwest::Client;

use crate::error::FetchError;
use crate::url::{extract_host, normalize_url};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Fetches one page per call with a single GET and no retries.
///
/// Non-2xx responses, transport failures and invalid URLs are all reported
/// as [`FetchFailure`].
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the configured request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `website`, folding every error into a [`FetchFailure`].
    pub async fn fetch(&self, website: &str) -> PageFetch {
        let url = normalize_url(website).unwrap_or_else(|_| website.trim().to_owned());
        self.fetch_page(website).await.map_err(|e| {
            tracing::warn!(host = %extract_host(&url), error = %e, "page fetch failed");
            FetchFailure {
                url,
                reason: e.to_string(),
            }
        })
    }

    /// Fetches `website` and returns the decoded body.
    ///
    /// Redirects are followed; [`FetchedPage::url`] is the URL the body was
    /// finally served from.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] if `website` cannot be normalized.
    /// - [`FetchError::UnexpectedStatus`] for any non-2xx status.
    /// - [`FetchError::Http`] for network, TLS, timeout or body-decoding
    ///   failures.
    pub async fn fetch_page(&self, website: &str) -> Result<FetchedPage, FetchError> {
        let url = normalize_url(website)?;

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "es-MX,es;q=0.9,en;q=0.8")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let final_url = response.url().to_string();
        if final_url.trim_end_matches('/') != url.trim_end_matches('/') {
            tracing::debug!(requested = %url, final_url = %final_url, "followed redirect");
        }
        let body = response.text().await?;
        tracing::debug!(
            host = %extract_host(&final_url),
            status = status.as_u16(),
            bytes = body.len(),
            "page fetched"
        );

        Ok(FetchedPage {
            url: final_url,
            http_status: status.as_u16(),
            body,
        })
    }
}
