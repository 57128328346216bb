//! The boundary between the fetcher and the analyzer.
//!
//! A fetch either produced a page body or a typed failure. The analyzer
//! never performs I/O; it only consumes these values.

use serde::{Deserialize, Serialize};

/// A page body retrieved from a business website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedPage {
    /// The URL the body was served from, after any redirects. Its scheme
    /// decides whether the site counts as HTTPS.
    pub url: String,
    pub http_status: u16,
    /// Decoded response body.
    pub body: String,
}

/// Why a page could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchFailure {
    pub url: String,
    pub reason: String,
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.url, self.reason)
    }
}

/// Outcome of fetching one page.
pub type PageFetch = Result<FetchedPage, FetchFailure>;
