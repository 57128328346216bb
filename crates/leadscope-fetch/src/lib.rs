//! HTTP retrieval of business home pages.
//!
//! [`PageFetcher::fetch`] never fails outright: every problem is folded into
//! a [`leadscope_core::FetchFailure`] so the analyzer can still score the
//! site as unreachable.

pub mod client;
pub mod error;
pub mod url;

pub use client::PageFetcher;
pub use error::FetchError;
pub use url::{extract_host, normalize_url};
