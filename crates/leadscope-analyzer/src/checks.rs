//! Structural checks over page markup.
//!
//! These are tag-level inspections that do not depend on the signal
//! catalog. Matching is done with regexes over the raw text; no DOM is built.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Titles shorter than this count as missing.
pub const MIN_TITLE_LEN: usize = 10;

static VIEWPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\b[^>]*\bname\s*=\s*["']?viewport\b"#).expect("valid regex")
});

static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\b[^>]*\bname\s*=\s*["']?description\b"#).expect("valid regex")
});

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title>").expect("valid regex"));

static FORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<form\b").expect("valid regex"));

static SOCIAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)href\s*=\s*["']?[^"'\s>]*(facebook\.com|instagram\.com|twitter\.com|//(?:www\.)?x\.com\b|linkedin\.com|tiktok\.com|wa\.me|whatsapp\.com)"#,
    )
    .expect("valid regex")
});

/// Boolean structural facts about one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct StructuralChecks {
    pub has_ssl: bool,
    pub is_responsive: bool,
    pub has_title: bool,
    pub has_meta_description: bool,
    pub has_contact_form: bool,
    pub has_social_links: bool,
    /// HTTPS page that still references `http://` resources without an
    /// `upgrade-insecure-requests` policy.
    pub has_mixed_content: bool,
}

impl StructuralChecks {
    /// Inspect `content` as served from `url`.
    #[must_use]
    pub fn inspect(url: &str, content: &str) -> Self {
        let has_ssl = url
            .trim_start()
            .get(..8)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"));

        let lower = content.to_lowercase();
        let has_mixed_content = has_ssl
            && lower.contains("http://")
            && !lower.contains("upgrade-insecure-requests");

        let has_title = TITLE_RE
            .captures(content)
            .and_then(|c| c.get(1))
            .is_some_and(|m| m.as_str().trim().chars().count() >= MIN_TITLE_LEN);

        Self {
            has_ssl,
            is_responsive: VIEWPORT_RE.is_match(content),
            has_title,
            has_meta_description: DESCRIPTION_RE.is_match(content),
            has_contact_form: FORM_RE.is_match(content),
            has_social_links: SOCIAL_LINK_RE.is_match(content),
            has_mixed_content,
        }
    }
}
