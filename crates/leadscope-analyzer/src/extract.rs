//! Signal extraction over raw page markup.

use std::collections::BTreeSet;

use crate::catalog::{Signal, CATALOG};

/// Prefix of the legacy failure sentinel some fetchers put in place of a body.
pub const FAILURE_SENTINEL_PREFIX: &str = "Error";

/// `true` when `content` carries no page at all: empty, whitespace, or a
/// failure sentinel.
#[must_use]
pub fn is_absent(content: &str) -> bool {
    let trimmed = content.trim_start();
    trimmed.is_empty() || trimmed.starts_with(FAILURE_SENTINEL_PREFIX)
}

/// `true` when `content` is present but cannot be markup: it contains NUL
/// bytes or no tag opener at all.
#[must_use]
pub fn is_malformed(content: &str) -> bool {
    !is_absent(content) && (content.contains('\0') || !content.contains('<'))
}

/// Return every catalog signal whose patterns occur in `content`.
///
/// Matching is case-insensitive substring containment. Absent content
/// yields the empty set.
#[must_use]
pub fn extract_signals(content: &str) -> BTreeSet<Signal> {
    if is_absent(content) {
        return BTreeSet::new();
    }

    let haystack = content.to_lowercase();
    CATALOG
        .iter()
        .filter(|def| def.patterns.iter().any(|p| haystack.contains(p)))
        .map(|def| def.signal)
        .collect()
}
