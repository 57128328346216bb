//! URL normalization for business websites.

use crate::error::FetchError;

/// Normalizes a website as it appears in business records into a fetchable
/// URL.
///
/// Scheme-less input (`"tienda.mx"`, `"www.tienda.mx/inicio"`) gets
/// `https://` prepended. Only `http` and `https` are accepted.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] if the input is blank, does not parse,
/// has no host, or uses a scheme other than `http`/`https`.
pub fn normalize_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FetchError::InvalidUrl {
            url: raw.to_owned(),
            reason: "empty URL".to_owned(),
        });
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = reqwest::Url::parse(&candidate).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl {
            url: raw.to_owned(),
            reason: "missing host".to_owned(),
        });
    }

    Ok(candidate)
}

/// Extracts the hostname from a URL for log fields.
///
/// Falls back to the full input if parsing fails.
#[must_use]
pub fn extract_host(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}
