use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A local business submitted for website analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    /// Business type, e.g. `"Restaurant"` or `"Legal services"`.
    pub category: String,
    pub phone: String,
    /// Website as listed by the business; may lack a scheme.
    pub website: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Directory star rating in `[0.0, 5.0]`.
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub review_count: Option<u32>,
}

impl Business {
    /// Generate a filesystem-safe slug from the business name.
    ///
    /// Non-ASCII letters are dropped rather than transliterated, so
    /// `"Pastelería D'Angelo"` becomes `"pastelera-dangelo"`.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Website reduced to a comparison key: lowercase, no scheme, no `www.`,
    /// no trailing slash.
    #[must_use]
    pub fn website_key(&self) -> String {
        website_key(&self.website)
    }
}

/// Reduce a website string to the key used for duplicate detection.
#[must_use]
pub fn website_key(website: &str) -> String {
    let lower = website.trim().to_lowercase();
    let without_scheme = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme)
        .trim_end_matches('/')
        .to_string()
}

#[derive(Debug, Deserialize)]
pub struct BusinessesFile {
    pub businesses: Vec<Business>,
}

/// Load and validate the businesses file from YAML.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_businesses(path: &Path) -> Result<BusinessesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BusinessesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: BusinessesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BusinessesFileParse)?;

    validate_businesses(&file)?;

    Ok(file)
}

fn validate_businesses(file: &BusinessesFile) -> Result<(), ConfigError> {
    let mut seen_websites = HashSet::new();

    for business in &file.businesses {
        if business.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "business name must be non-empty".to_string(),
            ));
        }

        if business.website.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "business '{}' has no website",
                business.name
            )));
        }

        if let Some(rating) = business.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(ConfigError::Validation(format!(
                    "business '{}' has invalid rating {rating}; must be between 0 and 5",
                    business.name
                )));
            }
        }

        let key = business.website_key();
        if !seen_websites.insert(key.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate website: '{key}' (from business '{}')",
                business.name
            )));
        }
    }

    Ok(())
}
