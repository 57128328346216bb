//! Shared domain types and configuration for leadscope.

pub mod app_config;
pub mod businesses;
pub mod config;
pub mod page;
pub mod tier;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use businesses::{load_businesses, website_key, Business, BusinessesFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use page::{FetchFailure, FetchedPage, PageFetch};
pub use tier::PriorityTier;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read businesses file {path}: {source}")]
    BusinessesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse businesses file: {0}")]
    BusinessesFileParse(#[from] serde_yaml::Error),

    #[error("invalid businesses file: {0}")]
    Validation(String),
}
