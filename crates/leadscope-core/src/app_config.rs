use std::path::PathBuf;

use crate::PriorityTier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub businesses_path: PathBuf,
    pub leads_path: PathBuf,
    pub output_dir: PathBuf,
    /// City name shown in report headers.
    pub city: String,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    pub max_concurrent_fetches: usize,
    /// Leads at or above this urgency get a follow-up task.
    pub task_threshold: PriorityTier,
    pub digest_recipient: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("businesses_path", &self.businesses_path)
            .field("leads_path", &self.leads_path)
            .field("output_dir", &self.output_dir)
            .field("city", &self.city)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("fetch_user_agent", &self.fetch_user_agent)
            .field("max_concurrent_fetches", &self.max_concurrent_fetches)
            .field("task_threshold", &self.task_threshold)
            .field(
                "digest_recipient",
                &self.digest_recipient.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}
