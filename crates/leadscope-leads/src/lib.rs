//! Lead aggregation and the outputs built from it: the CSV lead store,
//! Markdown proposals and reports, follow-up tasks and email digests.

pub mod digest;
pub mod error;
pub mod lead;
pub mod render;
pub mod report;
pub mod store;
pub mod tasks;

pub use digest::EmailDigest;
pub use error::LeadsError;
pub use lead::{Lead, LeadCollection};
pub use render::{render_proposal, render_report};
pub use report::{BatchReport, LeadSummary, TierCounts, CRITICAL_SCORE};
pub use store::{append_leads, read_leads, write_leads, AppendOutcome, LeadRow};
pub use tasks::{follow_up_tasks, write_tasks_json, FollowUpTask};
