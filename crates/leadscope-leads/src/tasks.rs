//! Follow-up tasks handed to the external task tracker.

use std::path::Path;

use leadscope_core::PriorityTier;
use serde::{Deserialize, Serialize};

use crate::error::LeadsError;
use crate::lead::Lead;
use crate::render::render_proposal;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpTask {
    pub title: String,
    /// The rendered Markdown proposal.
    pub body: String,
}

impl FollowUpTask {
    #[must_use]
    pub fn for_lead(lead: &Lead) -> Self {
        Self {
            title: format!(
                "Contact {} - {} lead",
                lead.business.name, lead.analysis.priority_tier
            ),
            body: render_proposal(lead),
        }
    }
}

/// One task per lead at least as urgent as `threshold`, in input order.
#[must_use]
pub fn follow_up_tasks(leads: &[Lead], threshold: PriorityTier) -> Vec<FollowUpTask> {
    leads
        .iter()
        .filter(|lead| lead.analysis.priority_tier.meets(threshold))
        .map(FollowUpTask::for_lead)
        .collect()
}

/// Write `tasks` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`LeadsError::Json`] if serialization fails and
/// [`LeadsError::Io`] if the file cannot be written.
pub fn write_tasks_json(path: &Path, tasks: &[FollowUpTask]) -> Result<(), LeadsError> {
    let json = serde_json::to_string_pretty(tasks)?;
    std::fs::write(path, json).map_err(|e| LeadsError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::fixtures::*;

    #[test]
    fn only_leads_meeting_threshold_get_tasks() {
        let leads = vec![
            flash_lead("Flash Cafe", "flash.mx"),
            modern_lead("Modern Dental", "modern.mx"),
        ];
        let tasks = follow_up_tasks(&leads, PriorityTier::High);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Contact Flash Cafe - URGENT lead");
        assert!(tasks[0].body.starts_with("# Web Redesign Proposal for Flash Cafe"));
    }

    #[test]
    fn low_threshold_covers_every_lead() {
        let leads = vec![
            flash_lead("A", "a.mx"),
            modern_lead("B", "b.mx"),
            unreachable_lead("C", "c.mx"),
        ];
        assert_eq!(follow_up_tasks(&leads, PriorityTier::Low).len(), 3);
    }

    #[test]
    fn tasks_serialize_as_title_and_body() {
        let tasks = follow_up_tasks(&[unreachable_lead("C", "c.mx")], PriorityTier::Urgent);
        let json = serde_json::to_value(&tasks).unwrap();
        assert_eq!(json[0]["title"], "Contact C - URGENT lead");
        assert!(json[0]["body"].is_string());
    }

    #[test]
    fn tasks_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let tasks = follow_up_tasks(&[flash_lead("A", "a.mx")], PriorityTier::High);

        write_tasks_json(&path, &tasks).unwrap();
        let back: Vec<FollowUpTask> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, tasks);
    }

    #[test]
    fn unwritable_tasks_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("tasks.json");
        let err = write_tasks_json(&path, &[]).unwrap_err();
        assert!(matches!(err, LeadsError::Io { .. }));
    }
}
