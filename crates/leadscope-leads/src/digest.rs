//! Plain-text email digests. Only the message is built here; there is no
//! delivery transport.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lead::Lead;
use crate::report::BatchReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDigest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub subject: String,
    pub body: String,
}

impl EmailDigest {
    /// Batch summary listing every URGENT/HIGH lead.
    #[must_use]
    pub fn from_report(report: &BatchReport, city: &str) -> Self {
        let subject = format!(
            "Lead report - {city}: {} leads, {} urgent",
            report.total, report.tier_counts.urgent
        );

        let mut lines = vec![
            format!("Leads analyzed: {}", report.total),
            format!("Average score: {:.1}/10", report.average_score),
            format!("Reachable sites: {}/{}", report.accessible, report.total),
            format!("Critical sites: {}", report.critical),
            format!("Obsolete sites: {}", report.obsolete),
            String::new(),
        ];
        if report.escalations.is_empty() {
            lines.push("No urgent or high-priority leads.".to_string());
        } else {
            lines.push("Leads to contact:".to_string());
            for lead in &report.escalations {
                lines.push(format!(
                    "- {} ({}) {}/10 {} - {}",
                    lead.name, lead.tier, lead.score, lead.website, lead.phone
                ));
            }
        }
        if report.degraded_count() > 0 {
            lines.push(String::new());
            lines.push(format!(
                "{} site(s) could not be fully analyzed.",
                report.degraded_count()
            ));
        }

        Self {
            to: None,
            subject,
            body: lines.join("\n"),
        }
    }

    /// Alert for a single lead.
    #[must_use]
    pub fn for_lead(lead: &Lead) -> Self {
        let analysis = &lead.analysis;
        let mut lines = vec![
            "Lead detected for a website redesign:".to_string(),
            String::new(),
            format!("Business: {}", lead.business.name),
            format!("Website: {}", lead.business.website),
            format!("Phone: {}", lead.business.phone),
        ];
        if let Some(rating) = rating_line(lead) {
            lines.push(rating);
        }
        lines.extend([
            format!("Score: {}/10", analysis.quality_score),
            format!("Priority: {}", analysis.priority_tier),
            String::new(),
            "Problems detected:".to_string(),
        ]);
        lines.extend(analysis.problems.iter().map(|p| format!("- {p}")));
        lines.push(String::new());
        lines.push("Full proposal attached.".to_string());

        Self {
            to: None,
            subject: format!(
                "New {} lead: {}",
                analysis.priority_tier, lead.business.name
            ),
            body: lines.join("\n"),
        }
    }

    #[must_use]
    pub fn with_recipient(mut self, to: Option<String>) -> Self {
        self.to = to;
        self
    }
}

/// Directory rating, e.g. `Rating: 4.2/5 (87 reviews)`.
fn rating_line(lead: &Lead) -> Option<String> {
    match (lead.business.rating, lead.business.review_count) {
        (Some(rating), Some(reviews)) => {
            Some(format!("Rating: {rating:.1}/5 ({reviews} reviews)"))
        }
        (Some(rating), None) => Some(format!("Rating: {rating:.1}/5")),
        (None, Some(reviews)) => Some(format!("Reviews: {reviews}")),
        (None, None) => None,
    }
}

impl fmt::Display for EmailDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(to) = &self.to {
            writeln!(f, "To: {to}")?;
        }
        writeln!(f, "Subject: {}", self.subject)?;
        writeln!(f)?;
        writeln!(f, "{}", self.body)
    }
}
