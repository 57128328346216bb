//! Leads and the single-writer collection that owns them.

use chrono::{DateTime, Utc};
use leadscope_analyzer::Analysis;
use leadscope_core::Business;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A business paired with exactly one analysis of its website.
///
/// Leads are never mutated; re-analyzing a site produces a new lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub business: Business,
    pub analysis: Analysis,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    #[must_use]
    pub fn new(business: Business, analysis: Analysis) -> Self {
        Self {
            id: Uuid::new_v4(),
            business,
            analysis,
            created_at: Utc::now(),
        }
    }
}

/// Append-only store of leads for one run.
#[derive(Debug, Default)]
pub struct LeadCollection {
    leads: Vec<Lead>,
}

impl LeadCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `business` with `analysis`, append the lead and return it.
    pub fn add(&mut self, business: Business, analysis: Analysis) -> &Lead {
        let lead = Lead::new(business, analysis);
        tracing::info!(
            name = %lead.business.name,
            score = lead.analysis.quality_score,
            tier = %lead.analysis.priority_tier,
            "lead added"
        );
        let index = self.leads.len();
        self.leads.push(lead);
        &self.leads[index]
    }

    /// A frozen copy of the current leads, in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Lead> {
        self.leads.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.leads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lead> {
        self.leads.iter()
    }
}

impl<'a> IntoIterator for &'a LeadCollection {
    type Item = &'a Lead;
    type IntoIter = std::slice::Iter<'a, Lead>;

    fn into_iter(self) -> Self::IntoIter {
        self.leads.iter()
    }
}
