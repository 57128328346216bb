//! Batch statistics over a snapshot of leads.

use leadscope_analyzer::Problem;
use leadscope_core::PriorityTier;
use serde::{Deserialize, Serialize};

use crate::lead::Lead;
use crate::store::LeadRow;

/// Scores at or below this mark a site as critical.
pub const CRITICAL_SCORE: u8 = 2;

/// The per-lead facts a batch report needs.
///
/// Built either from a live [`Lead`] or from a persisted [`LeadRow`], so the
/// same report can be produced right after a run or later from the CSV store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSummary {
    pub name: String,
    pub website: String,
    pub phone: String,
    pub score: u8,
    pub tier: PriorityTier,
    pub problems: Vec<String>,
    pub accessible: bool,
    pub degraded: bool,
    pub obsolete: bool,
}

impl From<&Lead> for LeadSummary {
    fn from(lead: &Lead) -> Self {
        Self {
            name: lead.business.name.clone(),
            website: lead.business.website.clone(),
            phone: lead.business.phone.clone(),
            score: lead.analysis.quality_score,
            tier: lead.analysis.priority_tier,
            problems: lead.analysis.problems.clone(),
            accessible: lead.analysis.is_accessible(),
            degraded: lead.analysis.is_degraded(),
            obsolete: lead.analysis.is_obsolete(),
        }
    }
}

impl From<&LeadRow> for LeadSummary {
    fn from(row: &LeadRow) -> Self {
        let problems = row.problem_list();
        let accessible = !problems
            .first()
            .is_some_and(|p| p.starts_with(Problem::Unreachable.statement()));
        let malformed = problems
            .iter()
            .any(|p| p == Problem::MalformedContent.statement());
        Self {
            name: row.name.clone(),
            website: row.website.clone(),
            phone: row.phone.clone(),
            score: row.score,
            tier: row.tier,
            problems,
            accessible,
            degraded: !accessible || malformed,
            obsolete: row.obsolete,
        }
    }
}

/// Lead counts per priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub urgent: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TierCounts {
    #[must_use]
    pub fn get(&self, tier: PriorityTier) -> usize {
        match tier {
            PriorityTier::Urgent => self.urgent,
            PriorityTier::High => self.high,
            PriorityTier::Medium => self.medium,
            PriorityTier::Low => self.low,
        }
    }

    fn increment(&mut self, tier: PriorityTier) {
        match tier {
            PriorityTier::Urgent => self.urgent += 1,
            PriorityTier::High => self.high += 1,
            PriorityTier::Medium => self.medium += 1,
            PriorityTier::Low => self.low += 1,
        }
    }
}

/// Aggregate view over a batch of leads. Recomputed on demand; never
/// updated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total: usize,
    pub tier_counts: TierCounts,
    /// Mean quality score; `0.0` for an empty batch.
    pub average_score: f64,
    /// URGENT and HIGH leads, in input order.
    pub escalations: Vec<LeadSummary>,
    /// Leads whose site answered.
    pub accessible: usize,
    /// Leads scoring at most [`CRITICAL_SCORE`].
    pub critical: usize,
    /// Leads with at least one obsolete technology.
    pub obsolete: usize,
    /// Unreachable or malformed analyses, in input order.
    pub degraded: Vec<LeadSummary>,
}

impl BatchReport {
    #[must_use]
    pub fn from_leads(leads: &[Lead]) -> Self {
        Self::from_summaries(leads.iter().map(LeadSummary::from).collect())
    }

    #[must_use]
    pub fn from_rows(rows: &[LeadRow]) -> Self {
        Self::from_summaries(rows.iter().map(LeadSummary::from).collect())
    }

    #[must_use]
    pub fn from_summaries(summaries: Vec<LeadSummary>) -> Self {
        let mut report = Self {
            total: summaries.len(),
            ..Self::default()
        };
        if summaries.is_empty() {
            return report;
        }

        let mut score_sum: u64 = 0;
        for summary in summaries {
            report.tier_counts.increment(summary.tier);
            score_sum += u64::from(summary.score);
            if summary.accessible {
                report.accessible += 1;
            }
            if summary.score <= CRITICAL_SCORE {
                report.critical += 1;
            }
            if summary.obsolete {
                report.obsolete += 1;
            }
            if summary.degraded {
                report.degraded.push(summary.clone());
            }
            if summary.tier.is_escalated() {
                report.escalations.push(summary);
            }
        }

        // Lead counts stay far below 2^52, so the conversion is exact.
        #[allow(clippy::cast_precision_loss)]
        let average = score_sum as f64 / report.total as f64;
        report.average_score = average;
        report
    }

    #[must_use]
    pub fn degraded_count(&self) -> usize {
        self.degraded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
