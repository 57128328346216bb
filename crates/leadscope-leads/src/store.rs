//! CSV lead store.
//!
//! One row per lead with the columns `date, name, category, address, phone,
//! email, website, technologies, score, tier, obsolete, problems,
//! opportunities`. List columns are joined with `"; "`.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::Path;

use chrono::NaiveDate;
use leadscope_core::{website_key, PriorityTier};
use serde::{Deserialize, Serialize};

use crate::error::LeadsError;
use crate::lead::Lead;

const LIST_SEPARATOR: &str = "; ";

/// A persisted lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRow {
    pub date: NaiveDate,
    pub name: String,
    pub category: String,
    pub address: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub website: String,
    pub technologies: String,
    pub score: u8,
    pub tier: PriorityTier,
    /// Any obsolete technology was detected.
    pub obsolete: bool,
    pub problems: String,
    pub opportunities: String,
}

impl LeadRow {
    #[must_use]
    pub fn from_lead(lead: &Lead) -> Self {
        let business = &lead.business;
        Self {
            date: lead.created_at.date_naive(),
            name: business.name.clone(),
            category: business.category.clone(),
            address: business.address.clone(),
            phone: business.phone.clone(),
            email: business.email.clone(),
            website: business.website.clone(),
            technologies: lead
                .analysis
                .technologies_detected
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
            score: lead.analysis.quality_score,
            tier: lead.analysis.priority_tier,
            obsolete: lead.analysis.is_obsolete(),
            problems: lead.analysis.problems.join(LIST_SEPARATOR),
            opportunities: lead.analysis.opportunities.join(LIST_SEPARATOR),
        }
    }

    #[must_use]
    pub fn technology_list(&self) -> Vec<String> {
        split_list(&self.technologies)
    }

    #[must_use]
    pub fn problem_list(&self) -> Vec<String> {
        split_list(&self.problems)
    }

    #[must_use]
    pub fn opportunity_list(&self) -> Vec<String> {
        split_list(&self.opportunities)
    }
}

fn split_list(joined: &str) -> Vec<String> {
    joined
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn io_error(path: &Path, source: std::io::Error) -> LeadsError {
    LeadsError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn ensure_parent(path: &Path) -> Result<(), LeadsError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))
        }
        _ => Ok(()),
    }
}

/// Write `leads` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`LeadsError`] if the file cannot be created or written.
pub fn write_leads(path: &Path, leads: &[Lead]) -> Result<usize, LeadsError> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for lead in leads {
        writer.serialize(LeadRow::from_lead(lead))?;
    }
    writer.flush().map_err(|e| io_error(path, e))?;
    Ok(leads.len())
}

/// How many leads an append wrote and how many it skipped as duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendOutcome {
    pub written: usize,
    pub skipped: usize,
}

/// Append `leads` to the store at `path`.
///
/// Leads whose website is already present in the file (or earlier in the
/// same batch) are skipped. The header row is written only when the file is
/// created.
///
/// # Errors
///
/// Returns [`LeadsError`] if the existing file cannot be parsed or the file
/// cannot be written.
pub fn append_leads(path: &Path, leads: &[Lead]) -> Result<AppendOutcome, LeadsError> {
    let existing = if path.exists() {
        read_leads(path)?
    } else {
        Vec::new()
    };
    let needs_header = !path.exists() || std::fs::metadata(path).map_or(true, |m| m.len() == 0);
    let mut seen: HashSet<String> = existing.iter().map(|r| website_key(&r.website)).collect();

    ensure_parent(path)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);

    let mut outcome = AppendOutcome::default();
    for lead in leads {
        if !seen.insert(lead.business.website_key()) {
            tracing::warn!(
                name = %lead.business.name,
                website = %lead.business.website,
                "lead already stored; skipping duplicate"
            );
            outcome.skipped += 1;
            continue;
        }
        writer.serialize(LeadRow::from_lead(lead))?;
        outcome.written += 1;
    }
    writer.flush().map_err(|e| io_error(path, e))?;

    tracing::info!(
        path = %path.display(),
        written = outcome.written,
        skipped = outcome.skipped,
        "leads appended"
    );
    Ok(outcome)
}

/// Read every row of the store at `path`.
///
/// # Errors
///
/// Returns [`LeadsError::InvalidRow`] for a row that does not parse or has a
/// score outside `[1, 10]`, and [`LeadsError::Csv`] if the file cannot be
/// opened.
pub fn read_leads(path: &Path) -> Result<Vec<LeadRow>, LeadsError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for (index, result) in reader.deserialize::<LeadRow>().enumerate() {
        // Header is line 1.
        let fallback_line = index as u64 + 2;
        let row = result.map_err(|e| LeadsError::InvalidRow {
            line: e.position().map_or(fallback_line, csv::Position::line),
            reason: e.to_string(),
        })?;
        if !(1..=10).contains(&row.score) {
            return Err(LeadsError::InvalidRow {
                line: fallback_line,
                reason: format!("score {} outside 1..=10", row.score),
            });
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
