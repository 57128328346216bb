//! Markdown rendering for per-lead proposals and batch reports.

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Utc};
use leadscope_core::PriorityTier;

use crate::lead::Lead;
use crate::report::BatchReport;

const SOLUTION_POINTS: &[(&str, &str)] = &[
    (
        "Responsive redesign",
        "a site that looks right on phones, tablets and desktops",
    ),
    (
        "Modern technology",
        "WordPress, Wix or custom development, depending on your needs",
    ),
    ("SEO optimization", "so customers find you on Google"),
    ("Fast load times", "a quicker, smoother visit for every customer"),
    ("HTTPS/SSL", "a secure site your customers can trust"),
];

const INVESTMENT_RANGES: &[(&str, &str)] = &[
    ("Basic site", "$15,000 - $25,000 MXN"),
    ("Professional site", "$25,000 - $45,000 MXN"),
    ("Advanced site with custom features", "$45,000 - $80,000 MXN"),
];

/// Markdown redesign proposal for one lead.
#[must_use]
pub fn render_proposal(lead: &Lead) -> String {
    Proposal(lead).to_string()
}

/// Markdown summary of a batch.
#[must_use]
pub fn render_report(report: &BatchReport, city: &str, generated_at: DateTime<Utc>) -> String {
    Report {
        report,
        city,
        generated_at,
    }
    .to_string()
}

/// Escape a value for a Markdown table cell.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

struct Proposal<'a>(&'a Lead);

impl Display for Proposal<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let lead = self.0;
        let analysis = &lead.analysis;

        writeln!(f, "# Web Redesign Proposal for {}", lead.business.name)?;
        writeln!(f)?;
        writeln!(f, "## Current Site Analysis")?;
        writeln!(f)?;
        writeln!(f, "**Site:** {}", analysis.source_url)?;
        writeln!(f, "**Score:** {}/10", analysis.quality_score)?;
        writeln!(f, "**Priority:** {}", analysis.priority_tier)?;
        if !analysis.technologies_detected.is_empty() {
            let techs: Vec<&str> = analysis
                .technologies_detected
                .iter()
                .map(|s| s.as_str())
                .collect();
            writeln!(f, "**Technologies:** {}", techs.join(", "))?;
        }
        writeln!(f)?;

        writeln!(f, "## Problems Detected")?;
        writeln!(f)?;
        if analysis.problems.is_empty() {
            writeln!(f, "None (site in good overall shape)")?;
        }
        for problem in &analysis.problems {
            writeln!(f, "- {problem}")?;
        }
        writeln!(f)?;

        writeln!(f, "## Improvement Opportunities")?;
        writeln!(f)?;
        for opportunity in &analysis.opportunities {
            writeln!(f, "- {opportunity}")?;
        }
        writeln!(f)?;

        writeln!(f, "## Our Solution")?;
        writeln!(f)?;
        for (i, (title, detail)) in SOLUTION_POINTS.iter().enumerate() {
            writeln!(f, "{}. **{title}** - {detail}", i + 1)?;
        }
        writeln!(f)?;

        writeln!(f, "## Estimated Investment")?;
        writeln!(f)?;
        for (package, range) in INVESTMENT_RANGES {
            writeln!(f, "- {package}: {range}")?;
        }
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "Would you like to schedule a call to discuss the details?")?;
        writeln!(f)?;
        writeln!(
            f,
            "*Automated analysis generated on {}*",
            lead.created_at.format("%d/%m/%Y")
        )
    }
}

struct Report<'a> {
    report: &'a BatchReport,
    city: &'a str,
    generated_at: DateTime<Utc>,
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.report;

        if report.is_empty() {
            writeln!(f, "# No Leads")?;
            writeln!(f)?;
            return writeln!(f, "No leads have been generated yet.");
        }

        writeln!(f, "# Lead Report - {}", self.city)?;
        writeln!(f)?;
        writeln!(
            f,
            "**Generated:** {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(f, "**Total leads:** {}", report.total)?;
        writeln!(f, "**Average score:** {:.1}/10", report.average_score)?;
        writeln!(f, "**Reachable sites:** {}/{}", report.accessible, report.total)?;
        writeln!(f, "**Critical sites:** {}/{}", report.critical, report.total)?;
        writeln!(f, "**Obsolete sites:** {}/{}", report.obsolete, report.total)?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;

        writeln!(f, "## Summary by Priority")?;
        writeln!(f)?;
        writeln!(f, "| Priority | Leads |")?;
        writeln!(f, "|----------|-------|")?;
        for tier in PriorityTier::ALL {
            writeln!(f, "| {tier} | {} |", report.tier_counts.get(tier))?;
        }
        writeln!(f)?;

        writeln!(f, "## Urgent and High Priority")?;
        writeln!(f)?;
        if report.escalations.is_empty() {
            writeln!(f, "No urgent or high-priority leads in this batch.")?;
            writeln!(f)?;
        }
        for lead in &report.escalations {
            writeln!(f, "### {}", lead.name)?;
            writeln!(f)?;
            writeln!(f, "- **Website:** {}", lead.website)?;
            writeln!(f, "- **Score:** {}/10 ({})", lead.score, lead.tier)?;
            writeln!(f, "- **Problems:**")?;
            for problem in &lead.problems {
                writeln!(f, "  - {problem}")?;
            }
            writeln!(f, "- **Contact:** {}", lead.phone)?;
            writeln!(f)?;
        }

        if !report.degraded.is_empty() {
            writeln!(f, "## Degraded Analyses")?;
            writeln!(f)?;
            writeln!(f, "| Business | Website | Reason |")?;
            writeln!(f, "|----------|---------|--------|")?;
            for lead in &report.degraded {
                let reason = lead.problems.first().map_or("", String::as_str);
                writeln!(
                    f,
                    "| {} | {} | {} |",
                    escape_cell(&lead.name),
                    escape_cell(&lead.website),
                    escape_cell(reason)
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "*Generated by leadscope*")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::lead::fixtures::*;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 9, 14, 30, 0).unwrap()
    }

    #[test]
    fn proposal_lists_problems_and_opportunities() {
        let lead = flash_lead("Taquería El Güero", "elguero.mx");
        let md = render_proposal(&lead);

        assert!(md.starts_with("# Web Redesign Proposal for Taquería El Güero"));
        assert!(md.contains("**Score:** 1/10"));
        assert!(md.contains("**Priority:** URGENT"));
        assert!(md.contains("- Uses Flash, which no browser supports anymore"));
        assert!(md.contains("- Migrate Flash content to modern HTML5"));
        assert!(md.contains("## Estimated Investment"));
        assert!(md.contains("$15,000 - $25,000 MXN"));
    }

    #[test]
    fn proposal_for_clean_site_says_none() {
        let mut lead = modern_lead("Clínica", "clinica.mx");
        lead.analysis.problems.clear();
        let md = render_proposal(&lead);
        assert!(md.contains("None (site in good overall shape)"));
        assert!(md.contains("**Technologies:** tailwind"));
    }

    #[test]
    fn empty_report_has_placeholder() {
        let md = render_report(&BatchReport::from_leads(&[]), "Monterrey", generated_at());
        assert!(md.starts_with("# No Leads"));
    }

    #[test]
    fn report_has_tier_table_and_escalations() {
        let leads = vec![
            flash_lead("Flash Cafe", "flash.mx"),
            modern_lead("Modern Dental", "modern.mx"),
            unreachable_lead("Gone Garage", "gone.mx"),
        ];
        let md = render_report(&BatchReport::from_leads(&leads), "Monterrey", generated_at());

        assert!(md.starts_with("# Lead Report - Monterrey"));
        assert!(md.contains("**Generated:** 2026-03-09 14:30 UTC"));
        assert!(md.contains("**Critical sites:** 2/3"));
        assert!(md.contains("**Obsolete sites:** 1/3"));
        assert!(md.contains("| URGENT | 2 |"));
        assert!(md.contains("| LOW | 1 |"));
        assert!(md.contains("### Flash Cafe"));
        assert!(!md.contains("### Modern Dental"));
        assert!(md.contains("## Degraded Analyses"));
        assert!(md.contains("| Gone Garage | gone.mx | Site unreachable: connection refused |"));
    }

    #[test]
    fn degraded_table_escapes_pipes() {
        let mut lead = unreachable_lead("Tacos | Tortas", "tacos.mx");
        lead.analysis.problems = vec!["Site unreachable: bad gateway | retry later".to_string()];
        let md = render_report(&BatchReport::from_leads(&[lead]), "Monterrey", generated_at());

        assert!(md.contains(
            "| Tacos \\| Tortas | tacos.mx | Site unreachable: bad gateway \\| retry later |"
        ));
    }
}
