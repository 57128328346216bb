//! The end-to-end analysis of one fetch outcome.
//!
//! Every entry point is total: failures and junk bodies still produce a
//! complete [`Analysis`], flagged through [`Analysis::degradation`].

use std::collections::BTreeSet;

use leadscope_core::{FetchFailure, FetchedPage, PageFetch, PriorityTier};

use crate::analysis::{Analysis, Degradation, FetchStatus};
use crate::catalog::{Problem, Signal, CATALOG};
use crate::checks::StructuralChecks;
use crate::classify::classify;
use crate::extract::{extract_signals, is_absent, is_malformed};
use crate::opportunities::generate_opportunities;
use crate::problems::detect_problems;
use crate::scorer::{score_problems, MIN_SCORE};

const EMPTY_BODY_REASON: &str = "empty response body";

/// Analyze a fetch outcome.
#[must_use]
pub fn analyze(fetch: &PageFetch) -> Analysis {
    match fetch {
        Ok(page) => analyze_page(page),
        Err(failure) => analyze_unreachable(failure),
    }
}

/// Analyze a retrieved page body.
///
/// A body that is empty or carries the legacy failure sentinel is treated
/// as unreachable.
#[must_use]
pub fn analyze_page(page: &FetchedPage) -> Analysis {
    if is_absent(&page.body) {
        let trimmed = page.body.trim();
        let reason = if trimmed.is_empty() {
            EMPTY_BODY_REASON.to_string()
        } else {
            trimmed.to_string()
        };
        return analyze_unreachable(&FetchFailure {
            url: page.url.clone(),
            reason,
        });
    }

    let malformed = is_malformed(&page.body);
    let (signals, checks) = if malformed {
        (BTreeSet::new(), StructuralChecks::inspect(&page.url, ""))
    } else {
        (
            extract_signals(&page.body),
            StructuralChecks::inspect(&page.url, &page.body),
        )
    };
    tracing::debug!(url = %page.url, signals = ?signals, "signals extracted");

    let mut problems = Vec::new();
    if malformed {
        tracing::warn!(url = %page.url, "page body is not recognizable markup");
        problems.push(Problem::MalformedContent);
    }
    problems.extend(detect_problems(&signals, &checks));

    let quality_score = score_problems(&problems, &signals);
    let priority_tier = classify(quality_score);
    let opportunities = generate_opportunities(&problems, &signals, quality_score);
    tracing::info!(
        url = %page.url,
        score = quality_score,
        tier = %priority_tier,
        problems = problems.len(),
        "page analyzed"
    );

    Analysis {
        source_url: page.url.clone(),
        fetch_status: FetchStatus::Accessible {
            http_status: page.http_status,
        },
        technologies_detected: technologies(&signals),
        signals_detected: signals,
        checks,
        problems: problems.iter().map(|p| p.statement().to_string()).collect(),
        opportunities,
        quality_score,
        priority_tier,
        degradation: malformed.then_some(Degradation::MalformedContent),
    }
}

/// Analysis for a site that could not be retrieved: score 1, URGENT, and a
/// single "Site unreachable" problem carrying the reason.
#[must_use]
pub fn analyze_unreachable(failure: &FetchFailure) -> Analysis {
    tracing::warn!(url = %failure.url, reason = %failure.reason, "site unreachable");

    let signals = BTreeSet::new();
    let opportunities = generate_opportunities(&[Problem::Unreachable], &signals, MIN_SCORE);

    Analysis {
        source_url: failure.url.clone(),
        fetch_status: FetchStatus::Inaccessible {
            error: failure.reason.clone(),
        },
        signals_detected: signals,
        technologies_detected: BTreeSet::new(),
        checks: StructuralChecks::default(),
        problems: vec![format!(
            "{}: {}",
            Problem::Unreachable.statement(),
            failure.reason
        )],
        opportunities,
        quality_score: MIN_SCORE,
        priority_tier: PriorityTier::Urgent,
        degradation: Some(Degradation::Unreachable),
    }
}

fn technologies(signals: &BTreeSet<Signal>) -> BTreeSet<Signal> {
    CATALOG
        .iter()
        .filter(|def| def.kind.is_technology() && signals.contains(&def.signal))
        .map(|def| def.signal)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, body: &str) -> FetchedPage {
        FetchedPage {
            url: url.to_string(),
            http_status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn empty_body_is_unreachable() {
        let analysis = analyze_page(&page("https://a.mx", "  "));
        assert_eq!(analysis.degradation, Some(Degradation::Unreachable));
        assert_eq!(analysis.problems, vec!["Site unreachable: empty response body"]);
    }

    #[test]
    fn sentinel_body_is_unreachable_with_its_text() {
        let analysis = analyze_page(&page("https://a.mx", "Error: timed out"));
        assert_eq!(analysis.quality_score, 1);
        assert_eq!(analysis.problems, vec!["Site unreachable: Error: timed out"]);
    }

    #[test]
    fn malformed_body_is_flagged_and_signal_free() {
        let analysis = analyze_page(&page("https://a.mx", "wordpress jquery plain text"));
        assert_eq!(analysis.degradation, Some(Degradation::MalformedContent));
        assert!(analysis.signals_detected.is_empty());
        assert_eq!(analysis.problems[0], Problem::MalformedContent.statement());
        assert!(analysis.is_accessible());
    }

    #[test]
    fn technologies_are_a_subset_of_signals() {
        let html = r#"<!DOCTYPE html><script src="jquery.js"></script>
            <link href="/wp-content/themes/x/style.css">"#;
        let analysis = analyze_page(&page("https://a.mx", html));
        assert!(analysis
            .technologies_detected
            .is_subset(&analysis.signals_detected));
        assert!(analysis.technologies_detected.contains(&Signal::Jquery));
        assert!(!analysis.technologies_detected.contains(&Signal::Html5));
    }

    #[test]
    fn http_status_is_recorded() {
        let mut p = page("https://a.mx", "<html></html>");
        p.http_status = 203;
        let analysis = analyze(&Ok(p));
        assert_eq!(
            analysis.fetch_status,
            FetchStatus::Accessible { http_status: 203 }
        );
    }

    #[test]
    fn obsolete_follows_obsolete_signals() {
        let html = r#"<html><meta http-equiv="X-UA-Compatible" content="IE=edge"></html>"#;
        let legacy = analyze_page(&page("https://a.mx", html));
        assert!(legacy.is_obsolete());

        let modern = analyze_page(&page("https://a.mx", "<!DOCTYPE html><html></html>"));
        assert!(!modern.is_obsolete());

        let gone = analyze_unreachable(&FetchFailure {
            url: "https://a.mx".to_string(),
            reason: "timed out".to_string(),
        });
        assert!(!gone.is_obsolete());
    }
}
