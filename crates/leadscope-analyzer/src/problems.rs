//! Problem detection from signals and structural checks.

use std::collections::BTreeSet;

use crate::catalog::{Problem, Signal, CATALOG};
use crate::checks::StructuralChecks;

/// Derive the problem categories for a page, in detection order.
///
/// Catalog-driven problems come first (in registry order), followed by the
/// structural ones. Each category appears at most once.
#[must_use]
pub fn detect_problems(signals: &BTreeSet<Signal>, checks: &StructuralChecks) -> Vec<Problem> {
    let mut problems: Vec<Problem> = Vec::new();
    let mut push = |problem: Problem| {
        if !problems.contains(&problem) {
            problems.push(problem);
        }
    };

    for def in CATALOG {
        if let Some(problem) = def.problem {
            if signals.contains(&def.signal) {
                push(problem);
            }
        }
    }

    if !checks.has_ssl {
        push(Problem::NoHttps);
    } else if checks.has_mixed_content {
        push(Problem::MixedContent);
    }
    if !checks.is_responsive {
        push(Problem::NotResponsive);
    }
    if !checks.has_meta_description {
        push(Problem::MissingMetaDescription);
    }
    if !checks.has_title {
        push(Problem::MissingTitle);
    }
    if !checks.has_contact_form {
        push(Problem::NoContactForm);
    }
    if !checks.has_social_links {
        push(Problem::NoSocialLinks);
    }

    problems
}
