use std::collections::BTreeSet;

use crate::catalog::{Problem, Signal, SignalKind, CATALOG};
use crate::scorer::has_modern_framework;

pub const FULL_REDESIGN: &str = "Full interface redesign";
pub const LOAD_TIME: &str = "Load-time optimization";
pub const CMS_THEME: &str = "Modernize the theme of the existing CMS";
pub const FALLBACK: &str = "Complete web audit";

/// Scores at or below this get the redesign bundle.
const REDESIGN_SCORE: u8 = 5;
/// Scores at or below this on a CMS/platform site get the theme remedy.
const CMS_THEME_SCORE: u8 = 7;

fn has_cms_or_platform(signals: &BTreeSet<Signal>) -> bool {
    CATALOG.iter().any(|def| {
        matches!(def.kind, SignalKind::Cms | SignalKind::Platform) && signals.contains(&def.signal)
    })
}

/// Recommended remediation actions for an analyzed page.
///
/// Problems map many-to-one onto actions; the result keeps the order in
/// which each action was first produced and never contains duplicates.
/// The result is never empty.
#[must_use]
pub fn generate_opportunities(
    problems: &[Problem],
    signals: &BTreeSet<Signal>,
    score: u8,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |action: &str| {
        if !out.iter().any(|existing| existing == action) {
            out.push(action.to_string());
        }
    };

    for action in problems.iter().filter_map(|p| p.opportunity()) {
        push(action);
    }

    if score <= REDESIGN_SCORE {
        push(FULL_REDESIGN);
        push(LOAD_TIME);
    }

    if score <= CMS_THEME_SCORE && has_cms_or_platform(signals) && !has_modern_framework(signals)
    {
        push(CMS_THEME);
    }

    if out.is_empty() {
        out.push(FALLBACK.to_string());
    }
    out
}
