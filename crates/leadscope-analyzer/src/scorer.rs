//! Penalty-based quality scorer.
//!
//! `score = clamp(10 - sum(penalties) + modern_bonus, 1, 10)`, where the sum
//! runs over distinct problem categories and the bonus is 1 when any modern
//! framework signal is present.

use std::collections::BTreeSet;

use crate::catalog::{Problem, Signal, SignalKind, CATALOG};
use crate::checks::StructuralChecks;
use crate::problems::detect_problems;

pub const MAX_SCORE: u8 = 10;
pub const MIN_SCORE: u8 = 1;
const MODERN_BONUS: i32 = 1;

/// `true` if any signal in the set is a modern framework.
#[must_use]
pub fn has_modern_framework(signals: &BTreeSet<Signal>) -> bool {
    CATALOG
        .iter()
        .any(|def| def.kind == SignalKind::ModernFramework && signals.contains(&def.signal))
}

/// Score a page from its signals and structural checks.
#[must_use]
pub fn quality_score(signals: &BTreeSet<Signal>, checks: &StructuralChecks) -> u8 {
    let problems = detect_problems(signals, checks);
    score_problems(&problems, signals)
}

/// Score an already-detected problem list.
///
/// Repeated categories are only counted once, so the result does not depend
/// on the order or multiplicity of `problems`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score_problems(problems: &[Problem], signals: &BTreeSet<Signal>) -> u8 {
    let distinct: BTreeSet<Problem> = problems.iter().copied().collect();
    let penalty: i32 = distinct.iter().map(|p| i32::from(p.penalty())).sum();
    let bonus = if has_modern_framework(signals) {
        MODERN_BONUS
    } else {
        0
    };

    let raw = i32::from(MAX_SCORE) - penalty + bonus;
    // Clamped into [1, 10] before the narrowing cast.
    raw.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8
}
