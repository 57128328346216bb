//! Site analysis and lead scoring.
//!
//! The pipeline is a chain of pure functions:
//! [`extract_signals`] → [`detect_problems`] → [`score_problems`] →
//! [`classify`] + [`generate_opportunities`], wrapped by [`analyze`].
//! Nothing in this crate performs I/O.

pub mod analysis;
pub mod catalog;
pub mod checks;
pub mod classify;
pub mod extract;
pub mod opportunities;
pub mod pipeline;
pub mod problems;
pub mod scorer;

pub use analysis::{Analysis, Degradation, FetchStatus};
pub use catalog::{Problem, Signal, SignalDef, SignalKind, CATALOG};
pub use checks::StructuralChecks;
pub use classify::classify;
pub use extract::{extract_signals, is_absent, is_malformed};
pub use opportunities::generate_opportunities;
pub use pipeline::{analyze, analyze_page, analyze_unreachable};
pub use problems::detect_problems;
pub use scorer::{has_modern_framework, quality_score, score_problems};
