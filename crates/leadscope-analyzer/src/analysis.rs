use std::collections::BTreeSet;

use leadscope_core::PriorityTier;
use serde::{Deserialize, Serialize};

use crate::catalog::{Signal, SignalKind};
use crate::checks::StructuralChecks;

/// Whether the page body was retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchStatus {
    Accessible { http_status: u16 },
    Inaccessible { error: String },
}

impl FetchStatus {
    #[must_use]
    pub fn is_accessible(&self) -> bool {
        matches!(self, FetchStatus::Accessible { .. })
    }
}

/// Why an analysis was produced from less than a full page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    Unreachable,
    MalformedContent,
}

/// The result of evaluating one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub source_url: String,
    pub fetch_status: FetchStatus,
    pub signals_detected: BTreeSet<Signal>,
    pub technologies_detected: BTreeSet<Signal>,
    pub checks: StructuralChecks,
    /// Problem statements in detection order.
    pub problems: Vec<String>,
    pub opportunities: Vec<String>,
    /// Always within `[1, 10]`.
    pub quality_score: u8,
    pub priority_tier: PriorityTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degradation: Option<Degradation>,
}

impl Analysis {
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }

    #[must_use]
    pub fn is_accessible(&self) -> bool {
        self.fetch_status.is_accessible()
    }

    /// `true` when any obsolete technology signal was detected.
    #[must_use]
    pub fn is_obsolete(&self) -> bool {
        self.signals_detected
            .iter()
            .filter_map(|signal| signal.def())
            .any(|def| def.kind == SignalKind::Obsolete)
    }
}
