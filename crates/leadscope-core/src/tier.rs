use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Urgency of a redesign lead.
///
/// Variants are declared from most to least urgent, so the derived `Ord`
/// sorts `Urgent` first: `a < b` means `a` is more urgent than `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTier {
    Urgent,
    High,
    Medium,
    Low,
}

impl PriorityTier {
    /// All tiers, most urgent first.
    pub const ALL: [PriorityTier; 4] = [
        PriorityTier::Urgent,
        PriorityTier::High,
        PriorityTier::Medium,
        PriorityTier::Low,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityTier::Urgent => "URGENT",
            PriorityTier::High => "HIGH",
            PriorityTier::Medium => "MEDIUM",
            PriorityTier::Low => "LOW",
        }
    }

    /// `true` for the tiers that get escalated to sales follow-up.
    #[must_use]
    pub fn is_escalated(self) -> bool {
        matches!(self, PriorityTier::Urgent | PriorityTier::High)
    }

    /// `true` when `self` is at least as urgent as `threshold`.
    #[must_use]
    pub fn meets(self, threshold: PriorityTier) -> bool {
        self <= threshold
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "URGENT" => Ok(PriorityTier::Urgent),
            "HIGH" => Ok(PriorityTier::High),
            "MEDIUM" => Ok(PriorityTier::Medium),
            "LOW" => Ok(PriorityTier::Low),
            other => Err(format!(
                "unknown priority tier '{other}'; expected URGENT, HIGH, MEDIUM or LOW"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_most_urgent_first() {
        assert!(PriorityTier::Urgent < PriorityTier::High);
        assert!(PriorityTier::High < PriorityTier::Medium);
        assert!(PriorityTier::Medium < PriorityTier::Low);
    }

    #[test]
    fn escalated_tiers_are_urgent_and_high() {
        let escalated: Vec<_> = PriorityTier::ALL
            .into_iter()
            .filter(|t| t.is_escalated())
            .collect();
        assert_eq!(escalated, vec![PriorityTier::Urgent, PriorityTier::High]);
    }

    #[test]
    fn meets_threshold_includes_more_urgent_tiers() {
        assert!(PriorityTier::Urgent.meets(PriorityTier::High));
        assert!(PriorityTier::High.meets(PriorityTier::High));
        assert!(!PriorityTier::Medium.meets(PriorityTier::High));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("urgent".parse::<PriorityTier>(), Ok(PriorityTier::Urgent));
        assert_eq!(" Medium ".parse::<PriorityTier>(), Ok(PriorityTier::Medium));
        assert!("critical".parse::<PriorityTier>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for tier in PriorityTier::ALL {
            assert_eq!(tier.to_string().parse::<PriorityTier>(), Ok(tier));
        }
    }

    #[test]
    fn serializes_uppercase() {
        let json = serde_json::to_string(&PriorityTier::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
    }
}
