use leadscope_core::PriorityTier;

/// Map a quality score to an urgency tier.
///
/// Lower scores are more urgent: `<= 3` URGENT, `4..=5` HIGH, `6..=7`
/// MEDIUM, `>= 8` LOW. Unreachable sites never reach this table; the
/// pipeline assigns them URGENT directly.
#[must_use]
pub fn classify(score: u8) -> PriorityTier {
    match score {
        0..=3 => PriorityTier::Urgent,
        4..=5 => PriorityTier::High,
        6..=7 => PriorityTier::Medium,
        _ => PriorityTier::Low,
    }
}
