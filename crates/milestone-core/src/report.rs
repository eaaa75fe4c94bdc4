//! # Milestone Report
//!
//! Aggregate view over one derivation: the six milestones plus how many were
//! achieved. Integer arithmetic only.

use crate::primitives::MILESTONE_COUNT;
use crate::{FeedbackRecord, Milestone, compute_milestones};
use serde::{Deserialize, Serialize};

/// The six milestones of one feedback record with summary counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneReport {
    pub milestones: [Milestone; MILESTONE_COUNT],
    pub achieved_count: usize,
    pub total: usize,
}

impl MilestoneReport {
    /// Build a report from already derived milestones.
    #[must_use]
    pub fn from_milestones(milestones: [Milestone; MILESTONE_COUNT]) -> Self {
        let achieved_count = milestones.iter().filter(|m| m.achieved).count();
        Self {
            milestones,
            achieved_count,
            total: MILESTONE_COUNT,
        }
    }

    /// Derive milestones for `feedback` and summarize them.
    #[must_use]
    pub fn from_feedback(feedback: &FeedbackRecord) -> Self {
        Self::from_milestones(compute_milestones(feedback))
    }

    /// Iterate over achieved milestones, in code order.
    pub fn achieved(&self) -> impl Iterator<Item = &Milestone> {
        self.milestones.iter().filter(|m| m.achieved)
    }

    /// Percentage of milestones achieved, rounded down.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let percent = (self.achieved_count as u64).saturating_mul(100) / (self.total as u64);
        percent.min(100) as u8
    }

    /// True when every milestone is achieved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.achieved_count == self.total
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MilestoneCode, Quest};
    use serde_json::json;

    fn full_feedback() -> FeedbackRecord {
        FeedbackRecord::new()
            .with_quests(vec![Quest::new("Find the Ring"), Quest::new("Slay dragon")])
            .with_matches(vec![json!({ "id": 1 }), json!({ "id": 2 })])
            .with_agent_class("Warrior")
            .with_summary("x".repeat(150))
    }

    #[test]
    fn empty_report() {
        let report = MilestoneReport::from_feedback(&FeedbackRecord::new());
        assert_eq!(report.achieved_count, 0);
        assert_eq!(report.total, 6);
        assert_eq!(report.progress_percent(), 0);
        assert_eq!(report.achieved().count(), 0);
        assert!(!report.is_complete());
    }

    #[test]
    fn complete_report() {
        let report = MilestoneReport::from_feedback(&full_feedback());
        assert_eq!(report.achieved_count, 6);
        assert_eq!(report.progress_percent(), 100);
        assert!(report.is_complete());
    }

    #[test]
    fn partial_report_rounds_down() {
        // M1, M3 only.
        let feedback = FeedbackRecord::new()
            .with_summary("short")
            .with_quests(vec![Quest::new("solo")]);
        let report = MilestoneReport::from_feedback(&feedback);
        let codes: Vec<_> = report.achieved().map(|m| m.code).collect();
        assert_eq!(codes, vec![MilestoneCode::M1, MilestoneCode::M3]);
        assert_eq!(report.progress_percent(), 33);
    }

    #[test]
    fn report_serializes_flags_as_integers() {
        let report = MilestoneReport::from_feedback(&full_feedback());
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["achieved_count"], 6);
        assert_eq!(json["milestones"][0]["achieved"], 1);
        assert_eq!(json["milestones"].as_array().map(Vec::len), Some(6));
    }
}
