//! # Milestone Deriver
//!
//! Pure function from a [`FeedbackRecord`] to the six milestone flags.
//!
//! | Code | Achieved when |
//! |------|---------------|
//! | M1 | trimmed summary is non-empty |
//! | M2 | agent class not in {"", "unknown", "error"} |
//! | M3 | quest count >= 1 |
//! | M4 | match count >= 2 |
//! | M5 | raw summary length >= 120 chars |
//! | M6 | distinct quest title tokens >= 4 |
//!
//! Every predicate is evaluated independently. The output always has exactly
//! six entries in `M1..M6` order.

use crate::primitives::{
    MILESTONE_COUNT, MIN_DISTINCT_TOKENS, MIN_MATCHES, MIN_QUESTS, MISSING_AGENT_CLASS,
    RICH_FEEDBACK_CHARS, UNCLASSIFIED_AGENT_CLASSES, is_separator,
};
use crate::{FeedbackRecord, Milestone, MilestoneCode, MilestoneError, Quest};
use std::collections::BTreeSet;

/// Derive the six milestones for a feedback record.
#[must_use]
pub fn compute_milestones(feedback: &FeedbackRecord) -> [Milestone; MILESTONE_COUNT] {
    let summary = feedback.feedback_summary();
    let agent_class = feedback.agent_class();
    let quest_count = feedback.quest_count();
    let match_count = feedback.match_count();
    let summary_chars = summary.chars().count();
    let distinct_tokens = quest_tokens(feedback.quests()).len();

    [
        Milestone::new(
            MilestoneCode::M1,
            !summary.trim_matches(is_separator).is_empty(),
            "Feedback summary present indicates first pass analysis.",
        ),
        Milestone::new(
            MilestoneCode::M2,
            !UNCLASSIFIED_AGENT_CLASSES.contains(&agent_class),
            format!(
                "Agent class is '{}'.",
                if agent_class.is_empty() {
                    MISSING_AGENT_CLASS
                } else {
                    agent_class
                }
            ),
        ),
        Milestone::new(
            MilestoneCode::M3,
            quest_count >= MIN_QUESTS,
            format!("{} quest(s) generated.", quest_count),
        ),
        Milestone::new(
            MilestoneCode::M4,
            match_count >= MIN_MATCHES,
            format!("{} match candidates available.", match_count),
        ),
        Milestone::new(
            MilestoneCode::M5,
            summary_chars >= RICH_FEEDBACK_CHARS,
            format!(
                "Feedback length {} chars (>={} signals depth).",
                summary_chars, RICH_FEEDBACK_CHARS
            ),
        ),
        Milestone::new(
            MilestoneCode::M6,
            distinct_tokens >= MIN_DISTINCT_TOKENS,
            format!(
                "Extracted {} distinct tokens from quest titles.",
                distinct_tokens
            ),
        ),
    ]
}

/// Parse raw JSON and derive milestones in one step.
///
/// # Errors
/// See [`FeedbackRecord::from_json_slice`].
pub fn compute_milestones_from_json(
    bytes: &[u8],
) -> Result<[Milestone; MILESTONE_COUNT], MilestoneError> {
    let feedback = FeedbackRecord::from_json_slice(bytes)?;
    Ok(compute_milestones(&feedback))
}

/// Collect the distinct lower-cased tokens of all quest titles.
///
/// Titles are split on [`is_separator`]; empty pieces are dropped.
#[must_use]
pub fn quest_tokens(quests: &[Quest]) -> BTreeSet<String> {
    quests
        .iter()
        .flat_map(|quest| quest.title.split(is_separator))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn codes(milestones: &[Milestone]) -> Vec<MilestoneCode> {
        milestones.iter().map(|m| m.code).collect()
    }

    #[test]
    fn empty_record_achieves_nothing() {
        let milestones = compute_milestones(&FeedbackRecord::new());

        assert_eq!(codes(&milestones), MilestoneCode::ALL.to_vec());
        assert!(milestones.iter().all(|m| !m.achieved));
        assert_eq!(milestones[1].description, "Agent class is 'n/a'.");
        assert_eq!(milestones[2].description, "0 quest(s) generated.");
        assert_eq!(milestones[3].description, "0 match candidates available.");
        assert_eq!(
            milestones[4].description,
            "Feedback length 0 chars (>=120 signals depth)."
        );
        assert_eq!(
            milestones[5].description,
            "Extracted 0 distinct tokens from quest titles."
        );
    }

    #[test]
    fn titles_follow_codes() {
        let milestones = compute_milestones(&FeedbackRecord::new());
        for milestone in &milestones {
            assert_eq!(milestone.title, milestone.code.title());
        }
    }

    #[test]
    fn agent_class_error_is_unclassified() {
        let feedback = FeedbackRecord::new().with_agent_class("ERROR");
        let milestones = compute_milestones(&feedback);
        assert!(!milestones[1].achieved);
        assert_eq!(milestones[1].description, "Agent class is 'error'.");
    }

    #[test]
    fn tokens_collapse_case_and_duplicates() {
        let quests = vec![
            Quest::new("Slay the Dragon"),
            Quest::new("slay THE dragon"),
            Quest::new("   "),
            Quest::new(""),
        ];
        let tokens = quest_tokens(&quests);
        let expected: BTreeSet<String> = ["dragon", "slay", "the"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn tokens_split_on_any_whitespace() {
        let tokens = quest_tokens(&[Quest::new("a\tb\nc  d")]);
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn tokens_split_on_information_separators() {
        let tokens = quest_tokens(&[Quest::new("a\u{1f}b\u{1c}\u{1c}c d")]);
        let expected: BTreeSet<String> = ["a", "b", "c", "d"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn separator_only_summary_is_empty() {
        let feedback = FeedbackRecord::new().with_summary("\u{1e}\u{1f} \t");
        assert!(!compute_milestones(&feedback)[0].achieved);
    }

    #[test]
    fn diversity_threshold() {
        let three = FeedbackRecord::new().with_quests(vec![Quest::new("one two three")]);
        assert!(!compute_milestones(&three)[5].achieved);

        let four = FeedbackRecord::new().with_quests(vec![Quest::new("one two three four")]);
        assert!(compute_milestones(&four)[5].achieved);
    }

    #[test]
    fn summary_length_counts_characters() {
        // 120 two-byte characters: 240 bytes, 120 chars.
        let summary = "é".repeat(120);
        let feedback = FeedbackRecord::new().with_summary(summary);
        let milestones = compute_milestones(&feedback);
        assert!(milestones[4].achieved);
        assert_eq!(
            milestones[4].description,
            "Feedback length 120 chars (>=120 signals depth)."
        );
    }

    #[test]
    fn padded_summary_counts_raw_length() {
        let summary = format!("  {}  ", "x".repeat(116));
        let feedback = FeedbackRecord::new().with_summary(summary);
        let milestones = compute_milestones(&feedback);
        assert!(milestones[0].achieved);
        assert!(milestones[4].achieved);
    }

    #[test]
    fn from_json_matches_typed_path() {
        let raw = json!({
            "generated_quests": [{ "title": "Find the Ring" }],
            "top_matches": [1, 2, 3],
            "agent_class": "Ranger",
            "feedback_summary": "ok"
        });
        let bytes = serde_json::to_vec(&raw).expect("serialize");
        let from_json = compute_milestones_from_json(&bytes).expect("derive");
        let typed = compute_milestones(&FeedbackRecord::try_from(raw).expect("object"));
        assert_eq!(from_json, typed);
    }

    #[test]
    fn from_json_rejects_non_object() {
        assert!(matches!(
            compute_milestones_from_json(b"\"text\""),
            Err(MilestoneError::NotAnObject)
        ));
    }
}
