//! # Milestone Primitives
//!
//! Hardcoded thresholds for milestone derivation.
//!
//! These values are compiled into the binary and are immutable at runtime.
//! They are not tunable: a consumer that relies on a milestone flag relies on
//! exactly these cut-offs.

/// Minimum number of generated quests for "Quests Proposed" (M3).
pub const MIN_QUESTS: usize = 1;

/// Minimum number of top matches for "Matches Identified" (M4).
pub const MIN_MATCHES: usize = 2;

/// Minimum raw summary length, in characters, for "Rich Feedback" (M5).
///
/// The length is measured on the untrimmed summary.
pub const RICH_FEEDBACK_CHARS: usize = 120;

/// Minimum number of distinct quest title tokens for "Quest Diversity" (M6).
pub const MIN_DISTINCT_TOKENS: usize = 4;

/// Lower-cased agent classes that do NOT count as a classification (M2).
pub const UNCLASSIFIED_AGENT_CLASSES: [&str; 3] = ["", "unknown", "error"];

/// Placeholder rendered in the M2 description when no agent class is present.
pub const MISSING_AGENT_CLASS: &str = "n/a";

/// Number of milestones produced by every derivation.
pub const MILESTONE_COUNT: usize = 6;

/// Separator predicate for summary trimming and title tokenizing.
///
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which upstream producers also treat as whitespace.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_include_information_separators() {
        for c in ['\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}', ' ', '\t', '\n', '\u{a0}'] {
            assert!(is_separator(c), "{:?}", c);
        }
        for c in ['a', '_', '\u{1b}', '\u{0}'] {
            assert!(!is_separator(c), "{:?}", c);
        }
    }

    #[test]
    fn unclassified_set_is_lowercase() {
        for class in UNCLASSIFIED_AGENT_CLASSES {
            assert_eq!(class, class.to_lowercase());
        }
    }

    #[test]
    fn rich_feedback_threshold() {
        assert_eq!(RICH_FEEDBACK_CHARS, 120);
    }
}
