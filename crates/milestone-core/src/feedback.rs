//! # Feedback Record
//!
//! Typed input boundary for milestone derivation.
//!
//! Upstream feedback arrives as a loosely structured JSON object. It is
//! normalized exactly once, here, into a [`FeedbackRecord`]:
//! - Missing, null or wrongly typed sequences become empty
//! - Missing, null or wrongly typed strings become `""`
//! - `agent_class` is stored lower-cased
//! - Quest entries without a string `title` (or that are not objects at all)
//!   keep their slot but contribute an empty title
//!
//! The only rejected input is JSON that is not an object.

use crate::MilestoneError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// FIELD NAMES
// =============================================================================

pub const FIELD_GENERATED_QUESTS: &str = "generated_quests";
pub const FIELD_TOP_MATCHES: &str = "top_matches";
pub const FIELD_AGENT_CLASS: &str = "agent_class";
pub const FIELD_FEEDBACK_SUMMARY: &str = "feedback_summary";
pub const FIELD_TITLE: &str = "title";

// =============================================================================
// QUEST
// =============================================================================

/// A generated quest. Only the title is read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Quest {
    pub title: String,
}

impl Quest {
    /// Create a quest with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Build a quest from an arbitrary JSON value.
    ///
    /// A non-object entry, or an object whose `title` is missing or not a
    /// string, yields an empty title.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::new(
            value
                .get(FIELD_TITLE)
                .and_then(Value::as_str)
                .unwrap_or_default(),
        )
    }
}

impl From<Value> for Quest {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

// =============================================================================
// FEEDBACK RECORD
// =============================================================================

/// Normalized AI feedback record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct FeedbackRecord {
    generated_quests: Vec<Quest>,
    top_matches: Vec<Value>,
    agent_class: String,
    feedback_summary: String,
}

impl FeedbackRecord {
    /// Create an empty record (every field at its default).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a JSON object into a record. Never fails.
    #[must_use]
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            generated_quests: array_field(map, FIELD_GENERATED_QUESTS)
                .iter()
                .map(Quest::from_value)
                .collect(),
            top_matches: array_field(map, FIELD_TOP_MATCHES).to_vec(),
            agent_class: string_field(map, FIELD_AGENT_CLASS).to_lowercase(),
            feedback_summary: string_field(map, FIELD_FEEDBACK_SUMMARY).to_string(),
        }
    }

    /// Parse raw JSON bytes into a record.
    ///
    /// # Errors
    /// - `MilestoneError::InvalidJson` if the bytes are not JSON
    /// - `MilestoneError::NotAnObject` if the JSON is not an object
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, MilestoneError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| MilestoneError::InvalidJson(e.to_string()))?;
        Self::try_from(value)
    }

    /// Replace the generated quests.
    #[must_use]
    pub fn with_quests(mut self, quests: Vec<Quest>) -> Self {
        self.generated_quests = quests;
        self
    }

    /// Replace the top matches.
    #[must_use]
    pub fn with_matches(mut self, matches: Vec<Value>) -> Self {
        self.top_matches = matches;
        self
    }

    /// Set the agent class. Stored lower-cased.
    #[must_use]
    pub fn with_agent_class(mut self, agent_class: impl AsRef<str>) -> Self {
        self.agent_class = agent_class.as_ref().to_lowercase();
        self
    }

    /// Set the raw feedback summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.feedback_summary = summary.into();
        self
    }

    #[must_use]
    pub fn quests(&self) -> &[Quest] {
        &self.generated_quests
    }

    #[must_use]
    pub fn quest_count(&self) -> usize {
        self.generated_quests.len()
    }

    #[must_use]
    pub fn matches(&self) -> &[Value] {
        &self.top_matches
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.top_matches.len()
    }

    /// The lower-cased agent class, `""` when absent.
    #[must_use]
    pub fn agent_class(&self) -> &str {
        &self.agent_class
    }

    /// The raw, untrimmed feedback summary, `""` when absent.
    #[must_use]
    pub fn feedback_summary(&self) -> &str {
        &self.feedback_summary
    }
}

impl TryFrom<Value> for FeedbackRecord {
    type Error = MilestoneError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::from_map(&map)),
            _ => Err(MilestoneError::NotAnObject),
        }
    }
}

fn array_field<'a>(map: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    map.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> &'a str {
    map.get(key).and_then(Value::as_str).unwrap_or_default()
}

// =============================================================================
// TESTS
// =============================================================================
