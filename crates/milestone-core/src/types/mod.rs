//! # Core Type Definitions
//!
//! This module contains the output types of milestone derivation:
//! - Milestone identifiers (`MilestoneCode`)
//! - The milestone record itself (`Milestone`)
//! - Error types (`MilestoneError`)
//!
//! ## Wire Compatibility
//!
//! Consumers of milestone records expect `achieved` as the integer `0` or `1`.
//! Internally it is a `bool`; the integer encoding only exists at the serde
//! boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// MILESTONE CODE
// =============================================================================

/// The fixed set of milestone codes, in derivation order.
///
/// Serialized as the bare variant name (`"M1"` .. `"M6"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MilestoneCode {
    /// Initial Analysis Generated
    M1,
    /// Agent Classified
    M2,
    /// Quests Proposed
    M3,
    /// Matches Identified
    M4,
    /// Rich Feedback
    M5,
    /// Quest Diversity
    M6,
}

impl MilestoneCode {
    /// All codes in the order they are derived.
    pub const ALL: [MilestoneCode; 6] = [
        MilestoneCode::M1,
        MilestoneCode::M2,
        MilestoneCode::M3,
        MilestoneCode::M4,
        MilestoneCode::M5,
        MilestoneCode::M6,
    ];

    /// Get the fixed human-readable title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            MilestoneCode::M1 => "Initial Analysis Generated",
            MilestoneCode::M2 => "Agent Classified",
            MilestoneCode::M3 => "Quests Proposed",
            MilestoneCode::M4 => "Matches Identified",
            MilestoneCode::M5 => "Rich Feedback",
            MilestoneCode::M6 => "Quest Diversity",
        }
    }

    /// Get a one-line description of when this milestone is achieved.
    #[must_use]
    pub fn criterion(&self) -> &'static str {
        match self {
            MilestoneCode::M1 => "Feedback summary is non-empty after trimming",
            MilestoneCode::M2 => "Agent class is present and not 'unknown' or 'error'",
            MilestoneCode::M3 => "At least 1 quest generated",
            MilestoneCode::M4 => "At least 2 match candidates",
            MilestoneCode::M5 => "Raw feedback summary is at least 120 characters",
            MilestoneCode::M6 => "At least 4 distinct tokens across quest titles",
        }
    }
}

impl std::fmt::Display for MilestoneCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self, self.title())
    }
}

// =============================================================================
// MILESTONE
// =============================================================================

/// A single derived achievement flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Which milestone this is.
    pub code: MilestoneCode,
    /// Fixed title for `code`.
    pub title: String,
    /// Whether the predicate held. Serialized as `0` or `1`.
    #[serde(with = "achieved_flag")]
    pub achieved: bool,
    /// Computed description, may embed counts from the input.
    pub description: String,
}

impl Milestone {
    /// Create a milestone; the title is taken from the code.
    #[must_use]
    pub fn new(code: MilestoneCode, achieved: bool, description: impl Into<String>) -> Self {
        Self {
            code,
            title: code.title().to_string(),
            achieved,
            description: description.into(),
        }
    }

    /// The achieved flag as the `0`/`1` integer consumers expect.
    #[must_use]
    pub fn achieved_flag(&self) -> u8 {
        u8::from(self.achieved)
    }
}

/// Serde adapter: `bool` <-> `0`/`1`.
mod achieved_flag {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(achieved: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*achieved))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u64::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(D::Error::invalid_value(
                Unexpected::Unsigned(other),
                &"0 or 1",
            )),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur at the boundaries of milestone derivation.
///
/// Derivation itself is total; these only arise while turning raw input into
/// a `FeedbackRecord` or while writing output.
#[derive(Debug, Error)]
pub enum MilestoneError {
    /// The input bytes are not valid JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// The input is valid JSON but not an object.
    #[error("Feedback record must be a JSON object")]
    NotAnObject,

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The input exceeds the allowed size.
    #[error("Input size {size} bytes exceeds maximum {max} bytes")]
    InputTooLarge { size: u64, max: u64 },
}

// =============================================================================
// TESTS
// =============================================================================
