//! # milestone-core
//!
//! The deterministic milestone engine - THE LOGIC.
//!
//! Turns an AI-generated feedback record (quests, matches, agent
//! classification, free-text summary) into six fixed achievement flags,
//! `M1` through `M6`.
//!
//! ## Architectural Constraints
//!
//! - Pure: no I/O, no async, no global state
//! - Total: derivation never fails; only the JSON boundary can reject input
//! - Deterministic: `BTreeSet` for token sets, integer arithmetic only
//!
//! ## Example
//!
//! ```
//! use milestone_core::{FeedbackRecord, MilestoneCode, compute_milestones};
//!
//! let feedback = FeedbackRecord::from_json_slice(br#"{"agent_class": "Warrior"}"#)?;
//! let milestones = compute_milestones(&feedback);
//!
//! assert_eq!(milestones[1].code, MilestoneCode::M2);
//! assert!(milestones[1].achieved);
//! # Ok::<(), milestone_core::MilestoneError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod deriver;
pub mod feedback;
pub mod primitives;
pub mod report;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use deriver::{compute_milestones, compute_milestones_from_json, quest_tokens};
pub use feedback::{FeedbackRecord, Quest};
pub use report::MilestoneReport;
pub use types::{Milestone, MilestoneCode, MilestoneError};
