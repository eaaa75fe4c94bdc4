//! # Milestones
//!
//! Library half of the `milestones` binary. Exposes the CLI so integration
//! tests can drive commands without spawning a process.

pub mod cli;
