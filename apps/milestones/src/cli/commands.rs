//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Rendering is split from printing so output can be checked in tests.

use milestone_core::{FeedbackRecord, MilestoneCode, MilestoneError, MilestoneReport};
use std::io::Read;
use std::path::{Path, PathBuf};

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Maximum feedback document size (16 MB), for files and stdin alike.
pub const MAX_FEEDBACK_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Path value that selects stdin.
const STDIN_PATH: &str = "-";

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), MilestoneError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| MilestoneError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(MilestoneError::InputTooLarge {
            size: metadata.len(),
            max: max_size,
        });
    }
    Ok(())
}

/// Validate an input path.
///
/// Canonicalizes the path (resolving symlinks and "..") and requires it to
/// be a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, MilestoneError> {
    let canonical = path.canonicalize().map_err(|e| {
        MilestoneError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(MilestoneError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

// =============================================================================
// INPUT
// =============================================================================

/// Read and normalize a feedback record from a file, or stdin when `file` is
/// `None` or `-`.
pub fn read_feedback(file: Option<&Path>) -> Result<FeedbackRecord, MilestoneError> {
    match file {
        Some(path) if path != Path::new(STDIN_PATH) => read_feedback_file(path),
        _ => read_feedback_from(std::io::stdin().lock()),
    }
}

/// Read a feedback record from a file on disk.
pub fn read_feedback_file(path: &Path) -> Result<FeedbackRecord, MilestoneError> {
    let validated_path = validate_file_path(path)?;
    validate_file_size(&validated_path, MAX_FEEDBACK_FILE_SIZE)?;

    tracing::info!("Reading feedback from {:?}", validated_path);

    let contents = std::fs::read(&validated_path)
        .map_err(|e| MilestoneError::IoError(format!("Read file: {}", e)))?;

    tracing::debug!(bytes = contents.len(), "feedback file read");
    FeedbackRecord::from_json_slice(&contents)
}

/// Read a feedback record from any reader, enforcing the size limit.
pub fn read_feedback_from<R: Read>(reader: R) -> Result<FeedbackRecord, MilestoneError> {
    let mut contents = Vec::new();
    reader
        .take(MAX_FEEDBACK_FILE_SIZE.saturating_add(1))
        .read_to_end(&mut contents)
        .map_err(|e| MilestoneError::IoError(format!("Read input: {}", e)))?;

    let size = contents.len() as u64;
    if size > MAX_FEEDBACK_FILE_SIZE {
        return Err(MilestoneError::InputTooLarge {
            size,
            max: MAX_FEEDBACK_FILE_SIZE,
        });
    }

    tracing::debug!(bytes = size, "feedback read from stream");
    FeedbackRecord::from_json_slice(&contents)
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render a report as a human-readable table.
pub fn render_text(report: &MilestoneReport, detailed: bool) -> String {
    let mut out = String::new();
    out.push_str("Feedback Milestones\n");
    out.push_str("===================\n");

    for milestone in &report.milestones {
        let mark = if milestone.achieved { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "{:?}  {}  {}\n",
            milestone.code, mark, milestone.title
        ));
        if detailed {
            out.push_str(&format!("        {}\n", milestone.description));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "{}/{} achieved ({}%)\n",
        report.achieved_count,
        report.total,
        report.progress_percent()
    ));
    out
}

/// Render a report as pretty JSON: the milestone array, or the whole report.
pub fn render_json(report: &MilestoneReport, full_report: bool) -> Result<String, MilestoneError> {
    let rendered = if full_report {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string_pretty(&report.milestones)
    };
    rendered.map_err(|e| MilestoneError::SerializationError(e.to_string()))
}

/// Render the list of milestone codes with their criteria.
pub fn render_codes(json_mode: bool) -> Result<String, MilestoneError> {
    if json_mode {
        let codes: Vec<_> = MilestoneCode::ALL
            .iter()
            .map(|code| {
                serde_json::json!({
                    "code": code,
                    "title": code.title(),
                    "criterion": code.criterion()
                })
            })
            .collect();
        return serde_json::to_string_pretty(&codes)
            .map_err(|e| MilestoneError::SerializationError(e.to_string()));
    }

    let mut out = String::new();
    out.push_str("Milestone Codes\n");
    out.push_str("===============\n");
    for code in MilestoneCode::ALL {
        out.push_str(&format!("{}\n    {}\n", code, code.criterion()));
    }
    Ok(out)
}

// =============================================================================
// DERIVE COMMAND
// =============================================================================

/// Derive milestones from a feedback document and print them.
pub fn cmd_derive(
    file: Option<&Path>,
    json_mode: bool,
    detailed: bool,
    full_report: bool,
) -> Result<(), MilestoneError> {
    let feedback = read_feedback(file)?;
    let report = MilestoneReport::from_feedback(&feedback);

    tracing::info!(
        achieved = report.achieved_count,
        total = report.total,
        "Derived milestones"
    );

    if full_report && !json_mode {
        tracing::warn!("--report only applies with --json-mode; ignoring it in text mode");
    }

    if json_mode {
        println!("{}", render_json(&report, full_report)?);
    } else {
        print!("{}", render_text(&report, detailed));
    }

    Ok(())
}

// =============================================================================
// CODES COMMAND
// =============================================================================

/// Print the milestone codes.
pub fn cmd_codes(json_mode: bool) -> Result<(), MilestoneError> {
    let rendered = render_codes(json_mode)?;
    if json_mode {
        println!("{}", rendered);
    } else {
        print!("{}", rendered);
    }
    Ok(())
}
