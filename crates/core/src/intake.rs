//! Submission intake validation and project-wide file quota arithmetic.
//!
//! The intake endpoint accepts a claimed submission and must decide, in
//! order: is the payload well-formed, is it a retry of an already-stored
//! event, is the requester the project's established submitter, and does
//! the file batch fit under the project's cumulative cap. The pure parts
//! of those decisions live here; lookups and the insert live in the db
//! crate.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Cumulative file cap per project, across the project's entire
/// submission history. A product decision, not a per-request limit.
pub const MAX_FILES_PER_PROJECT: i64 = 10;

/// One file reference inside a submission. Bytes live at `url`;
/// the record never stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFile {
    pub name: String,
    pub url: String,
}

/// Raw intake request body. All fields optional so missing ones surface
/// as a domain validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub slug: Option<String>,
    pub project_slug: Option<String>,
    pub submitted_at: Option<Timestamp>,
    pub files: Option<Vec<SubmissionFile>>,
    pub figma_links: Option<Vec<String>>,
}

/// A validated intake with defaults applied, ready for persistence.
#[derive(Debug, Clone)]
pub struct IntakeDraft {
    pub name: String,
    pub email: String,
    pub slug: String,
    /// Groups submissions under a project. Defaults to `slug` for the
    /// first submission of a project.
    pub project_slug: String,
    pub submitted_at: Timestamp,
    pub files: Vec<SubmissionFile>,
    pub figma_links: Vec<String>,
}

/// File accounting summary returned with every intake response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileCount {
    pub existing: i64,
    pub new: i64,
    pub total: i64,
    pub max: i64,
}

impl FileCount {
    /// Summary for an idempotent replay: nothing new was accepted.
    pub fn replay(existing: i64) -> Self {
        Self {
            existing,
            new: 0,
            total: existing,
            max: MAX_FILES_PER_PROJECT,
        }
    }
}

/// Validate required fields and apply defaults.
///
/// `name`, `email`, and `slug` must be non-empty after trimming and
/// `submittedAt` must be present. `projectSlug` falls back to `slug`;
/// `files` and `figmaLinks` default to empty.
pub fn validate_intake(req: IntakeRequest) -> Result<IntakeDraft, CoreError> {
    let name = required_field(req.name, "name")?;
    let email = required_field(req.email, "email")?;
    let slug = required_field(req.slug, "slug")?;
    let submitted_at = req.submitted_at.ok_or_else(|| {
        CoreError::Validation("Missing required field: submittedAt".to_string())
    })?;

    let project_slug = match req.project_slug {
        Some(ref s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => slug.clone(),
    };

    Ok(IntakeDraft {
        name,
        email,
        slug,
        project_slug,
        submitted_at,
        files: req.files.unwrap_or_default(),
        figma_links: req.figma_links.unwrap_or_default(),
    })
}

fn required_field(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(CoreError::Validation(format!(
            "Missing required field: {field}"
        ))),
    }
}

/// Check a new batch of `new` files against the project's cumulative cap
/// given `existing` files already stored across its history.
///
/// Exactly reaching the cap succeeds; one past it fails with a
/// [`CoreError::QuotaExceeded`] reporting the remaining allowance.
pub fn check_quota(existing: i64, new: i64) -> Result<FileCount, CoreError> {
    if existing + new > MAX_FILES_PER_PROJECT {
        return Err(CoreError::QuotaExceeded {
            max: MAX_FILES_PER_PROJECT,
            existing,
            remaining: MAX_FILES_PER_PROJECT - existing,
        });
    }
    Ok(FileCount {
        existing,
        new,
        total: existing + new,
        max: MAX_FILES_PER_PROJECT,
    })
}

/// Continuity check: a project's submitter is pinned to the email of its
/// most recent submission. A lightweight same-requester token, not a
/// security boundary.
pub fn check_continuity(latest_email: &str, incoming_email: &str) -> Result<(), CoreError> {
    if latest_email == incoming_email {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "You are not allowed to submit to this project. \
             Use the same email address as the previous submission."
                .to_string(),
        ))
    }
}
