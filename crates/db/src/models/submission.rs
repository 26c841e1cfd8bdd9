//! Submission models and response DTOs.

use handover_core::intake::{FileCount, SubmissionFile};
use handover_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submission {
    pub id: DbId,
    pub slug: String,
    pub project_slug: String,
    pub name: String,
    pub email: String,
    pub submitted_at: Timestamp,
    pub files: Json<Vec<SubmissionFile>>,
    pub figma_links: Json<Vec<String>>,
    pub created_at: Timestamp,
}

impl Submission {
    /// Number of file references in this submission.
    pub fn file_count(&self) -> i64 {
        self.files.0.len() as i64
    }
}

/// Response payload for the intake endpoint, fresh create and idempotent
/// replay alike.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    pub id: DbId,
    pub slug: String,
    /// True when this request replayed an already-stored submission.
    pub duplicate: bool,
    pub file_count: FileCount,
}
