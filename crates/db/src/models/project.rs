//! Project models and DTOs.

use handover_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub slug: String,
    pub title: String,
    pub client_name: String,
    pub client_email: String,
    pub owner_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. The slug is generated server-side, never
/// supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    /// Project title shown on the submit page.
    pub title: Option<String>,
    /// Client (requester) display name.
    pub name: Option<String>,
    /// Client contact email.
    pub email: Option<String>,
    pub owner_id: Option<String>,
}

/// Response payload for a freshly created project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCreatedResponse {
    pub id: DbId,
    pub slug: String,
}
