//! Repository for the `projects` table.

use handover_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, slug, title, client_name, client_email, owner_id, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with a server-generated slug, returning the
    /// created row.
    pub async fn create(
        pool: &PgPool,
        slug: &str,
        title: &str,
        client_name: &str,
        client_email: &str,
        owner_id: Option<&str>,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (slug, title, client_name, client_email, owner_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .bind(title)
            .bind(client_name)
            .bind(client_email)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE slug = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and every submission grouped under its slug, in
    /// one transaction.
    ///
    /// Submissions reference projects by slug string rather than a
    /// foreign key, so this explicit cleanup is the deletion policy;
    /// without it deleted projects would leave orphaned submissions.
    ///
    /// Returns `false` if no project with the given `id` exists.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let slug: Option<String> =
            sqlx::query_scalar("SELECT slug FROM projects WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(slug) = slug else {
            return Ok(false);
        };

        let removed = sqlx::query("DELETE FROM submissions WHERE project_slug = $1")
            .bind(&slug)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(project_id = id, slug = %slug, submissions_removed = removed, "Project deleted");
        Ok(true)
    }
}
