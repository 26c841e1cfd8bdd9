//! Repository for the `submissions` table.
//!
//! Submissions are insert-only: the intake path never updates or deletes
//! individual rows, which keeps the quota arithmetic a pure derivation
//! over history.

use handover_core::intake::IntakeDraft;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::submission::Submission;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, slug, project_slug, name, email, \
    submitted_at, files, figma_links, created_at";

/// Outcome of the guarded check-and-insert.
#[derive(Debug)]
pub enum GuardedInsert {
    /// The batch fit under the cap and the row was written. `existing`
    /// is the project's file count before this insert, for the response
    /// summary.
    Inserted {
        submission: Submission,
        existing: i64,
    },
    /// The cap would have been exceeded; nothing was written.
    QuotaExceeded { existing: i64 },
}

/// Provides lookups and the guarded insert for submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Find a submission by its idempotency slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE slug = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Most recent submission for a project by client-supplied
    /// `submitted_at`, used for the continuity check.
    pub async fn find_latest_by_project(
        pool: &PgPool,
        project_slug: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions \
             WHERE project_slug = $1 \
             ORDER BY submitted_at DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(project_slug)
            .fetch_optional(pool)
            .await
    }

    /// Full submission history for a project, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_slug: &str,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions \
             WHERE project_slug = $1 \
             ORDER BY submitted_at DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(project_slug)
            .fetch_all(pool)
            .await
    }

    /// Cumulative file count across a project's entire history.
    ///
    /// Derived on demand rather than kept in a counter row, so there is
    /// nothing to drift out of sync.
    pub async fn count_files(pool: &PgPool, project_slug: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(jsonb_array_length(files)), 0)::BIGINT \
             FROM submissions WHERE project_slug = $1",
        )
        .bind(project_slug)
        .fetch_one(pool)
        .await
    }

    /// Check the project-wide file cap and insert in one serialized step.
    ///
    /// Takes a per-project advisory lock for the duration of the
    /// transaction, so two concurrent intakes for the same project cannot
    /// both observe a pre-insert count and overshoot the cap. Locks on
    /// different projects do not contend.
    pub async fn insert_guarded(
        pool: &PgPool,
        draft: &IntakeDraft,
        max_files: i64,
    ) -> Result<GuardedInsert, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(&draft.project_slug)
            .execute(&mut *tx)
            .await?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(jsonb_array_length(files)), 0)::BIGINT \
             FROM submissions WHERE project_slug = $1",
        )
        .bind(&draft.project_slug)
        .fetch_one(&mut *tx)
        .await?;

        let new_files = draft.files.len() as i64;
        if existing + new_files > max_files {
            // Dropping the transaction releases the advisory lock.
            return Ok(GuardedInsert::QuotaExceeded { existing });
        }

        let query = format!(
            "INSERT INTO submissions \
                (slug, project_slug, name, email, submitted_at, files, figma_links) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let submission = sqlx::query_as::<_, Submission>(&query)
            .bind(&draft.slug)
            .bind(&draft.project_slug)
            .bind(&draft.name)
            .bind(&draft.email)
            .bind(draft.submitted_at)
            .bind(Json(&draft.files))
            .bind(Json(&draft.figma_links))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(GuardedInsert::Inserted {
            submission,
            existing,
        })
    }
}
