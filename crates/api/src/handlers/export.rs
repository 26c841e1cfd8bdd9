//! Bulk archive export: every file from every submission of a project,
//! bundled into one zip foldered per submitter.
//!
//! File bodies are fetched concurrently; a fetch that fails or times out
//! is logged and skipped so a single dead URL never sinks the archive.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use futures::future;
use serde::Deserialize;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use handover_core::archive;
use handover_core::error::CoreError;
use handover_db::models::submission::Submission;
use handover_db::repositories::SubmissionRepo;

use crate::error::{AppError, AppResult};
use crate::fetch::FileFetcher;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadAllQuery {
    pub project_slug: Option<String>,
}

/// GET /api/v1/download-all?projectSlug=...
///
/// Returns the archive as `application/zip` with a
/// `{projectSlug}-submissions-{date}.zip` content-disposition filename.
/// 400 without a `projectSlug`, 404 when the project has no submissions.
pub async fn download_all(
    State(state): State<AppState>,
    Query(params): Query<DownloadAllQuery>,
) -> AppResult<impl IntoResponse> {
    let project_slug = params
        .project_slug
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("The projectSlug query parameter is required".to_string())
        })?;

    let submissions = SubmissionRepo::list_by_project(&state.pool, &project_slug).await?;
    if submissions.is_empty() {
        return Err(CoreError::NotFound {
            entity: "Submission",
            key: project_slug,
        }
        .into());
    }

    let archive_bytes = build_archive(state.fetcher.as_ref(), &submissions).await?;

    tracing::info!(
        project_slug = %project_slug,
        submissions = submissions.len(),
        archive_bytes = archive_bytes.len(),
        "Archive export complete",
    );

    let filename = archive::archive_filename(&project_slug, chrono::Utc::now().date_naive());
    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        archive_bytes,
    ))
}

/// Fetch every referenced file concurrently and assemble the zip.
///
/// Entry paths are `{sanitized submitter}/{display filename}`, deduped
/// within the archive so identically named files never overwrite each
/// other.
async fn build_archive(
    fetcher: &dyn FileFetcher,
    submissions: &[Submission],
) -> Result<Vec<u8>, AppError> {
    let downloads = submissions.iter().flat_map(|submission| {
        submission
            .files
            .0
            .iter()
            .enumerate()
            .map(move |(index, file)| async move {
                match fetcher.fetch(&file.url).await {
                    Ok(bytes) => {
                        let folder = archive::sanitize_folder(&submission.name);
                        let name = archive::display_filename(&file.name, &file.url, index);
                        Some((folder, name, bytes))
                    }
                    Err(err) => {
                        tracing::warn!(
                            submission_id = submission.id,
                            url = %file.url,
                            error = %err,
                            "Skipping file that failed to download",
                        );
                        None
                    }
                }
            })
    });
    let fetched = future::join_all(downloads).await;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut used_paths = HashSet::new();

    for (folder, name, bytes) in fetched.into_iter().flatten() {
        let entry = archive::unique_entry_path(&mut used_paths, format!("{folder}/{name}"));
        writer.start_file(entry, options).map_err(zip_error)?;
        writer
            .write_all(&bytes)
            .map_err(|e| AppError::InternalError(format!("Failed to write archive entry: {e}")))?;
    }

    let cursor = writer.finish().map_err(zip_error)?;
    Ok(cursor.into_inner())
}

fn zip_error(err: zip::result::ZipError) -> AppError {
    AppError::InternalError(format!("Failed to assemble archive: {err}"))
}
