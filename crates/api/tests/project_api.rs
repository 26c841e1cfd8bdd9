//! HTTP-level integration tests for the `/projects` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: POST /projects creates a project with a server-generated slug
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_generates_slug(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        json!({"title": "Logo refresh", "name": "Tanaka", "email": "t@x.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["data"]["id"].as_i64().is_some());

    let slug = json["data"]["slug"].as_str().unwrap();
    let (prefix, suffix) = slug.split_once('-').expect("slug contains a hyphen");
    assert_eq!(prefix.len(), 6);
    assert!(!suffix.is_empty());

    // The slug resolves on the public lookup endpoint.
    let response = get(
        build_test_app(pool),
        &format!("/api/v1/projects/slug/{slug}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let looked_up = body_json(response).await;
    assert_eq!(looked_up["data"]["title"], "Logo refresh");
    assert_eq!(looked_up["data"]["client_name"], "Tanaka");
}

// ---------------------------------------------------------------------------
// Test: missing required fields are rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_requires_fields(pool: PgPool) {
    for payload in [
        json!({"name": "Tanaka", "email": "t@x.com"}),
        json!({"title": "Logo refresh", "email": "t@x.com"}),
        json!({"title": "Logo refresh", "name": "Tanaka"}),
    ] {
        let response = post_json(build_test_app(pool.clone()), "/api/v1/projects", payload).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

// ---------------------------------------------------------------------------
// Test: unknown slug lookup returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_slug_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/projects/slug/no-such").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: DELETE removes the project and its submissions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_cascades_to_submissions(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        json!({"title": "Banner set", "name": "Tanaka", "email": "t@x.com"}),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    let slug = created["data"]["slug"].as_str().unwrap().to_string();

    // Two submissions grouped under the project's slug.
    for sub_slug in ["del-1", "del-2"] {
        let response = post_json(
            build_test_app(pool.clone()),
            "/api/v1/submissions",
            json!({
                "name": "Yamada",
                "email": "y@x.com",
                "slug": sub_slug,
                "projectSlug": slug,
                "submittedAt": "2025-01-01T00:00:00Z"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = delete(build_test_app(pool.clone()), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Both the project row and the grouped submissions are gone.
    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/projects/slug/{slug}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/submissions/{slug}"),
    )
    .await;
    let history = body_json(response).await;
    assert!(history["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: deleting a missing project returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_project_returns_404(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/v1/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
