//! Integration tests for project and invoice lifecycle operations:
//! status changes, create-with-join responses, validation, deletion.

mod common;

use axum::http::StatusCode;
use common::{delete, expect_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_client(pool: &PgPool, name: &str, email: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json(
            app,
            "/api/v1/clients",
            json!({ "name": name, "email": email }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    json["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_returns_row_with_client_join(pool: PgPool) {
    let client_id = create_client(&pool, "Acme GmbH", "owner@acme.test").await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json(
            app,
            "/api/v1/projects",
            json!({ "name": "Acme relaunch", "client_id": client_id, "tier": "Growth" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;

    assert_eq!(json["status"], "PENDING");
    assert_eq!(json["client_name"], "Acme GmbH");
    assert_eq!(json["client_email"], "owner@acme.test");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_without_client_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/projects",
        json!({ "name": "Orphan project", "client_id": 0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written.
    let app = common::build_test_app(pool.clone());
    let list = expect_json(get(app, "/api/v1/projects").await, StatusCode::OK).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn project_status_can_move_freely(pool: PgPool) {
    let client_id = create_client(&pool, "Acme GmbH", "owner@acme.test").await;
    let app = common::build_test_app(pool.clone());
    let created = expect_json(
        post_json(
            app,
            "/api/v1/projects",
            json!({ "name": "Acme relaunch", "client_id": client_id }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Forward, backward, and terminal moves are all allowed.
    for status in ["COMPLETED", "PENDING", "ARCHIVED", "IN_PROGRESS"] {
        let app = common::build_test_app(pool.clone());
        let json = expect_json(
            put_json(
                app,
                &format!("/api/v1/projects/{id}/status"),
                json!({ "status": status }),
            )
            .await,
            StatusCode::OK,
        )
        .await;
        assert_eq!(json["status"], status);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn setting_status_to_current_value_is_a_noop(pool: PgPool) {
    let client_id = create_client(&pool, "Acme GmbH", "owner@acme.test").await;
    let app = common::build_test_app(pool.clone());
    let created = expect_json(
        post_json(
            app,
            "/api/v1/projects",
            json!({ "name": "Acme relaunch", "client_id": client_id }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        put_json(
            app,
            &format!("/api/v1/projects/{id}/status"),
            json!({ "status": "PENDING" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["status"], "PENDING");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_project_removes_exactly_that_row(pool: PgPool) {
    let client_id = create_client(&pool, "Acme GmbH", "owner@acme.test").await;

    let mut ids = Vec::new();
    for name in ["Alpha", "Beta", "Gamma"] {
        let app = common::build_test_app(pool.clone());
        let created = expect_json(
            post_json(
                app,
                "/api/v1/projects",
                json!({ "name": name, "client_id": client_id }),
            )
            .await,
            StatusCode::CREATED,
        )
        .await;
        ids.push(created["id"].as_i64().unwrap());
    }

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{}", ids[1])).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let list = expect_json(get(app, "/api/v1/projects").await, StatusCode::OK).await;
    let remaining: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();

    // Newest first; Beta is gone, order of the rest unchanged.
    assert_eq!(remaining, vec![ids[2], ids[0]]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_a_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/v1/projects/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn invoice_paid_transition_sets_paid_date(pool: PgPool) {
    let client_id = create_client(&pool, "Acme GmbH", "owner@acme.test").await;

    let app = common::build_test_app(pool.clone());
    let created = expect_json(
        post_json(
            app,
            "/api/v1/invoices",
            json!({
                "invoice_number": "INV-2026-001",
                "amount": 450.0,
                "client_id": client_id,
                "status": "SENT",
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert!(created["paid_date"].is_null());

    let app = common::build_test_app(pool.clone());
    let paid = expect_json(
        put_json(
            app,
            &format!("/api/v1/invoices/{id}/status"),
            json!({ "status": "PAID" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(paid["status"], "PAID");
    assert!(paid["paid_date"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_invoice_number_returns_conflict(pool: PgPool) {
    let client_id = create_client(&pool, "Acme GmbH", "owner@acme.test").await;

    let body = json!({
        "invoice_number": "INV-2026-001",
        "amount": 100.0,
        "client_id": client_id,
    });

    let app = common::build_test_app(pool.clone());
    let first = post_json(app, "/api/v1/invoices", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let second = post_json(app, "/api/v1/invoices", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invoice_list_derives_revenue_totals(pool: PgPool) {
    let client_id = create_client(&pool, "Acme GmbH", "owner@acme.test").await;

    for (number, amount, status) in [
        ("INV-1", 100.0, "PAID"),
        ("INV-2", 250.0, "PAID"),
        ("INV-3", 80.0, "SENT"),
        ("INV-4", 999.0, "DRAFT"),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/invoices",
            json!({
                "invoice_number": number,
                "amount": amount,
                "client_id": client_id,
                "status": status,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let json = expect_json(get(app, "/api/v1/invoices").await, StatusCode::OK).await;
    assert_eq!(json["data"]["total_revenue"], 350.0);
    assert_eq!(json["data"]["total_pending"], 80.0);
    assert_eq!(json["data"]["invoices"].as_array().unwrap().len(), 4);
}
