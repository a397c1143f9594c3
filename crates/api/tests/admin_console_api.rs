//! Integration tests for the admin console surfaces: contact triage,
//! campaign editing, and payment settings.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

async fn submit_contact(pool: &PgPool, name: &str, message: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        post_json(
            app,
            "/api/v1/contacts",
            json!({
                "name": name,
                "email": format!("{}@example.test", name.to_lowercase()),
                "message": message,
            }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    json["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn contact_list_carries_per_status_counts(pool: PgPool) {
    let first = submit_contact(&pool, "Ana", "Quote please").await;
    submit_contact(&pool, "Ben", "Redesign inquiry").await;
    submit_contact(&pool, "Cem", "Partnership").await;

    let app = common::build_test_app(pool.clone());
    expect_json(
        put_json(
            app,
            &format!("/api/v1/contacts/{first}/status"),
            json!({ "status": "REPLIED" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = expect_json(get(app, "/api/v1/contacts").await, StatusCode::OK).await;

    let counts = &json["data"]["status_counts"];
    assert_eq!(counts["new"], 2);
    assert_eq!(counts["replied"], 1);
    assert_eq!(counts["read"], 0);
    assert_eq!(counts["archived"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn contact_notes_trim_and_normalize_empty_to_null(pool: PgPool) {
    let id = submit_contact(&pool, "Ana", "Quote please").await;

    let app = common::build_test_app(pool.clone());
    let noted = expect_json(
        put_json(
            app,
            &format!("/api/v1/contacts/{id}/notes"),
            json!({ "notes": "  follow up Tuesday  " }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(noted["notes"], "follow up Tuesday");

    let app = common::build_test_app(pool.clone());
    let cleared = expect_json(
        put_json(
            app,
            &format!("/api/v1/contacts/{id}/notes"),
            json!({ "notes": "   " }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert!(cleared["notes"].is_null());
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

async fn insert_campaign(pool: &PgPool, template: &str, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO campaigns (template, title) VALUES ($1, $2) RETURNING id",
    )
    .bind(template)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn toggling_active_changes_only_that_campaign(pool: PgPool) {
    let winter = insert_campaign(&pool, "winter_sale", "Winter Sale").await;
    let friday = insert_campaign(&pool, "black_friday", "Black Friday").await;

    let app = common::build_test_app(pool.clone());
    let toggled = expect_json(
        put_json(
            app,
            &format!("/api/v1/campaigns/{winter}/active"),
            json!({ "active": true }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(toggled["active"], true);

    let app = common::build_test_app(pool.clone());
    let list = expect_json(get(app, "/api/v1/campaigns").await, StatusCode::OK).await;
    for campaign in list.as_array().unwrap() {
        let expected = campaign["id"].as_i64().unwrap() == winter;
        assert_eq!(campaign["active"], expected);
        // No other field was touched by the toggle.
        if campaign["id"].as_i64().unwrap() == friday {
            assert_eq!(campaign["title"], "Black Friday");
        }
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn draft_save_pushes_the_full_field_set(pool: PgPool) {
    let id = insert_campaign(&pool, "spring_launch", "Spring Launch").await;

    let app = common::build_test_app(pool.clone());
    let saved = expect_json(
        put_json(
            app,
            &format!("/api/v1/campaigns/{id}"),
            json!({
                "title": "Spring Launch -20%",
                "description": "Twenty percent off all starter templates",
                "discount_type": "percentage",
                "discount_value": 20.0,
                "discount_code": "SPRING20",
                "banner_text": "Spring sale is live",
                "banner_color": "neo-lime",
                "cta_text": "Browse templates",
                "cta_link": "/templates",
                "placement": "banner",
                "active": true,
                "start_date": "2026-03-01T00:00:00Z",
                "end_date": null,
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(saved["title"], "Spring Launch -20%");
    assert_eq!(saved["discount_code"], "SPRING20");
    assert_eq!(saved["active"], true);
    assert!(saved["start_date"].is_string());
    assert!(saved["end_date"].is_null());
}

// ---------------------------------------------------------------------------
// Payment settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn payment_settings_merge_over_defaults(pool: PgPool) {
    // Nothing stored yet: pure defaults.
    let app = common::build_test_app(pool.clone());
    let defaults = expect_json(get(app, "/api/v1/settings/payments").await, StatusCode::OK).await;
    assert_eq!(defaults["data"]["preferences"]["currency"], "EUR");
    assert_eq!(defaults["data"]["stripe"]["enabled"], false);

    // Store a partial bank blob; missing keys keep their defaults.
    let app = common::build_test_app(pool.clone());
    expect_json(
        put_json(
            app,
            "/api/v1/settings/payments/payment_bank",
            json!({ "iban": "NL00KRTF0123456789", "enabled": true }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let merged = expect_json(get(app, "/api/v1/settings/payments").await, StatusCode::OK).await;
    assert_eq!(merged["data"]["bank"]["iban"], "NL00KRTF0123456789");
    assert_eq!(merged["data"]["bank"]["enabled"], true);
    assert_eq!(merged["data"]["bank"]["bank_name"], "");
    // Other keys are untouched.
    assert_eq!(merged["data"]["paypal"]["sandbox"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_payment_key_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/settings/payments/payment_crypto",
        json!({ "enabled": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn payment_keys_are_written_independently(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    expect_json(
        put_json(
            app,
            "/api/v1/settings/payments/payment_stripe",
            json!({ "publishable_key": "pk_test_1", "enabled": true }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    expect_json(
        put_json(
            app,
            "/api/v1/settings/payments/payment_bank",
            json!({ "iban": "NL00KRTF0123456789" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let merged = expect_json(get(app, "/api/v1/settings/payments").await, StatusCode::OK).await;
    assert_eq!(merged["data"]["stripe"]["publishable_key"], "pk_test_1");
    assert_eq!(merged["data"]["bank"]["iban"], "NL00KRTF0123456789");
}
