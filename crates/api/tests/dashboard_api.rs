//! Integration tests for the client dashboard and admin overview
//! aggregations.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get};
use sqlx::PgPool;

use kreatif_db::models::invoice::CreateInvoice;
use kreatif_db::models::message::CreateMessage;
use kreatif_db::models::profile::CreateProfile;
use kreatif_db::models::project::CreateProject;
use kreatif_db::models::status::{InvoiceStatus, ProjectStatus, TemplateTier, UserRole};
use kreatif_db::models::template_order::CreateTemplateOrder;
use kreatif_db::repositories::{
    InvoiceRepo, MessageRepo, ProfileRepo, ProjectRepo, TemplateOrderRepo,
};

async fn create_profile(pool: &PgPool, name: &str, email: &str, role: UserRole) -> i64 {
    ProfileRepo::create(
        pool,
        &CreateProfile {
            name: name.to_string(),
            email: email.to_string(),
            role: Some(role),
            company: None,
            phone: None,
            country: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn create_project(pool: &PgPool, client_id: i64, name: &str, status: ProjectStatus) -> i64 {
    let project = ProjectRepo::create(
        pool,
        &CreateProject {
            name: name.to_string(),
            description: None,
            status: Some(status),
            tier: None,
            url: None,
            client_id,
        },
    )
    .await
    .unwrap();
    project.id
}

async fn create_invoice(pool: &PgPool, client_id: i64, number: &str, status: InvoiceStatus) {
    InvoiceRepo::create(
        pool,
        &CreateInvoice {
            invoice_number: number.to_string(),
            amount: 100.0,
            currency: None,
            status: Some(status),
            description: None,
            due_date: None,
            client_id,
            project_id: None,
        },
    )
    .await
    .unwrap();
}

async fn place_order(pool: &PgPool, client_id: i64, business: &str) {
    kreatif_db::seed::seed_catalog(pool).await.unwrap();
    let template_id: i64 = sqlx::query_scalar("SELECT id FROM templates WHERE slug = $1")
        .bind("bistro-modern")
        .fetch_one(pool)
        .await
        .unwrap();
    TemplateOrderRepo::create(
        pool,
        &CreateTemplateOrder {
            template_id,
            tier: TemplateTier::Starter,
            client_id: Some(client_id),
            business_name: business.to_string(),
            business_industry: None,
            contact_name: "Contact".to_string(),
            contact_email: "contact@example.test".to_string(),
            contact_phone: None,
            brand_colors: serde_json::json!({}),
            logo_url: None,
            images: vec![],
            business_description: None,
            special_requests: None,
            business_address: None,
            business_hours: None,
            business_services: None,
            business_slogan: None,
            locale: None,
        },
        &format!("TPL-20260101-{business}"),
        99.0,
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Client dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn active_projects_exclude_completed_and_archived(pool: PgPool) {
    let client = create_profile(&pool, "Alice", "alice@example.test", UserRole::Client).await;

    for (name, status) in [
        ("p1", ProjectStatus::Pending),
        ("p2", ProjectStatus::InProgress),
        ("p3", ProjectStatus::Review),
        ("p4", ProjectStatus::Completed),
        ("p5", ProjectStatus::Archived),
    ] {
        create_project(&pool, client, name, status).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        get(app, &format!("/api/v1/clients/{client}/dashboard")).await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(json["data"]["stats"]["active_projects"], 3);
    // Recent projects are capped at 3 regardless of the fetch size.
    assert_eq!(json["data"]["recent_projects"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_counts_are_scoped_to_the_client(pool: PgPool) {
    let alice = create_profile(&pool, "Alice", "alice@example.test", UserRole::Client).await;
    let bob = create_profile(&pool, "Bob", "bob@example.test", UserRole::Client).await;

    create_project(&pool, alice, "alice-project", ProjectStatus::InProgress).await;
    create_project(&pool, bob, "bob-project", ProjectStatus::InProgress).await;

    create_invoice(&pool, alice, "INV-A1", InvoiceStatus::Sent).await;
    create_invoice(&pool, alice, "INV-A2", InvoiceStatus::Overdue).await;
    create_invoice(&pool, alice, "INV-A3", InvoiceStatus::Paid).await;
    create_invoice(&pool, bob, "INV-B1", InvoiceStatus::Sent).await;

    MessageRepo::create(
        &pool,
        &CreateMessage {
            subject: None,
            content: "Welcome".to_string(),
            from_admin: true,
            user_id: alice,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        get(app, &format!("/api/v1/clients/{alice}/dashboard")).await,
        StatusCode::OK,
    )
    .await;

    let stats = &json["data"]["stats"];
    assert_eq!(stats["active_projects"], 1);
    // Only SENT and OVERDUE count; PAID and Bob's invoice do not.
    assert_eq!(stats["pending_invoices"], 2);
    assert_eq!(stats["unread_messages"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn template_orders_stat_is_the_capped_fetch_length(pool: PgPool) {
    let client = create_profile(&pool, "Alice", "alice@example.test", UserRole::Client).await;

    for suffix in ["AAAA", "BBBB", "CCCC", "DDDD"] {
        place_order(&pool, client, suffix).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = expect_json(
        get(app, &format!("/api/v1/clients/{client}/dashboard")).await,
        StatusCode::OK,
    )
    .await;

    // Four orders exist, but the stat reflects the limit-3 fetch.
    assert_eq!(json["data"]["stats"]["template_orders"], 3);
    assert_eq!(
        json["data"]["recent_template_orders"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}

// ---------------------------------------------------------------------------
// Admin overview
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_overview_aggregates_across_clients(pool: PgPool) {
    let alice = create_profile(&pool, "Alice", "alice@example.test", UserRole::Client).await;
    let bob = create_profile(&pool, "Bob", "bob@example.test", UserRole::Client).await;
    create_profile(&pool, "Admin", "admin@kreatif.test", UserRole::Admin).await;

    create_project(&pool, alice, "open", ProjectStatus::InProgress).await;
    create_project(&pool, bob, "done", ProjectStatus::Completed).await;
    create_invoice(&pool, alice, "INV-1", InvoiceStatus::Sent).await;
    MessageRepo::create(
        &pool,
        &CreateMessage {
            subject: None,
            content: "Help".to_string(),
            from_admin: false,
            user_id: alice,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool.clone());
    let json = expect_json(get(app, "/api/v1/admin/overview").await, StatusCode::OK).await;

    let data = &json["data"];
    // Admin profiles are not clients.
    assert_eq!(data["total_clients"], 2);
    assert_eq!(data["active_projects"], 1);
    assert_eq!(data["pending_invoices"], 1);
    assert_eq!(data["unread_messages"], 1);
    assert_eq!(data["new_contacts"], 0);
    assert_eq!(data["open_template_orders"], 0);
}
