//! Integration tests for the template catalog endpoints, run against
//! the seeded catalog (10 categories, 20 templates, 2 per category).

mod common;

use axum::http::StatusCode;
use common::{expect_json, get};
use sqlx::PgPool;

async fn seeded_app(pool: &PgPool) -> axum::Router {
    kreatif_db::seed::seed_catalog(pool)
        .await
        .expect("seed failed");
    common::build_test_app(pool.clone())
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn categories_are_listed_in_sort_order(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let json = expect_json(
        get(app, "/api/v1/catalog/categories").await,
        StatusCode::OK,
    )
    .await;

    let categories = json.as_array().unwrap();
    assert_eq!(categories.len(), 10);
    assert_eq!(categories[0]["slug"], "restaurant");
    assert_eq!(categories[9]["slug"], "technology");
}

// ---------------------------------------------------------------------------
// Templates: unfiltered + category filter + search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn all_templates_listed_without_filter(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let json = expect_json(get(app, "/api/v1/catalog/templates").await, StatusCode::OK).await;

    assert_eq!(json.as_array().unwrap().len(), 20);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn restaurant_filter_returns_exactly_two_templates(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let json = expect_json(
        get(app, "/api/v1/catalog/templates?category=restaurant").await,
        StatusCode::OK,
    )
    .await;

    let slugs: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["savoria-restaurant", "bistro-modern"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_returns_only_matching_templates(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let json = expect_json(
        get(app, "/api/v1/catalog/templates?q=boutique").await,
        StatusCode::OK,
    )
    .await;

    // Every returned template must contain the query in its name or
    // description. In the seed data only MarketPro Shop mentions
    // boutiques.
    for template in json.as_array().unwrap() {
        let name = template["name"].as_str().unwrap().to_lowercase();
        let description = template["description"]
            .as_str()
            .unwrap_or_default()
            .to_lowercase();
        assert!(
            name.contains("boutique") || description.contains("boutique"),
            "unexpected match: {name}"
        );
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_with_no_match_returns_empty_list(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let json = expect_json(
        get(app, "/api/v1/catalog/templates?q=zeppelin").await,
        StatusCode::OK,
    )
    .await;

    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_is_case_insensitive(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let json = expect_json(
        get(app, "/api/v1/catalog/templates?q=BISTRO").await,
        StatusCode::OK,
    )
    .await;

    let templates = json.as_array().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["slug"], "bistro-modern");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn category_and_search_combine(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let json = expect_json(
        get(
            app,
            "/api/v1/catalog/templates?category=restaurant&q=construction",
        )
        .await,
        StatusCode::OK,
    )
    .await;

    assert!(json.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Template detail by slug
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn template_detail_by_slug(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let json = expect_json(
        get(app, "/api/v1/catalog/templates/savoria-restaurant").await,
        StatusCode::OK,
    )
    .await;

    assert_eq!(json["name"], "Savoria Restaurant");
    assert_eq!(json["category_slug"], "restaurant");
    assert_eq!(json["pages_included"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_template_slug_returns_404(pool: PgPool) {
    let app = seeded_app(&pool).await;
    let response = get(app, "/api/v1/catalog/templates/no-such-template").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
