//! Offline catalog seeding.
//!
//! Upserts the fixed category and template catalog (keyed by slug) into
//! the database pointed at by `DATABASE_URL`. Safe to re-run.
//!
//! Usage: `cargo run --bin kreatif-seed`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kreatif_db=info,kreatif_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = kreatif_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    kreatif_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let summary = kreatif_db::seed::seed_catalog(&pool)
        .await
        .expect("Seed failed");

    tracing::info!(
        categories = summary.categories,
        templates = summary.templates,
        skipped = summary.skipped,
        "Catalog seeded"
    );
}
