//! Repository for the `packages` table.

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::package::{CreatePackage, Package, UpdatePackage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, description, price, currency, features, delivery_days, \
     color, popular, active, sort_order, created_at, updated_at";

/// Provides CRUD operations for packages.
pub struct PackageRepo;

impl PackageRepo {
    /// List active packages in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM packages WHERE active = TRUE ORDER BY sort_order ASC"
        );
        sqlx::query_as::<_, Package>(&query).fetch_all(pool).await
    }

    /// List all packages (admin view), in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packages ORDER BY sort_order ASC");
        sqlx::query_as::<_, Package>(&query).fetch_all(pool).await
    }

    /// Insert a new package, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePackage) -> Result<Package, sqlx::Error> {
        let query = format!(
            "INSERT INTO packages
                (slug, name, description, price, currency, features, delivery_days, color, popular, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'EUR'), $6, $7, COALESCE($8, '#BFFF00'), $9, COALESCE($10, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.currency)
            .bind(&input.features)
            .bind(input.delivery_days)
            .bind(&input.color)
            .bind(input.popular)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Update a package. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePackage,
    ) -> Result<Option<Package>, sqlx::Error> {
        let query = format!(
            "UPDATE packages SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                currency = COALESCE($5, currency),
                features = COALESCE($6, features),
                delivery_days = COALESCE($7, delivery_days),
                color = COALESCE($8, color),
                popular = COALESCE($9, popular),
                sort_order = COALESCE($10, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.currency)
            .bind(&input.features)
            .bind(input.delivery_days)
            .bind(&input.color)
            .bind(input.popular)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Flip exactly the `active` boolean.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        active: bool,
    ) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("UPDATE packages SET active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }
}
