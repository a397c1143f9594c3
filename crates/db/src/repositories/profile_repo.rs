//! Repository for the `profiles` table.

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::profile::{ClientRef, CreateProfile, Profile, UpdateProfile};
use crate::models::status::UserRole;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, role, company, phone, country, image, created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile, returning the created row.
    ///
    /// If `role` is `None` in the input, defaults to CLIENT.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (name, email, role, company, phone, country)
             VALUES ($1, $2, COALESCE($3, 'CLIENT'::user_role), $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.role)
            .bind(&input.company)
            .bind(&input.phone)
            .bind(&input.country)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List CLIENT-role profiles as slim selector rows, ordered by name.
    pub async fn list_clients(pool: &PgPool) -> Result<Vec<ClientRef>, sqlx::Error> {
        sqlx::query_as::<_, ClientRef>(
            "SELECT id, name, email FROM profiles WHERE role = 'CLIENT' ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Update a profile. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                name = COALESCE($2, name),
                company = COALESCE($3, company),
                phone = COALESCE($4, phone),
                country = COALESCE($5, country),
                image = COALESCE($6, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.company)
            .bind(&input.phone)
            .bind(&input.country)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// ID of the first ADMIN profile, if any. Used for routing
    /// new-order notification messages.
    pub async fn first_admin(pool: &PgPool) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM profiles WHERE role = $1 ORDER BY id ASC LIMIT 1")
            .bind(UserRole::Admin)
            .fetch_optional(pool)
            .await
    }

    /// Number of CLIENT-role profiles.
    pub async fn count_clients(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE role = 'CLIENT'")
            .fetch_one(pool)
            .await
    }
}
