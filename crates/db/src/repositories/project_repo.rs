//! Repository for the `projects` table.

use sqlx::PgPool;

use kreatif_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectWithClient, UpdateProject};
use crate::models::status::ProjectStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, status, tier, url, start_date, end_date, notes, \
     client_id, created_at, updated_at";

/// Column list for rows joined with the client profile.
const JOINED_COLUMNS: &str =
    "p.id, p.name, p.description, p.status, p.tier, p.url, p.start_date, p.end_date, p.notes, \
     p.client_id, c.name AS client_name, c.email AS client_email, p.created_at, p.updated_at";

/// Provides CRUD and status operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to PENDING.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, status, tier, url, client_id)
             VALUES ($1, $2, COALESCE($3, 'PENDING'::project_status), $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .bind(&input.tier)
            .bind(&input.url)
            .bind(input.client_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project joined with its client's name and email.
    pub async fn find_with_client(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM projects p
             JOIN profiles c ON c.id = p.client_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, ProjectWithClient>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects with their clients, newest first.
    pub async fn list_with_clients(pool: &PgPool) -> Result<Vec<ProjectWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM projects p
             JOIN profiles c ON c.id = p.client_id
             ORDER BY p.created_at DESC"
        );
        sqlx::query_as::<_, ProjectWithClient>(&query)
            .fetch_all(pool)
            .await
    }

    /// List every project belonging to one client.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE client_id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Set a project's status. Writes exactly the status column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: ProjectStatus,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("UPDATE projects SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Update a project's editable fields. Only non-`None` fields apply.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                tier = COALESCE($4, tier),
                url = COALESCE($5, url),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                notes = COALESCE($8, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.tier)
            .bind(&input.url)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of projects in an open status (PENDING, IN_PROGRESS, REVIEW).
    pub async fn count_open(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM projects WHERE status IN ($1, $2, $3)",
        )
        .bind(ProjectStatus::Pending)
        .bind(ProjectStatus::InProgress)
        .bind(ProjectStatus::Review)
        .fetch_one(pool)
        .await
    }
}
