//! Project entity model and DTOs.

use chrono::NaiveDate;
use kreatif_core::dashboard::ProjectSummary;
use kreatif_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::ProjectStatus;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub tier: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub client_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project row joined with its client's name and email.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectWithClient {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub tier: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub client_id: DbId,
    pub client_name: String,
    pub client_email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. A name and a client are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    /// Defaults to PENDING if omitted.
    pub status: Option<ProjectStatus>,
    pub tier: Option<String>,
    pub url: Option<String>,
    #[validate(range(min = 1))]
    pub client_id: DbId,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tier: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl ProjectSummary for Project {
    fn is_open(&self) -> bool {
        self.status.is_open()
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
