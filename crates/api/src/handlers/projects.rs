//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use kreatif_core::error::CoreError;
use kreatif_core::types::DbId;
use kreatif_db::models::project::{CreateProject, Project, ProjectWithClient, UpdateProject};
use kreatif_db::models::status::ProjectStatus;
use kreatif_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for `PUT /projects/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetProjectStatus {
    pub status: ProjectStatus,
}

/// GET /api/v1/projects
///
/// All projects with their client's name and email, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithClient>>> {
    let projects = ProjectRepo::list_with_clients(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/v1/projects
///
/// Creating requires a non-empty name and a selected client; the
/// response carries the row re-selected with its client join so callers
/// get the denormalized fields without a second fetch.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectWithClient>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    let joined = ProjectRepo::find_with_client(&state.pool, project.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project.id,
        }))?;
    Ok((StatusCode::CREATED, Json(joined)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectWithClient>> {
    let project = ProjectRepo::find_with_client(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}/status
///
/// Writes exactly the status column; any status may be set to any
/// other. The updated row is returned only after the write succeeds.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetProjectStatus>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::set_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Hard delete, irreversible. The caller is expected to have confirmed
/// with the user before issuing this.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
