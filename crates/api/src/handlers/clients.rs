//! Handlers for the `/clients` resource (CLIENT-role profiles).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use kreatif_core::error::CoreError;
use kreatif_core::types::DbId;
use kreatif_db::models::profile::{ClientRef, CreateProfile, Profile, UpdateProfile};
use kreatif_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/clients
///
/// Slim client rows for the project/invoice create-form selectors,
/// ordered by name.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ClientRef>>> {
    let clients = ProfileRepo::list_clients(&state.pool).await?;
    Ok(Json(clients))
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProfile>,
) -> AppResult<(StatusCode, Json<Profile>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let profile = ProfileRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(profile))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(profile))
}
