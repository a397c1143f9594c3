//! Handlers for the `/packages` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use kreatif_core::error::CoreError;
use kreatif_core::types::DbId;
use kreatif_db::models::package::{CreatePackage, Package, UpdatePackage};
use kreatif_db::repositories::PackageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query params for `GET /packages`.
#[derive(Debug, Deserialize)]
pub struct PackageListQuery {
    /// Include deactivated packages (admin view).
    #[serde(default)]
    pub include_inactive: bool,
}

/// Body for `PUT /packages/{id}/active`.
#[derive(Debug, Deserialize)]
pub struct SetPackageActive {
    pub active: bool,
}

/// GET /api/v1/packages
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PackageListQuery>,
) -> AppResult<Json<Vec<Package>>> {
    let packages = if params.include_inactive {
        PackageRepo::list_all(&state.pool).await?
    } else {
        PackageRepo::list_active(&state.pool).await?
    };
    Ok(Json(packages))
}

/// POST /api/v1/packages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePackage>,
) -> AppResult<(StatusCode, Json<Package>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let package = PackageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

/// PUT /api/v1/packages/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePackage>,
) -> AppResult<Json<Package>> {
    let package = PackageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))?;
    Ok(Json(package))
}

/// PUT /api/v1/packages/{id}/active
pub async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetPackageActive>,
) -> AppResult<Json<Package>> {
    let package = PackageRepo::set_active(&state.pool, id, input.active)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))?;
    Ok(Json(package))
}
