//! Handlers for the `/campaigns` resource.
//!
//! Two write paths exist on purpose: the draft save pushes every
//! editable field, the active toggle flips exactly one boolean. A
//! toggle issued while a draft edit is unsaved does not carry the
//! draft's changes; each command is idempotent over its own field set.

use axum::extract::{Path, State};
use axum::Json;

use kreatif_core::error::CoreError;
use kreatif_core::types::DbId;
use kreatif_db::models::campaign::{Campaign, SaveCampaignDraft, SetCampaignActive};
use kreatif_db::repositories::CampaignRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/campaigns
///
/// All campaigns, oldest first (stable grid order).
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Campaign>>> {
    let campaigns = CampaignRepo::list(&state.pool).await?;
    Ok(Json(campaigns))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Campaign>> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;
    Ok(Json(campaign))
}

/// PUT /api/v1/campaigns/{id}
///
/// Saves the full editable draft in one update. Date fields arrive as
/// ISO instants or null.
pub async fn save_draft(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SaveCampaignDraft>,
) -> AppResult<Json<Campaign>> {
    let campaign = CampaignRepo::update_draft(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;
    Ok(Json(campaign))
}

/// PUT /api/v1/campaigns/{id}/active
///
/// Flips only the `active` boolean, independently of the draft editor.
pub async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetCampaignActive>,
) -> AppResult<Json<Campaign>> {
    let campaign = CampaignRepo::set_active(&state.pool, id, input.active)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))?;
    Ok(Json(campaign))
}
