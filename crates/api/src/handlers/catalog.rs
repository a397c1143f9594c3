//! Handlers for the public template catalog.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use kreatif_core::catalog;
use kreatif_db::models::template::TemplateWithCategory;
use kreatif_db::models::template_category::TemplateCategory;
use kreatif_db::repositories::{TemplateCategoryRepo, TemplateRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query params for `GET /catalog/templates`.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Category slug to filter by.
    pub category: Option<String>,
    /// Free-text search over template name and description.
    pub q: Option<String>,
}

/// GET /api/v1/catalog/categories
///
/// Active categories in display order. Independent of the template
/// fetch; consumers issue both concurrently and render whichever
/// succeeds.
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TemplateCategory>>> {
    let categories = TemplateCategoryRepo::list_active(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /api/v1/catalog/templates
///
/// Active templates with their categories, in display order, run
/// through the shared category/search filter predicate.
pub async fn list_templates(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> AppResult<Json<Vec<TemplateWithCategory>>> {
    let templates = TemplateRepo::list_active_with_category(&state.pool).await?;

    let raw_query = params.q.unwrap_or_default();
    let filtered: Vec<TemplateWithCategory> =
        catalog::filter(&templates, params.category.as_deref(), &raw_query)
            .into_iter()
            .cloned()
            .collect();

    Ok(Json(filtered))
}

/// GET /api/v1/catalog/templates/{slug}
pub async fn get_template(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<TemplateWithCategory>> {
    let template = TemplateRepo::find_by_slug_with_category(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Template '{slug}' not found")))?;
    Ok(Json(template))
}
