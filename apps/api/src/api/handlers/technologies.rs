use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::api::errors::ApiError;
use crate::api::responses::{TechnologiesPublic, TechnologyPublic};
use crate::api::state::AppState;
use crate::domain::pagination::{Page, Pagination};

/// List technologies
///
/// GET /technologies/?skip=&limit=
pub async fn list_technologies(
    State(state): State<AppState>,
    pagination: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<TechnologiesPublic>, ApiError> {
    let Query(pagination) = pagination.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let count = state.technologies.count().await?;
    let technologies = state.technologies.list(pagination).await?;

    tracing::debug!(skip = pagination.skip, limit = pagination.limit, count, "listed technologies");

    Ok(Json(Page::new(technologies, count).map(TechnologyPublic::from)))
}

/// Get a technology by its integer key
///
/// GET /technologies/:technology_id
pub async fn get_technology(
    State(state): State<AppState>,
    technology_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TechnologyPublic>, ApiError> {
    let Path(technology_id) = technology_id.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let technology_id =
        i32::try_from(technology_id).map_err(|_| ApiError::not_found("Technology not found"))?;
    let technology = state
        .technologies
        .find_by_id(technology_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Technology not found"))?;

    Ok(Json(TechnologyPublic::from(technology)))
}
