//! Specialization catalog endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::queue::list_specializations;

#[derive(Serialize)]
pub struct SpecializationsResponse {
    pub specializations: Vec<String>,
}

/// `GET /api/specializations`: every selectable specialization.
pub async fn list(
    State(ctx): State<ApiContext>,
) -> Result<Json<SpecializationsResponse>, ApiError> {
    let store = ctx.store.clone();
    let specializations = tokio::task::spawn_blocking(move || list_specializations(&*store))
        .await
        .map_err(|e| ApiError::Internal(format!("catalog task failed: {e}")))??;

    Ok(Json(SpecializationsResponse {
        specializations: specializations.into_iter().collect(),
    }))
}
