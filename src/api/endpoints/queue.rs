//! Queue endpoint.
//!
//! `GET /api/queue?date=&urgency=&specialization=` returns the ranked
//! queue plus today's statistics.

use axum::extract::{Query, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::RawFilter;
use crate::queue::{parse_filter, QueueService, QueueSnapshot};

pub async fn snapshot(
    State(ctx): State<ApiContext>,
    Query(raw): Query<RawFilter>,
) -> Result<Json<QueueSnapshot>, ApiError> {
    let today = ctx.today();
    let spec = parse_filter(&raw, today)?;

    let store = ctx.store.clone();
    let snapshot = tokio::task::spawn_blocking(move || {
        QueueService::new(&*store).run_query_on(&spec, today)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("queue query task failed: {e}")))??;

    Ok(Json(snapshot))
}
