use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
    Json,
};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateEventsRequest, MonthQuery},
    responses::SuccessResponse,
};
use crate::domain::services::{month::resolve_month, reconciler::reconcile, validation::validate_batch};
use crate::error::{ApiError, AppError};
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

/// `GET /api/events?month=<name>`
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = query.map_err(|r| state.reject(AppError::validation(r.body_text())))?;

    let month = resolve_month(params.month.as_deref(), Utc::now().date_naive())
        .map_err(|e| state.reject(e))?;

    let events = state.event_repo.list_by_month(month).await
        .map_err(|e| state.reject(e))?;
    Ok(Json(events))
}

/// `POST /api/event/create`
///
/// The body is decoded as JSON whatever its `Content-Type`.
pub async fn create_events(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CreateEventsRequest = serde_json::from_slice(&body)
        .map_err(|e| state.reject(AppError::validation(format!("Invalid JSON body: {}", e))))?;

    let batch = validate_batch(payload.event.as_deref(), payload.from.as_deref(), payload.to.as_deref())
        .map_err(|violations| state.reject(AppError::Validation(violations)))?;

    let summary = reconcile(state.event_repo.as_ref(), &batch.event, &payload.dates).await
        .map_err(|e| state.reject(e))?;

    info!(
        event = %batch.event,
        from = %batch.from,
        to = %batch.to,
        upserted = summary.upserted,
        deleted = summary.deleted,
        "Reconciled event dates"
    );
    Ok(Json(SuccessResponse { success: true }))
}
