use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::CreateStatusCheckRequest;
use crate::models::StatusCheck;
use crate::services::MAX_LIST_RESULTS;
use crate::utils::ValidatedJson;
use crate::AppState;

#[tracing::instrument(skip(state, request))]
pub async fn create_status_check(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateStatusCheckRequest>,
) -> Result<Json<StatusCheck>, AppError> {
    let check = StatusCheck::new(request.client_name);

    state.store.insert_status_check(&check).await?;

    tracing::info!(status_check_id = %check.id, "Status check recorded");
    Ok(Json(check))
}

#[tracing::instrument(skip(state))]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, AppError> {
    let checks = state.store.list_status_checks(MAX_LIST_RESULTS).await?;
    Ok(Json(checks))
}
