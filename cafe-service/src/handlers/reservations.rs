use axum::{
    extract::{Path, State},
    Json,
};
use service_core::error::AppError;

use crate::dtos::CreateReservationRequest;
use crate::models::Reservation;
use crate::services::MAX_LIST_RESULTS;
use crate::utils::ValidatedJson;
use crate::AppState;

#[tracing::instrument(skip(state, request))]
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<Json<Reservation>, AppError> {
    let reservation = Reservation::from(request);

    state.store.insert_reservation(&reservation).await?;

    tracing::info!(
        reservation_id = %reservation.id,
        date = %reservation.date,
        time = %reservation.time,
        guests = reservation.guests,
        "Reservation created"
    );

    Ok(Json(reservation))
}

#[tracing::instrument(skip(state))]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reservation>>, AppError> {
    let reservations = state.store.list_reservations(MAX_LIST_RESULTS).await?;
    Ok(Json(reservations))
}

#[tracing::instrument(skip(state))]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<String>,
) -> Result<Json<Reservation>, AppError> {
    let reservation = state
        .store
        .find_reservation(&reservation_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Reservation not found")))?;

    Ok(Json(reservation))
}
