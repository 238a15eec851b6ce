use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::ContactMessageRequest;
use crate::models::ContactMessage;
use crate::utils::ValidatedJson;
use crate::AppState;

/// Stores a contact form submission and echoes it back.
#[tracing::instrument(skip(state, request))]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactMessageRequest>,
) -> Result<Json<ContactMessage>, AppError> {
    let message = ContactMessage::from(request);

    state.store.insert_contact_message(&message).await?;

    tracing::info!(contact_message_id = %message.id, "Contact message received");
    Ok(Json(message))
}
