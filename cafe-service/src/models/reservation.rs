use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dtos::CreateReservationRequest;

/// Status every new reservation starts in. Nothing in the API changes it.
pub const DEFAULT_RESERVATION_STATUS: &str = "pending";

fn default_status() -> String {
    DEFAULT_RESERVATION_STATUS.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub guests: i32,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl From<CreateReservationRequest> for Reservation {
    fn from(request: CreateReservationRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            phone: request.phone,
            date: request.date,
            time: request.time,
            guests: request.guests,
            special_requests: request.special_requests.unwrap_or_default(),
            status: default_status(),
            created_at: super::timestamp::now(),
        }
    }
}
