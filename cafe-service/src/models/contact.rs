use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dtos::ContactMessageRequest;

/// A stored contact form submission. Written once, never read back by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessageRequest> for ContactMessage {
    fn from(request: ContactMessageRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            message: request.message,
            created_at: super::timestamp::now(),
        }
    }
}
