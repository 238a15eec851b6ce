use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: super::timestamp::now(),
        }
    }
}
