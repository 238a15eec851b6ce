use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStatusCheckRequest {
    pub client_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 10, max = 15, message = "Phone must be 10 to 15 characters"))]
    pub phone: String,
    pub date: String,
    pub time: String,
    #[validate(range(min = 1, max = 20, message = "Guests must be between 1 and 20"))]
    pub guests: i32,
    #[serde(default)]
    #[validate(length(max = 500, message = "Special requests must be at most 500 characters"))]
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessageRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2 to 100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 10, max = 1000, message = "Message must be 10 to 1000 characters"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}
