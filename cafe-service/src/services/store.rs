use async_trait::async_trait;
use service_core::error::AppError;

use crate::models::{ContactMessage, Reservation, StatusCheck};

/// Upper bound on documents returned by any list operation.
pub const MAX_LIST_RESULTS: i64 = 1000;

/// Persistence seam for the API. Every request performs at most one call.
///
/// Implementations must be safe to share across concurrent requests.
/// List operations return at most `limit` documents in store-native order.
#[async_trait]
pub trait CafeStore: Send + Sync {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError>;

    /// At most `limit` checks; a non-positive limit yields none.
    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError>;

    async fn insert_reservation(&self, reservation: &Reservation) -> Result<(), AppError>;

    /// At most `limit` reservations; a non-positive limit yields none.
    async fn list_reservations(&self, limit: i64) -> Result<Vec<Reservation>, AppError>;

    async fn find_reservation(&self, id: &str) -> Result<Option<Reservation>, AppError>;

    async fn insert_contact_message(&self, message: &ContactMessage) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    /// Release the underlying connection. Called once at shutdown.
    async fn close(&self);
}
