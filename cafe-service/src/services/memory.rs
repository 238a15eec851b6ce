use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::store::CafeStore;
use crate::models::{ContactMessage, Reservation, StatusCheck};

/// Process-local store for tests and for running without MongoDB.
/// Documents are kept in insertion order and lost on restart.
#[derive(Default)]
pub struct InMemoryStore {
    status_checks: RwLock<Vec<StatusCheck>>,
    reservations: RwLock<Vec<Reservation>>,
    contact_messages: RwLock<Vec<ContactMessage>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored contact messages. There is no HTTP read path for these.
    pub fn contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        Ok(read(&self.contact_messages)?.clone())
    }
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, AppError> {
    lock.read()
        .map_err(|_| AppError::InternalError(anyhow::anyhow!("In-memory store lock poisoned")))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, AppError> {
    lock.write()
        .map_err(|_| AppError::InternalError(anyhow::anyhow!("In-memory store lock poisoned")))
}

fn take_limited<T: Clone>(documents: &[T], limit: i64) -> Vec<T> {
    let limit = usize::try_from(limit).unwrap_or(0);
    documents.iter().take(limit).cloned().collect()
}

#[async_trait]
impl CafeStore for InMemoryStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        write(&self.status_checks)?.push(check.clone());
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        Ok(take_limited(&read(&self.status_checks)?, limit))
    }

    async fn insert_reservation(&self, reservation: &Reservation) -> Result<(), AppError> {
        write(&self.reservations)?.push(reservation.clone());
        Ok(())
    }

    async fn list_reservations(&self, limit: i64) -> Result<Vec<Reservation>, AppError> {
        Ok(take_limited(&read(&self.reservations)?, limit))
    }

    async fn find_reservation(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        Ok(read(&self.reservations)?
            .iter()
            .find(|reservation| reservation.id == id)
            .cloned())
    }

    async fn insert_contact_message(&self, message: &ContactMessage) -> Result<(), AppError> {
        write(&self.contact_messages)?.push(message.clone());
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn close(&self) {}
}
