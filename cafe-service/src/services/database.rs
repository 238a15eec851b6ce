use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{ClientOptions, FindOneOptions, FindOptions},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

use super::store::CafeStore;
use crate::models::{ContactMessage, Reservation, StatusCheck};

pub const STATUS_CHECKS: &str = "status_checks";
pub const RESERVATIONS: &str = "reservations";
pub const CONTACT_MESSAGES: &str = "contact_messages";

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        options.app_name = Some("cafe-service".to_string());

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);

        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn status_checks(&self) -> Collection<StatusCheck> {
        self.db.collection(STATUS_CHECKS)
    }

    pub fn reservations(&self) -> Collection<Reservation> {
        self.db.collection(RESERVATIONS)
    }

    pub fn contact_messages(&self) -> Collection<ContactMessage> {
        self.db.collection(CONTACT_MESSAGES)
    }

    fn list_options(limit: i64) -> FindOptions {
        FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .limit(limit)
            .build()
    }
}

#[async_trait]
impl CafeStore for MongoStore {
    async fn insert_status_check(&self, check: &StatusCheck) -> Result<(), AppError> {
        self.status_checks()
            .insert_one(check, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert status check: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheck>, AppError> {
        let cursor = self
            .status_checks()
            .find(doc! {}, Self::list_options(limit))
            .await
            .map_err(|e| {
                tracing::error!("Failed to list status checks: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect status checks: {}", e);
            AppError::from(e)
        })
    }

    async fn insert_reservation(&self, reservation: &Reservation) -> Result<(), AppError> {
        self.reservations()
            .insert_one(reservation, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert reservation: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn list_reservations(&self, limit: i64) -> Result<Vec<Reservation>, AppError> {
        let cursor = self
            .reservations()
            .find(doc! {}, Self::list_options(limit))
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reservations: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect reservations: {}", e);
            AppError::from(e)
        })
    }

    async fn find_reservation(&self, id: &str) -> Result<Option<Reservation>, AppError> {
        let options = FindOneOptions::builder()
            .projection(doc! { "_id": 0 })
            .build();

        self.reservations()
            .find_one(doc! { "id": id }, options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find reservation: {}", e);
                AppError::from(e)
            })
    }

    async fn insert_contact_message(&self, message: &ContactMessage) -> Result<(), AppError> {
        self.contact_messages()
            .insert_one(message, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert contact message: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
