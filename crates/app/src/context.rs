//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, HealthCheck},
    products::{MongoProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to document store")]
    Database(#[source] mongodb::error::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppContext {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>, health: Arc<dyn HealthCheck>) -> Self {
        Self { products, health }
    }

    /// Build application context from a `MongoDB` connection string.
    ///
    /// # Errors
    ///
    /// Returns an error when the URI is invalid or the store does not answer a ping.
    pub async fn from_database_uri(uri: &str, database: &str) -> Result<Self, AppInitError> {
        let db = database::connect(uri, database)
            .await
            .map_err(AppInitError::Database)?;

        db.ping().await.map_err(AppInitError::Database)?;

        info!(database = db.name(), "connected to document store");

        Ok(Self::new(
            Arc::new(MongoProductsService::new(&db)),
            Arc::new(db),
        ))
    }
}
