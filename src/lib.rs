pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod routes;

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::warn;

pub use config::Settings;
pub use db::{DbOperations, Store};
pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;

/// Health check endpoint handler
/// Returns server status, timestamp and whether the database answers
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = match state.store.ping().await {
        Ok(()) => "up",
        Err(e) => {
            warn!("Health check could not reach the database: {}", e);
            "down"
        }
    };

    HttpResponse::Ok()
        .content_type(error::JSON_CONTENT_TYPE)
        .json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "database": database,
        }))
}

/// Application state shared across all workers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(config: Settings, store: Arc<dyn Store>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Opens the Postgres pool described by `config.database`.
    pub async fn connect(config: Settings) -> Result<Self> {
        let store = DbOperations::connect(&config.database).await?;
        Ok(Self::new(config, Arc::new(store)))
    }

    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}
