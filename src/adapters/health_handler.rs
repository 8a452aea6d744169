use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dataset::Dataset;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Number of selectable users served by `/api/users`
    pub entries: usize,
}

pub struct HealthHandler {
    dataset: Arc<Dataset>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            entries: self.dataset.len(),
        };

        (StatusCode::OK, Json(status))
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let handler = HealthHandler::new(Arc::new(Dataset::bundled().unwrap()));

        let response = handler.health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_live_endpoint() {
        let handler = HealthHandler::new(Arc::new(Dataset::default()));

        let response = handler.live().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
