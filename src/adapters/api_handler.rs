//! REST API handlers for the Web UI
//!
//! Only exposes the read-only dataset; selection state never leaves the browser.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dataset::{Dataset, Entry};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub dataset: Arc<Dataset>,
}

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// GET /api/users - List selectable users in dataset order
pub async fn list_users(State(state): State<ApiState>) -> impl IntoResponse {
    let users: Vec<Entry> = state.dataset.entries().to_vec();
    (StatusCode::OK, Json(ApiResponse::success(users)))
}
