//! Shared types for the Web UI
//!
//! These types mirror the host API response structures.

use serde::{Deserialize, Serialize};

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// A selectable user; `name` is the unique key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "image")]
    pub image_url: String,
    pub email: String,
}
