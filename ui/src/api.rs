//! API client for the chipselect host

use crate::types::*;
use gloo_net::http::Request;

const API_BASE: &str = "/api";

/// Same file the host falls back to when no dataset is configured
const BUNDLED_USERS: &str = include_str!("../../data/users.json");

/// Fetch the selectable users
pub async fn list_users() -> Result<Vec<Entry>, String> {
    let url = format!("{}/users", API_BASE);
    fetch_json::<Vec<Entry>>(&url).await
}

/// Users compiled into the bundle, for when the page is served without the host
pub fn bundled_users() -> Vec<Entry> {
    parse_users(BUNDLED_USERS)
}

fn parse_users(json: &str) -> Vec<Entry> {
    serde_json::from_str(json).unwrap_or_else(|e| {
        log::error!("Bundled users are not valid JSON: {}", e);
        Vec::new()
    })
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
