//! # Chipselect - multi-select widget demo host
//!
//! Serves the Leptos demo page (a searchable multi-select with removable
//! chips) and the read-only user dataset it picks from.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chipselect::config::Settings;
//! use chipselect::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let dataset = Arc::new(Dataset::load(&settings.dataset)?);
//!     let _app = chipselect::create_app(dataset);
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - **dataset**: the selectable users, loaded once
//! - **adapters**: HTTP handlers (health, API, embedded UI)
//! - **config**: configuration loading and validation

pub mod adapters;
pub mod cli;
pub mod config;
pub mod dataset;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::ui_handler::UIHandler;
use crate::dataset::Dataset;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates the Axum application router.
///
/// # Arguments
///
/// * `dataset` - Users offered by the widget, shared read-only across requests
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(dataset: Arc<Dataset>) -> Router {
    let health_handler = Arc::new(HealthHandler::new(dataset.clone()));

    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let api_router = Router::new()
        .route("/users", get(api_handler::list_users))
        .with_state(ApiState { dataset });

    health_router
        .nest("/api", api_router)
        // UI endpoint (catch-all for the single page)
        .fallback(UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
