use axum::{
    http::{header, StatusCode, Uri},
    response::IntoResponse,
};
use rust_embed::RustEmbed;

/// Trunk output of the `ui` crate. Empty until the UI has been built.
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> impl IntoResponse {
        let path = uri.path().trim_start_matches('/');

        let path = if path.is_empty() { "index.html" } else { path };

        if let Some(response) = Self::asset(path) {
            return response;
        }

        // Missing files are 404s; extension-less paths get the page itself
        if path != "index.html" && std::path::Path::new(path).extension().is_some() {
            tracing::debug!("Asset not found: {}", path);
            return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
        }

        Self::asset("index.html").unwrap_or_else(|| {
            tracing::warn!("UI bundle not built; run `trunk build` in ui/");
            (StatusCode::NOT_FOUND, "UI bundle not built").into_response()
        })
    }

    fn asset(path: &str) -> Option<axum::response::Response> {
        Asset::get(path).map(|content| {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        })
    }
}
