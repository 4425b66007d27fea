// Axum server for the competition page
//
// Routes: `/` (rendered page), `/health`, `/assets/site.css`, `/pkg/*` (browser controller bundle)

use axum::{
    extract::OriginalUri,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::content::ContentStore;
use crate::page::{PageConfig, SectionRegistry};
use crate::web::handlers::home_page;

/// Prebuilt page stylesheet, compiled into the binary
const SITE_CSS: &str = include_str!("../assets/site.css");

// ============================================================================
// Application State
// ============================================================================

/// Immutable per-process data; every request builds its own `PageStore`
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub registry: Arc<SectionRegistry>,
    pub page_config: PageConfig,
    pub pkg_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let content = ContentStore::default()
            .with_evaluation_form_url(config.evaluation_form_url.clone());
        let registry = SectionRegistry::standard(&content.evaluation_form_url);

        tracing::info!(
            sections = registry.iter().count(),
            carousel = content.carousel_photos.len(),
            gallery = content.gallery_photos.len(),
            rules = content.rules.len(),
            "Loaded page content"
        );

        Self {
            content: Arc::new(content),
            registry: Arc::new(registry),
            page_config: PageConfig::default(),
            pkg_dir: config.pkg_dir.clone(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let controller_bundle = ServeDir::new(&state.pkg_dir);

    Router::new()
        .route("/", get(home_page))
        .route("/health", get(health_check))
        .route("/assets/site.css", get(site_stylesheet))
        .nest_service("/pkg", controller_bundle)
        .fallback(not_found)
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn site_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, Error)]
pub enum AppError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
    #[error("no such page: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
