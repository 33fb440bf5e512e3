// Axum server for the populated site
//
// Every request for the index runs one full page load: the skeleton is read
// from disk, the document is fetched fresh, and the populated page is
// returned. A failed document load still serves the skeleton.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::page::{Page, PageError};
use crate::populator::Populator;
use crate::session::PageLoad;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub populator: Populator,
    pub diagnostics: Arc<dyn Diagnostics>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self::with_diagnostics(config, Arc::new(TracingDiagnostics))
    }

    pub fn with_diagnostics(config: SiteConfig, diagnostics: Arc<dyn Diagnostics>) -> Self {
        let populator = Populator::new(config.populator.clone());
        Self {
            config: Arc::new(config),
            populator,
            diagnostics,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/health", get(health_check))
        // Stylesheets, scripts, images next to the skeleton
        .fallback_service(static_files)
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

async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let skeleton_path = &state.config.skeleton;
    let raw = tokio::fs::read_to_string(skeleton_path).await.map_err(|e| {
        AppError::Skeleton(format!("failed to read {}: {}", skeleton_path.display(), e))
    })?;
    let page = Page::parse(&raw)?;

    let load = PageLoad::new(page, state.populator.clone(), state.diagnostics.clone());
    let html = load
        .run(
            &state.config.document_source(),
            &state.config.loader_options(),
            state.config.map.enabled,
        )
        .await;

    Ok(Html(html))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Skeleton(String),
    Page(PageError),
}

impl From<PageError> for AppError {
    fn from(e: PageError) -> Self {
        AppError::Page(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let message = match self {
            AppError::Skeleton(msg) => msg,
            AppError::Page(e) => format!("invalid page skeleton: {}", e),
        };
        tracing::error!("{}", message);

        let body = Json(serde_json::json!({
            "error": message
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
