//! HTTP API server.
//!
//! Exposes the product gateway as a small JSON HTTP API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/filter` | List/filter products (`maxPrice`, `minPrice`, `size`, `highlight`) |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! All error responses share one body shape:
//!
//! ```json
//! { "error": { "code": "upstream_unavailable", "message": "upstream catalog returned status 503" } }
//! ```
//!
//! Error codes: `upstream_unavailable` (the upstream's status when known,
//! otherwise 502) and `internal` (500). An empty upstream catalog is not an
//! error — it yields `200` with an empty `products` array.
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted to support browser-based
//! storefront clients.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::config::Config;
use crate::models::{FilterResponse, ProductQuery};
use crate::service::ProductService;
use crate::source::{HttpCatalogSource, SourceError};

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    service: Arc<ProductService>,
}

/// Starts the HTTP server.
///
/// Binds to the address configured in `[server].bind` and serves until the
/// process is terminated. This is the entry point used by `pgw serve`.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let source = HttpCatalogSource::new(&config.upstream)?;
    let service = Arc::new(ProductService::new(Arc::new(source)));
    let app = router(service);

    println!(
        "product gateway listening on http://{}",
        config.server.bind
    );

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the axum application.
///
/// Separated from [`run_server`] so tests can drive the router in-process
/// with a substitute [`crate::source::CatalogSource`].
pub fn router(service: Arc<ProductService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/filter", get(handle_filter))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(AppState { service })
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Inner error detail with a machine-readable code and human-readable message.
#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// Maps a catalog fetch failure to the client-visible error response.
///
/// An upstream status is passed through when known; transport failures
/// become a 502; anything else is a generic 500.
fn classify_source_error(err: &SourceError) -> AppError {
    let message = err.to_string();
    match err {
        SourceError::Unavailable { status } => AppError {
            status: StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            code: "upstream_unavailable".to_string(),
            message,
        },
        SourceError::Transport(_) => AppError {
            status: StatusCode::BAD_GATEWAY,
            code: "upstream_unavailable".to_string(),
            message,
        },
        SourceError::Decode(_) => AppError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal".to_string(),
            message,
        },
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /filter ============

/// Handler for `GET /filter`.
///
/// All query parameters are optional; with none supplied the full catalog is
/// returned together with its facets.
async fn handle_filter(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<FilterResponse>, AppError> {
    let response = state.service.filter(&query).await.map_err(|e| {
        error!(error = %e, "filter request failed");
        classify_source_error(&e)
    })?;

    Ok(Json(response))
}
