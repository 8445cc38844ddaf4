/// HTTP server setup and routing
use crate::{
    api::{middleware::log_requests, ApiResponse},
    context::AppContext,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde_json::json;
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Build the main application router
/// Returns Router<()> because state is already provided
pub fn build_router(ctx: AppContext) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(api_info))
        .merge(crate::api::routes())
        .fallback(not_found)
        .with_state(ctx)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_requests))
}

/// API description handler
async fn api_info(State(ctx): State<AppContext>) -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the Movie Catalog API",
        "version": ctx.config.service.version,
        "endpoints": {
            "health": "/health",
            "movies": "/api/v1/movies",
            "movie_by_id": "/api/v1/movies/{id}"
        },
        "documentation": "See README.md for more information"
    }))
}

/// 404 handler
async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("Endpoint not found")),
    )
}

/// Start the HTTP server
pub async fn serve(ctx: AppContext) -> ApiResult<()> {
    let addr = ctx.config.address();
    let base_url = ctx.service_url();

    info!("Movie catalog listening on {}", addr);
    info!("   Health check: {}/health", base_url);
    info!("   Movies API:   {}/api/v1/movies", base_url);

    let app = build_router(ctx);

    // Create TCP listener
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    // Peer addresses feed the request logger
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
