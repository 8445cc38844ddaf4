/// /api/v1/movies endpoints
use crate::{
    api::ApiResponse,
    context::AppContext,
    error::{ApiError, ApiResult, INVALID_JSON_MESSAGE},
    movies::{Movie, MovieRequest},
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// Build movie routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/api/v1/movies", get(list_movies).post(create_movie))
        .route(
            "/api/v1/movies/:id",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
}

/// List all movies
async fn list_movies(State(ctx): State<AppContext>) -> Json<ApiResponse<Vec<Movie>>> {
    let movies = ctx.movies.list().await;
    Json(ApiResponse::success("Movies retrieved successfully", movies))
}

/// Get a single movie
async fn get_movie(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Movie>>> {
    let movie = ctx.movies.get(&id).await?;
    Ok(Json(ApiResponse::success("Movie found", movie)))
}

/// Create a movie
async fn create_movie(
    State(ctx): State<AppContext>,
    body: Bytes,
) -> ApiResult<Json<ApiResponse<Movie>>> {
    let request = decode_request(&body)?;
    let movie = ctx.movies.create(request).await?;
    Ok(Json(ApiResponse::success("Movie created successfully", movie)))
}

/// Replace a movie
async fn update_movie(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<ApiResponse<Movie>>> {
    let request = match decode_request(&body) {
        Ok(request) => request,
        Err(err) => {
            // An unknown id is reported before a bad body
            if !ctx.movies.exists(&id).await {
                return Err(ApiError::movie_not_found());
            }
            return Err(err);
        }
    };

    let movie = ctx.movies.update(&id, request).await?;
    Ok(Json(ApiResponse::success("Movie updated successfully", movie)))
}

/// Delete a movie
async fn delete_movie(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    ctx.movies.delete(&id).await?;
    Ok(Json(ApiResponse::acknowledged("Movie deleted successfully")))
}

/// Decode a movie body as JSON regardless of the declared content type
fn decode_request(body: &[u8]) -> ApiResult<MovieRequest> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        ApiError::InvalidInput(INVALID_JSON_MESSAGE.to_string())
    })
}
