/// Movie resource manager
///
/// Owns the record store and implements the catalog's CRUD operations:
/// validation, id assignment, timestamps and not-found handling.
use crate::{
    error::{ApiError, ApiResult, REQUIRED_FIELDS_MESSAGE},
    movies::{
        models::{sample_movies, Director, Movie, MovieRequest},
        store::MovieStore,
    },
};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

/// Movie manager
#[derive(Clone, Default)]
pub struct MovieManager {
    // Single lock guarding every store operation
    store: Arc<RwLock<MovieStore>>,
}

impl MovieManager {
    /// Create a manager over an empty store
    pub fn new() -> Self {
        Self::with_store(MovieStore::new())
    }

    pub fn with_store(store: MovieStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Create a manager seeded with the sample movies
    pub fn with_sample_movies() -> Self {
        Self::with_store(MovieStore::with_movies(sample_movies(Utc::now())))
    }

    /// Generate a new record id
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// List all movies in insertion order
    pub async fn list(&self) -> Vec<Movie> {
        self.store.read().await.list().to_vec()
    }

    /// Get a movie by id
    pub async fn get(&self, id: &str) -> ApiResult<Movie> {
        self.store
            .read()
            .await
            .find_by_id(id)
            .cloned()
            .ok_or_else(ApiError::movie_not_found)
    }

    /// Validate and store a new movie
    pub async fn create(&self, request: MovieRequest) -> ApiResult<Movie> {
        let (request, director) = validate_request(request)?;
        let movie = Movie::from_request(Self::generate_id(), request, director, Utc::now());

        let mut store = self.store.write().await;
        store.insert(movie.clone());
        tracing::info!(id = %movie.id, total = store.len(), "movie created");

        Ok(movie)
    }

    /// Replace every mutable field of an existing movie
    ///
    /// Existence is checked before the request is validated.
    pub async fn update(&self, id: &str, request: MovieRequest) -> ApiResult<Movie> {
        let mut store = self.store.write().await;
        if !store.contains(id) {
            return Err(ApiError::movie_not_found());
        }

        let (request, director) = validate_request(request)?;
        let movie = store
            .replace(id, request, director, Utc::now())
            .cloned()
            .ok_or_else(ApiError::movie_not_found)?;
        tracing::info!(id = %movie.id, "movie updated");

        Ok(movie)
    }

    /// Remove a movie
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        let mut store = self.store.write().await;
        let removed = store.remove(id).ok_or_else(ApiError::movie_not_found)?;
        tracing::info!(id = %removed.id, total = store.len(), "movie deleted");

        Ok(())
    }

    /// Whether a movie with `id` exists
    pub async fn exists(&self, id: &str) -> bool {
        self.store.read().await.contains(id)
    }

    /// Number of stored movies
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}

/// Apply the required-field policy and split out the director
fn validate_request(mut request: MovieRequest) -> ApiResult<(MovieRequest, Director)> {
    request.validate()?;
    let director = request
        .director
        .take()
        .ok_or_else(|| ApiError::InvalidInput(REQUIRED_FIELDS_MESSAGE.to_string()))?;
    Ok((request, director))
}
