/// Application context and dependency injection
use crate::{config::ServerConfig, error::ApiResult, movies::MovieManager};
use std::sync::Arc;

/// Application context holding all shared services
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    pub movies: MovieManager,
}

impl AppContext {
    /// Create a new application context from configuration
    pub fn new(config: ServerConfig) -> ApiResult<Self> {
        config.validate()?;

        let movies = if config.seed_sample_data {
            MovieManager::with_sample_movies()
        } else {
            MovieManager::new()
        };

        Ok(Self::with_manager(config, movies))
    }

    /// Create a context around an existing manager
    pub fn with_manager(config: ServerConfig, movies: MovieManager) -> Self {
        Self {
            config: Arc::new(config),
            movies,
        }
    }

    /// Get service URL
    pub fn service_url(&self) -> String {
        format!("http://{}", self.config.address())
    }
}
