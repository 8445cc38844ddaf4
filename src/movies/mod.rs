/// Movie catalog domain
///
/// The record store, the resource manager that owns it, and the movie models.
mod manager;
pub mod models;
pub mod store;

pub use manager::MovieManager;
pub use models::{sample_movies, Director, Movie, MovieRequest};
pub use store::MovieStore;
