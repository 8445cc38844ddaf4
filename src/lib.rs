/// Movie Catalog - in-memory movie CRUD API
///
/// Serves create/read/update/delete operations over a process-local movie
/// collection as JSON over HTTP.
pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod movies;
pub mod server;

pub use error::{ApiError, ApiResult};
