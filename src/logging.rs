/// Tracing subscriber setup
use crate::{
    config::LoggingConfig,
    error::{ApiError, ApiResult},
};
use std::{
    fs::{File, OpenOptions},
    io,
    path::Path,
    sync::Arc,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// Logs go to stdout, and additionally to `config.file` when one is set.
pub fn init(config: &LoggingConfig) -> ApiResult<()> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match &config.file {
        Some(path) => {
            let file = open_log_file(path)?;
            Some(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| ApiError::Internal(format!("Failed to install logger: {}", e)))?;

    if let Some(path) = &config.file {
        tracing::info!(file = %path.display(), "logging to file");
    }

    Ok(())
}

/// Open a log file for appending, creating it if needed
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
