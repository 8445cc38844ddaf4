/// Configuration management for the movie catalog
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    /// Seed the store with the sample movies at startup
    pub seed_sample_data: bool,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub version: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset
    pub level: String,
    /// Extra log destination, appended to alongside stdout
    pub file: Option<PathBuf>,
    pub debug: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ApiResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host = var("HOST").unwrap_or_else(|| "localhost".to_string());
        let port = var("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .map_err(|_| ApiError::Config("Invalid port number".to_string()))?;

        let debug = var("DEBUG").and_then(|v| parse_bool(&v)).unwrap_or(false);
        let log_file = var("LOG_FILE").map(PathBuf::from);
        let log_level = var("RUST_LOG").unwrap_or_else(|| {
            if debug {
                "movie_catalog=debug,tower_http=debug".to_string()
            } else {
                "info".to_string()
            }
        });

        let seed_sample_data = var("SEED_SAMPLE_DATA")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(true);

        Ok(ServerConfig {
            service: ServiceConfig {
                host,
                port,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: log_level,
                file: log_file,
                debug,
            },
            seed_sample_data,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.service.host.trim().is_empty() {
            return Err(ApiError::Config("Host cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Address the server binds to, as `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.service.host, self.service.port)
    }

    /// One-line description of the effective settings for the startup log
    pub fn summary(&self) -> String {
        let log_file = self
            .logging
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "Port={}, Host={}, Debug={}, LogFile={}",
            self.service.port, self.service.host, self.logging.debug, log_file
        )
    }
}

/// Parse the boolean spellings accepted for flag variables
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> ApiResult<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.service.host, "localhost");
        assert_eq!(config.service.port, 8000);
        assert_eq!(config.logging.file, None);
        assert!(!config.logging.debug);
        assert_eq!(config.logging.level, "info");
        assert!(config.seed_sample_data);
        assert_eq!(config.address(), "localhost:8000");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9090"),
            ("LOG_FILE", "/tmp/catalog.log"),
            ("DEBUG", "true"),
            ("SEED_SAMPLE_DATA", "false"),
        ])
        .unwrap();

        assert_eq!(config.address(), "0.0.0.0:9090");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/catalog.log")));
        assert!(config.logging.debug);
        assert!(config.logging.level.contains("debug"));
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = load(&[("HOST", ""), ("PORT", ""), ("LOG_FILE", "")]).unwrap();
        assert_eq!(config.address(), "localhost:8000");
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_unparsable_debug_is_false() {
        let config = load(&[("DEBUG", "maybe")]).unwrap();
        assert!(!config.logging.debug);
    }

    #[test]
    fn test_flag_spellings() {
        assert!(load(&[("DEBUG", "1")]).unwrap().logging.debug);
        assert!(load(&[("DEBUG", "TRUE")]).unwrap().logging.debug);
        assert!(!load(&[("SEED_SAMPLE_DATA", "0")]).unwrap().seed_sample_data);
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn test_rust_log_wins_over_debug() {
        let config = load(&[("DEBUG", "true"), ("RUST_LOG", "warn")]).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_summary() {
        let config = load(&[]).unwrap();
        assert_eq!(
            config.summary(),
            "Port=8000, Host=localhost, Debug=false, LogFile=-"
        );

        let config = load(&[("PORT", "9090"), ("DEBUG", "1"), ("LOG_FILE", "app.log")]).unwrap();
        assert_eq!(
            config.summary(),
            "Port=9090, Host=localhost, Debug=true, LogFile=app.log"
        );
    }

    #[test]
    fn test_validate_rejects_blank_host() {
        let mut config = load(&[]).unwrap();
        assert!(config.validate().is_ok());

        config.service.host = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
