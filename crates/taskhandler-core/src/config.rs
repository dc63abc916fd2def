//! Configuration module
//!
//! Settings are read from the process environment (and an optional `.env` file).
//! Object-store credentials are not part of this struct: each backend builder
//! picks them up from the platform's conventional variables.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::time::Duration;

use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 8090;
const BACKEND_TIMEOUT_SECS: u64 = 30;
const BUCKET_CACHE_SIZE: usize = 64;
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Console log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid log format: {}", s)),
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub location_scheme: String,
    pub local_storage_path: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub backend_timeout_secs: u64,
    pub bucket_cache_size: usize,
    /// When set, only these containers may be checked.
    pub allowed_containers: Option<Vec<String>>,
    // Request handling
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = lookup("PORT")
            .unwrap_or_else(|| SERVER_PORT.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?;

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse::<StorageBackend>()?,
            None => StorageBackend::Gcs,
        };

        let location_scheme = lookup("LOCATION_SCHEME")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| storage_backend.default_scheme().to_string());

        let s3_region = lookup("S3_REGION").or_else(|| lookup("AWS_REGION"));

        let backend_timeout_secs = lookup("BACKEND_TIMEOUT_SECS")
            .unwrap_or_else(|| BACKEND_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("BACKEND_TIMEOUT_SECS must be a valid number"))?;

        let bucket_cache_size = lookup("BUCKET_CACHE_SIZE")
            .unwrap_or_else(|| BUCKET_CACHE_SIZE.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("BUCKET_CACHE_SIZE must be a valid number"))?;

        let allowed_containers = lookup("ALLOWED_CONTAINERS")
            .map(|s| {
                s.split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty());

        let max_body_bytes = lookup("MAX_BODY_BYTES")
            .unwrap_or_else(|| MAX_BODY_BYTES.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("MAX_BODY_BYTES must be a valid number"))?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse::<LogFormat>()?,
            None => LogFormat::Compact,
        };

        Ok(Config {
            server_port,
            environment,
            storage_backend,
            location_scheme,
            local_storage_path: lookup("LOCAL_STORAGE_PATH"),
            s3_region,
            s3_endpoint: lookup("S3_ENDPOINT"),
            backend_timeout_secs,
            bucket_cache_size,
            allowed_containers,
            max_body_bytes,
            log_format,
        })
    }

    /// Check cross-field constraints. Call once at startup, before any backend is built.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        let scheme_name = self
            .location_scheme
            .strip_suffix("://")
            .ok_or_else(|| anyhow::anyhow!("LOCATION_SCHEME must end with '://'"))?;
        if scheme_name.is_empty() || scheme_name.contains('/') {
            return Err(anyhow::anyhow!(
                "LOCATION_SCHEME must look like 'gs://', got '{}'",
                self.location_scheme
            ));
        }

        match self.storage_backend {
            StorageBackend::Gcs => {}
            StorageBackend::S3 => {
                if self.s3_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
            }
        }

        if self.backend_timeout_secs == 0 {
            return Err(anyhow::anyhow!("BACKEND_TIMEOUT_SECS must be at least 1"));
        }
        if self.bucket_cache_size == 0 {
            return Err(anyhow::anyhow!("BUCKET_CACHE_SIZE must be at least 1"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_BODY_BYTES must be at least 1"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, anyhow::Error> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_port, 8090);
        assert_eq!(config.environment, "development");
        assert_eq!(config.storage_backend, StorageBackend::Gcs);
        assert_eq!(config.location_scheme, "gs://");
        assert_eq!(config.backend_timeout(), Duration::from_secs(30));
        assert_eq!(config.bucket_cache_size, 64);
        assert_eq!(config.max_body_bytes, 65536);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.allowed_containers.is_none());
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(config_from(&[("STORAGE_BACKEND", "nfs")]).is_err());
    }

    #[test]
    fn test_s3_backend_uses_s3_scheme_and_needs_region() {
        let config = config_from(&[("STORAGE_BACKEND", "s3")]).unwrap();
        assert_eq!(config.location_scheme, "s3://");
        assert!(config.validate().is_err());

        let config = config_from(&[("STORAGE_BACKEND", "s3"), ("AWS_REGION", "eu-west-1")])
            .unwrap();
        assert_eq!(config.s3_region.as_deref(), Some("eu-west-1"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_local_backend_needs_path() {
        let config = config_from(&[("STORAGE_BACKEND", "local")]).unwrap();
        assert!(config.validate().is_err());

        let config = config_from(&[
            ("STORAGE_BACKEND", "local"),
            ("LOCAL_STORAGE_PATH", "/tmp/uploads"),
        ])
        .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scheme_must_end_with_separator() {
        let config = config_from(&[("LOCATION_SCHEME", "gs:")]).unwrap();
        assert!(config.validate().is_err());

        let config = config_from(&[("LOCATION_SCHEME", "://")]).unwrap();
        assert!(config.validate().is_err());

        let config = config_from(&[("LOCATION_SCHEME", "upload://")]).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_allowed_containers_parsing() {
        let config = config_from(&[("ALLOWED_CONTAINERS", " uploads , staging,,")]).unwrap();
        assert_eq!(
            config.allowed_containers,
            Some(vec!["uploads".to_string(), "staging".to_string()])
        );

        let config = config_from(&[("ALLOWED_CONTAINERS", " , ")]).unwrap();
        assert!(config.allowed_containers.is_none());
    }

    #[test]
    fn test_zero_timeout_fails_validation() {
        let config = config_from(&[("BACKEND_TIMEOUT_SECS", "0")]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparseable_tunables_are_rejected() {
        for (key, value) in [
            ("BACKEND_TIMEOUT_SECS", "soon"),
            ("BUCKET_CACHE_SIZE", "-1"),
            ("MAX_BODY_BYTES", "64k"),
        ] {
            let err = config_from(&[(key, value)]).unwrap_err();
            assert!(err.to_string().contains(key), "{}: {}", key, err);
        }

        let config = config_from(&[("MAX_BODY_BYTES", "1024")]).unwrap();
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn test_production_environment_and_json_logs() {
        let config = config_from(&[("APP_ENV", "Production"), ("LOG_FORMAT", "json")]).unwrap();
        assert!(config.is_production());
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
