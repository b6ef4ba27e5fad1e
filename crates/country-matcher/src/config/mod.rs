use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::data::DataSource;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data: DataSource,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3030".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            data: data_source_from_env()?,
        })
    }
}

fn data_source_from_env() -> Result<DataSource, ConfigError> {
    let kind = env::var("DATA_SOURCE").unwrap_or_else(|_| "memory".to_string());

    match kind.trim().to_ascii_lowercase().as_str() {
        "" | "memory" => Ok(DataSource::Memory),
        "csv" => Ok(DataSource::Csv {
            countries_file: required_path("DATA_COUNTRIES_FILE")?,
            aliases_file: required_path("DATA_ALIASES_FILE")?,
        }),
        "tsv" => Ok(DataSource::Tsv {
            countries_file: required_path("DATA_COUNTRIES_FILE")?,
            aliases_file: required_path("DATA_ALIASES_FILE")?,
        }),
        "json" => Ok(DataSource::JsonDirectory {
            countries_dir: required_path("DATA_COUNTRIES_DIR")?,
        }),
        _ => Err(ConfigError::UnknownDataSource { value: kind }),
    }
}

fn required_path(variable: &'static str) -> Result<PathBuf, ConfigError> {
    match env::var(variable) {
        Ok(value) if !value.trim().is_empty() => Ok(PathBuf::from(value.trim())),
        _ => Err(ConfigError::MissingDataPath { variable }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    UnknownDataSource { value: String },
    MissingDataPath { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::UnknownDataSource { value } => write!(
                f,
                "DATA_SOURCE '{}' is not one of memory, csv, tsv, json",
                value
            ),
            ConfigError::MissingDataPath { variable } => {
                write!(f, "{variable} is required for the configured DATA_SOURCE")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::UnknownDataSource { .. }
            | ConfigError::MissingDataPath { .. } => None,
        }
    }
}
