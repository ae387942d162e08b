//! Configuration loading and management
//!
//! Settings come from an optional YAML file (path in `PAYMENTS_CONFIG`)
//! and are then overridden by environment variables:
//!
//! | Variable               | Field                          | Default        |
//! |------------------------|--------------------------------|----------------|
//! | `DB_DSN`               | `database.dsn`                 | empty          |
//! | `DB_MAX_CONNECTIONS`   | `database.max_connections`     | 5              |
//! | `BIND_ADDR`            | `server.bind_addr`             | `0.0.0.0:8080` |
//! | `REQUEST_TIMEOUT_SECS` | `server.request_timeout_secs`  | 15             |
//! | `BODY_LIMIT_BYTES`     | `server.body_limit_bytes`      | 2 MiB          |

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "PAYMENTS_CONFIG";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },

    #[error("invalid database DSN: {0}")]
    InvalidDsn(String),
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// Per-request deadline in seconds
    pub request_timeout_secs: u64,

    /// Largest accepted request body; bigger bodies are answered with 413
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 15,
            body_limit_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Relational store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string, either `postgres://...` or libpq `key=value` pairs
    pub dsn: String,

    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: String::new(),
            max_connections: 5,
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `PAYMENTS_CONFIG` (if set) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_yaml_file(path.trim())?,
            _ => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up by variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dsn) = lookup("DB_DSN") {
            self.database.dsn = dsn;
        }
        if let Some(value) = lookup("DB_MAX_CONNECTIONS") {
            self.database.max_connections = parse_number("DB_MAX_CONNECTIONS", &value)?;
        }
        if let Some(addr) = lookup("BIND_ADDR") {
            self.server.bind_addr = addr;
        }
        if let Some(value) = lookup("REQUEST_TIMEOUT_SECS") {
            self.server.request_timeout_secs = parse_number("REQUEST_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = lookup("BODY_LIMIT_BYTES") {
            self.server.body_limit_bytes = parse_number("BODY_LIMIT_BYTES", &value)?;
        }

        self.database.dsn = normalize_dsn(&self.database.dsn);
        Ok(self)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Trim the DSN and default TLS off when no `sslmode` is given
///
/// An empty DSN is left empty.
pub fn normalize_dsn(dsn: &str) -> String {
    let dsn = dsn.trim();
    if dsn.is_empty() || dsn.contains("sslmode=") {
        return dsn.to_string();
    }

    if is_url_dsn(dsn) {
        let separator = if dsn.contains('?') { '&' } else { '?' };
        format!("{}{}sslmode=disable", dsn, separator)
    } else {
        format!("{} sslmode=disable", dsn)
    }
}

fn is_url_dsn(dsn: &str) -> bool {
    dsn.starts_with("postgres://") || dsn.starts_with("postgresql://")
}

#[cfg(feature = "postgres")]
impl DatabaseConfig {
    /// Build sqlx connect options from the DSN
    ///
    /// URL DSNs are handed to sqlx as-is; `key=value` DSNs are parsed here
    /// since sqlx only understands the URL form.
    pub fn connect_options(&self) -> Result<sqlx::postgres::PgConnectOptions, ConfigError> {
        use sqlx::postgres::{PgConnectOptions, PgSslMode};

        let dsn = self.dsn.trim();
        if dsn.is_empty() {
            return Err(ConfigError::InvalidDsn("DB_DSN is not set".to_string()));
        }
        if is_url_dsn(dsn) {
            return dsn
                .parse::<PgConnectOptions>()
                .map_err(|e| ConfigError::InvalidDsn(e.to_string()));
        }

        let mut opts = PgConnectOptions::new();
        for (key, value) in parse_keyword_dsn(dsn)? {
            let value = value.as_str();
            opts = match key.as_str() {
                "host" => opts.host(value),
                "port" => opts.port(parse_number("port", value)?),
                "user" => opts.username(value),
                "password" => opts.password(value),
                "dbname" => opts.database(value),
                "sslmode" => opts.ssl_mode(
                    value
                        .parse::<PgSslMode>()
                        .map_err(|e| ConfigError::InvalidDsn(e.to_string()))?,
                ),
                "application_name" => opts.application_name(value),
                other => {
                    tracing::warn!("Ignoring unsupported DSN keyword '{}'", other);
                    opts
                }
            };
        }
        Ok(opts)
    }
}

/// Split a libpq keyword/value DSN (`host=db user=app`) into pairs
///
/// Values may be single-quoted to carry spaces; inside quotes `\'` and
/// `\\` escape a quote and a backslash.
pub fn parse_keyword_dsn(dsn: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let mut pairs = Vec::new();
    let mut chars = dsn.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            return Ok(pairs);
        }

        let mut key = String::new();
        while let Some(c) = chars.next_if(|c| *c != '=' && !c.is_whitespace()) {
            key.push(c);
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if key.is_empty() || chars.next() != Some('=') {
            return Err(ConfigError::InvalidDsn(format!(
                "malformed segment near '{}'",
                key
            )));
        }
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut value = String::new();
        if chars.next_if_eq(&'\'').is_some() {
            loop {
                match chars.next() {
                    Some('\'') => break,
                    Some('\\') => value.extend(chars.next()),
                    Some(c) => value.push(c),
                    None => {
                        return Err(ConfigError::InvalidDsn(format!(
                            "unterminated quoted value for '{}'",
                            key
                        )));
                    }
                }
            }
        } else {
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                value.push(c);
            }
        }

        pairs.push((key, value));
    }
}
