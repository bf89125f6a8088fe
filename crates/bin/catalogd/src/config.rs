//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `catalog.toml` in the working directory. Every field has a
//! sensible default so the file is optional and a local `PostgreSQL` with
//! stock credentials works with zero configuration. Environment variables
//! take precedence over file values; a variable set to the empty string
//! counts as unset.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Bootstrap data settings.
    pub seed: SeedConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Database configuration.
///
/// `url`, when present, wins over the individual `PostgreSQL` parameters
/// and selects the backend by its scheme.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection URL (`postgres://…` or `sqlite:…`).
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Database name.
    pub name: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

/// Bootstrap data configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Insert the built-in services when the catalog is empty.
    pub enabled: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Resolved storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// `PostgreSQL` addressed by a URL.
    PostgresUrl(String),
    /// `PostgreSQL` addressed by individual parameters.
    PostgresServer {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
    },
    /// `SQLite` addressed by a `sqlite:` URL.
    Sqlite(String),
}

impl Config {
    /// Load configuration from `catalog.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override or the final configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("catalog.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|val| !val.is_empty());

        if let Some(val) = var("CATALOG_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("CATALOG_PORT") {
            self.server.port = parse_var("CATALOG_PORT", &val)?;
        }
        if let Some(val) = var("CATALOG_BIND") {
            let (host, port) = val
                .rsplit_once(':')
                .ok_or_else(|| ConfigError::InvalidVar("CATALOG_BIND", val.clone()))?;
            self.server.port = parse_var("CATALOG_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(val) = var("CATALOG_DATABASE_URL") {
            self.database.url = Some(val);
        }
        if let Some(val) = var("DB_HOST") {
            self.database.host = val;
        }
        if let Some(val) = var("DB_PORT") {
            self.database.port = parse_var("DB_PORT", &val)?;
        }
        if let Some(val) = var("DB_USER") {
            self.database.user = val;
        }
        if let Some(val) = var("DB_PASSWORD") {
            self.database.password = val;
        }
        if let Some(val) = var("DB_NAME") {
            self.database.name = val;
        }
        if let Some(val) = var("DB_MAX_CONNECTIONS") {
            self.database.max_connections = parse_var("DB_MAX_CONNECTIONS", &val)?;
        }
        if let Some(val) = var("CATALOG_SEED") {
            self.seed.enabled = parse_var("CATALOG_SEED", &val)?;
        }
        if let Some(val) = var("CATALOG_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "max_connections must be non-zero".to_string(),
            ));
        }
        self.database.target()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    /// Decide which backend to connect to.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when `url` has an unsupported scheme.
    pub fn target(&self) -> Result<DatabaseTarget, ConfigError> {
        match self.url.as_deref() {
            Some(url) if url.starts_with("postgres://") || url.starts_with("postgresql://") => {
                Ok(DatabaseTarget::PostgresUrl(url.to_string()))
            }
            Some(url) if url.starts_with("sqlite:") => Ok(DatabaseTarget::Sqlite(url.to_string())),
            Some(url) => Err(ConfigError::Validation(format!(
                "unsupported database url scheme: {url}"
            ))),
            None => Ok(DatabaseTarget::PostgresServer {
                host: self.host.clone(),
                port: self.port,
                user: self.user.clone(),
                password: self.password.clone(),
                name: self.name.clone(),
            }),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, val: &str) -> Result<T, ConfigError> {
    val.parse()
        .map_err(|_| ConfigError::InvalidVar(key, val.to_string()))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "services_db".to_string(),
            max_connections: 10,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "catalogd=info,catalog_app=info,catalog_adapter_http_axum=info,tower_http=debug"
                .to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// An environment variable holds an unusable value.
    #[error("invalid value for {0}: {1:?}")]
    InvalidVar(&'static str, String),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.user, "postgres");
        assert_eq!(config.database.password, "postgres");
        assert_eq!(config.database.name, "services_db");
        assert!(config.database.url.is_none());
        assert!(config.seed.enabled);
    }

    #[test]
    fn should_target_local_postgres_by_default() {
        let target = Config::default().database.target().unwrap();
        assert_eq!(
            target,
            DatabaseTarget::PostgresServer {
                host: "localhost".to_string(),
                port: 5432,
                user: "postgres".to_string(),
                password: "postgres".to_string(),
                name: "services_db".to_string(),
            }
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'
            max_connections = 4

            [seed]
            enabled = false

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url.as_deref(), Some("sqlite:test.db"));
        assert_eq!(config.database.max_connections, 4);
        assert!(!config.seed.enabled);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [database]
            host = 'db.internal'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_database_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[
                ("DB_HOST", "db.example"),
                ("DB_PORT", "5433"),
                ("DB_USER", "catalog"),
                ("DB_PASSWORD", "secret"),
                ("DB_NAME", "services_test_db"),
            ]))
            .unwrap();

        assert_eq!(config.database.host, "db.example");
        assert_eq!(config.database.port, 5433);
        assert_eq!(config.database.user, "catalog");
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.name, "services_test_db");
    }

    #[test]
    fn should_ignore_empty_env_values() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("DB_HOST", ""), ("DB_PASSWORD", "")]))
            .unwrap();

        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.password, "postgres");
    }

    #[test]
    fn should_apply_server_bind_override() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("CATALOG_BIND", "127.0.0.1:3001")]))
            .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn should_reject_unparsable_port_override() {
        let mut config = Config::default();
        let result = config.apply_env_overrides(env(&[("DB_PORT", "five")]));
        assert!(matches!(result, Err(ConfigError::InvalidVar("DB_PORT", _))));
    }

    #[test]
    fn should_prefer_rust_log_over_catalog_log() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("CATALOG_LOG", "warn"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_select_backend_from_url_scheme() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("CATALOG_DATABASE_URL", "sqlite::memory:")]))
            .unwrap();
        assert_eq!(
            config.database.target().unwrap(),
            DatabaseTarget::Sqlite("sqlite::memory:".to_string())
        );

        config.database.url = Some("postgresql://u:p@h/db".to_string());
        assert_eq!(
            config.database.target().unwrap(),
            DatabaseTarget::PostgresUrl("postgresql://u:p@h/db".to_string())
        );
    }

    #[test]
    fn should_reject_unknown_url_scheme() {
        let mut config = Config::default();
        config.database.url = Some("mysql://localhost/db".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }
}
