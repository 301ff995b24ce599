use lightbnb_db_postgres::PostgresConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Error-reporting compatibility switches
    #[serde(default)]
    pub compat: CompatSettings,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        let db = &self.database;
        if db.url.is_none() && db.host.is_empty() {
            return Err("database requires either 'url' or 'host' to be set".into());
        }
        if db.url.is_none() && db.database.is_empty() {
            return Err("database.database must not be empty".into());
        }
        if db.pool_size == 0 {
            return Err("database.pool_size must be > 0".into());
        }
        if self.search.default_limit == 0 {
            return Err("search.default_limit must be > 0".into());
        }
        if self.search.default_limit > self.search.max_limit {
            return Err("search.default_limit must be <= search.max_limit".into());
        }
        let lvl = self.logging.level.to_ascii_lowercase();
        let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
        if !valid_levels.contains(&lvl.as_str()) {
            return Err(format!("logging.level must be one of {valid_levels:?}"));
        }
        Ok(())
    }

    /// Clamp a requested row limit to the configured bounds.
    pub fn effective_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.search.default_limit)
            .min(self.search.max_limit)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// Full connection URL; overrides the individual parts when set
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    #[serde(default = "default_db_user")]
    pub user: String,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default = "default_db_name")]
    pub database: String,

    /// Connection pool size (maximum number of connections)
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,

    /// Acquire timeout in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    #[serde(default)]
    pub idle_timeout_ms: Option<u64>,
}

fn default_db_host() -> String {
    "localhost".into()
}
fn default_db_port() -> u16 {
    5432
}
fn default_db_user() -> String {
    "vagrant".into()
}
fn default_db_name() -> String {
    "lightbnb".into()
}
fn default_pool_size() -> u32 {
    10
}
fn default_connect_timeout() -> u64 {
    5000
}

impl DatabaseSettings {
    /// Backend configuration for these settings.
    pub fn to_postgres_config(&self) -> PostgresConfig {
        let base = match self.url {
            Some(ref url) => PostgresConfig::new(url.clone()),
            None => PostgresConfig::from_parts(
                &self.host,
                self.port,
                &self.user,
                self.password.as_deref(),
                &self.database,
            ),
        };
        base.with_pool_size(self.pool_size)
            .with_connect_timeout_ms(self.connect_timeout_ms)
            .with_idle_timeout_ms(self.idle_timeout_ms.or(base_idle_timeout()))
    }
}

fn base_idle_timeout() -> Option<u64> {
    PostgresConfig::default().idle_timeout_ms
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: None,
            database: default_db_name(),
            pool_size: default_pool_size(),
            connect_timeout_ms: default_connect_timeout(),
            idle_timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}
fn default_limit() -> u32 {
    lightbnb_storage::DEFAULT_LIMIT
}
fn default_max_limit() -> u32 {
    100
}
impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}
fn default_log_level() -> String {
    "info".into()
}
impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompatSettings {
    /// Log storage failures and print an empty result instead of failing
    #[serde(default)]
    pub lenient_errors: bool,
}

pub mod loader {
    use super::AppConfig;
    use config::{Config, Environment, File};
    use std::path::PathBuf;

    pub fn load_config(path: Option<&str>) -> Result<AppConfig, String> {
        let mut builder = Config::builder();
        let pathbuf = PathBuf::from(path.unwrap_or("lightbnb.toml"));
        if pathbuf.exists() {
            builder = builder.add_source(File::from(pathbuf));
        }
        // Environment variable overrides, e.g., LIGHTBNB__DATABASE__HOST=db
        builder = builder.add_source(
            Environment::with_prefix("LIGHTBNB")
                .try_parsing(true)
                .separator("__"),
        );
        let cfg = builder
            .build()
            .map_err(|e| format!("config build error: {e}"))?;
        let merged: AppConfig = cfg
            .try_deserialize()
            .map_err(|e| format!("config deserialize error: {e}"))?;
        merged.validate()?;
        Ok(merged)
    }
}
