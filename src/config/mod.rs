use config::{ConfigError, Environment};
use serde::Deserialize;

// Top-level configuration, grouped by concern
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

// Database settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                environment: "development".to_string(),
                rust_log: "movie_booking=debug,tower_http=debug".to_string(),
                log_format: LogFormat::Pretty,
            },
            database: DatabaseConfig {
                url: "sqlite://database.db".to_string(),
                pool_size: 5,
            },
            seed: SeedConfig { enabled: true },
        }
    }
}

impl Config {
    /// Reads settings from the process environment, falling back to [`Config::default`]
    /// for anything unset. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    pub(crate) fn from_source(source: Environment) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let settings = config::Config::builder()
            .set_default("host", defaults.app.host)?
            .set_default("port", i64::from(defaults.app.port))?
            .set_default("environment", defaults.app.environment)?
            .set_default("rust_log", defaults.app.rust_log)?
            .set_default("log_format", "pretty")?
            .set_default("database_url", defaults.database.url)?
            .set_default("db_pool_size", i64::from(defaults.database.pool_size))?
            .set_default("seed_movies", defaults.seed.enabled)?
            .add_source(source)
            .build()?;

        let log_format = match settings.get_string("log_format")?.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" | "text" => LogFormat::Pretty,
            other => {
                return Err(ConfigError::Message(format!(
                    "LOG_FORMAT must be pretty or json, got {other}"
                )))
            }
        };

        Ok(Config {
            app: AppConfig {
                host: settings.get_string("host")?,
                port: settings.get::<u16>("port")?,
                environment: settings.get_string("environment")?,
                rust_log: settings.get_string("rust_log")?,
                log_format,
            },
            database: DatabaseConfig {
                url: settings.get_string("database_url")?,
                pool_size: settings.get::<u32>("db_pool_size")?,
            },
            seed: SeedConfig {
                enabled: settings.get_bool("seed_movies")?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(vars))
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = Config::from_source(env_of(&[])).unwrap();
        assert_eq!(config.app.port, 5000);
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.log_format, LogFormat::Pretty);
        assert_eq!(config.database.url, "sqlite://database.db");
        assert_eq!(config.database.pool_size, 5);
        assert!(config.seed.enabled);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_source(env_of(&[
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_POOL_SIZE", "1"),
            ("LOG_FORMAT", "JSON"),
            ("SEED_MOVIES", "false"),
        ]))
        .unwrap();
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.pool_size, 1);
        assert_eq!(config.app.log_format, LogFormat::Json);
        assert!(!config.seed.enabled);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(Config::from_source(env_of(&[("PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!(Config::from_source(env_of(&[("LOG_FORMAT", "xml")])).is_err());
    }
}
