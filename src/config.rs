//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_DATABASE_PATH: &str = "athlete_data.db";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (`:memory:` for an in-memory store)
    pub database_path: String,
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let database_path = env::var("DATABASE_PATH")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        if database_path.is_empty() {
            return Err(ConfigError::Invalid {
                name: "DATABASE_PATH",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            database_path,
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
        })
    }

    /// Configuration for tests: in-memory store, default port.
    pub fn test_default() -> Self {
        Self {
            database_path: ":memory:".to_string(),
            ..Self::default()
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("DATABASE_PATH", "/tmp/workouts.db");
        env::set_var("PORT", "not-a-port");
        env::remove_var("FRONTEND_URL");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.database_path, "/tmp/workouts.db");
        assert_eq!(config.port, 5000);
        assert_eq!(config.frontend_url, "http://localhost:5173");

        env::remove_var("DATABASE_PATH");
        env::remove_var("PORT");
    }

    #[test]
    fn test_default_config_for_tests_is_in_memory() {
        let config = Config::test_default();
        assert_eq!(config.database_path, ":memory:");
        assert_eq!(config.port, 5000);
    }
}
