//! Application settings loaded from environment variables.
//!
//! Configuration is assembled once in `main` and passed down explicitly;
//! nothing in the crate reads the environment after startup. The variables
//! mirror the deployment's `.env` file: either a full `DATABASE_URL`, or the
//! `DB_*` quintet it is composed from, plus the listener address, secret key
//! and development-mode flag.

use crate::errors::{Error, Result};

/// Default MySQL port used when `DB_PORT` is not set.
const DEFAULT_DB_PORT: &str = "3306";

/// Placeholder secret shipped in `.env.example`; fine for development,
/// worth a startup warning anywhere else.
const DEFAULT_SECRET_KEY: &str = "dev_key_change_in_production";

/// Everything the application needs from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection URL handed to the database layer
    pub database_url: String,
    /// `host:port` the HTTP listener binds to
    pub listen_addr: String,
    /// Session/signing secret; carried for parity with the deployment, no
    /// business logic reads it yet
    pub secret_key: String,
    /// Development-mode flag (`DEV_MODE`, falling back to `VITE_DEV`)
    pub dev_mode: bool,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    ///
    /// Resolution order for the database URL: `DATABASE_URL` wins; otherwise
    /// a MySQL URL is composed from `DB_USERNAME`, `DB_PASSWORD`, `DB_HOST`,
    /// `DB_PORT` (default 3306) and `DB_NAME`; with neither present, a local
    /// `SQLite` file is used so a fresh checkout runs without a server.
    ///
    /// # Errors
    /// Returns `Error::Config` if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let database_url = resolve_database_url();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        port.parse::<u16>().map_err(|_| Error::Config {
            message: format!("PORT must be a number between 0 and 65535, got '{port}'"),
        })?;

        let secret_key =
            std::env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_SECRET_KEY.to_string());

        let dev_mode = std::env::var("DEV_MODE")
            .or_else(|_| std::env::var("VITE_DEV"))
            .map(|v| matches!(v.as_str(), "1" | "true" | "True"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            listen_addr: format!("{host}:{port}"),
            secret_key,
            dev_mode,
        })
    }

    /// True while the secret is still the development placeholder.
    #[must_use]
    pub fn secret_is_default(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

/// Resolves the database URL from the environment.
fn resolve_database_url() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }

    if let (Ok(host), Ok(name)) = (std::env::var("DB_HOST"), std::env::var("DB_NAME")) {
        let username = std::env::var("DB_USERNAME").unwrap_or_default();
        let password = std::env::var("DB_PASSWORD").unwrap_or_default();
        let port = std::env::var("DB_PORT").unwrap_or_else(|_| DEFAULT_DB_PORT.to_string());
        return format!("mysql://{username}:{password}@{host}:{port}/{name}");
    }

    // Local development fallback; mode=rwc creates the file on first run.
    "sqlite://data/euler_web.sqlite?mode=rwc".to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    use super::*;

    // Env-var manipulation is process-global, so these assertions stay on
    // the parsing helpers rather than mutating the test environment.

    #[test]
    fn from_env_produces_usable_defaults() {
        let config = AppConfig::from_env().expect("default config should build");
        assert!(!config.database_url.is_empty());
        assert!(config.listen_addr.contains(':'));
        assert!(!config.secret_key.is_empty());
        if std::env::var("SECRET_KEY").is_err() {
            assert!(config.secret_is_default());
        }
    }
}
