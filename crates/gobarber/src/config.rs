use std::{env, path::PathBuf, time::Duration};

use gobarber_core::users::TokenConfig;

/// Secret used to sign tokens when `APP_SECRET` is not set.
const DEFAULT_APP_SECRET: &str = "default";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used to sign and verify JWTs (default: "default")
    pub app_secret: String,
    /// Token lifetime in seconds (default: 86,400)
    pub jwt_expires_in_seconds: u64,
    /// Public base URL used to build avatar URLs (default: "http://localhost:3333")
    pub app_api_url: String,
    /// Folder receiving uploads before they are saved (default: "tmp")
    pub tmp_folder: PathBuf,
    /// Folder holding saved uploads, served under `/files` (default: "tmp/uploads")
    pub uploads_folder: PathBuf,
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "gobarber.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `APP_SECRET` - JWT signing secret (default: "default")
    /// - `JWT_EXPIRES_IN_SECONDS` - Token lifetime (default: 86,400)
    /// - `APP_API_URL` - Public API base URL (default: "http://localhost:3333")
    /// - `TMP_FOLDER` - Upload staging folder (default: "tmp")
    /// - `UPLOADS_FOLDER` - Saved uploads folder (default: "tmp/uploads")
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "gobarber.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        let app_secret = env::var("APP_SECRET").unwrap_or_else(|_| {
            tracing::warn!("APP_SECRET is not set, signing tokens with the default secret");
            DEFAULT_APP_SECRET.to_string()
        });

        Self {
            app_secret,
            jwt_expires_in_seconds: parse_var("JWT_EXPIRES_IN_SECONDS", 86_400),
            app_api_url: env::var("APP_API_URL")
                .unwrap_or_else(|_| "http://localhost:3333".to_string()),
            tmp_folder: env::var("TMP_FOLDER")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("tmp")),
            uploads_folder: env::var("UPLOADS_FOLDER")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("tmp/uploads")),
            cache_ttl_seconds: parse_var("CACHE_TTL_SECONDS", 300),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES", 10_000),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "gobarber.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Token signing settings.
    pub fn token_config(&self) -> TokenConfig {
        TokenConfig {
            secret: self.app_secret.clone(),
            expires_in: Duration::from_secs(self.jwt_expires_in_seconds),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
