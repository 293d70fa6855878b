//! Application configuration loaded from environment variables.

use std::env;

/// MongoDB settings, present when MONGODB_URL is set.
#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub url: String,
    pub database: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo: Option<MongoSettings>,
    /// Legacy collaborator call: look up the caller's profile on
    /// delete/like/unlike. The result never gates the operation.
    pub profile_lookup: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mongo = env::var("MONGODB_URL").ok().map(|url| MongoSettings {
            url,
            database: env::var("MONGODB_DB").unwrap_or_else(|_| "pulse".to_string()),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            mongo,
            profile_lookup: env::var("PROFILE_LOOKUP")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
