use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Absolute session lifetime in days.
    pub session_ttl_days: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let session_ttl_days = match std::env::var("SESSION_TTL_DAYS") {
            Ok(raw) => raw.parse::<i64>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "SESSION_TTL_DAYS".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => 30,
        };

        Ok(Self {
            database_url,
            bind_addr,
            session_ttl_days,
        })
    }
}
