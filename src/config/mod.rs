use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub request_timeout: u64,
    pub log_level: String,
    /// Whether 500 bodies may include a stack trace. Never on in production
    /// unless set explicitly.
    pub expose_stack_traces: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let environment = env::var("ENVIRONMENT")
            .map_err(|_| anyhow::anyhow!("ENVIRONMENT environment variable is required"))?;

        let expose_stack_traces = match env::var("EXPOSE_STACK_TRACES") {
            Ok(value) => matches!(value.as_str(), "1" | "true" | "yes"),
            Err(_) => environment != "production",
        };

        Ok(Config {
            port: env::var("PORT")
                .map_err(|_| anyhow::anyhow!("PORT environment variable is required"))?
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable is required"))?,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()?,
            request_timeout: env::var("REQUEST_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            expose_stack_traces,
            environment,
        })
    }
}
