// src/config.rs
use crate::error::{AppError, AppResult};
use std::env;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Actix worker count; `None` lets actix pick one per core
    pub workers: Option<usize>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3010,
            workers: None,
        }
    }
}

impl ApiConfig {
    /// Load from the environment, reading `.env` first unless `NO_DOTENV=true`.
    pub fn from_env() -> AppResult<Self> {
        if !skip_dotenv() {
            dotenvy::dotenv().ok();
        }

        let mut config = Self::default();

        if let Ok(host) = env::var("BACKEND_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("BACKEND_PORT") {
            config.port = parse_var("BACKEND_PORT", &port)?;
        }
        if let Ok(workers) = env::var("ACTIX_WORKERS") {
            let workers: usize = parse_var("ACTIX_WORKERS", &workers)?;
            if workers == 0 {
                return Err(AppError::InvalidConfigValue {
                    key: "ACTIX_WORKERS".to_string(),
                    value: "0".to_string(),
                });
            }
            config.workers = Some(workers);
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn skip_dotenv() -> bool {
    env::var("NO_DOTENV")
        .map(|v| v.to_lowercase() == "true" || v == "1")
        .unwrap_or(false)
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:3010");
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        let err = parse_var::<u16>("BACKEND_PORT", "eighty").unwrap_err();
        assert!(matches!(err, AppError::InvalidConfigValue { .. }));
        assert_eq!(parse_var::<u16>("BACKEND_PORT", " 8080 ").unwrap(), 8080);
    }
}
