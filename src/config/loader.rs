//! Configuration loading from the process environment.

use std::env;

use crate::config::schema::AppConfig;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(raw) => {
                write!(f, "PORT must be a valid TCP port, got {:?}", raw)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from the process environment.
///
/// Recognized variables:
/// - `PORT` — listener port (default 3000)
/// - `API_KEY` — shared secret for the `x-api-key` header
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    from_vars(env::var("PORT").ok(), env::var("API_KEY").ok())
}

/// Build a config from raw variable values. Split out so tests can drive it
/// without touching the real environment.
fn from_vars(port: Option<String>, api_key: Option<String>) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Some(raw) = port {
        config.listener.port = raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw))?;
    }

    // An empty API_KEY is treated the same as an unset one.
    config.auth.api_key = api_key.filter(|k| !k.is_empty());

    if config.auth.api_key.is_none() {
        tracing::warn!(
            "API_KEY is not set; all /api requests will be rejected with 401"
        );
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_with_empty_env() {
        let config = from_vars(None, None).unwrap();
        assert_eq!(config.listener.port, 3000);
        assert_eq!(config.listener.bind_address, "0.0.0.0");
        assert!(config.auth.api_key.is_none());
    }

    #[test]
    fn test_port_and_key_from_env() {
        let config = from_vars(Some("8080".into()), Some("secret".into())).unwrap();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.auth.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_empty_api_key_treated_as_unset() {
        let config = from_vars(None, Some(String::new())).unwrap();
        assert!(config.auth.api_key.is_none());
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(from_vars(Some("not-a-port".into()), None).is_err());
        assert!(from_vars(Some("70000".into()), None).is_err());
    }
}
