use std::fs;
use tracing::{debug, error, info};

use crate::types::portal_config::{AppConfig, ConfigError};

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    info!("Loading configuration from: {}", path);

    let contents = fs::read_to_string(path)?;
    debug!("Processing file: {}", path);

    if contents.trim().is_empty() {
        error!("Configuration file is empty");
        return Err(ConfigError::InvalidConfig("empty file".into()));
    }

    let config: AppConfig = toml::from_str(&contents)?;

    info!("Configuration loaded successfully");
    debug!("Config: {:?}", config);

    validate_config(&config)?;

    info!("Config validated");

    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // Validated against the resolved value so a bad PORTAL_API_URL env var
    // is rejected at load time, not at the first request.
    let base_url = config.api.resolved_base_url();
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::InvalidConfig(format!(
            "base_url must start with http:// or https:// (got {base_url:?})"
        )));
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::InvalidConfig(
            "timeout_secs must be greater than 0".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        if std::env::var("PORTAL_API_URL").is_err() {
            assert!(validate_config(&AppConfig::default()).is_ok());
        }
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.api.timeout_secs = 0;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfig(_))
        ));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = AppConfig::default();
        config.api.base_url = Some("ftp://files.grandhotel.example".to_string());
        if std::env::var("PORTAL_API_URL").is_err() {
            assert!(validate_config(&config).is_err());
        }
    }
}
