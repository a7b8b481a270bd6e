use crate::config::types::{ClientConfig, Config};
use crate::{ConfigError, ConfigResult};

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_client_config(&config.client)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_client_config(config: &ClientConfig) -> ConfigResult<()> {
    validate_user_agent(&config.user_agent)?;

    if config.timeout_seconds == Some(0) {
        return Err(ConfigError::Validation(
            "timeout-seconds must be >= 1 when set".to_string(),
        ));
    }

    if config.connect_timeout_seconds == Some(0) {
        return Err(ConfigError::Validation(
            "connect-timeout-seconds must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates a User-Agent header value
fn validate_user_agent(user_agent: &str) -> ConfigResult<()> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if user_agent.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "user-agent must not contain control characters, got {:?}",
            user_agent
        )));
    }

    Ok(())
}
