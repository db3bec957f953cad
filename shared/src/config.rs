use thiserror::Error;

use crate::message::DEFAULT_MESSAGE_TIMEOUT_MS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid message timeout {0:?}: expected milliseconds")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every API URL. Empty means same origin.
    pub api_base: String,
    pub message_timeout_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
        }
    }
}

impl BoardConfig {
    /// Build from optional raw settings. A trailing slash on the base is
    /// dropped so URLs never contain `//activities`.
    pub fn from_settings(
        api_base: Option<&str>,
        message_timeout_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base) = api_base {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = message_timeout_ms {
            config.message_timeout_ms = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::from_settings(None, None).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.api_base, "");
        assert_eq!(config.message_timeout_ms, 5000);
    }

    #[test]
    fn test_base_trailing_slash_dropped() {
        let config = BoardConfig::from_settings(Some("http://localhost:8000/"), None).unwrap();
        assert_eq!(config.api_base, "http://localhost:8000");
    }

    #[test]
    fn test_custom_timeout() {
        let config = BoardConfig::from_settings(None, Some("2500")).unwrap();
        assert_eq!(config.message_timeout_ms, 2500);
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let err = BoardConfig::from_settings(None, Some("soon")).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout("soon".to_string()));
    }
}
