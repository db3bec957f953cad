use shared::BoardConfig;

/// Settings are baked in at build time, e.g.
/// `ACTIVITY_BOARD_API_BASE=http://localhost:8000 trunk build`.
pub fn load() -> BoardConfig {
    let api_base = option_env!("ACTIVITY_BOARD_API_BASE");
    let timeout = option_env!("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS");

    match BoardConfig::from_settings(api_base, timeout) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}; falling back to the default timeout", e);
            BoardConfig::from_settings(api_base, None).unwrap_or_default()
        }
    }
}
