//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! The typo-correction tuning parameters are policy constants in
//! [`crate::client`] and deliberately not part of this file.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
///
/// Falls back to the embedded defaults if the custom TOML registered via
/// `init_custom` somehow fails to parse (it was validated on registration).
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let custom = CUSTOM_TOML
            .get()
            .and_then(|s| parse_settings_toml(s).ok());
        custom.unwrap_or_else(Settings::builtin)
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub endpoint: EndpointSettings,
    #[serde(default)]
    pub interaction: InteractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointSettings {
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionSettings {
    #[serde(default)]
    pub sequence_responses: bool,
}

impl Settings {
    /// Hard-coded equivalent of the embedded TOML, used when parsing is not an option.
    fn builtin() -> Self {
        Self {
            endpoint: EndpointSettings {
                base_url: "http://127.0.0.1:5000".to_string(),
            },
            interaction: InteractionSettings::default(),
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.endpoint.base_url = s.endpoint.base_url.trim().trim_end_matches('/').to_string();
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let url = s.endpoint.base_url.as_str();
    if url.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "endpoint.base_url".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(SettingsError::InvalidValue {
            field: "endpoint.base_url".to_string(),
            reason: "must start with http:// or https://".to_string(),
        });
    }
    Ok(())
}
