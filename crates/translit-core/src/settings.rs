//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the character map.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Settings cover the text utilities only; the transliteration table is fixed.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    store_custom(&CUSTOM_TOML, toml_content)
}

/// Validate, then store into `slot` unless it is already set.
fn store_custom(slot: &OnceLock<String>, toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    slot.set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
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
    pub random: RandomSettings,
    pub nav_icon: NavIconSettings,
    pub demo: DemoSettings,
    pub motion: MotionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomSettings {
    pub space_probability: f64,
    pub alphabet: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavIconSettings {
    pub span_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemoSettings {
    pub sample: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MotionSettings {
    pub interval_ms: u64,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let p = s.random.space_probability;
    if !(0.0..=1.0).contains(&p) {
        return Err(invalid("random.space_probability", "must be between 0 and 1"));
    }
    if s.random.alphabet.is_empty() {
        return Err(invalid("random.alphabet", "must not be empty"));
    }
    if s.demo.sample.is_empty() {
        return Err(invalid("demo.sample", "must not be empty"));
    }
    if s.motion.interval_ms == 0 {
        return Err(invalid("motion.interval_ms", "must be positive"));
    }
    Ok(())
}
