//! Interview gateway configuration.
//!
//! Configuration is loaded from environment variables exactly once at process
//! start and is read-only afterwards. Range checks live in the
//! [`crate::validation`] module so that construction can always report every
//! problem in one batch instead of failing on the first. All credential
//! fields are redacted in Debug output.

use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

/// Default base URL for the Daily.co REST API.
pub const DEFAULT_DAILY_API_URL: &str = "https://api.daily.co/v1";

/// Default ElevenLabs voice used when none is configured.
pub const DEFAULT_ELEVENLABS_VOICE_ID: &str = "EXAVITQu4vr4xnSDxMaL";

/// Documented Redis default. The validator warns when it is left in place.
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Default interview length cap in seconds (15 minutes).
pub const DEFAULT_MAX_DURATION_SECONDS: i64 = 900;

/// Default participant cap (candidate plus interviewer).
pub const DEFAULT_MAX_PARTICIPANTS: i64 = 2;

/// Default room expiry in hours.
pub const DEFAULT_EXPIRY_HOURS: i64 = 1;

/// Default rate limit in requests per minute.
pub const DEFAULT_RATE_LIMIT_RPM: i64 = 10;

/// Runtime mode, fixed for the process lifetime.
///
/// Parsed once from `APP_ENV` during construction. Every dev/prod branch in
/// the codebase consults this value instead of re-reading the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    /// Only `"production"` selects production; anything else, including
    /// absence, is development.
    fn from_vars(vars: &HashMap<String, String>) -> Self {
        match vars.get("APP_ENV").map(String::as_str) {
            Some("production") => RuntimeMode::Production,
            _ => RuntimeMode::Development,
        }
    }

    pub fn is_development(self) -> bool {
        self == RuntimeMode::Development
    }

    pub fn is_production(self) -> bool {
        self == RuntimeMode::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuntimeMode::Development => "development",
            RuntimeMode::Production => "production",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid integer for environment variable {key}: {value:?}")]
    InvalidInteger { key: String, value: String },
}

/// Daily.co video conferencing credentials.
#[derive(Clone)]
pub struct DailyConfig {
    pub api_key: String,
    pub domain: String,
    /// Base URL for the rooms API. Overridable so tests and self-hosted
    /// proxies can redirect the provider call.
    pub api_url: String,
}

impl fmt::Debug for DailyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DailyConfig")
            .field("api_key", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Deepgram speech-to-text credentials.
#[derive(Clone)]
pub struct DeepgramConfig {
    pub api_key: String,
}

impl fmt::Debug for DeepgramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepgramConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Anthropic (Claude) credentials.
#[derive(Clone)]
pub struct AnthropicConfig {
    pub api_key: String,
}

impl fmt::Debug for AnthropicConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// ElevenLabs text-to-speech credentials.
#[derive(Clone)]
pub struct ElevenLabsConfig {
    pub api_key: String,
    pub voice_id: String,
}

impl fmt::Debug for ElevenLabsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElevenLabsConfig")
            .field("api_key", &"[REDACTED]")
            .field("voice_id", &self.voice_id)
            .finish()
    }
}

/// Redis connection settings. Reserved for future session caching.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// Application identity and addresses.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub url: String,
    pub websocket_url: String,
    pub backend_url: String,
    pub bind_address: String,
    pub mode: RuntimeMode,
}

/// Interview limits used both for validation and for room creation.
#[derive(Debug, Clone)]
pub struct InterviewConfig {
    pub max_duration_seconds: i64,
    pub max_participants: i64,
    pub expiry_hours: i64,
}

/// Feature flags gating optional provider behavior.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    pub enable_recording: bool,
    pub enable_analytics: bool,
}

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_minute: i64,
}

/// Interview gateway configuration.
///
/// Built exactly once per process. Every field has a defined value; the
/// empty string stands in for credentials that are absent in development.
#[derive(Debug, Clone)]
pub struct Config {
    pub daily: DailyConfig,
    pub deepgram: DeepgramConfig,
    pub anthropic: AnthropicConfig,
    pub eleven_labs: ElevenLabsConfig,
    pub redis: RedisConfig,
    pub app: AppConfig,
    pub interview: InterviewConfig,
    pub features: FeatureFlags,
    pub rate_limit: RateLimitConfig,
}

/// Returns the value of a required variable.
///
/// Missing (or empty) values are fatal only in production; in any other mode
/// the empty string stands in so that construction always succeeds.
fn require_env(
    vars: &HashMap<String, String>,
    mode: RuntimeMode,
    key: &str,
) -> Result<String, ConfigError> {
    match vars.get(key).filter(|value| !value.is_empty()) {
        Some(value) => Ok(value.clone()),
        None if mode.is_production() => Err(ConfigError::MissingEnvVar(key.to_string())),
        None => Ok(String::new()),
    }
}

/// Returns the value of an optional variable, or the default. Never fails.
fn optional_env(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    vars.get(key)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/// Parses an optional boolean variable. Only a case-insensitive `"true"`
/// yields true; anything else, including absence, yields the default or false.
fn optional_bool_env(vars: &HashMap<String, String>, key: &str, default: bool) -> bool {
    match vars.get(key).filter(|value| !value.is_empty()) {
        Some(value) => value.eq_ignore_ascii_case("true"),
        None => default,
    }
}

/// Parses an optional integer variable. Unlike the string and boolean
/// accessors, a present-but-unparseable value fails construction.
fn optional_i64_env(
    vars: &HashMap<String, String>,
    key: &str,
    default: i64,
) -> Result<i64, ConfigError> {
    match vars.get(key).filter(|value| !value.is_empty()) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidInteger {
            key: key.to_string(),
            value: value.clone(),
        }),
        None => Ok(default),
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a snapshot of variables (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mode = RuntimeMode::from_vars(vars);

        Ok(Config {
            daily: DailyConfig {
                api_key: require_env(vars, mode, "DAILY_API_KEY")?,
                domain: require_env(vars, mode, "DAILY_DOMAIN")?,
                api_url: optional_env(vars, "DAILY_API_URL", DEFAULT_DAILY_API_URL),
            },
            deepgram: DeepgramConfig {
                api_key: require_env(vars, mode, "DEEPGRAM_API_KEY")?,
            },
            anthropic: AnthropicConfig {
                api_key: require_env(vars, mode, "ANTHROPIC_API_KEY")?,
            },
            eleven_labs: ElevenLabsConfig {
                api_key: require_env(vars, mode, "ELEVENLABS_API_KEY")?,
                voice_id: optional_env(vars, "ELEVENLABS_VOICE_ID", DEFAULT_ELEVENLABS_VOICE_ID),
            },
            redis: RedisConfig {
                url: optional_env(vars, "REDIS_URL", DEFAULT_REDIS_URL),
            },
            app: AppConfig {
                url: optional_env(vars, "APP_URL", "http://localhost:3000"),
                websocket_url: optional_env(vars, "WEBSOCKET_URL", "ws://localhost:3001"),
                backend_url: optional_env(vars, "BACKEND_SERVICE_URL", "http://localhost:3001"),
                bind_address: optional_env(vars, "BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
                mode,
            },
            interview: InterviewConfig {
                max_duration_seconds: optional_i64_env(
                    vars,
                    "MAX_INTERVIEW_DURATION_SECONDS",
                    DEFAULT_MAX_DURATION_SECONDS,
                )?,
                max_participants: optional_i64_env(
                    vars,
                    "MAX_PARTICIPANTS",
                    DEFAULT_MAX_PARTICIPANTS,
                )?,
                expiry_hours: optional_i64_env(
                    vars,
                    "INTERVIEW_EXPIRY_HOURS",
                    DEFAULT_EXPIRY_HOURS,
                )?,
            },
            features: FeatureFlags {
                enable_recording: optional_bool_env(vars, "ENABLE_RECORDING", false),
                enable_analytics: optional_bool_env(vars, "ENABLE_ANALYTICS", false),
            },
            rate_limit: RateLimitConfig {
                requests_per_minute: optional_i64_env(
                    vars,
                    "RATE_LIMIT_REQUESTS_PER_MINUTE",
                    DEFAULT_RATE_LIMIT_RPM,
                )?,
            },
        })
    }

    /// The browser-safe subset of this configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            app: ClientAppConfig {
                url: self.app.url.clone(),
                websocket_url: self.app.websocket_url.clone(),
            },
            daily: ClientDailyConfig {
                domain: self.daily.domain.clone(),
            },
        }
    }
}

/// Browser-safe configuration subset. Never carries a credential field.
#[derive(Debug, Clone, Serialize)]
pub struct ClientConfig {
    pub app: ClientAppConfig,
    pub daily: ClientDailyConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAppConfig {
    pub url: String,
    pub websocket_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientDailyConfig {
    pub domain: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn production_vars() -> HashMap<String, String> {
        HashMap::from([
            ("APP_ENV".to_string(), "production".to_string()),
            ("DAILY_API_KEY".to_string(), "daily-key".to_string()),
            ("DAILY_DOMAIN".to_string(), "acme.daily.co".to_string()),
            ("DEEPGRAM_API_KEY".to_string(), "deepgram-key".to_string()),
            ("ANTHROPIC_API_KEY".to_string(), "anthropic-key".to_string()),
            ("ELEVENLABS_API_KEY".to_string(), "elevenlabs-key".to_string()),
        ])
    }

    #[test]
    fn test_development_defaults_with_empty_environment() {
        let config = Config::from_vars(&HashMap::new()).expect("Config should load");

        assert!(config.app.mode.is_development());
        assert!(!config.app.mode.is_production());
        assert_eq!(config.daily.api_key, "");
        assert_eq!(config.daily.domain, "");
        assert_eq!(config.daily.api_url, DEFAULT_DAILY_API_URL);
        assert_eq!(config.deepgram.api_key, "");
        assert_eq!(config.anthropic.api_key, "");
        assert_eq!(config.eleven_labs.api_key, "");
        assert_eq!(config.eleven_labs.voice_id, DEFAULT_ELEVENLABS_VOICE_ID);
        assert_eq!(config.redis.url, DEFAULT_REDIS_URL);
        assert_eq!(config.app.url, "http://localhost:3000");
        assert_eq!(config.app.websocket_url, "ws://localhost:3001");
        assert_eq!(config.app.backend_url, "http://localhost:3001");
        assert_eq!(config.app.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(
            config.interview.max_duration_seconds,
            DEFAULT_MAX_DURATION_SECONDS
        );
        assert_eq!(config.interview.max_participants, DEFAULT_MAX_PARTICIPANTS);
        assert_eq!(config.interview.expiry_hours, DEFAULT_EXPIRY_HOURS);
        assert!(!config.features.enable_recording);
        assert!(!config.features.enable_analytics);
        assert_eq!(config.rate_limit.requests_per_minute, DEFAULT_RATE_LIMIT_RPM);
    }

    #[test]
    fn test_production_succeeds_with_all_credentials() {
        let config = Config::from_vars(&production_vars()).expect("Config should load");

        assert!(config.app.mode.is_production());
        assert_eq!(config.daily.api_key, "daily-key");
        assert_eq!(config.daily.domain, "acme.daily.co");
    }

    #[test]
    fn test_production_fails_on_missing_credential() {
        let mut vars = production_vars();
        vars.remove("DAILY_API_KEY");

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(v)) if v == "DAILY_API_KEY"));
    }

    #[test]
    fn test_production_treats_empty_credential_as_missing() {
        let mut vars = production_vars();
        vars.insert("ELEVENLABS_API_KEY".to_string(), String::new());

        let result = Config::from_vars(&vars);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(v)) if v == "ELEVENLABS_API_KEY"));
    }

    #[test]
    fn test_development_missing_credentials_become_empty_strings() {
        let vars = HashMap::from([("APP_ENV".to_string(), "development".to_string())]);

        let config = Config::from_vars(&vars).expect("Config should load");
        assert_eq!(config.daily.api_key, "");
        assert_eq!(config.anthropic.api_key, "");
    }

    #[test]
    fn test_unrecognized_mode_falls_back_to_development() {
        let vars = HashMap::from([("APP_ENV".to_string(), "staging".to_string())]);

        let config = Config::from_vars(&vars).expect("Config should load");
        assert!(config.app.mode.is_development());
    }

    #[test]
    fn test_boolean_parsing_is_case_insensitive() {
        let mut vars = HashMap::new();
        vars.insert("ENABLE_RECORDING".to_string(), "TRUE".to_string());
        vars.insert("ENABLE_ANALYTICS".to_string(), "True".to_string());
        let config = Config::from_vars(&vars).unwrap();
        assert!(config.features.enable_recording);
        assert!(config.features.enable_analytics);
    }

    #[test]
    fn test_boolean_parsing_rejects_everything_else() {
        for value in ["1", "yes", "on", "false", "truthy"] {
            let vars = HashMap::from([("ENABLE_RECORDING".to_string(), value.to_string())]);
            let config = Config::from_vars(&vars).unwrap();
            assert!(!config.features.enable_recording, "{value:?} should be false");
        }
    }

    #[test]
    fn test_integer_parsing_accepts_base_10() {
        let vars = HashMap::from([(
            "MAX_INTERVIEW_DURATION_SECONDS".to_string(),
            "1800".to_string(),
        )]);
        let config = Config::from_vars(&vars).unwrap();
        assert_eq!(config.interview.max_duration_seconds, 1800);
    }

    #[test]
    fn test_integer_parsing_fails_on_garbage() {
        let vars = HashMap::from([("MAX_PARTICIPANTS".to_string(), "many".to_string())]);

        let result = Config::from_vars(&vars);
        assert!(
            matches!(result, Err(ConfigError::InvalidInteger { key, .. }) if key == "MAX_PARTICIPANTS")
        );
    }

    #[test]
    fn test_voice_id_default_applies_when_unset() {
        let config = Config::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config.eleven_labs.voice_id, DEFAULT_ELEVENLABS_VOICE_ID);

        let vars = HashMap::from([("ELEVENLABS_VOICE_ID".to_string(), "custom".to_string())]);
        let config = Config::from_vars(&vars).unwrap();
        assert_eq!(config.eleven_labs.voice_id, "custom");
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = Config::from_vars(&production_vars()).unwrap();

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("daily-key"));
        assert!(!debug_output.contains("deepgram-key"));
        assert!(!debug_output.contains("anthropic-key"));
        assert!(!debug_output.contains("elevenlabs-key"));
        // Non-sensitive fields remain visible
        assert!(debug_output.contains("acme.daily.co"));
    }

    #[test]
    fn test_client_config_is_a_credential_free_subset() {
        let config = Config::from_vars(&production_vars()).unwrap();
        let client = config.client_config();

        let json = serde_json::to_string(&client).unwrap();
        assert!(json.contains("acme.daily.co"));
        assert!(json.contains("websocketUrl"));
        assert!(!json.contains("daily-key"));
        assert!(!json.contains("apiKey"));
    }
}
