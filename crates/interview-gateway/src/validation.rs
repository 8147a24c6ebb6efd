//! Configuration validation.
//!
//! Validation never aborts: every rule runs and the findings come back as a
//! batch of errors and warnings, so multiple issues can be fixed in one pass.
//! [`can_run`] is the single gate consulted before the process serves
//! traffic.

use crate::config::{Config, DEFAULT_REDIS_URL};
use tracing::{error, info, warn};

/// Values known to be copy-pasted placeholders rather than real credentials.
///
/// Matched by exact case-insensitive equality so that a real key which
/// happens to contain the word "placeholder" is not rejected.
const PLACEHOLDER_VALUES: &[&str] = &["placeholder", "your-api-key-here", "changeme"];

/// Outcome of validating a configuration.
///
/// `is_valid` holds iff `errors` is empty; warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Whether a value is one of the known placeholder constants.
pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_VALUES
        .iter()
        .any(|placeholder| value.eq_ignore_ascii_case(placeholder))
}

/// Whether a credential-ish value is present and not a placeholder.
pub fn is_configured(value: &str) -> bool {
    !value.is_empty() && !is_placeholder(value)
}

/// Validate the configuration.
///
/// Pure: the same aggregate always yields the same result. All rules are
/// evaluated independently; nothing short-circuits.
pub fn validate(config: &Config) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !is_configured(&config.daily.api_key) {
        errors.push("Daily.co API key is not configured".to_string());
    }

    if !is_configured(&config.daily.domain) {
        errors.push("Daily.co domain is not configured".to_string());
    }

    if !is_configured(&config.deepgram.api_key) {
        errors.push("Deepgram API key is not configured".to_string());
    }

    if !is_configured(&config.anthropic.api_key) {
        errors.push("Anthropic API key is not configured".to_string());
    }

    if !is_configured(&config.eleven_labs.api_key) {
        errors.push("ElevenLabs API key is not configured".to_string());
    }

    if config.eleven_labs.voice_id.is_empty() {
        warnings.push("ElevenLabs voice ID is not configured, using default".to_string());
    }

    // Redis is reserved for future use, so the default is only a warning.
    if config.redis.url.is_empty() || config.redis.url == DEFAULT_REDIS_URL {
        warnings
            .push("Redis URL is using default localhost, configure for production".to_string());
    }

    if config.app.mode.is_production() && config.app.url.contains("localhost") {
        errors.push("Application URL should not use localhost in production".to_string());
    }

    if config.app.mode.is_production() && config.app.websocket_url.contains("localhost") {
        warnings.push("WebSocket URL should not use localhost in production".to_string());
    }

    if config.interview.max_duration_seconds < 60 {
        errors.push("Interview duration must be at least 60 seconds".to_string());
    }

    if config.interview.max_duration_seconds > 3600 {
        warnings.push("Interview duration is over 1 hour, this may increase costs".to_string());
    }

    if config.interview.max_participants < 2 {
        errors.push("Interview must allow at least 2 participants".to_string());
    }

    if config.rate_limit.requests_per_minute < 1 {
        errors.push("Rate limit must allow at least 1 request per minute".to_string());
    }

    if config.rate_limit.requests_per_minute > 100 {
        warnings.push("Rate limit is very high, consider reducing for cost control".to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Whether the application may serve traffic with this configuration.
///
/// Development always runs; configuration errors are logged as a non-fatal
/// advisory. Production runs only with a valid configuration.
pub fn can_run(config: &Config) -> bool {
    let result = validate(config);

    if config.app.mode.is_development() {
        if !result.is_valid {
            warn!(
                target: "gateway.validation",
                errors = result.errors.len(),
                "Running in development mode with configuration errors; some features may not work"
            );
        }
        return true;
    }

    result.is_valid
}

/// Log a validation summary at startup. Messages only, never values.
pub fn log_validation_status(config: &Config) {
    let result = validate(config);

    if result.is_valid {
        info!(
            target: "gateway.validation",
            warnings = result.warnings.len(),
            "Configuration is valid"
        );
    } else {
        error!(
            target: "gateway.validation",
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Configuration has errors"
        );
    }

    for message in &result.errors {
        error!(target: "gateway.validation", "{}", message);
    }
    for message in &result.warnings {
        warn!(target: "gateway.validation", "{}", message);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// A production configuration with nothing left to complain about.
    fn valid_production_config() -> Config {
        let vars = HashMap::from([
            ("APP_ENV".to_string(), "production".to_string()),
            ("DAILY_API_KEY".to_string(), "daily-key".to_string()),
            ("DAILY_DOMAIN".to_string(), "acme.daily.co".to_string()),
            ("DEEPGRAM_API_KEY".to_string(), "deepgram-key".to_string()),
            ("ANTHROPIC_API_KEY".to_string(), "anthropic-key".to_string()),
            ("ELEVENLABS_API_KEY".to_string(), "elevenlabs-key".to_string()),
            ("REDIS_URL".to_string(), "redis://cache.internal:6379".to_string()),
            ("APP_URL".to_string(), "https://app.example.com".to_string()),
            ("WEBSOCKET_URL".to_string(), "wss://ws.example.com".to_string()),
            (
                "BACKEND_SERVICE_URL".to_string(),
                "https://backend.example.com".to_string(),
            ),
        ]);
        Config::from_vars(&vars).expect("Config should load")
    }

    /// A development configuration with every credential set.
    fn valid_development_config() -> Config {
        let vars = HashMap::from([
            ("DAILY_API_KEY".to_string(), "daily-key".to_string()),
            ("DAILY_DOMAIN".to_string(), "acme.daily.co".to_string()),
            ("DEEPGRAM_API_KEY".to_string(), "deepgram-key".to_string()),
            ("ANTHROPIC_API_KEY".to_string(), "anthropic-key".to_string()),
            ("ELEVENLABS_API_KEY".to_string(), "elevenlabs-key".to_string()),
            ("REDIS_URL".to_string(), "redis://cache.internal:6379".to_string()),
        ]);
        Config::from_vars(&vars).expect("Config should load")
    }

    #[test]
    fn test_valid_config_has_no_findings() {
        let result = validate(&valid_production_config());

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_is_pure() {
        let config = valid_production_config();
        assert_eq!(validate(&config), validate(&config));

        let mut broken = config;
        broken.daily.api_key = String::new();
        assert_eq!(validate(&broken), validate(&broken));
    }

    #[test]
    fn test_is_valid_tracks_errors_only() {
        let mut config = valid_production_config();
        config.redis.url = DEFAULT_REDIS_URL.to_string();

        let result = validate(&config);
        assert!(result.is_valid, "warnings must not affect is_valid");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_api_keys_are_errors() {
        let mut config = valid_production_config();
        config.daily.api_key = String::new();
        config.deepgram.api_key = String::new();
        config.anthropic.api_key = String::new();
        config.eleven_labs.api_key = String::new();

        let result = validate(&config);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .contains(&"Daily.co API key is not configured".to_string()));
        assert!(result
            .errors
            .contains(&"Deepgram API key is not configured".to_string()));
        assert!(result
            .errors
            .contains(&"Anthropic API key is not configured".to_string()));
        assert!(result
            .errors
            .contains(&"ElevenLabs API key is not configured".to_string()));
    }

    #[test]
    fn test_placeholder_credentials_are_errors() {
        let mut config = valid_production_config();
        config.daily.api_key = "placeholder".to_string();
        config.daily.domain = "CHANGEME".to_string();

        let result = validate(&config);
        assert!(result
            .errors
            .contains(&"Daily.co API key is not configured".to_string()));
        assert!(result
            .errors
            .contains(&"Daily.co domain is not configured".to_string()));
    }

    #[test]
    fn test_real_key_containing_placeholder_substring_is_accepted() {
        let mut config = valid_production_config();
        config.daily.api_key = "sk-placeholder-theme-park-7f3a".to_string();

        let result = validate(&config);
        assert!(
            !result
                .errors
                .contains(&"Daily.co API key is not configured".to_string()),
            "exact-match placeholder detection must not reject real keys"
        );
    }

    #[test]
    fn test_empty_voice_id_is_a_warning() {
        let mut config = valid_production_config();
        config.eleven_labs.voice_id = String::new();

        let result = validate(&config);
        assert!(result.is_valid);
        assert!(result
            .warnings
            .contains(&"ElevenLabs voice ID is not configured, using default".to_string()));
    }

    #[test]
    fn test_localhost_urls_in_production() {
        let mut config = valid_production_config();
        config.app.url = "http://localhost:3000".to_string();
        config.app.websocket_url = "ws://localhost:3001".to_string();

        let result = validate(&config);
        assert!(result
            .errors
            .contains(&"Application URL should not use localhost in production".to_string()));
        assert!(result
            .warnings
            .contains(&"WebSocket URL should not use localhost in production".to_string()));
    }

    #[test]
    fn test_localhost_urls_allowed_in_development() {
        let config = valid_development_config();
        assert!(config.app.url.contains("localhost"));

        let result = validate(&config);
        assert!(result.is_valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_short_duration_is_exactly_one_error() {
        let mut config = valid_production_config();
        config.interview.max_duration_seconds = 30;

        let result = validate(&config);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors.iter().any(|e| e.contains("at least 60 seconds")));
    }

    #[test]
    fn test_long_duration_is_exactly_one_warning() {
        let mut config = valid_production_config();
        config.interview.max_duration_seconds = 4000;

        let result = validate(&config);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_participant_floor() {
        let mut config = valid_production_config();
        config.interview.max_participants = 1;
        assert!(validate(&config)
            .errors
            .contains(&"Interview must allow at least 2 participants".to_string()));

        config.interview.max_participants = 2;
        assert!(!validate(&config)
            .errors
            .contains(&"Interview must allow at least 2 participants".to_string()));
    }

    #[test]
    fn test_rate_limit_bounds() {
        let mut config = valid_production_config();

        config.rate_limit.requests_per_minute = 0;
        let result = validate(&config);
        assert!(result
            .errors
            .contains(&"Rate limit must allow at least 1 request per minute".to_string()));

        config.rate_limit.requests_per_minute = 150;
        let result = validate(&config);
        assert!(result.errors.is_empty());
        assert!(result
            .warnings
            .contains(&"Rate limit is very high, consider reducing for cost control".to_string()));
    }

    #[test]
    fn test_all_rules_run_without_short_circuit() {
        let mut config = valid_production_config();
        config.daily.api_key = String::new();
        config.interview.max_duration_seconds = 10;
        config.interview.max_participants = 0;
        config.rate_limit.requests_per_minute = 0;

        let result = validate(&config);
        assert_eq!(result.errors.len(), 4);
    }

    #[test]
    fn test_can_run_always_true_in_development() {
        let config = Config::from_vars(&HashMap::new()).unwrap();
        assert!(!validate(&config).is_valid);
        assert!(can_run(&config));
    }

    #[test]
    fn test_can_run_follows_validity_in_production() {
        let config = valid_production_config();
        assert!(can_run(&config));

        let mut broken = valid_production_config();
        broken.daily.api_key = "placeholder".to_string();
        assert!(!can_run(&broken));
    }
}
