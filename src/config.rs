//! Probe configuration.
//!
//! Every setting comes from the process environment. The binary loads a
//! local `.env` with `dotenvy` before reading it, so values in that file
//! behave exactly like exported variables.

use std::path::PathBuf;

use serde::Serialize;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const MODEL_ENV: &str = "OPENAI_MODEL";
pub const VERIFY_TLS_ENV: &str = "OPENAI_VERIFY_TLS";
pub const CA_BUNDLE_ENV: &str = "OPENAI_CA_BUNDLE";
pub const LEGACY_CA_BUNDLE_ENV: &str = "REQUESTS_CA_BUNDLE";
pub const TIMEOUT_MS_ENV: &str = "OPENAI_TIMEOUT_MS";

pub const DEFAULT_BASE_URL: &str = "https://model-service-preview.genai.visa.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Please set OPENAI_API_KEY in your .env file")]
    MissingApiKey,
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Certificate verification is off unless explicitly enabled.
    pub verify_tls: bool,
    pub ca_bundle: Option<PathBuf>,
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            verify_tls: false,
            ca_bundle: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ProbeConfig {
    /// Read the configuration from the current process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset so that `OPENAI_MODEL=` in a `.env`
    /// file falls back to the default instead of producing an empty model.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();

        let verify_tls = match read(VERIFY_TLS_ENV) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "{VERIFY_TLS_ENV} must be a boolean (true/false), got '{raw}'"
                ))
            })?,
            None => defaults.verify_tls,
        };

        let timeout_ms = match read(TIMEOUT_MS_ENV) {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{TIMEOUT_MS_ENV} must be a positive integer, got '{raw}'"
                ))
            })?,
            None => defaults.timeout_ms,
        };

        Ok(Self {
            api_key: read(API_KEY_ENV).unwrap_or_default(),
            base_url: read(BASE_URL_ENV).unwrap_or(defaults.base_url),
            model: read(MODEL_ENV).unwrap_or(defaults.model),
            verify_tls,
            ca_bundle: read(CA_BUNDLE_ENV)
                .or_else(|| read(LEGACY_CA_BUNDLE_ENV))
                .map(PathBuf::from),
            timeout_ms,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check the settings a client cannot work without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base url cannot be empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model cannot be empty".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "request timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ProbeConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_key, "");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "gpt-4o");
        assert!(!config.verify_tls);
        assert_eq!(config.ca_bundle, None);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = ProbeConfig::from_lookup(lookup_from(&[
            (API_KEY_ENV, " sk-test "),
            (BASE_URL_ENV, "http://localhost:8080/v1"),
            (MODEL_ENV, "gpt-4o-mini"),
            (VERIFY_TLS_ENV, "Yes"),
            (TIMEOUT_MS_ENV, "2500"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(config.verify_tls);
        assert_eq!(config.timeout_ms, 2500);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            ProbeConfig::from_lookup(lookup_from(&[(MODEL_ENV, "  "), (BASE_URL_ENV, "")]))
                .unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn ca_bundle_falls_back_to_requests_variable() {
        let config =
            ProbeConfig::from_lookup(lookup_from(&[(LEGACY_CA_BUNDLE_ENV, "/etc/ca.pem")]))
                .unwrap();
        assert_eq!(config.ca_bundle, Some(PathBuf::from("/etc/ca.pem")));

        let config = ProbeConfig::from_lookup(lookup_from(&[
            (LEGACY_CA_BUNDLE_ENV, "/etc/ca.pem"),
            (CA_BUNDLE_ENV, "/opt/openai.pem"),
        ]))
        .unwrap();
        assert_eq!(config.ca_bundle, Some(PathBuf::from("/opt/openai.pem")));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = ProbeConfig::from_lookup(lookup_from(&[(VERIFY_TLS_ENV, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("maybe")));

        let err = ProbeConfig::from_lookup(lookup_from(&[(TIMEOUT_MS_ENV, "-5")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn validate_requires_api_key() {
        let err = ProbeConfig::default().validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert_eq!(
            err.to_string(),
            "Please set OPENAI_API_KEY in your .env file"
        );

        let err = ProbeConfig::default()
            .with_api_key("   ")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = ProbeConfig::default().with_api_key("sk-test");
        assert!(config.validate().is_ok());
        config.timeout_ms = 0;
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn api_key_is_not_serialized() {
        let config = ProbeConfig::default().with_api_key("sk-secret");
        let rendered = serde_json::to_string(&config).unwrap();
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("\"model\":\"gpt-4o\""));
    }
}
