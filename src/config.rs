//! Configuration handling for the TUI
//!
//! Two sources: an optional JSON file in the platform config directory for
//! non-secret settings, and the environment for the vendor credential.

use crate::state::FormVariant;
use crate::vendor::{CallDefaults, OrgHeader, DEFAULT_ENDPOINT};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable holding the vendor API key
pub const API_KEY_ENV: &str = "BLAND_API_KEY";
/// Environment variable overriding the call endpoint
pub const API_URL_ENV: &str = "BLAND_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Call endpoint
    pub api_url: Option<String>,
    /// Ask for a company name on the call form
    pub require_company: Option<bool>,
    /// Organization header name
    pub org_header_name: Option<String>,
    /// Organization header value
    pub org_header_value: Option<String>,
    /// Pathway to run on the call
    pub pathway_id: Option<String>,
    /// Agent voice
    pub voice: Option<String>,
    /// Caller ID
    pub from_number: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ai", "ezpz", "voice-demo-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }
}

/// Resolved settings injected into the app at construction
#[derive(Debug, Clone, PartialEq)]
pub struct CallerSettings {
    pub endpoint: String,
    /// Empty when unset; the vendor rejects it through the normal failure path
    pub api_key: String,
    pub org_header: Option<OrgHeader>,
    pub variant: FormVariant,
    pub call_defaults: CallDefaults,
}

impl Default for CallerSettings {
    fn default() -> Self {
        Self::resolve(TuiConfig::default(), None, None)
    }
}

impl CallerSettings {
    /// Build settings from the config file and the process environment
    pub fn from_env(config: TuiConfig) -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok();
        let api_url = std::env::var(API_URL_ENV).ok();
        Self::resolve(config, api_key, api_url)
    }

    /// Merge file settings with environment values. Environment wins for the
    /// endpoint; the key only ever comes from the environment.
    pub fn resolve(config: TuiConfig, api_key: Option<String>, api_url: Option<String>) -> Self {
        let endpoint = api_url
            .filter(|u| !u.trim().is_empty())
            .or(config.api_url)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let org_header = match (config.org_header_name, config.org_header_value) {
            (Some(name), Some(value)) if !name.trim().is_empty() => Some(OrgHeader { name, value }),
            _ => None,
        };

        let mut call_defaults = CallDefaults::default();
        if let Some(pathway_id) = config.pathway_id {
            call_defaults.pathway_id = pathway_id;
        }
        if let Some(voice) = config.voice {
            call_defaults.voice = voice;
        }
        if let Some(from) = config.from_number {
            call_defaults.from = from;
        }

        Self {
            endpoint,
            api_key: api_key.unwrap_or_default(),
            org_header,
            variant: FormVariant {
                require_company: config.require_company.unwrap_or(false),
            },
            call_defaults,
        }
    }

    /// Whether a credential was supplied
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.api_url.is_none());
        assert!(config.require_company.is_none());
        assert!(config.org_header_name.is_none());
        assert!(config.org_header_value.is_none());
        assert!(config.pathway_id.is_none());
        assert!(config.voice.is_none());
        assert!(config.from_number.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            api_url: Some("http://localhost:8080/v1/calls".to_string()),
            require_company: Some(true),
            org_header_name: Some("x-org-id".to_string()),
            org_header_value: Some("org_123".to_string()),
            pathway_id: Some("pathway".to_string()),
            voice: Some("voice".to_string()),
            from_number: Some("+15550000000".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TuiConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"require_company": true, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.require_company, Some(true));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_returns_ok() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }

    mod resolve {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_defaults() {
            let settings = CallerSettings::default();
            assert_eq!(settings.endpoint, "https://api.bland.ai/v1/calls");
            assert_eq!(settings.api_key, "");
            assert!(!settings.has_api_key());
            assert!(settings.org_header.is_none());
            assert!(!settings.variant.require_company);
            assert_eq!(settings.call_defaults, CallDefaults::default());
        }

        #[test]
        fn test_env_url_beats_file_url() {
            let config = TuiConfig {
                api_url: Some("http://file".to_string()),
                ..Default::default()
            };
            let settings =
                CallerSettings::resolve(config, None, Some("http://env".to_string()));
            assert_eq!(settings.endpoint, "http://env");
        }

        #[test]
        fn test_blank_env_url_ignored() {
            let config = TuiConfig {
                api_url: Some("http://file".to_string()),
                ..Default::default()
            };
            let settings = CallerSettings::resolve(config, None, Some("  ".to_string()));
            assert_eq!(settings.endpoint, "http://file");
        }

        #[test]
        fn test_api_key_from_env() {
            let settings =
                CallerSettings::resolve(TuiConfig::default(), Some("sk-test".to_string()), None);
            assert_eq!(settings.api_key, "sk-test");
            assert!(settings.has_api_key());
        }

        #[test]
        fn test_org_header_needs_name_and_value() {
            let half = TuiConfig {
                org_header_name: Some("x-org-id".to_string()),
                ..Default::default()
            };
            assert!(CallerSettings::resolve(half, None, None).org_header.is_none());

            let full = TuiConfig {
                org_header_name: Some("x-org-id".to_string()),
                org_header_value: Some("org_123".to_string()),
                ..Default::default()
            };
            assert_eq!(
                CallerSettings::resolve(full, None, None).org_header,
                Some(OrgHeader {
                    name: "x-org-id".to_string(),
                    value: "org_123".to_string(),
                })
            );
        }

        #[test]
        fn test_call_default_overrides() {
            let config = TuiConfig {
                pathway_id: Some("pw".to_string()),
                voice: Some("v".to_string()),
                from_number: Some("+15550000000".to_string()),
                require_company: Some(true),
                ..Default::default()
            };
            let settings = CallerSettings::resolve(config, None, None);
            assert_eq!(settings.call_defaults.pathway_id, "pw");
            assert_eq!(settings.call_defaults.voice, "v");
            assert_eq!(settings.call_defaults.from, "+15550000000");
            assert_eq!(settings.call_defaults.model, "turbo");
            assert!(settings.variant.require_company);
        }
    }
}
