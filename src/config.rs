//! Engine configuration loaded from `dealflow.toml`.
//!
//! [`DealflowConfig`] holds the CRM API connection parameters. Keys missing
//! from the file use sensible defaults. The `DEALFLOW_API_TOKEN` environment
//! variable takes precedence over the file.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use crate::error::DealflowError;

/// Top-level configuration loaded from `dealflow.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DealflowConfig {
    /// Base URL of the CRM persistence service.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Bearer token for the CRM API.
    #[serde(default)]
    pub api_token: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://api.dealflow.app/v1".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for DealflowConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_token: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl DealflowConfig {
    /// Loads the configuration from `dealflow.toml` in the current
    /// directory, falling back to defaults if the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("dealflow.toml"))
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<DealflowConfig>(&contents)?
        } else {
            Self::default()
        };

        // Environment variable takes precedence over the file for the token.
        if let Ok(token) = std::env::var("DEALFLOW_API_TOKEN")
            && !token.is_empty()
        {
            config.api_token = token;
        }

        Ok(config)
    }

    /// The configured token, or an error suitable for showing the user when
    /// none is set.
    pub fn require_token(&self) -> Result<&str, DealflowError> {
        if self.api_token.is_empty() {
            return Err(DealflowError::Config(
                "api_token is not set; add it to dealflow.toml or set DEALFLOW_API_TOKEN".into(),
            ));
        }
        Ok(&self.api_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let config = DealflowConfig::default();
        assert_eq!(config.api_base_url, "https://api.dealflow.app/v1");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.api_token.is_empty());
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
            api_token = "tk-test-123"
            request_timeout_secs = 5
        "#;
        let config: DealflowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_token, "tk-test-123");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.api_base_url, "https://api.dealflow.app/v1");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_base_url = \"http://localhost:8080/v1\"\napi_token = \"tk-file\""
        )
        .unwrap();

        let config = DealflowConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/v1");
        // The env var may override the token on CI; only check the file
        // value when it is not set.
        if std::env::var("DEALFLOW_API_TOKEN").is_err() {
            assert_eq!(config.api_token, "tk-file");
        }
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DealflowConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_token = [not toml").unwrap();
        assert!(DealflowConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn require_token() {
        let config = DealflowConfig::default();
        assert!(config.require_token().is_err());

        let config = DealflowConfig {
            api_token: "tk".into(),
            ..Default::default()
        };
        assert_eq!(config.require_token().unwrap(), "tk");
    }
}
