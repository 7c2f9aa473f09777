//! Gateway configuration with TOML file and environment support.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GatewayError;

/// Environment variable holding the partner identifier.
pub const ENV_PARTNER_ID: &str = "VERIFLOW_PARTNER_ID";
/// Environment variable holding the base64-encoded shared secret.
pub const ENV_AUTH_SECRET: &str = "VERIFLOW_AUTH_SECRET";
/// Environment variable overriding the provider base URL.
pub const ENV_BASE_URL: &str = "VERIFLOW_BASE_URL";

/// Configuration for the signing gateway.
///
/// Can be loaded from a TOML file via [`GatewayConfig::from_toml_file`],
/// overlaid from the environment via [`GatewayConfig::apply_env`], or
/// built programmatically (e.g. for tests). Credentials are process-wide
/// and read-only once the gateway is constructed.
#[derive(Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Partner identifier issued by the provider.
    #[serde(default)]
    pub partner_id: String,

    /// Base64-encoded shared secret used to key request signatures.
    #[serde(default)]
    pub auth_secret: String,

    /// Provider base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Expiry becomes a failed outcome.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_base_url() -> String {
    "https://testapi.smileidentity.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

// ── Impl ───────────────────────────────────────────────────────────────

impl GatewayConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, GatewayError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, GatewayError> {
        toml::from_str(s).map_err(|e| GatewayError::Configuration(e.to_string()))
    }

    /// Overlay credentials and base URL from the environment.
    ///
    /// Set variables win over file values; unset variables leave the
    /// existing values in place.
    pub fn apply_env(mut self) -> Self {
        if let Ok(v) = std::env::var(ENV_PARTNER_ID) {
            self.partner_id = v;
        }
        if let Ok(v) = std::env::var(ENV_AUTH_SECRET) {
            self.auth_secret = v;
        }
        if let Ok(v) = std::env::var(ENV_BASE_URL) {
            self.base_url = v;
        }
        self
    }

    /// Check that the configuration can authenticate a call.
    ///
    /// Fails before any network traffic: empty credentials or an
    /// undecodable secret are fatal, not retryable.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.partner_id.is_empty() {
            return Err(GatewayError::Configuration(
                "partner id is not set".to_string(),
            ));
        }
        if self.auth_secret.is_empty() {
            return Err(GatewayError::Configuration(
                "auth secret is not set".to_string(),
            ));
        }
        BASE64.decode(&self.auth_secret).map_err(|e| {
            GatewayError::Configuration(format!("auth secret is not valid base64: {e}"))
        })?;
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            partner_id: String::new(),
            auth_secret: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

// Manual Debug: the shared secret must never leak into logs.
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("partner_id", &self.partner_id)
            .field("auth_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GatewayConfig {
        GatewayConfig {
            partner_id: "2304".into(),
            auth_secret: "c2VjcmV0".into(), // base64("secret")
            ..Default::default()
        }
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = GatewayConfig::from_toml_str("").expect("empty toml should parse");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.base_url.starts_with("https://"));
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            partner_id = "9001"
            auth_secret = "c2VjcmV0"
            timeout_secs = 5
        "#;
        let config = GatewayConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.partner_id, "9001");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.connect_timeout_secs, 10); // default
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let result = GatewayConfig::from_toml_file("/nonexistent/veriflow.toml");
        assert!(matches!(result, Err(GatewayError::Configuration(_))));
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn empty_partner_id_rejected() {
        let mut config = valid_config();
        config.partner_id.clear();
        assert!(matches!(
            config.validate(),
            Err(GatewayError::Configuration(_))
        ));
    }

    #[test]
    fn empty_secret_rejected() {
        let mut config = valid_config();
        config.auth_secret.clear();
        assert!(matches!(
            config.validate(),
            Err(GatewayError::Configuration(_))
        ));
    }

    #[test]
    fn undecodable_secret_rejected() {
        let mut config = valid_config();
        config.auth_secret = "%%not-base64%%".into();
        assert!(matches!(
            config.validate(),
            Err(GatewayError::Configuration(_))
        ));
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", valid_config());
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("c2VjcmV0"));
    }
}
