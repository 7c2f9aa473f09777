//! The signing gateway: one authenticated POST per provider call.

use std::sync::Arc;
use std::time::Duration;

use veriflow_types::{ProviderCall, ProviderOutcome};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::ids::{IdSource, UuidSource};
use crate::sign::{request_signature, utc_timestamp_millis};

/// SDK-identity header value sent on every request.
pub const SOURCE_SDK: &str = "rest_api";
/// SDK-identity version header value.
pub const SOURCE_SDK_VERSION: &str = "1.0.0";

/// Relays one verification call to the external provider.
///
/// Wraps `reqwest::Client` with the provider base URL, partner
/// credentials, and an injected identifier source. Every failure mode —
/// provider rejection, transport error, timeout — is represented as a
/// [`ProviderOutcome`], never an error, so the dispatcher can treat all
/// categories uniformly.
#[derive(Clone)]
pub struct SigningGateway {
    http: reqwest::Client,
    base_url: String,
    partner_id: String,
    auth_secret: String,
    ids: Arc<dyn IdSource>,
}

impl SigningGateway {
    /// Create a gateway from validated configuration.
    ///
    /// Fails with [`GatewayError::Configuration`] when credentials are
    /// missing or undecodable; no call is ever attempted in that state.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Self::with_id_source(config, Arc::new(UuidSource))
    }

    /// Create a gateway with an injected identifier source.
    pub fn with_id_source(
        config: GatewayConfig,
        ids: Arc<dyn IdSource>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            partner_id: config.partner_id,
            auth_secret: config.auth_secret,
            ids,
        })
    }

    /// The configured provider base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign and relay one provider call, normalizing the result.
    ///
    /// The signature is computed over a fresh timestamp at call time and
    /// is never reused; the body carries a fresh job/user identifier
    /// pair from the injected source.
    pub async fn sign_and_send(&self, call: &ProviderCall) -> ProviderOutcome {
        let timestamp = utc_timestamp_millis();
        let signature = match request_signature(&timestamp, &self.partner_id, &self.auth_secret)
        {
            Ok(sig) => sig,
            // Credentials are validated at construction; a failure here
            // still must not cross the gateway boundary.
            Err(e) => {
                return ProviderOutcome::failure(
                    call.category,
                    500,
                    e.to_string(),
                    serde_json::Value::Null,
                )
            }
        };

        let pair = self.ids.next_pair();
        let mut body = call.payload.clone();
        if let Some(map) = body.as_object_mut() {
            map.insert(
                "partner_params".to_string(),
                serde_json::json!({ "job_id": pair.job_id, "user_id": pair.user_id }),
            );
        }

        let url = format!("{}{}", self.base_url, call.endpoint);
        tracing::debug!(category = %call.category, %url, "sending provider call");

        let response = self
            .http
            .post(&url)
            .header("smileid-partner-id", &self.partner_id)
            .header("smileid-request-signature", &signature)
            .header("smileid-timestamp", &timestamp)
            .header("smileid-source-sdk", SOURCE_SDK)
            .header("smileid-source-sdk-version", SOURCE_SDK_VERSION)
            .json(&body)
            .send()
            .await;

        match response {
            Ok(resp) => {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                let raw: serde_json::Value = serde_json::from_str(&text)
                    .unwrap_or_else(|_| serde_json::Value::String(text.clone()));

                if status.is_success() {
                    ProviderOutcome::success(call.category, status.as_u16(), raw)
                } else {
                    tracing::warn!(
                        category = %call.category,
                        status = status.as_u16(),
                        "provider rejected call"
                    );
                    let detail = if text.is_empty() {
                        format!("provider returned HTTP {status}")
                    } else {
                        text
                    };
                    ProviderOutcome::failure(call.category, status.as_u16(), detail, raw)
                }
            }
            Err(e) => {
                tracing::warn!(category = %call.category, error = %e, "provider call failed");
                ProviderOutcome::failure(
                    call.category,
                    500,
                    format!("request failed: {e}"),
                    serde_json::Value::Null,
                )
            }
        }
    }
}
