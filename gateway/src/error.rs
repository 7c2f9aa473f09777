use thiserror::Error;

/// Errors the gateway can surface to its caller.
///
/// Only configuration problems escape: provider rejections and transport
/// failures are folded into `ProviderOutcome` so the dispatcher can treat
/// every category uniformly.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway configuration error: {0}")]
    Configuration(String),

    #[error("failed to create HTTP client: {0}")]
    Http(String),
}
