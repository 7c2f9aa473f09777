//! Request-signature computation.
//!
//! A signature is valid for exactly the `(timestamp, partner_id)` pair it
//! was computed over. Timestamp freshness is the provider's replay
//! protection, so signatures are computed per call and never cached.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{SecondsFormat, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::GatewayError;

/// Static suffix appended to every signature base string.
pub const SIGNATURE_SUFFIX: &str = "sid_request";

/// Current time as ISO-8601 UTC with millisecond precision.
pub fn utc_timestamp_millis() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Compute the request signature for one outbound call.
///
/// The base string is `timestamp || partner_id || "sid_request"` with no
/// separators, hashed with HMAC-SHA256 under the base64-decoded shared
/// secret, and re-encoded as base64.
pub fn request_signature(
    timestamp: &str,
    partner_id: &str,
    auth_secret: &str,
) -> Result<String, GatewayError> {
    let key = BASE64.decode(auth_secret).map_err(|e| {
        GatewayError::Configuration(format!("auth secret is not valid base64: {e}"))
    })?;

    let mut mac =
        Hmac::<Sha256>::new_from_slice(&key).expect("HMAC accepts keys of any length");
    mac.update(timestamp.as_bytes());
    mac.update(partner_id.as_bytes());
    mac.update(SIGNATURE_SUFFIX.as_bytes());

    Ok(BASE64.encode(mac.finalize().into_bytes()))
}
