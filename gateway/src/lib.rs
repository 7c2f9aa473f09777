//! Signing gateway for outbound identity-provider calls.
//!
//! Authenticates each call with a timestamp-fresh HMAC-SHA256 signature
//! and normalizes every provider response — success, rejection, or
//! transport failure — into a uniform [`veriflow_types::ProviderOutcome`].
//! Holds no state between calls beyond the shared HTTP client.

pub mod client;
pub mod config;
pub mod error;
pub mod ids;
pub mod sign;

pub use client::{SigningGateway, SOURCE_SDK, SOURCE_SDK_VERSION};
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use ids::{CountingSource, IdPair, IdSource, UuidSource};
pub use sign::{request_signature, utc_timestamp_millis, SIGNATURE_SUFFIX};
