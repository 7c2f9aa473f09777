//! Provider calls and their outcomes.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One outbound verification request.
///
/// Constructed by the dispatcher per applicable category, issued once,
/// and resolved to exactly one [`ProviderOutcome`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderCall {
    pub category: Category,
    /// Provider endpoint path, relative to the gateway base URL.
    pub endpoint: String,
    /// Category-specific subset of the verification record.
    pub payload: serde_json::Value,
}

impl ProviderCall {
    pub fn new(category: Category, payload: serde_json::Value) -> Self {
        Self {
            category,
            endpoint: category.endpoint_path().to_string(),
            payload,
        }
    }
}

/// The result of one category's provider call.
///
/// Produced by the signing gateway; owned thereafter by the aggregator.
/// Transport failures are outcomes too — the gateway never raises past
/// its boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProviderOutcome {
    pub category: Category,
    pub http_status: u16,
    pub success: bool,
    /// Opaque provider response body.
    pub raw: serde_json::Value,
    /// Present iff `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl ProviderOutcome {
    /// A successful provider response (HTTP 2xx).
    pub fn success(category: Category, http_status: u16, raw: serde_json::Value) -> Self {
        Self {
            category,
            http_status,
            success: true,
            raw,
            error_detail: None,
        }
    }

    /// A failed call: provider rejection or transport error.
    pub fn failure(
        category: Category,
        http_status: u16,
        error_detail: impl Into<String>,
        raw: serde_json::Value,
    ) -> Self {
        Self {
            category,
            http_status,
            success: false,
            raw,
            error_detail: Some(error_detail.into()),
        }
    }
}
