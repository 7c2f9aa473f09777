//! Concurrent fan-out of provider calls.

use futures_util::future::join_all;
use veriflow_gateway::SigningGateway;
use veriflow_types::{ProviderOutcome, VerificationRecord};

use crate::payload::applicable_calls;

/// Issues every applicable provider call for a record and collects the
/// outcomes.
///
/// Calls are independent: they share no mutable state, run concurrently,
/// and resolve in no particular order. The join barrier guarantees every
/// issued call has resolved before the outcome set is returned; the
/// aggregator keys on category, never position.
pub struct Dispatcher {
    gateway: SigningGateway,
}

impl Dispatcher {
    pub fn new(gateway: SigningGateway) -> Self {
        Self { gateway }
    }

    /// Dispatch one pre-validated record.
    ///
    /// Takes the record by shared reference and never mutates it. A
    /// record with zero applicable categories yields an empty outcome
    /// set, which is valid input for aggregation.
    pub async fn dispatch(&self, record: &VerificationRecord) -> Vec<ProviderOutcome> {
        let calls = applicable_calls(record);
        if calls.is_empty() {
            tracing::info!("record has no verifiable identity facts");
            return Vec::new();
        }

        tracing::info!(count = calls.len(), "dispatching provider calls");
        let outcomes = join_all(calls.iter().map(|call| self.gateway.sign_and_send(call))).await;

        let failures = outcomes.iter().filter(|o| !o.success).count();
        tracing::info!(
            total = outcomes.len(),
            failures,
            "provider calls resolved"
        );
        outcomes
    }
}
