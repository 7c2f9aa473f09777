//! The terminal step's render contract.

use veriflow_types::{Decision, DecisionStatus};

/// Visual state of the terminal step.
///
/// Tri-state by design: manual review renders as `Failed` but carries
/// its own user-facing message (see [`user_message`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Outcomes are still pending.
    Loading,
    /// The decision came back verified.
    Success,
    /// Anything other than verified.
    Failed,
}

impl RenderState {
    /// Map a submission's progress to a render state.
    pub fn from_decision(decision: Option<&Decision>) -> Self {
        match decision {
            None => RenderState::Loading,
            Some(d) if d.status == DecisionStatus::Verified => RenderState::Success,
            Some(_) => RenderState::Failed,
        }
    }
}

/// User-facing message for a completed decision.
///
/// Manual review gets a distinct, actionable message even though it
/// shares the `Failed` visual state. No retry is offered.
pub fn user_message(decision: &Decision) -> &'static str {
    match decision.status {
        DecisionStatus::Verified => "Verification successful.",
        DecisionStatus::ManualReview => "We need a quick manual review. We'll notify you.",
        DecisionStatus::Failed => "Verification failed. Please contact support.",
    }
}
