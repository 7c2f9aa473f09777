//! The final verification decision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated verdict over one wizard submission.
///
/// Computed once by the aggregator and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub status: DecisionStatus,
    pub decision: Verdict,
    /// Fraction of failed categories, 0.0 (all passed) to 1.0.
    pub risk_score: f64,
    /// One entry per failed category, sorted by category name.
    pub reasons: Vec<String>,
}

/// Where the submission landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Verified,
    ManualReview,
    Failed,
}

/// The action the caller should take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approve,
    Review,
    Reject,
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionStatus::Verified => "verified",
            DecisionStatus::ManualReview => "manual_review",
            DecisionStatus::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&DecisionStatus::ManualReview).unwrap();
        assert_eq!(json, "\"manual_review\"");
    }

    #[test]
    fn decision_round_trips() {
        let decision = Decision {
            status: DecisionStatus::ManualReview,
            decision: Verdict::Review,
            risk_score: 0.5,
            reasons: vec!["phone: no match".into()],
        };
        let json = serde_json::to_string(&decision).unwrap();
        assert!(json.contains("\"riskScore\":0.5"));
        let back: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(back, decision);
    }
}
