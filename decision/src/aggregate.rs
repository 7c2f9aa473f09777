//! The outcome-set reduction.

use veriflow_types::{Decision, DecisionStatus, ProviderOutcome, Verdict};

/// Reason attached when a record carried nothing verifiable.
pub const NO_FACTS_REASON: &str = "no verifiable identity facts supplied";

/// Reduce a completed outcome set to one decision.
///
/// Precedence:
/// - empty set: manual review at maximal risk (nothing was verifiable);
/// - no failures: verified;
/// - some failures: manual review, risk is the exact failure fraction;
/// - all failures: failed.
///
/// Reasons carry one entry per failed category, sorted by category name
/// so the output is reproducible regardless of completion order.
pub fn aggregate(outcomes: &[ProviderOutcome]) -> Decision {
    if outcomes.is_empty() {
        return Decision {
            status: DecisionStatus::ManualReview,
            decision: Verdict::Review,
            risk_score: 1.0,
            reasons: vec![NO_FACTS_REASON.to_string()],
        };
    }

    let total = outcomes.len();
    let mut failed: Vec<&ProviderOutcome> = outcomes.iter().filter(|o| !o.success).collect();
    failed.sort_by_key(|o| o.category.as_str());

    let failure_count = failed.len();
    let reasons: Vec<String> = failed
        .iter()
        .map(|o| {
            format!(
                "{}: {}",
                o.category,
                o.error_detail.as_deref().unwrap_or("provider error")
            )
        })
        .collect();

    if failure_count == 0 {
        Decision {
            status: DecisionStatus::Verified,
            decision: Verdict::Approve,
            risk_score: 0.0,
            reasons,
        }
    } else if failure_count == total {
        Decision {
            status: DecisionStatus::Failed,
            decision: Verdict::Reject,
            risk_score: 1.0,
            reasons,
        }
    } else {
        Decision {
            status: DecisionStatus::ManualReview,
            decision: Verdict::Review,
            risk_score: failure_count as f64 / total as f64,
            reasons,
        }
    }
}
