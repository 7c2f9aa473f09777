use proptest::prelude::*;

use veriflow_decision::aggregate;
use veriflow_types::{Category, DecisionStatus, ProviderOutcome, Verdict};

fn outcome(index: usize, success: bool) -> ProviderOutcome {
    let category = Category::ALL[index % Category::ALL.len()];
    if success {
        ProviderOutcome::success(category, 200, serde_json::json!({}))
    } else {
        ProviderOutcome::failure(category, 422, "rejected", serde_json::Value::Null)
    }
}

proptest! {
    /// Risk score is always within [0, 1].
    #[test]
    fn risk_score_bounded(successes in prop::collection::vec(any::<bool>(), 0..10)) {
        let outcomes: Vec<ProviderOutcome> = successes
            .iter()
            .enumerate()
            .map(|(i, &s)| outcome(i, s))
            .collect();
        let decision = aggregate(&outcomes);
        prop_assert!((0.0..=1.0).contains(&decision.risk_score));
    }

    /// Exactly three regimes: all-pass, mixed, all-fail — and the
    /// status/verdict pairing never splits.
    #[test]
    fn status_matches_failure_regime(successes in prop::collection::vec(any::<bool>(), 1..10)) {
        let outcomes: Vec<ProviderOutcome> = successes
            .iter()
            .enumerate()
            .map(|(i, &s)| outcome(i, s))
            .collect();
        let failures = successes.iter().filter(|s| !**s).count();
        let decision = aggregate(&outcomes);

        if failures == 0 {
            prop_assert_eq!(decision.status, DecisionStatus::Verified);
            prop_assert_eq!(decision.decision, Verdict::Approve);
            prop_assert_eq!(decision.risk_score, 0.0);
        } else if failures == successes.len() {
            prop_assert_eq!(decision.status, DecisionStatus::Failed);
            prop_assert_eq!(decision.decision, Verdict::Reject);
            prop_assert_eq!(decision.risk_score, 1.0);
        } else {
            prop_assert_eq!(decision.status, DecisionStatus::ManualReview);
            prop_assert_eq!(decision.decision, Verdict::Review);
            prop_assert_eq!(decision.risk_score, failures as f64 / successes.len() as f64);
        }
    }

    /// One reason per failed outcome, sorted by category name.
    #[test]
    fn reasons_track_failures(successes in prop::collection::vec(any::<bool>(), 1..10)) {
        let outcomes: Vec<ProviderOutcome> = successes
            .iter()
            .enumerate()
            .map(|(i, &s)| outcome(i, s))
            .collect();
        let failures = successes.iter().filter(|s| !**s).count();
        let decision = aggregate(&outcomes);

        prop_assert_eq!(decision.reasons.len(), failures);
        let mut sorted = decision.reasons.clone();
        sorted.sort();
        prop_assert_eq!(&decision.reasons, &sorted);
    }

    /// Aggregation is order-insensitive.
    #[test]
    fn aggregation_ignores_completion_order(successes in prop::collection::vec(any::<bool>(), 1..10)) {
        let outcomes: Vec<ProviderOutcome> = successes
            .iter()
            .enumerate()
            .map(|(i, &s)| outcome(i, s))
            .collect();
        let mut reversed = outcomes.clone();
        reversed.reverse();
        prop_assert_eq!(aggregate(&outcomes), aggregate(&reversed));
    }
}
