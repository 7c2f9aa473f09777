//! Decision aggregation.
//!
//! Reduces the outcome set of one wizard submission to a single
//! verified / manual_review / failed decision. The three-tier precedence
//! (all-pass, partial, all-fail) is the central business rule.

pub mod aggregate;

pub use aggregate::{aggregate, NO_FACTS_REASON};
