//! Fundamental types for the Veriflow verification pipeline.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: identity-fact categories, the accumulated verification
//! record, provider calls and outcomes, and the final decision.

pub mod category;
pub mod decision;
pub mod error;
pub mod outcome;
pub mod record;

pub use category::Category;
pub use decision::{Decision, DecisionStatus, Verdict};
pub use error::ValidationError;
pub use outcome::{ProviderCall, ProviderOutcome};
pub use record::{Address, Consents, VerificationRecord};
