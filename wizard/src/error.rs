use thiserror::Error;
use veriflow_types::ValidationError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("step '{step}' is not complete: {reason}")]
    StepIncomplete { step: &'static str, reason: String },

    #[error("already at the first step")]
    AtFirstStep,

    #[error("already at the final step")]
    AtFinalStep,

    #[error("submission is only available from the review step")]
    NotAtReview,

    #[error("submission already completed")]
    AlreadySubmitted,

    #[error("invalid record: {0}")]
    Validation(#[from] ValidationError),
}
