use thiserror::Error;

/// A malformed field in a [`crate::VerificationRecord`].
///
/// Raised before a record reaches the dispatcher; the dispatcher itself
/// assumes a pre-validated record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be exactly {len} digits")]
    NotDigits { field: &'static str, len: usize },

    #[error("dob must be formatted YYYY-MM-DD")]
    MalformedDob,

    #[error("bank account and bank code must be supplied together")]
    BankPairIncomplete,

    #[error("both consent flags must be accepted")]
    ConsentWithheld,
}
