//! The accumulated wizard output: one record of identity facts.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Everything the wizard collected about one user.
///
/// Identity-number, address, banking, phone, document, and liveness
/// facts are all optional; each present fact maps to one provider call.
/// The record is handed to the dispatcher by shared reference and is
/// never mutated past that point.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerificationRecord {
    pub first_name: String,
    pub last_name: String,
    /// Date of birth, `YYYY-MM-DD`.
    pub dob: String,

    /// National Identification Number, 11 digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nin: Option<String>,
    /// Bank Verification Number, 11 digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bvn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Bank account number, 10 digits. Only dispatched together with
    /// `bank_code`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// Display name of the selected bank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// Account holder name resolved by the banking step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    /// Phone number, 11 digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dl_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voters_number: Option<String>,

    /// Base64-encoded selfie for the liveness check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selfie_base64: Option<String>,

    pub consents: Consents,
}

/// A residential address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

/// User consent flags. Both must be accepted before submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consents {
    pub terms: bool,
    pub data_processing: bool,
}

impl VerificationRecord {
    /// Validate every present field.
    ///
    /// A record that fails here must never be dispatched.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.chars().count() < 2 {
            return Err(ValidationError::TooShort {
                field: "firstName",
                min: 2,
            });
        }
        if self.last_name.chars().count() < 2 {
            return Err(ValidationError::TooShort {
                field: "lastName",
                min: 2,
            });
        }
        if !is_date_shape(&self.dob) {
            return Err(ValidationError::MalformedDob);
        }

        check_digits(self.nin.as_deref(), "nin", 11)?;
        check_digits(self.bvn.as_deref(), "bvn", 11)?;
        check_digits(self.phone.as_deref(), "phone", 11)?;
        check_digits(self.bank_account.as_deref(), "bankAccount", 10)?;

        if self.bank_account.is_some() != self.bank_code.is_some() {
            return Err(ValidationError::BankPairIncomplete);
        }

        if let Some(address) = &self.address {
            if address.street.chars().count() < 5 {
                return Err(ValidationError::TooShort {
                    field: "address.street",
                    min: 5,
                });
            }
        }

        if !(self.consents.terms && self.consents.data_processing) {
            return Err(ValidationError::ConsentWithheld);
        }

        Ok(())
    }
}

/// `YYYY-MM-DD` shape check. Calendar validity is the provider's concern.
fn is_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit())
}

fn check_digits(
    value: Option<&str>,
    field: &'static str,
    len: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.len() == len && v.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        Some(_) => Err(ValidationError::NotDigits { field, len }),
        None => Ok(()),
    }
}
