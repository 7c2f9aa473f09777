//! Applicability rules and per-category payload construction.

use serde_json::json;
use veriflow_types::{Category, ProviderCall, VerificationRecord};

/// Country code sent on every provider payload.
pub const DEFAULT_COUNTRY: &str = "NG";

/// The provider calls a record requires.
///
/// Applicability is a pure presence test per category. The bank category
/// needs both halves of its pair; a lone account number or lone bank
/// code is silently skipped (strict joint-presence checks belong to
/// record validation, before dispatch).
pub fn applicable_calls(record: &VerificationRecord) -> Vec<ProviderCall> {
    Category::ALL
        .iter()
        .filter_map(|&category| build_call(category, record))
        .collect()
}

fn build_call(category: Category, record: &VerificationRecord) -> Option<ProviderCall> {
    let payload = match category {
        Category::Nin => id_number_payload(record, record.nin.as_deref()?),
        Category::Bvn => id_number_payload(record, record.bvn.as_deref()?),
        Category::Address => {
            let address = record.address.as_ref()?;
            json!({
                "country": address.country,
                "street": address.street,
                "city": address.city,
                "state": address.state,
                "first_name": record.first_name,
                "last_name": record.last_name,
            })
        }
        Category::Bank => {
            let account = record.bank_account.as_deref()?;
            let code = record.bank_code.as_deref()?;
            json!({
                "country": DEFAULT_COUNTRY,
                "account_number": account,
                "bank_code": code,
            })
        }
        Category::Phone => json!({
            "country": DEFAULT_COUNTRY,
            "phone_number": record.phone.as_deref()?,
            "match_fields": {
                "first_name": record.first_name,
                "last_name": record.last_name,
            },
        }),
        Category::DriversLicense => id_number_payload(record, record.dl_number.as_deref()?),
        Category::Passport => id_number_payload(record, record.passport_number.as_deref()?),
        Category::Plate => json!({
            "country": DEFAULT_COUNTRY,
            "id_number": record.plate_number.as_deref()?,
        }),
        Category::Voters => json!({
            "country": DEFAULT_COUNTRY,
            "id_number": record.voters_number.as_deref()?,
            "first_name": record.first_name,
            "last_name": record.last_name,
        }),
        Category::Liveness => json!({
            "country": DEFAULT_COUNTRY,
            "image": record.selfie_base64.as_deref()?,
            "first_name": record.first_name,
            "last_name": record.last_name,
        }),
    };

    Some(ProviderCall::new(category, payload))
}

fn id_number_payload(record: &VerificationRecord, id_number: &str) -> serde_json::Value {
    json!({
        "country": DEFAULT_COUNTRY,
        "id_number": id_number,
        "first_name": record.first_name,
        "last_name": record.last_name,
        "dob": record.dob,
    })
}
