//! Identity-fact categories and their provider endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One identity-fact type, mapped to exactly one provider endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// National Identification Number.
    Nin,
    /// Bank Verification Number.
    Bvn,
    /// Residential address.
    Address,
    /// Bank account + bank code pair.
    Bank,
    /// Phone number with name match.
    Phone,
    /// Driver's license number.
    DriversLicense,
    /// International passport number.
    Passport,
    /// Vehicle plate number.
    Plate,
    /// Voter's card number.
    Voters,
    /// Selfie liveness check.
    Liveness,
}

impl Category {
    /// All categories, in dispatch order.
    pub const ALL: [Category; 10] = [
        Category::Nin,
        Category::Bvn,
        Category::Address,
        Category::Bank,
        Category::Phone,
        Category::DriversLicense,
        Category::Passport,
        Category::Plate,
        Category::Voters,
        Category::Liveness,
    ];

    /// Stable snake_case name, used in payloads and decision reasons.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Nin => "nin",
            Category::Bvn => "bvn",
            Category::Address => "address",
            Category::Bank => "bank",
            Category::Phone => "phone",
            Category::DriversLicense => "drivers_license",
            Category::Passport => "passport",
            Category::Plate => "plate",
            Category::Voters => "voters",
            Category::Liveness => "liveness",
        }
    }

    /// Provider endpoint path for this category.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Category::Nin => "/v2/verify-nin",
            Category::Bvn => "/v2/verify-bvn",
            Category::Address => "/v2/verify-address",
            Category::Bank => "/v2/verify-bank-account",
            Category::Phone => "/v2/verify-phone-number",
            Category::DriversLicense => "/v2/verify-drivers-license",
            Category::Passport => "/v2/verify-passport",
            Category::Plate => "/v2/verify-plate-number",
            Category::Voters => "/v2/verify-voters-card",
            Category::Liveness => "/v2/verify-liveness",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }

    #[test]
    fn endpoints_are_unique() {
        let mut paths: Vec<&str> = Category::ALL.iter().map(|c| c.endpoint_path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Category::ALL.len());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Category::DriversLicense).unwrap();
        assert_eq!(json, "\"drivers_license\"");
        let back: Category = serde_json::from_str("\"drivers_license\"").unwrap();
        assert_eq!(back, Category::DriversLicense);
    }
}
