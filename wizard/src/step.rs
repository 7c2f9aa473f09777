//! The ordered step sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One data-collection step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    PersonalInfo,
    Address,
    IdentityNumbers,
    Banking,
    DocumentUpload,
    Liveness,
    Review,
}

impl Step {
    /// The wizard order. `Review` is terminal.
    pub const SEQUENCE: [Step; 7] = [
        Step::PersonalInfo,
        Step::Address,
        Step::IdentityNumbers,
        Step::Banking,
        Step::DocumentUpload,
        Step::Liveness,
        Step::Review,
    ];

    /// Position of this step in the sequence.
    pub fn index(&self) -> usize {
        Self::SEQUENCE
            .iter()
            .position(|s| s == self)
            .expect("every step is in the sequence")
    }

    pub fn is_initial(&self) -> bool {
        *self == Step::PersonalInfo
    }

    pub fn is_terminal(&self) -> bool {
        *self == Step::Review
    }

    /// Human-readable step title.
    pub fn title(&self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info",
            Step::Address => "Address",
            Step::IdentityNumbers => "Identity Numbers",
            Step::Banking => "Banking",
            Step::DocumentUpload => "Document Upload",
            Step::Liveness => "Liveness Check",
            Step::Review => "Review",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
