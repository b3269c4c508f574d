use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// NVD qualitative rating for CVSS v2 scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,    // 0.0 - 3.9
    Medium, // 4.0 - 6.9
    High,   // 7.0 - 10.0
}

impl Severity {
    #[must_use]
    pub fn from_score(score: Decimal) -> Self {
        if score < dec!(4.0) {
            Self::Low
        } else if score < dec!(7.0) {
            Self::Medium
        } else {
            Self::High
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
