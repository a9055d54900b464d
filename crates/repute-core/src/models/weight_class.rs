use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight class assigned to a predicate by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateWeightClass {
    High,
    Medium,
    Low,
    Negative,
    Unknown,
}

impl PredicateWeightClass {
    /// All classes, in classification priority order.
    pub const PRIORITY: [PredicateWeightClass; 4] = [
        PredicateWeightClass::Negative,
        PredicateWeightClass::High,
        PredicateWeightClass::Medium,
        PredicateWeightClass::Low,
    ];

    /// Base weight of the class.
    pub fn weight(self) -> f64 {
        match self {
            Self::High => 1.5,
            Self::Medium => 1.0,
            Self::Low => 0.5,
            Self::Negative => -2.0,
            Self::Unknown => 0.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Negative => "negative",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PredicateWeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
