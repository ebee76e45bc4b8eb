use std::fmt;

use serde::{Deserialize, Serialize};

/// A detected conflict between one statement in each of two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionMatch {
    pub document1: String,
    pub document2: String,
    pub text1: String,
    pub text2: String,
    pub context1: String,
    pub context2: String,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub severity: Severity,
    /// Lexical overlap between the two statements, in `[0, 1]`.
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// The statements cannot both hold.
    Contradiction,
    /// The statements cover the same ground with different wording.
    Overlap,
    /// The statements disagree in detail without directly opposing.
    Inconsistency,
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Contradiction => "contradiction",
            Self::Overlap => "overlap",
            Self::Inconsistency => "inconsistency",
        };
        f.write_str(s)
    }
}

/// Coarse priority bucket assigned by each detector's own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(s)
    }
}

/// A quantity parsed out of a statement, e.g. `75 %` or `3 weeks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedNumber {
    pub value: f64,
    /// `%` for percentages, otherwise the unit word as written (`days`, `Week`).
    pub unit: String,
}

impl ExtractedNumber {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Whether this is a percentage.
    pub fn is_percentage(&self) -> bool {
        self.unit == "%"
    }

    /// Percentages and durations are different families; all duration
    /// units count as one family.
    pub fn same_unit_family(&self, other: &ExtractedNumber) -> bool {
        self.is_percentage() == other.is_percentage()
    }
}
