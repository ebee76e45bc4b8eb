//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables for the contradiction matcher.
///
/// Every field is optional so that config layers can be merged; the
/// `effective_*` accessors supply the compiled defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Similarity gate for numeric conflicts. Default: 0.3.
    pub numeric_similarity_threshold: Option<f64>,
    /// Similarity gate for time-of-day conflicts. Default: 0.2.
    pub time_similarity_threshold: Option<f64>,
    /// Similarity gate for opposing-term conflicts. Default: 0.2.
    pub policy_similarity_threshold: Option<f64>,
    /// Minimum absolute difference for two numbers to conflict. Default: 0.1.
    pub value_difference_epsilon: Option<f64>,
    /// Numeric differences above this are high severity. Default: 20.
    pub high_severity_difference: Option<f64>,
    /// Cap on returned matches. Default: 10.
    pub max_matches: Option<usize>,
    /// Skip numeric comparisons across unit families (percent vs days).
    /// Default: false.
    pub unit_aware_numeric: Option<bool>,
    /// Reject documents larger than this many bytes. Default: 10 MiB.
    pub max_document_bytes: Option<u64>,
}

impl AnalysisConfig {
    pub fn effective_numeric_similarity_threshold(&self) -> f64 {
        self.numeric_similarity_threshold
            .unwrap_or(constants::DEFAULT_NUMERIC_SIMILARITY_THRESHOLD)
    }

    pub fn effective_time_similarity_threshold(&self) -> f64 {
        self.time_similarity_threshold
            .unwrap_or(constants::DEFAULT_TIME_SIMILARITY_THRESHOLD)
    }

    pub fn effective_policy_similarity_threshold(&self) -> f64 {
        self.policy_similarity_threshold
            .unwrap_or(constants::DEFAULT_POLICY_SIMILARITY_THRESHOLD)
    }

    pub fn effective_value_difference_epsilon(&self) -> f64 {
        self.value_difference_epsilon
            .unwrap_or(constants::DEFAULT_VALUE_DIFFERENCE_EPSILON)
    }

    pub fn effective_high_severity_difference(&self) -> f64 {
        self.high_severity_difference
            .unwrap_or(constants::DEFAULT_HIGH_SEVERITY_DIFFERENCE)
    }

    pub fn effective_max_matches(&self) -> usize {
        self.max_matches.unwrap_or(constants::DEFAULT_MAX_MATCHES)
    }

    pub fn effective_unit_aware_numeric(&self) -> bool {
        self.unit_aware_numeric.unwrap_or(false)
    }

    pub fn effective_max_document_bytes(&self) -> u64 {
        self.max_document_bytes
            .unwrap_or(constants::DEFAULT_MAX_DOCUMENT_BYTES)
    }
}
