//! ContradictionMatcher: extracts segments once per document, runs every
//! detection strategy over each unordered document pair, then ranks.

use doccheck_core::config::AnalysisConfig;
use doccheck_core::constants::{self, MIN_DOCUMENTS};
use doccheck_core::models::{ContradictionMatch, Document, Segment};
use tracing::{debug, info, instrument};

use crate::contradiction::detection;
use crate::contradiction::rank_matches;
use crate::contradiction::scan::DocumentPair;
use crate::extraction::extract_relevant_sentences;

/// Resolved thresholds for the matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherConfig {
    /// Numeric detector fires only above this similarity.
    pub numeric_similarity_threshold: f64,
    /// Time detector fires only above this similarity.
    pub time_similarity_threshold: f64,
    /// Policy detector fires only above this similarity.
    pub policy_similarity_threshold: f64,
    /// Numbers closer than this are considered equal.
    pub value_difference_epsilon: f64,
    /// Numeric differences above this are high severity.
    pub high_severity_difference: f64,
    /// Cap on returned matches.
    pub max_matches: usize,
    /// Skip numeric comparisons between percentages and durations.
    pub unit_aware_numeric: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            numeric_similarity_threshold: constants::DEFAULT_NUMERIC_SIMILARITY_THRESHOLD,
            time_similarity_threshold: constants::DEFAULT_TIME_SIMILARITY_THRESHOLD,
            policy_similarity_threshold: constants::DEFAULT_POLICY_SIMILARITY_THRESHOLD,
            value_difference_epsilon: constants::DEFAULT_VALUE_DIFFERENCE_EPSILON,
            high_severity_difference: constants::DEFAULT_HIGH_SEVERITY_DIFFERENCE,
            max_matches: constants::DEFAULT_MAX_MATCHES,
            unit_aware_numeric: false,
        }
    }
}

impl From<&AnalysisConfig> for MatcherConfig {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            numeric_similarity_threshold: config.effective_numeric_similarity_threshold(),
            time_similarity_threshold: config.effective_time_similarity_threshold(),
            policy_similarity_threshold: config.effective_policy_similarity_threshold(),
            value_difference_epsilon: config.effective_value_difference_epsilon(),
            high_severity_difference: config.effective_high_severity_difference(),
            max_matches: config.effective_max_matches(),
            unit_aware_numeric: config.effective_unit_aware_numeric(),
        }
    }
}

/// Pairwise document contradiction detector.
///
/// Stateless apart from its configuration; one matcher can serve any
/// number of concurrent analyses.
#[derive(Debug, Clone, Default)]
pub struct ContradictionMatcher {
    config: MatcherConfig,
}

impl ContradictionMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Get the matcher configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Find conflicting statements across `documents`.
    ///
    /// Fewer than two documents yields an empty result. Otherwise every
    /// pair `(i, j)` with `i < j` is compared, labelled in input order,
    /// and the combined matches are deduplicated on `(text1, text2)`,
    /// sorted by confidence and capped at `max_matches`.
    #[instrument(skip_all, fields(documents = documents.len()))]
    pub fn analyze(&self, documents: &[Document]) -> Vec<ContradictionMatch> {
        if documents.len() < MIN_DOCUMENTS {
            debug!("fewer than {MIN_DOCUMENTS} documents, nothing to compare");
            return Vec::new();
        }

        let segments: Vec<Vec<Segment>> = documents
            .iter()
            .map(|doc| extract_relevant_sentences(&doc.content, &doc.name))
            .collect();

        let mut all_matches = Vec::new();
        for i in 0..documents.len() {
            for j in (i + 1)..documents.len() {
                let pair = DocumentPair::new(&documents[i].name, &documents[j].name);
                let found = detection::detect_all(&segments[i], &segments[j], pair, &self.config);
                debug!(
                    document1 = %pair.first,
                    document2 = %pair.second,
                    segments1 = segments[i].len(),
                    segments2 = segments[j].len(),
                    matches = found.len(),
                    "compared document pair"
                );
                all_matches.extend(found);
            }
        }

        let candidates = all_matches.len();
        let ranked = rank_matches(all_matches, self.config.max_matches);
        info!(
            candidates,
            returned = ranked.len(),
            "contradiction analysis complete"
        );
        ranked
    }
}

/// Analyze with the default configuration.
pub fn analyze(documents: &[Document]) -> Vec<ContradictionMatch> {
    ContradictionMatcher::default().analyze(documents)
}
