//! Conflict records: a description and resolution suggestions for each
//! contradiction match.

use std::sync::LazyLock;

use doccheck_core::models::{Conflict, ConflictingText, ContradictionMatch};
use regex::Regex;

/// Clock time such as `9:30` or `10:00`.
static CLOCK_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,2}:[0-9]{2}").unwrap());

/// What a conflict is about, judged from the two statements' wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictCategory {
    /// Both statements state a percentage.
    Percentage,
    /// Both statements state a clock time.
    Schedule,
    /// At least one statement says something is required.
    Requirement,
    General,
}

impl ConflictCategory {
    /// Classify a statement pair. Checks run in declaration order and the
    /// first hit wins.
    pub fn classify(text1: &str, text2: &str) -> Self {
        if text1.contains('%') && text2.contains('%') {
            Self::Percentage
        } else if CLOCK_TIME_RE.is_match(text1) && CLOCK_TIME_RE.is_match(text2) {
            Self::Schedule
        } else if text1.contains("required") || text2.contains("required") {
            Self::Requirement
        } else {
            Self::General
        }
    }

    pub fn description(self, document1: &str, document2: &str) -> String {
        match self {
            Self::Percentage => {
                format!("Conflicting percentage values between {document1} and {document2}")
            }
            Self::Schedule => {
                format!("Conflicting deadlines or times between {document1} and {document2}")
            }
            Self::Requirement => {
                format!("Conflicting requirements between {document1} and {document2}")
            }
            Self::General => {
                format!("Potential contradiction between {document1} and {document2}")
            }
        }
    }

    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Self::Percentage => &[
                "Unify the percentage requirements across documents",
                "Specify the context in which each percentage applies",
                "Review the thresholds with the responsible committee",
            ],
            Self::Schedule => &[
                "Standardize submission deadlines across all documents",
                "Create a master schedule document",
                "Add clarification notes for different contexts",
            ],
            Self::Requirement => &[
                "Clarify whether the requirement is mandatory or optional",
                "Align the requirement wording across documents",
                "List any exceptions explicitly",
            ],
            Self::General => &[
                "Review both statements for consistency",
                "Clarify which document takes precedence",
                "Add cross-references between the related sections",
            ],
        }
    }
}

/// Build the conflict record for one match.
pub fn conflict_from_match(id: impl Into<String>, m: &ContradictionMatch) -> Conflict {
    let category = ConflictCategory::classify(&m.text1, &m.text2);
    Conflict {
        id: id.into(),
        conflict_type: m.match_type,
        severity: m.severity,
        documents: vec![m.document1.clone(), m.document2.clone()],
        description: category.description(&m.document1, &m.document2),
        suggestions: category.suggestions().iter().map(|s| s.to_string()).collect(),
        conflicting_text: vec![
            ConflictingText {
                document: m.document1.clone(),
                text: m.text1.clone(),
                context: m.context1.clone(),
            },
            ConflictingText {
                document: m.document2.clone(),
                text: m.text2.clone(),
                context: m.context2.clone(),
            },
        ],
    }
}

/// Build conflicts for a ranked match list. Ids are `1`, `2`, ... in match
/// order.
pub fn conflicts_from_matches(matches: &[ContradictionMatch]) -> Vec<Conflict> {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| conflict_from_match((i + 1).to_string(), m))
        .collect()
}
