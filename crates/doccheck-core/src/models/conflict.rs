use serde::{Deserialize, Serialize};

use super::{MatchType, Severity};

/// A user-facing conflict record derived from a contradiction match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub id: String,
    #[serde(rename = "type")]
    pub conflict_type: MatchType,
    pub severity: Severity,
    /// Names of the documents involved.
    pub documents: Vec<String>,
    pub description: String,
    pub suggestions: Vec<String>,
    pub conflicting_text: Vec<ConflictingText>,
}

/// One side of a conflict: the statement and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingText {
    pub document: String,
    pub text: String,
    pub context: String,
}
