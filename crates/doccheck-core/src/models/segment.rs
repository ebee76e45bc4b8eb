use serde::{Deserialize, Serialize};

/// A sentence-level fragment of a document judged topically relevant.
///
/// `text` is trimmed and longer than ten characters. `position` is the
/// zero-based index of the fragment among *all* split fragments of the
/// document, so numbering has gaps where fragments were filtered out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    /// Human-readable label, e.g. `Sentence 3 in handbook.txt`.
    pub context: String,
    pub position: usize,
}
