//! Conflict-indicator vocabulary.
//!
//! Keywords are matched as lowercase substrings, so short entries such as
//! `am`, `by` and `due` also fire inside longer words.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

/// Topic category → keyword table.
pub const CONFLICT_INDICATORS: &[(&str, &[&str])] = &[
    (
        "time",
        &[
            "deadline", "due", "submit", "before", "after", "until", "by", "pm", "am", "midnight",
            "noon",
        ],
    ),
    (
        "dates",
        &[
            "date",
            "day",
            "week",
            "month",
            "year",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
        ],
    ),
    (
        "numbers",
        &[
            "percent",
            "%",
            "minimum",
            "maximum",
            "at least",
            "no more than",
            "exactly",
            "approximately",
        ],
    ),
    (
        "requirements",
        &[
            "must",
            "required",
            "mandatory",
            "optional",
            "should",
            "shall",
            "need",
            "necessary",
        ],
    ),
    (
        "policies",
        &[
            "policy",
            "rule",
            "regulation",
            "guideline",
            "procedure",
            "process",
            "standard",
        ],
    ),
    (
        "penalties",
        &[
            "penalty",
            "fine",
            "deduction",
            "reduction",
            "consequence",
            "punishment",
        ],
    ),
    (
        "attendance",
        &["attendance", "present", "absent", "participate", "attend"],
    ),
    (
        "notice",
        &[
            "notice",
            "notification",
            "inform",
            "alert",
            "warning",
            "advance",
        ],
    ),
    (
        "grades",
        &[
            "grade",
            "score",
            "mark",
            "point",
            "percentage",
            "gpa",
            "evaluation",
        ],
    ),
];

/// Single automaton over every keyword of every category.
static INDICATOR_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    let keywords = CONFLICT_INDICATORS
        .iter()
        .flat_map(|(_, words)| words.iter().copied());
    AhoCorasick::new(keywords).unwrap()
});

/// Whether `lowercase_text` contains any conflict-indicator keyword.
pub fn has_conflict_indicator(lowercase_text: &str) -> bool {
    INDICATOR_MATCHER.is_match(lowercase_text)
}
