//! Conflicting quantities: percentages and durations.

use std::sync::LazyLock;

use doccheck_core::models::{ContradictionMatch, ExtractedNumber, Segment, Severity};
use regex::Regex;

use crate::contradiction::scan::{scan_segment_pairs, DocumentPair};
use crate::engine::MatcherConfig;

/// `75%`, `7.5 %`.
static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*%").unwrap());

/// `3 days`, `2 Weeks`, `48hours`. No word boundary after the unit.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(days?|weeks?|months?|hours?|minutes?)").unwrap()
});

/// Extract every percentage, then every duration, in text order.
pub fn extract_numbers(text: &str) -> Vec<ExtractedNumber> {
    let percentages = PERCENT_RE.captures_iter(text).filter_map(|caps| {
        let value = caps[1].parse::<f64>().ok()?;
        Some(ExtractedNumber::new(value, "%"))
    });
    let durations = DURATION_RE.captures_iter(text).filter_map(|caps| {
        let value = caps[1].parse::<f64>().ok()?;
        Some(ExtractedNumber::new(value, &caps[2]))
    });
    percentages.chain(durations).collect()
}

/// Compare every number of one statement with every number of the other.
///
/// Units are ignored unless `unit_aware_numeric` is set, so a percentage
/// can conflict with a day count.
pub fn detect(
    segments1: &[Segment],
    segments2: &[Segment],
    documents: DocumentPair<'_>,
    config: &MatcherConfig,
) -> Vec<ContradictionMatch> {
    scan_segment_pairs(
        segments1,
        segments2,
        documents,
        config.numeric_similarity_threshold,
        extract_numbers,
        |numbers1, numbers2| judge(numbers1, numbers2, config),
    )
}

fn judge(
    numbers1: &[ExtractedNumber],
    numbers2: &[ExtractedNumber],
    config: &MatcherConfig,
) -> Vec<Severity> {
    let mut severities = Vec::new();
    for a in numbers1 {
        for b in numbers2 {
            if config.unit_aware_numeric && !a.same_unit_family(b) {
                continue;
            }
            let difference = (a.value - b.value).abs();
            if difference > config.value_difference_epsilon {
                severities.push(if difference > config.high_severity_difference {
                    Severity::High
                } else {
                    Severity::Medium
                });
            }
        }
    }
    severities
}
