//! Pairwise segment scan shared by every detection strategy.

use doccheck_core::models::{ContradictionMatch, MatchType, Segment, Severity};

use super::similarity::context_similarity;

/// Document names attached to every match of a scan.
#[derive(Debug, Clone, Copy)]
pub struct DocumentPair<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

impl<'a> DocumentPair<'a> {
    pub fn new(first: &'a str, second: &'a str) -> Self {
        Self { first, second }
    }
}

/// Compare every segment of `segments1` with every segment of `segments2`.
///
/// `extract` pulls the comparable values (numbers, times, terms) out of a
/// statement; pairs where either side yields nothing are skipped. Pairs
/// whose context similarity is not strictly above `min_similarity` are
/// skipped as well. `judge` then returns one severity per conflict found
/// between the two value lists, and each becomes a `contradiction` match
/// whose confidence is the similarity.
pub fn scan_segment_pairs<T, E, J>(
    segments1: &[Segment],
    segments2: &[Segment],
    documents: DocumentPair<'_>,
    min_similarity: f64,
    extract: E,
    judge: J,
) -> Vec<ContradictionMatch>
where
    E: Fn(&str) -> Vec<T>,
    J: Fn(&[T], &[T]) -> Vec<Severity>,
{
    let values2: Vec<Vec<T>> = segments2.iter().map(|s| extract(&s.text)).collect();
    let mut matches = Vec::new();

    for seg1 in segments1 {
        let values1 = extract(&seg1.text);
        if values1.is_empty() {
            continue;
        }

        for (seg2, values2) in segments2.iter().zip(&values2) {
            if values2.is_empty() {
                continue;
            }

            let similarity = context_similarity(&seg1.text, &seg2.text);
            if similarity <= min_similarity {
                continue;
            }

            for severity in judge(&values1, values2) {
                matches.push(ContradictionMatch {
                    document1: documents.first.to_string(),
                    document2: documents.second.to_string(),
                    text1: seg1.text.clone(),
                    text2: seg2.text.clone(),
                    context1: seg1.context.clone(),
                    context2: seg2.context.clone(),
                    match_type: MatchType::Contradiction,
                    severity,
                    confidence: similarity,
                });
            }
        }
    }

    matches
}
