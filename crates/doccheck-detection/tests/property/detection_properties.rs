use std::collections::HashSet;

use doccheck_core::models::Document;
use doccheck_detection::{analyze, extract_relevant_sentences};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "students", "must", "may", "attend", "attendance", "submit", "submissions", "before",
    "after", "10:00 PM", "11:59 PM", "9 AM", "noon", "midnight", "75%", "65%", "40%",
    "3 days", "2 weeks", "required", "optional", "the", "policy", "deadline", "report",
    "late", "early", "weekly", "session",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 3..12).prop_map(|w| w.join(" "))
}

fn document_text() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 1..8).prop_map(|s| s.join(". "))
}

fn documents() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(document_text(), 2..5).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("doc{i}.txt"), t))
            .collect()
    })
}

proptest! {
    #[test]
    fn segments_are_longer_than_ten_chars(text in ".{0,400}") {
        for seg in extract_relevant_sentences(&text, "doc") {
            prop_assert!(seg.text.trim().chars().count() > 10, "short segment {:?}", seg.text);
            prop_assert_eq!(seg.text.trim(), seg.text.as_str());
        }
    }

    #[test]
    fn extraction_is_idempotent(text in document_text()) {
        prop_assert_eq!(
            extract_relevant_sentences(&text, "doc"),
            extract_relevant_sentences(&text, "doc")
        );
    }

    #[test]
    fn fewer_than_two_documents_is_empty(text in document_text()) {
        prop_assert!(analyze(&[Document::new("only.txt", text)]).is_empty());
    }

    #[test]
    fn analysis_is_deterministic(docs in documents()) {
        prop_assert_eq!(analyze(&docs), analyze(&docs));
    }

    #[test]
    fn at_most_ten_matches_in_confidence_order(docs in documents()) {
        let matches = analyze(&docs);
        prop_assert!(matches.len() <= 10);
        for w in matches.windows(2) {
            prop_assert!(w[0].confidence >= w[1].confidence);
        }
        for m in &matches {
            prop_assert!(m.confidence > 0.0 && m.confidence <= 1.0);
            prop_assert_ne!(&m.document1, &m.document2);
        }
    }

    #[test]
    fn statement_pairs_are_unique(docs in documents()) {
        let matches = analyze(&docs);
        let unique: HashSet<(&str, &str)> = matches
            .iter()
            .map(|m| (m.text1.as_str(), m.text2.as_str()))
            .collect();
        prop_assert_eq!(unique.len(), matches.len());
    }

    #[test]
    fn arbitrary_text_never_panics(a in ".{0,300}", b in ".{0,300}") {
        let docs = vec![Document::new("a.txt", a), Document::new("b.txt", b)];
        let _ = analyze(&docs);
    }
}
