//! Ambiguous-term detection and the count → level mapping.
//!
//! Two vocabularies feed this scorer: the classifier's ambiguous cues while a
//! sentence is first classified, and the 20-term remediation vocabulary in the
//! enhancement pass. Matching is case-insensitive substring search; each term
//! counts at most once.

use clearreq_core::{AmbiguityLevel, Lexicon};

/// Terms from `terms` found in `text`, in vocabulary order.
pub fn detect_terms<'a>(text: &str, terms: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let lower = text.to_lowercase();
    terms
        .into_iter()
        .filter(|t| lower.contains(&t.to_lowercase()))
        .collect()
}

/// Remediation-vocabulary terms present in `text`.
pub fn vocabulary_terms(lexicon: &Lexicon, text: &str) -> Vec<&'static str> {
    detect_terms(text, lexicon.vocabulary())
}

/// Ambiguity level from the classifier's cue list.
pub fn cue_level(lexicon: &Lexicon, text: &str) -> AmbiguityLevel {
    let cues = detect_terms(text, lexicon.ambiguous_cues.iter().copied());
    AmbiguityLevel::from_term_count(cues.len())
}

/// Ambiguity level from the remediation vocabulary.
pub fn vocabulary_level(lexicon: &Lexicon, text: &str) -> AmbiguityLevel {
    AmbiguityLevel::from_term_count(vocabulary_terms(lexicon, text).len())
}
