//! Keyword-based requirement typing and confidence scoring.
//!
//! Typing is a fixed precedence check over the lexicon's cue lists: a
//! quality-attribute cue wins over a subjective-wording cue, which wins over
//! the Functional default. Confidence is a length/type heuristic with bounded
//! random jitter, clamped to [`MIN_CONFIDENCE`]..=[`MAX_CONFIDENCE`].

use clearreq_core::{Lexicon, RequirementType};
use tracing::trace;

use crate::rng::RandomSource;

pub const BASE_CONFIDENCE: i32 = 70;
pub const MIN_CONFIDENCE: u8 = 50;
pub const MAX_CONFIDENCE: u8 = 100;
/// Jitter is drawn uniformly from `-CONFIDENCE_JITTER..=CONFIDENCE_JITTER`.
pub const CONFIDENCE_JITTER: i32 = 10;

const LONG_SENTENCE_CHARS: usize = 100;
const SHORT_SENTENCE_CHARS: usize = 30;

/// Cues from `cues` that occur as substrings of `sentence`.
pub fn matched_cues<'a>(cues: &[&'a str], sentence: &str) -> Vec<&'a str> {
    cues.iter().copied().filter(|c| sentence.contains(c)).collect()
}

/// Assign a type to a lowercased requirement sentence.
pub fn classify_type(lexicon: &Lexicon, sentence: &str) -> RequirementType {
    let kind = if lexicon.non_functional_cues.iter().any(|c| sentence.contains(c)) {
        RequirementType::NonFunctional
    } else if lexicon.ambiguous_cues.iter().any(|c| sentence.contains(c)) {
        RequirementType::Ambiguous
    } else {
        RequirementType::Functional
    };
    trace!(
        %kind,
        functional_cues = ?matched_cues(lexicon.functional_cues, sentence),
        "classified sentence"
    );
    kind
}

/// Deterministic part of the confidence score, before jitter and clamping.
pub fn base_confidence(sentence: &str, kind: RequirementType) -> i32 {
    let len = sentence.chars().count();
    let length_adj = if len > LONG_SENTENCE_CHARS {
        10
    } else if len < SHORT_SENTENCE_CHARS {
        -10
    } else {
        0
    };
    let type_adj = match kind {
        RequirementType::Functional => 15,
        RequirementType::NonFunctional => 10,
        RequirementType::Ambiguous => -20,
    };
    BASE_CONFIDENCE + length_adj + type_adj
}

/// Confidence in `kind` for a lowercased sentence.
pub fn score_confidence(sentence: &str, kind: RequirementType, rng: &mut dyn RandomSource) -> u8 {
    let jitter = rng.int_inclusive(-CONFIDENCE_JITTER, CONFIDENCE_JITTER);
    let score = (base_confidence(sentence, kind) + jitter)
        .clamp(i32::from(MIN_CONFIDENCE), i32::from(MAX_CONFIDENCE));
    u8::try_from(score).unwrap_or(MIN_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedSource, ThreadSource};

    const LEX: Lexicon = Lexicon::STANDARD;

    #[test]
    fn modal_only_is_functional() {
        assert_eq!(
            classify_type(&LEX, "the system shall allow login"),
            RequirementType::Functional
        );
    }

    #[test]
    fn subjective_wording_is_ambiguous() {
        assert_eq!(classify_type(&LEX, "it must be fast"), RequirementType::Ambiguous);
        assert_eq!(classify_type(&LEX, "the ui should be easy to use"), RequirementType::Ambiguous);
    }

    #[test]
    fn quality_attribute_wins_over_subjective_wording() {
        // "intuitive" is an ambiguous cue, "usability" a non-functional one.
        assert_eq!(
            classify_type(&LEX, "usability must be intuitive"),
            RequirementType::NonFunctional
        );
        assert_eq!(
            classify_type(&LEX, "the system must have good response time"),
            RequirementType::NonFunctional
        );
    }

    #[test]
    fn cues_match_as_substrings() {
        // "upload" contains the "load" cue.
        assert_eq!(classify_type(&LEX, "users can upload files"), RequirementType::NonFunctional);
    }

    #[test]
    fn classification_is_pure() {
        let s = "the system shall keep latency below 200ms";
        let first = classify_type(&LEX, s);
        assert!((0..10).all(|_| classify_type(&LEX, s) == first));
    }

    #[test]
    fn base_confidence_adjustments() {
        let short = "short requirement text"; // 22 chars
        let medium = "the system shall export every report as csv"; // 43 chars
        let long = "x".repeat(101);
        assert_eq!(base_confidence(short, RequirementType::Functional), 75);
        assert_eq!(base_confidence(medium, RequirementType::Functional), 85);
        assert_eq!(base_confidence(&long, RequirementType::Functional), 95);
        assert_eq!(base_confidence(medium, RequirementType::NonFunctional), 80);
        assert_eq!(base_confidence(medium, RequirementType::Ambiguous), 50);
        assert_eq!(base_confidence(short, RequirementType::Ambiguous), 40);
    }

    #[test]
    fn length_boundaries_are_exclusive() {
        let thirty = "a".repeat(30);
        let hundred = "a".repeat(100);
        assert_eq!(base_confidence(&thirty, RequirementType::Functional), 85);
        assert_eq!(base_confidence(&hundred, RequirementType::Functional), 85);
    }

    #[test]
    fn jitter_applies_exactly() {
        let medium = "the system shall export every report as csv";
        let mut rng = ScriptedSource::new(vec![-7]);
        assert_eq!(score_confidence(medium, RequirementType::Functional, &mut rng), 78);
        let mut rng = ScriptedSource::new(vec![4]);
        assert_eq!(score_confidence(medium, RequirementType::NonFunctional, &mut rng), 84);
    }

    #[test]
    fn clamps_to_bounds() {
        let long = "x".repeat(120);
        let mut high = ScriptedSource::new(vec![10]);
        assert_eq!(score_confidence(&long, RequirementType::Functional, &mut high), 100);

        let mut low = ScriptedSource::new(vec![-10]);
        let kind = RequirementType::Ambiguous;
        assert_eq!(score_confidence("tiny but ambiguous", kind, &mut low), 50);
    }

    #[test]
    fn random_scores_stay_in_range() {
        let mut rng = ThreadSource;
        for kind in [
            RequirementType::Functional,
            RequirementType::NonFunctional,
            RequirementType::Ambiguous,
        ] {
            for _ in 0..100 {
                let c = score_confidence("the system shall do a thing", kind, &mut rng);
                assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&c));
            }
        }
    }
}
