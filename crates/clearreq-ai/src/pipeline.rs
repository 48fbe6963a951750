//! Sentence-level extraction: segment → detect → classify → score → suggest.

use clearreq_core::{AmbiguityLevel, Lexicon, Requirement, RequirementId, RequirementType};
use tracing::{debug, info};

use crate::ambiguity;
use crate::classify;
use crate::detect::RequirementDetector;
use crate::rng::RandomSource;
use crate::segment;
use crate::suggest;

/// Turns cleaned document text into classified requirements.
pub struct Extractor<'a> {
    lexicon: &'a Lexicon,
    detector: &'a RequirementDetector,
}

impl<'a> Extractor<'a> {
    pub fn new(lexicon: &'a Lexicon, detector: &'a RequirementDetector) -> Self {
        Self { lexicon, detector }
    }

    /// Extract requirements in document order, numbered from `REQ-001`.
    ///
    /// A document with no requirement-like sentences yields
    /// [`sample_requirements`] instead of an empty list.
    pub fn extract(&self, text: &str, rng: &mut dyn RandomSource) -> Vec<Requirement> {
        let mut requirements = Vec::new();
        let mut scanned = 0usize;

        for sentence in segment::sentences(text) {
            scanned += 1;
            if !self.detector.is_requirement(sentence) {
                continue;
            }
            let seq = u32::try_from(requirements.len() + 1).unwrap_or(u32::MAX);
            let req = self.classify(sentence, RequirementId::new(seq), rng);
            debug!(
                id = %req.id,
                kind = %req.kind,
                confidence = req.confidence,
                "extracted requirement"
            );
            requirements.push(req);
        }

        if requirements.is_empty() {
            info!(scanned, "no requirement sentences found, returning sample set");
            return sample_requirements();
        }

        info!(scanned, extracted = requirements.len(), "extraction complete");
        requirements
    }

    /// Classify one detected sentence.
    pub fn classify(
        &self,
        sentence: &str,
        id: RequirementId,
        rng: &mut dyn RandomSource,
    ) -> Requirement {
        let text = sentence.trim();
        let lower = text.to_lowercase();
        let kind = classify::classify_type(self.lexicon, &lower);
        let confidence = classify::score_confidence(&lower, kind, rng);
        let ambiguity = ambiguity::cue_level(self.lexicon, &lower);
        let terms = ambiguity::vocabulary_terms(self.lexicon, &lower);
        let suggestion = suggest::generate(self.lexicon, kind, &terms, rng);

        Requirement {
            id,
            text: text.to_string(),
            kind,
            confidence,
            ambiguity,
            suggestion,
        }
    }
}

/// The fixed five-entry result returned when a document yields nothing.
pub fn sample_requirements() -> Vec<Requirement> {
    const SAMPLES: [(&str, RequirementType, u8, AmbiguityLevel, &str); 5] = [
        (
            "The system shall allow users to log in using their email and password.",
            RequirementType::Functional,
            95,
            AmbiguityLevel::Low,
            "Consider adding password complexity requirements and account lockout policies for enhanced security.",
        ),
        (
            "The system must be fast and responsive to user interactions.",
            RequirementType::NonFunctional,
            87,
            AmbiguityLevel::High,
            "Define specific performance metrics such as 'response time under 2 seconds for 95% of requests.'",
        ),
        (
            "Users can upload files in various formats including PDF, DOC, and TXT.",
            RequirementType::Functional,
            92,
            AmbiguityLevel::Medium,
            "Specify file size limits and supported format versions for better clarity.",
        ),
        (
            "The user interface must be intuitive and user-friendly.",
            RequirementType::NonFunctional,
            78,
            AmbiguityLevel::High,
            "Replace subjective terms with measurable criteria like 'users can complete tasks in under 3 clicks.'",
        ),
        (
            "The system shall encrypt all sensitive data during transmission and storage.",
            RequirementType::Functional,
            96,
            AmbiguityLevel::Low,
            "Specify encryption standards (e.g., AES-256) and key management procedures.",
        ),
    ];

    SAMPLES
        .iter()
        .zip(1u32..)
        .map(|(&(text, kind, confidence, ambiguity, suggestion), seq)| Requirement {
            id: RequirementId::new(seq),
            text: text.to_string(),
            kind,
            confidence,
            ambiguity,
            suggestion: suggestion.to_string(),
        })
        .collect()
}
