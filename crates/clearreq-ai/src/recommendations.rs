//! Document-level review over a finished requirement list: per-requirement
//! ambiguity breakdowns for flagged items and overall improvement advice.

use clearreq_core::{AmbiguityLevel, Lexicon, Requirement, RequirementId, RequirementType};

use crate::ambiguity;
use crate::rng::RandomSource;
use crate::suggest;

/// Documents with fewer requirements than this get a completeness note.
pub const MIN_REQUIREMENTS: usize = 5;

/// Breakdown of one Medium/High requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguityPattern {
    pub requirement_id: RequirementId,
    pub text: String,
    pub ambiguity: AmbiguityLevel,
    pub ambiguous_terms: Vec<&'static str>,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Balance,
    Clarity,
    Completeness,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balance => "Balance",
            Self::Clarity => "Clarity",
            Self::Completeness => "Completeness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub category: Category,
    pub title: &'static str,
    pub description: String,
    pub priority: Priority,
}

/// One pattern per flagged requirement, in list order.
pub fn ambiguity_patterns(
    lexicon: &Lexicon,
    requirements: &[Requirement],
    rng: &mut dyn RandomSource,
) -> Vec<AmbiguityPattern> {
    requirements
        .iter()
        .filter(|req| req.ambiguity.is_flagged())
        .map(|req| {
            let terms = ambiguity::vocabulary_terms(lexicon, &req.text);
            let suggestion = suggest::generate(lexicon, req.kind, &terms, rng);
            AmbiguityPattern {
                requirement_id: req.id,
                text: req.text.clone(),
                ambiguity: req.ambiguity,
                ambiguous_terms: terms,
                suggestion,
            }
        })
        .collect()
}

/// Balance, clarity and completeness advice for the document as a whole.
pub fn improvement_recommendations(requirements: &[Requirement]) -> Vec<Recommendation> {
    let total = requirements.len();
    let count = |kind: RequirementType| requirements.iter().filter(|r| r.kind == kind).count();
    let high = requirements
        .iter()
        .filter(|r| r.ambiguity == AmbiguityLevel::High)
        .count();

    let mut recommendations = Vec::new();

    if count(RequirementType::Functional) > count(RequirementType::NonFunctional) {
        recommendations.push(Recommendation {
            category: Category::Balance,
            title: "Consider adding more non-functional requirements",
            description: "Your document has more functional than non-functional requirements. \
                          Consider adding performance, security, and usability requirements."
                .to_string(),
            priority: Priority::Medium,
        });
    }

    // More than 30% High, kept in integers: high / total > 3 / 10.
    if high * 10 > total * 3 {
        recommendations.push(Recommendation {
            category: Category::Clarity,
            title: "High ambiguity detected",
            description: format!(
                "{high} out of {total} requirements have high ambiguity. \
                 Consider replacing subjective terms with measurable criteria."
            ),
            priority: Priority::High,
        });
    }

    if total < MIN_REQUIREMENTS {
        recommendations.push(Recommendation {
            category: Category::Completeness,
            title: "Consider adding more requirements",
            description: "Your document has relatively few requirements. \
                          Consider if all system aspects are covered."
                .to_string(),
            priority: Priority::Medium,
        });
    }

    recommendations
}
