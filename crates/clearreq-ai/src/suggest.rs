//! Improvement suggestions assembled from the lexicon's advice tables.

use clearreq_core::lexicon::{MAX_SUGGESTION_PARTS, SUGGESTION_SEPARATOR};
use clearreq_core::{Lexicon, RequirementType};

use crate::rng::{RandomSource, pick};

/// The type-specific advice pool, if the type has one.
pub fn type_pool(lexicon: &Lexicon, kind: RequirementType) -> Option<&'static [&'static str]> {
    match kind {
        RequirementType::Functional => Some(lexicon.functional_suggestions),
        RequirementType::NonFunctional => Some(lexicon.non_functional_suggestions),
        RequirementType::Ambiguous => None,
    }
}

/// Build a suggestion for a requirement.
///
/// Fragments, in order: one `'<term>': <advice>` per detected term, one pick
/// from the type pool, one pick from the general pool. At most
/// [`MAX_SUGGESTION_PARTS`] fragments are joined; with no fragments at all the
/// lexicon's fallback message is returned.
pub fn generate(
    lexicon: &Lexicon,
    kind: RequirementType,
    terms: &[&str],
    rng: &mut dyn RandomSource,
) -> String {
    let mut parts: Vec<String> = terms
        .iter()
        .filter_map(|term| {
            lexicon
                .remediation(term)
                .map(|advice| format!("'{term}': {advice}"))
        })
        .collect();

    if let Some(advice) = type_pool(lexicon, kind).and_then(|pool| pick(rng, pool)) {
        parts.push(advice.to_string());
    }
    if let Some(advice) = pick(rng, lexicon.general_suggestions) {
        parts.push(advice.to_string());
    }

    if parts.is_empty() {
        return lexicon.fallback_suggestion.to_string();
    }
    parts.truncate(MAX_SUGGESTION_PARTS);
    parts.join(SUGGESTION_SEPARATOR)
}
