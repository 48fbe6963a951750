//! Prompt templates and response parsing shared by every provider.

use clearreq_ai::{Advice, AdviceRequest};
use clearreq_core::AmbiguityLevel;
use serde::Deserialize;

use crate::error::LlmError;

pub const SYSTEM_PROMPT: &str = "\
You are a requirements engineering reviewer.

Given one software requirement, its type (Functional, Non-Functional or Ambiguous) \
and a heuristic confidence score, identify vague or unmeasurable wording and suggest \
a concrete rewrite.

Respond ONLY with a JSON object. No markdown fences, no explanation, just raw JSON:
{
  \"ambiguous_terms\": [\"each vague word or phrase found in the requirement\"],
  \"ambiguity\": \"Low\" | \"Medium\" | \"High\",
  \"suggestion\": \"one or two sentences on how to make the requirement measurable\"
}

Use Low when the requirement is already testable, Medium for one or two vague terms, \
and High for three or more.";

pub fn build_user_prompt(request: &AdviceRequest) -> String {
    format!(
        "Requirement: {text}\n\
         Type: {kind}\n\
         Heuristic confidence: {confidence}%",
        text = request.text,
        kind = request.kind,
        confidence = request.confidence,
    )
}

#[derive(Deserialize)]
struct RawAdvice {
    #[serde(default)]
    ambiguous_terms: Vec<String>,
    ambiguity: String,
    suggestion: String,
}

/// Remove a surrounding Markdown code fence (with optional language tag).
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line.
    let body = match rest.find('\n') {
        Some(nl) => &rest[nl + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parse a model reply into [`Advice`].
pub fn parse_advice(raw: &str) -> Result<Advice, LlmError> {
    let parsed: RawAdvice = serde_json::from_str(strip_code_fence(raw))?;
    let ambiguity: AmbiguityLevel = parsed
        .ambiguity
        .parse()
        .map_err(|e| LlmError::InvalidAdvice(format!("{e}")))?;
    let suggestion = parsed.suggestion.trim();
    if suggestion.is_empty() {
        return Err(LlmError::InvalidAdvice("empty suggestion".into()));
    }
    Ok(Advice {
        ambiguous_terms: parsed.ambiguous_terms,
        ambiguity,
        suggestion: suggestion.to_string(),
    })
}
