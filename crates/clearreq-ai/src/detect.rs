//! Modal/imperative pattern matching that marks a sentence as a requirement.

use regex::RegexSet;

/// Subject+modal and modal+verb patterns, matched against lowercased text.
pub const REQUIREMENT_PATTERNS: &[&str] = &[
    r"\b(the\s+)?system\s+(shall|should|must|will|can)\b",
    r"\b(the\s+)?user\s+(shall|should|must|will|can)\b",
    r"\busers?\s+(shall|should|must|will|can)\b",
    r"\b(shall|should|must|will|can)\s+be\b",
    r"\b(shall|should|must|will|can)\s+have\b",
    r"\b(shall|should|must|will|can)\s+provide\b",
    r"\b(shall|should|must|will|can)\s+support\b",
    r"\b(shall|should|must|will|can)\s+allow\b",
    r"\b(shall|should|must|will|can)\s+enable\b",
];

/// Compiled requirement patterns. Build once and share.
#[derive(Debug, Clone)]
pub struct RequirementDetector {
    patterns: RegexSet,
}

impl RequirementDetector {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: RegexSet::new(REQUIREMENT_PATTERNS)?,
        })
    }

    /// Whether the sentence reads like a requirement statement.
    pub fn is_requirement(&self, sentence: &str) -> bool {
        self.patterns.is_match(&sentence.to_lowercase())
    }
}
