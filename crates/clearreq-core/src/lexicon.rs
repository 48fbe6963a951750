//! Fixed vocabulary and suggestion tables used by the classification pipeline.
//!
//! The tables are `'static` data. A [`Lexicon`] bundles references to them so
//! components receive one read-only value instead of reaching for globals;
//! tests can swap individual tables with struct-update syntax.

/// Classifier cues for functional statements (modal verbs, subject+modal phrases).
///
/// Functional is the default classification, so these only feed diagnostics.
pub const FUNCTIONAL_CUES: &[&str] = &[
    "shall",
    "should",
    "must",
    "will",
    "can",
    "may",
    "system shall",
    "user shall",
    "users can",
    "system must",
    "the system",
    "the user",
    "users will",
    "system will",
];

/// Classifier cues for quality attributes. Any hit makes a sentence Non-Functional.
pub const NON_FUNCTIONAL_CUES: &[&str] = &[
    "performance",
    "speed",
    "slow",
    "response time",
    "availability",
    "uptime",
    "reliability",
    "security",
    "scalability",
    "maintainability",
    "usability",
    "accessibility",
    "compatibility",
    "portability",
    "efficiency",
    "throughput",
    "latency",
    "bandwidth",
    "capacity",
    "load",
    "stress",
    "concurrent",
    "simultaneous",
    "real-time",
    "near real-time",
];

/// Classifier cues for subjective wording. Checked after [`NON_FUNCTIONAL_CUES`].
///
/// Not the same list as [`AMBIGUOUS_TERMS`]; the two must stay separate.
pub const AMBIGUOUS_CUES: &[&str] = &[
    "intuitive",
    "user-friendly",
    "easy to use",
    "simple",
    "fast",
    "quick",
    "efficient",
    "good",
    "better",
    "best",
    "appropriate",
    "suitable",
    "adequate",
    "reasonable",
    "secure",
    "safe",
    "reliable",
    "stable",
    "robust",
];

/// Ambiguous-term vocabulary with per-term remediation advice, in detection order.
pub const AMBIGUOUS_TERMS: &[(&str, &str)] = &[
    ("fast", "Define specific response time (e.g., \"under 2 seconds\")"),
    ("quick", "Specify time constraints (e.g., \"within 30 seconds\")"),
    ("efficient", "Define efficiency metrics (e.g., \"using less than 100MB RAM\")"),
    ("user-friendly", "Define usability criteria (e.g., \"completable in under 3 clicks\")"),
    ("intuitive", "Specify user experience requirements (e.g., \"follows standard UI patterns\")"),
    ("secure", "Define security standards (e.g., \"AES-256 encryption, HTTPS only\")"),
    ("reliable", "Specify reliability metrics (e.g., \"99.9% uptime\")"),
    ("scalable", "Define scalability requirements (e.g., \"support 10,000 concurrent users\")"),
    ("maintainable", "Specify maintainability criteria (e.g., \"modular architecture\")"),
    ("compatible", "Define compatibility requirements (e.g., \"works with Chrome 90+\")"),
    ("portable", "Specify portability requirements (e.g., \"runs on Windows, Mac, Linux\")"),
    ("robust", "Define robustness criteria (e.g., \"handles network failures gracefully\")"),
    ("stable", "Specify stability requirements (e.g., \"no crashes during normal operation\")"),
    ("good", "Replace with specific, measurable criteria"),
    ("better", "Define improvement metrics"),
    ("best", "Specify optimal performance criteria"),
    ("appropriate", "Define what constitutes appropriateness"),
    ("suitable", "Specify suitability criteria"),
    ("adequate", "Define adequacy standards"),
    ("reasonable", "Specify reasonableness criteria"),
];

pub const FUNCTIONAL_SUGGESTIONS: &[&str] = &[
    "Add specific acceptance criteria for testing.",
    "Define input validation requirements.",
    "Specify error handling behavior.",
    "Include user role and permission requirements.",
    "Define integration points with other systems.",
    "Specify data validation rules.",
    "Include audit trail requirements.",
    "Define backup and recovery procedures.",
];

pub const NON_FUNCTIONAL_SUGGESTIONS: &[&str] = &[
    "Add specific performance metrics and thresholds.",
    "Define availability requirements (e.g., 99.9% uptime).",
    "Specify security compliance standards.",
    "Include scalability requirements.",
    "Define maintainability criteria.",
    "Specify usability standards.",
    "Include accessibility requirements.",
    "Define compatibility requirements.",
];

pub const GENERAL_SUGGESTIONS: &[&str] = &[
    "Consider adding measurable acceptance criteria.",
    "Define specific success metrics for this requirement.",
    "Include testable conditions for validation.",
    "Specify dependencies and constraints.",
    "Add exception handling requirements.",
];

/// Used when no other suggestion applies.
pub const FALLBACK_SUGGESTION: &str =
    "Consider adding more specific details and measurable criteria.";

/// Separator between joined suggestion fragments.
pub const SUGGESTION_SEPARATOR: &str = " | ";

/// Maximum number of fragments joined into one suggestion.
pub const MAX_SUGGESTION_PARTS: usize = 3;

/// Read-only bundle of every table the pipeline consults.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub functional_cues: &'static [&'static str],
    pub non_functional_cues: &'static [&'static str],
    pub ambiguous_cues: &'static [&'static str],
    pub ambiguous_terms: &'static [(&'static str, &'static str)],
    pub functional_suggestions: &'static [&'static str],
    pub non_functional_suggestions: &'static [&'static str],
    pub general_suggestions: &'static [&'static str],
    pub fallback_suggestion: &'static str,
}

impl Lexicon {
    /// The built-in tables.
    pub const STANDARD: Lexicon = Lexicon {
        functional_cues: FUNCTIONAL_CUES,
        non_functional_cues: NON_FUNCTIONAL_CUES,
        ambiguous_cues: AMBIGUOUS_CUES,
        ambiguous_terms: AMBIGUOUS_TERMS,
        functional_suggestions: FUNCTIONAL_SUGGESTIONS,
        non_functional_suggestions: NON_FUNCTIONAL_SUGGESTIONS,
        general_suggestions: GENERAL_SUGGESTIONS,
        fallback_suggestion: FALLBACK_SUGGESTION,
    };

    /// Remediation text for a vocabulary term, if it is one.
    pub fn remediation(&self, term: &str) -> Option<&'static str> {
        self.ambiguous_terms
            .iter()
            .find(|(t, _)| *t == term)
            .map(|(_, advice)| *advice)
    }

    /// Iterate over the ambiguous-term vocabulary (without remediation text).
    pub fn vocabulary(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ambiguous_terms.iter().map(|(t, _)| *t)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::STANDARD
    }
}
