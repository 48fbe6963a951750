//! Requirement records shared by the pipeline, the providers, and the HTTP surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A label string that does not name a known type or ambiguity level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label: {value:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

/// Run-scoped requirement identifier, rendered as `REQ-NNN`.
///
/// Sequence numbers are 1-based. Three digits are zero-padded; larger
/// numbers render with as many digits as they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RequirementId(u32);

impl RequirementId {
    pub const PREFIX: &'static str = "REQ-";

    pub fn new(seq: u32) -> Self {
        Self(seq)
    }

    pub fn seq(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", Self::PREFIX, self.0)
    }
}

impl From<RequirementId> for String {
    fn from(id: RequirementId) -> Self {
        id.to_string()
    }
}

impl FromStr for RequirementId {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLabelError {
            kind: "requirement id",
            value: s.to_string(),
        };
        let digits = s.strip_prefix(Self::PREFIX).ok_or_else(err)?;
        if digits.len() < 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        digits.parse().map(Self).map_err(|_| err())
    }
}

impl TryFrom<String> for RequirementId {
    type Error = ParseLabelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Requirement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementType {
    Functional,
    #[serde(rename = "Non-Functional")]
    NonFunctional,
    Ambiguous,
}

impl RequirementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::NonFunctional => "Non-Functional",
            Self::Ambiguous => "Ambiguous",
        }
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Functional" => Ok(Self::Functional),
            "Non-Functional" => Ok(Self::NonFunctional),
            "Ambiguous" => Ok(Self::Ambiguous),
            other => Err(ParseLabelError {
                kind: "requirement type",
                value: other.to_string(),
            }),
        }
    }
}

/// How much subjective wording a requirement carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AmbiguityLevel {
    Low,
    Medium,
    High,
}

impl AmbiguityLevel {
    /// Map a count of matched ambiguous terms to a level.
    ///
    /// 0 → Low, 1–2 → Medium, 3 or more → High.
    pub fn from_term_count(count: usize) -> Self {
        match count {
            0 => Self::Low,
            1 | 2 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Medium and High levels are reported as ambiguity findings.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Medium | Self::High)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for AmbiguityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AmbiguityLevel {
    type Err = ParseLabelError;

    /// Case-insensitive, since model output is not always capitalised.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseLabelError {
                kind: "ambiguity",
                value: s.to_string(),
            }),
        }
    }
}

/// One extracted requirement statement with its classification metadata.
///
/// Values are rebuilt rather than mutated: the enhancement pass produces a
/// new record via [`Requirement::with_review`], which keeps `id`, `text`,
/// `type` and `confidence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: RequirementId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: RequirementType,
    /// 0–100.
    pub confidence: u8,
    pub ambiguity: AmbiguityLevel,
    pub suggestion: String,
}

impl Requirement {
    /// Copy of this requirement with a new ambiguity level and suggestion.
    pub fn with_review(&self, ambiguity: AmbiguityLevel, suggestion: String) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            kind: self.kind,
            confidence: self.confidence,
            ambiguity,
            suggestion,
        }
    }
}
