//! Aggregates derived from a finished requirement list.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::requirement::{AmbiguityLevel, Requirement, RequirementId, RequirementType};

/// Counts over one analysis run.
///
/// Ambiguous-typed requirements count towards `total` only, so
/// `functional + non_functional <= total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub functional: usize,
    pub non_functional: usize,
    /// Requirements whose ambiguity is Medium or High.
    pub ambiguities: usize,
}

impl Summary {
    pub fn from_requirements(requirements: &[Requirement]) -> Self {
        requirements.iter().fold(Self::default(), |mut acc, req| {
            acc.total += 1;
            match req.kind {
                RequirementType::Functional => acc.functional += 1,
                RequirementType::NonFunctional => acc.non_functional += 1,
                RequirementType::Ambiguous => {}
            }
            if req.ambiguity.is_flagged() {
                acc.ambiguities += 1;
            }
            acc
        })
    }
}

/// A requirement flagged as Medium or High ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguityFinding {
    #[serde(rename = "id")]
    pub requirement_id: RequirementId,
    pub text: String,
    pub severity: AmbiguityLevel,
}

impl AmbiguityFinding {
    /// Findings for every flagged requirement, in list order.
    pub fn collect(requirements: &[Requirement]) -> Vec<Self> {
        requirements
            .iter()
            .filter(|r| r.ambiguity.is_flagged())
            .map(|r| Self {
                requirement_id: r.id,
                text: r.text.clone(),
                severity: r.ambiguity,
            })
            .collect()
    }
}

/// Result of analysing one document, as handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub requirements: Vec<Requirement>,
    pub ambiguities: Vec<AmbiguityFinding>,
    pub filename: String,
    /// RFC 3339 timestamp string.
    pub timestamp: String,
}

impl AnalysisReport {
    pub fn new(
        filename: impl Into<String>,
        requirements: Vec<Requirement>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            summary: Summary::from_requirements(&requirements),
            ambiguities: AmbiguityFinding::collect(&requirements),
            requirements,
            filename: filename.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
