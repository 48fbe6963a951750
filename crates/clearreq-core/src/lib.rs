pub mod lexicon;
pub mod report;
pub mod requirement;

pub use lexicon::Lexicon;
pub use report::{AmbiguityFinding, AnalysisReport, Summary};
pub use requirement::{AmbiguityLevel, ParseLabelError, Requirement, RequirementId, RequirementType};
