//! Requirement extraction: heuristic classification pipeline plus an optional
//! model-backed enhancement pass.

pub mod ambiguity;
mod analyzer;
pub mod classify;
pub mod detect;
pub mod enhance;
pub mod pipeline;
pub mod recommendations;
pub mod rng;
pub mod segment;
pub mod suggest;

pub use analyzer::Analyzer;
pub use detect::RequirementDetector;
pub use enhance::{
    Advice, AdviceError, AdviceRequest, EnhancementPass, EnhancementStrategy, RequirementAdvisor,
};
pub use pipeline::{Extractor, sample_requirements};
pub use recommendations::{AmbiguityPattern, Recommendation};
pub use rng::{RandomSource, ScriptedSource, SeededSource, ThreadSource};
