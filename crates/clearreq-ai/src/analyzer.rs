use std::time::Duration;

use chrono::Utc;
use clearreq_core::{AnalysisReport, Lexicon, Requirement};
use tracing::info;

use crate::detect::RequirementDetector;
use crate::enhance::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT, EnhancementPass, EnhancementStrategy};
use crate::pipeline::Extractor;
use crate::recommendations::{self, AmbiguityPattern};
use crate::rng::RandomSource;

/// Long-lived analysis entry point: owns the tables, the compiled detector,
/// and the enhancement strategy selected at startup.
///
/// Holds no per-run state, so one instance can serve concurrent requests.
#[derive(Debug)]
pub struct Analyzer {
    lexicon: Lexicon,
    detector: RequirementDetector,
    strategy: EnhancementStrategy,
    concurrency: usize,
    timeout: Duration,
}

impl Analyzer {
    pub fn new(strategy: EnhancementStrategy) -> Result<Self, regex::Error> {
        Ok(Self {
            lexicon: Lexicon::STANDARD,
            detector: RequirementDetector::new()?,
            strategy,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn strategy(&self) -> &EnhancementStrategy {
        &self.strategy
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// First-stage extraction only (no enhancement pass).
    pub fn extract(&self, text: &str, rng: &mut dyn RandomSource) -> Vec<Requirement> {
        Extractor::new(&self.lexicon, &self.detector).extract(text, rng)
    }

    /// Term breakdown and fresh advice for each flagged requirement.
    pub fn ambiguity_patterns(
        &self,
        requirements: &[Requirement],
        rng: &mut dyn RandomSource,
    ) -> Vec<AmbiguityPattern> {
        recommendations::ambiguity_patterns(&self.lexicon, requirements, rng)
    }

    /// Full analysis: extraction, enhancement, aggregation.
    pub async fn analyze(
        &self,
        filename: &str,
        text: &str,
        rng: &mut (dyn RandomSource + Send),
    ) -> AnalysisReport {
        let extracted = self.extract(text, rng);
        let enhanced = EnhancementPass::new(&self.lexicon, &self.strategy)
            .with_concurrency(self.concurrency)
            .with_timeout(self.timeout)
            .run(extracted, rng)
            .await;
        let report = AnalysisReport::new(filename, enhanced, Utc::now());
        info!(
            filename,
            strategy = self.strategy.name(),
            total = report.summary.total,
            functional = report.summary.functional,
            non_functional = report.summary.non_functional,
            ambiguities = report.summary.ambiguities,
            "analysis complete"
        );
        report
    }
}
