//! Second-opinion pass over extracted requirements.
//!
//! Each requirement gets a fresh ambiguity level and suggestion, either from
//! the local heuristics or from a [`RequirementAdvisor`] backed by an external
//! text-generation service. Remote calls run concurrently up to a limit, each
//! under its own timeout, and results keep the input order. A failed call
//! never fails the pass: the requirement is marked Medium with a suggestion
//! carrying [`FAILURE_MARKER`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clearreq_core::{AmbiguityLevel, Lexicon, Requirement, RequirementType};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ambiguity;
use crate::rng::RandomSource;
use crate::suggest;

/// Prefix of every suggestion produced by the failure substitution.
pub const FAILURE_MARKER: &str = "AI enhancement failed";

pub const DEFAULT_CONCURRENCY: usize = 4;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// What an advisor is told about a requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceRequest {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: RequirementType,
    pub confidence: u8,
}

impl From<&Requirement> for AdviceRequest {
    fn from(req: &Requirement) -> Self {
        Self {
            text: req.text.clone(),
            kind: req.kind,
            confidence: req.confidence,
        }
    }
}

/// An advisor's verdict on one requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    #[serde(default)]
    pub ambiguous_terms: Vec<String>,
    pub ambiguity: AmbiguityLevel,
    pub suggestion: String,
}

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// External service that reviews a single requirement.
#[async_trait]
pub trait RequirementAdvisor: Send + Sync {
    /// Short provider name for logs and health output.
    fn name(&self) -> &str;

    async fn advise(&self, request: &AdviceRequest) -> Result<Advice, AdviceError>;
}

/// How the enhancement pass runs. Chosen once per process from configuration.
#[derive(Clone, Default)]
pub enum EnhancementStrategy {
    #[default]
    Local,
    Remote(Arc<dyn RequirementAdvisor>),
}

impl EnhancementStrategy {
    pub fn name(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Remote(advisor) => advisor.name(),
        }
    }
}

impl std::fmt::Debug for EnhancementStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EnhancementStrategy").field(&self.name()).finish()
    }
}

pub struct EnhancementPass<'a> {
    lexicon: &'a Lexicon,
    strategy: &'a EnhancementStrategy,
    concurrency: usize,
    timeout: Duration,
}

impl<'a> EnhancementPass<'a> {
    pub fn new(lexicon: &'a Lexicon, strategy: &'a EnhancementStrategy) -> Self {
        Self {
            lexicon,
            strategy,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Maximum remote calls in flight. Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Per-call timeout for remote advice.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enhance every requirement, preserving order.
    pub async fn run(
        &self,
        requirements: Vec<Requirement>,
        rng: &mut (dyn RandomSource + Send),
    ) -> Vec<Requirement> {
        match self.strategy {
            EnhancementStrategy::Local => requirements
                .iter()
                .map(|req| self.enhance_local(req, rng))
                .collect(),
            EnhancementStrategy::Remote(advisor) => self.run_remote(advisor, requirements).await,
        }
    }

    /// Re-score one requirement with the local heuristics.
    pub fn enhance_local(&self, req: &Requirement, rng: &mut dyn RandomSource) -> Requirement {
        let terms = ambiguity::vocabulary_terms(self.lexicon, &req.text);
        let suggestion = suggest::generate(self.lexicon, req.kind, &terms, rng);
        let level = AmbiguityLevel::from_term_count(terms.len());
        debug!(id = %req.id, ?terms, ambiguity = %level, "local enhancement");
        req.with_review(level, suggestion)
    }

    async fn run_remote(
        &self,
        advisor: &Arc<dyn RequirementAdvisor>,
        requirements: Vec<Requirement>,
    ) -> Vec<Requirement> {
        info!(
            provider = advisor.name(),
            count = requirements.len(),
            concurrency = self.concurrency,
            "remote enhancement starting"
        );
        let enhanced: Vec<Requirement> = stream::iter(requirements)
            .map(|req| {
                let advisor = Arc::clone(advisor);
                async move { self.enhance_remote(advisor.as_ref(), req).await }
            })
            .buffered(self.concurrency)
            .collect()
            .await;
        let failed = enhanced
            .iter()
            .filter(|r| r.suggestion.starts_with(FAILURE_MARKER))
            .count();
        info!(provider = advisor.name(), failed, "remote enhancement complete");
        enhanced
    }

    async fn enhance_remote(
        &self,
        advisor: &dyn RequirementAdvisor,
        req: Requirement,
    ) -> Requirement {
        let request = AdviceRequest::from(&req);
        let outcome = match tokio::time::timeout(self.timeout, advisor.advise(&request)).await {
            Ok(result) => result.and_then(validate),
            Err(_) => Err(AdviceError::Timeout(self.timeout)),
        };
        match outcome {
            Ok(advice) => {
                debug!(id = %req.id, terms = ?advice.ambiguous_terms, "remote enhancement");
                req.with_review(advice.ambiguity, advice.suggestion)
            }
            Err(err) => {
                warn!(
                    id = %req.id,
                    provider = advisor.name(),
                    error = %err,
                    "advice failed, using fallback"
                );
                req.with_review(AmbiguityLevel::Medium, failure_suggestion(advisor.name(), &err))
            }
        }
    }
}

fn validate(mut advice: Advice) -> Result<Advice, AdviceError> {
    let trimmed = advice.suggestion.trim();
    if trimmed.is_empty() {
        return Err(AdviceError::Malformed("empty suggestion".into()));
    }
    if trimmed.len() != advice.suggestion.len() {
        advice.suggestion = trimmed.to_string();
    }
    Ok(advice)
}

/// Suggestion text substituted when an advisor call fails.
pub fn failure_suggestion(provider: &str, err: &AdviceError) -> String {
    format!(
        "{FAILURE_MARKER} ({provider}: {err}); fallback applied. \
         Review this requirement manually for subjective or unmeasurable wording."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::sample_requirements;
    use crate::rng::{ScriptedSource, ThreadSource};
    use clearreq_core::RequirementId;
    use clearreq_core::lexicon::GENERAL_SUGGESTIONS;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const LEX: Lexicon = Lexicon::STANDARD;

    fn req(seq: u32, text: &str, kind: RequirementType) -> Requirement {
        Requirement {
            id: RequirementId::new(seq),
            text: text.into(),
            kind,
            confidence: 70 + u8::try_from(seq).unwrap(),
            ambiguity: AmbiguityLevel::Low,
            suggestion: "initial".into(),
        }
    }

    fn assert_identity_kept(before: &[Requirement], after: &[Requirement]) {
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.text, b.text);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.confidence, b.confidence);
        }
    }

    /// Echoes the text back as the suggestion after a delay.
    struct EchoAdvisor {
        delay: fn(&AdviceRequest) -> Duration,
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl EchoAdvisor {
        fn new(delay: fn(&AdviceRequest) -> Duration) -> Self {
            Self {
                delay,
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RequirementAdvisor for EchoAdvisor {
        fn name(&self) -> &str {
            "echo"
        }

        async fn advise(&self, request: &AdviceRequest) -> Result<Advice, AdviceError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep((self.delay)(request)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(Advice {
                ambiguous_terms: vec![],
                ambiguity: AmbiguityLevel::High,
                suggestion: format!("echo: {}", request.text),
            })
        }
    }

    struct FailingAdvisor(fn() -> AdviceError);

    #[async_trait]
    impl RequirementAdvisor for FailingAdvisor {
        fn name(&self) -> &str {
            "failing"
        }

        async fn advise(&self, _request: &AdviceRequest) -> Result<Advice, AdviceError> {
            Err((self.0)())
        }
    }

    struct StuckAdvisor;

    #[async_trait]
    impl RequirementAdvisor for StuckAdvisor {
        fn name(&self) -> &str {
            "stuck"
        }

        async fn advise(&self, _request: &AdviceRequest) -> Result<Advice, AdviceError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Err(AdviceError::Transport("unreachable".into()))
        }
    }

    #[tokio::test]
    async fn local_pass_rescores_with_vocabulary() {
        let before = sample_requirements();
        let strategy = EnhancementStrategy::Local;
        let pass = EnhancementPass::new(&LEX, &strategy);
        let after = pass.run(before.clone(), &mut ThreadSource).await;

        assert_identity_kept(&before, &after);
        // "fast" only → Medium (the sample set itself says High).
        assert_eq!(after[1].ambiguity, AmbiguityLevel::Medium);
        // "intuitive", "user-friendly" → Medium.
        assert_eq!(after[3].ambiguity, AmbiguityLevel::Medium);
        assert_eq!(after[0].ambiguity, AmbiguityLevel::Low);
        // Input is untouched.
        assert_eq!(before[1].ambiguity, AmbiguityLevel::High);
    }

    #[tokio::test]
    async fn local_pass_scripted_suggestion() {
        let strategy = EnhancementStrategy::Local;
        let pass = EnhancementPass::new(&LEX, &strategy);
        let input = vec![req(
            1,
            "It must be fast, secure and reliable",
            RequirementType::Ambiguous,
        )];
        let out = pass.run(input, &mut ScriptedSource::new(vec![0])).await;
        assert_eq!(out[0].ambiguity, AmbiguityLevel::High);
        assert_eq!(
            out[0].suggestion,
            "'fast': Define specific response time (e.g., \"under 2 seconds\") | \
             'secure': Define security standards (e.g., \"AES-256 encryption, HTTPS only\") | \
             'reliable': Specify reliability metrics (e.g., \"99.9% uptime\")"
        );
    }

    #[tokio::test]
    async fn local_pass_without_terms_is_low() {
        let strategy = EnhancementStrategy::Local;
        let pass = EnhancementPass::new(&LEX, &strategy);
        let input = vec![req(1, "Users can export invoices as PDF", RequirementType::Ambiguous)];
        let out = pass.run(input, &mut ScriptedSource::new(vec![3])).await;
        assert_eq!(out[0].ambiguity, AmbiguityLevel::Low);
        assert_eq!(out[0].suggestion, GENERAL_SUGGESTIONS[3]);
    }

    #[tokio::test]
    async fn remote_results_keep_input_order() {
        // Later requirements finish first.
        let advisor = Arc::new(EchoAdvisor::new(|r| {
            Duration::from_millis(60u64.saturating_sub(u64::from(r.confidence - 70) * 10))
        }));
        let strategy = EnhancementStrategy::Remote(advisor.clone());
        let pass = EnhancementPass::new(&LEX, &strategy).with_concurrency(3);
        let before: Vec<Requirement> = (1..=5)
            .map(|i| req(i, &format!("The system shall do task {i}"), RequirementType::Functional))
            .collect();

        let after = pass.run(before.clone(), &mut ThreadSource).await;

        assert_identity_kept(&before, &after);
        for r in &after {
            assert_eq!(r.ambiguity, AmbiguityLevel::High);
            assert_eq!(r.suggestion, format!("echo: {}", r.text));
        }
        assert!(advisor.peak.load(Ordering::SeqCst) <= 3);
    }

    #[tokio::test]
    async fn concurrency_limit_of_one_serialises_calls() {
        let advisor = Arc::new(EchoAdvisor::new(|_| Duration::from_millis(5)));
        let strategy = EnhancementStrategy::Remote(advisor.clone());
        let pass = EnhancementPass::new(&LEX, &strategy).with_concurrency(0);
        let input: Vec<Requirement> = (1..=4)
            .map(|i| req(i, "The user can log out", RequirementType::Functional))
            .collect();
        pass.run(input, &mut ThreadSource).await;
        assert_eq!(advisor.peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn timeouts_substitute_fallback() {
        let strategy = EnhancementStrategy::Remote(Arc::new(StuckAdvisor));
        let pass = EnhancementPass::new(&LEX, &strategy)
            .with_concurrency(8)
            .with_timeout(Duration::from_millis(50));
        let before = sample_requirements();

        let started = std::time::Instant::now();
        let after = pass.run(before.clone(), &mut ThreadSource).await;
        assert!(started.elapsed() < Duration::from_secs(5));

        assert_identity_kept(&before, &after);
        for r in &after {
            assert_eq!(r.ambiguity, AmbiguityLevel::Medium);
            assert!(r.suggestion.starts_with(FAILURE_MARKER), "{}", r.suggestion);
            assert!(r.suggestion.contains("stuck"));
            assert!(r.suggestion.contains("timed out"));
        }
    }

    #[tokio::test]
    async fn provider_errors_substitute_fallback() {
        let strategy = EnhancementStrategy::Remote(Arc::new(FailingAdvisor(|| AdviceError::Status {
            status: 503,
            body: "overloaded".into(),
        })));
        let pass = EnhancementPass::new(&LEX, &strategy);
        let before = vec![req(1, "The system shall archive logs", RequirementType::Functional)];
        let after = pass.run(before.clone(), &mut ThreadSource).await;
        assert_identity_kept(&before, &after);
        assert_eq!(after[0].ambiguity, AmbiguityLevel::Medium);
        assert!(after[0].suggestion.contains("503"));
        assert!(after[0].suggestion.contains("fallback applied"));
    }

    #[tokio::test]
    async fn empty_suggestion_is_malformed() {
        struct Blank;

        #[async_trait]
        impl RequirementAdvisor for Blank {
            fn name(&self) -> &str {
                "blank"
            }

            async fn advise(&self, _request: &AdviceRequest) -> Result<Advice, AdviceError> {
                Ok(Advice {
                    ambiguous_terms: vec!["fast".into()],
                    ambiguity: AmbiguityLevel::Low,
                    suggestion: "   ".into(),
                })
            }
        }

        let strategy = EnhancementStrategy::Remote(Arc::new(Blank));
        let pass = EnhancementPass::new(&LEX, &strategy);
        let after = pass
            .run(vec![req(1, "It must be fast", RequirementType::Ambiguous)], &mut ThreadSource)
            .await;
        assert_eq!(after[0].ambiguity, AmbiguityLevel::Medium);
        assert!(after[0].suggestion.contains("malformed response"));
    }

    #[test]
    fn advice_request_serialises_type_label() {
        let r = req(2, "It must be fast", RequirementType::NonFunctional);
        let json = serde_json::to_value(AdviceRequest::from(&r)).unwrap();
        assert_eq!(json["type"], "Non-Functional");
        assert_eq!(json["confidence"], 72);
    }

    #[test]
    fn strategy_names() {
        assert_eq!(EnhancementStrategy::Local.name(), "local");
        assert_eq!(EnhancementStrategy::Remote(Arc::new(StuckAdvisor)).name(), "stuck");
    }
}
