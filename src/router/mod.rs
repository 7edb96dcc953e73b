//! Question routing.
//!
//! [`QuestionRouter`] turns a free-text question into an answer string. It
//! tries the dataset rules in priority order (first match wins) and only
//! when none applies forwards the original question to the fallback
//! service. It always produces an answer: fallback failures are rendered as
//! text prefixed with [`API_ERROR_PREFIX`].
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use std::sync::Arc;
//! use vitalis::dataset::{Dataset, Record};
//! use vitalis::fallback::{FallbackError, FallbackService};
//! use vitalis::router::QuestionRouter;
//!
//! struct Offline;
//!
//! #[async_trait]
//! impl FallbackService for Offline {
//!     fn model(&self) -> &str { "offline" }
//!     async fn complete(&self, _q: &str) -> Result<String, FallbackError> {
//!         Err(FallbackError::Network("offline".into()))
//!     }
//! }
//!
//! let dataset = Dataset::from_records(vec![Record::new("Japan", 2015, Some(83.7))]).unwrap();
//! let router = QuestionRouter::new(Arc::new(dataset), Arc::new(Offline));
//!
//! let answer = router.answer_from_dataset("Qual a expectativa de vida média?").unwrap();
//! assert!(answer.text.contains("83.70"));
//! ```

pub mod rules;

pub use rules::{default_rules, MatchRule, RuleHandler};

use crate::dataset::Dataset;
use crate::fallback::FallbackService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Marks answers produced from a failed fallback call.
pub const API_ERROR_PREFIX: &str = "Erro na API: ";

/// Where an answer came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerSource {
    /// Computed by the named dataset rule
    Dataset { rule: String },
    /// Returned by the conversational model
    Fallback { model: String },
    /// The fallback call failed; the text describes why
    FallbackError { model: String },
}

/// An answer and its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
}

/// Routes questions to dataset rules or the fallback service.
pub struct QuestionRouter {
    dataset: Arc<Dataset>,
    rules: Vec<MatchRule>,
    fallback: Arc<dyn FallbackService>,
    /// Log question text (truncated) instead of just its length
    log_content: bool,
}

impl QuestionRouter {
    /// Router with the built-in rules.
    pub fn new(dataset: Arc<Dataset>, fallback: Arc<dyn FallbackService>) -> Self {
        Self::with_rules(dataset, default_rules(), fallback)
    }

    pub fn with_rules(
        dataset: Arc<Dataset>,
        rules: Vec<MatchRule>,
        fallback: Arc<dyn FallbackService>,
    ) -> Self {
        Self {
            dataset,
            rules,
            fallback,
            log_content: false,
        }
    }

    pub fn with_content_logging(mut self, enabled: bool) -> Self {
        self.log_content = enabled;
        self
    }

    /// Append a rule below every existing one.
    pub fn push_rule(&mut self, rule: MatchRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn fallback(&self) -> &dyn FallbackService {
        self.fallback.as_ref()
    }

    /// Try the dataset rules only. Pure: no network, no mutation.
    pub fn answer_from_dataset(&self, question: &str) -> Option<Answer> {
        let lowered = question.to_lowercase();
        self.rules.iter().find_map(|rule| {
            rule.apply(&self.dataset, &lowered).map(|text| Answer {
                text,
                source: AnswerSource::Dataset {
                    rule: rule.name().to_string(),
                },
            })
        })
    }

    /// Answer a question. Never fails.
    pub async fn answer(&self, question: &str) -> Answer {
        let start = Instant::now();
        let preview = crate::logging::question_preview(question, self.log_content);

        if let Some(answer) = self.answer_from_dataset(question) {
            tracing::info!(
                question = %preview,
                source = "dataset",
                rule = ?answer.source,
                latency_ms = start.elapsed().as_millis() as u64,
                "Answered from dataset"
            );
            return answer;
        }

        let model = self.fallback.model().to_string();
        match self.fallback.complete(question).await {
            Ok(text) => {
                tracing::info!(
                    question = %preview,
                    source = "fallback",
                    model = %model,
                    latency_ms = start.elapsed().as_millis() as u64,
                    "Answered by fallback service"
                );
                Answer {
                    text,
                    source: AnswerSource::Fallback { model },
                }
            }
            Err(e) => {
                tracing::warn!(
                    question = %preview,
                    model = %model,
                    error = %e,
                    "Fallback service failed"
                );
                Answer {
                    text: format!("{}{}", API_ERROR_PREFIX, e),
                    source: AnswerSource::FallbackError { model },
                }
            }
        }
    }
}
