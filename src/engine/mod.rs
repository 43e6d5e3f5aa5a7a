//! Reasoning engine
//!
//! Orchestrates the full analysis pipeline:
//! 1. Extract propositions from free text
//! 2. Build the argument graph with a relation strategy
//! 3. Validate structure
//! 4. Run fallacy rules
//! 5. Score and assemble the report
//!
//! The engine is deterministic: the same input text always produces a
//! byte-identical report.

use tracing::debug;

use crate::builder::{NearestClaimStrategy, RelationStrategy};
use crate::config::EngineConfig;
use crate::detectors::{LexiconExtras, RuleRegistry};
use crate::error::EngineResult;
use crate::extractor;
use crate::models::{ArgumentReport, FindingsSummary, ValidationReport};
use crate::scoring::QualityScorer;
use crate::validator;

/// Full analysis pipeline.
pub struct ReasoningEngine {
    strategy: Box<dyn RelationStrategy>,
    registry: RuleRegistry,
    scorer: QualityScorer,
}

impl ReasoningEngine {
    /// Create an engine with the default strategy, rules and weights.
    pub fn new() -> Self {
        Self {
            strategy: Box::new(NearestClaimStrategy::new()),
            registry: RuleRegistry::standard(),
            scorer: QualityScorer::default(),
        }
    }

    /// Create an engine from loaded configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        let extras = LexiconExtras {
            attack_terms: config.lexicon.extra_attack_terms.clone(),
            emotion_terms: config.lexicon.extra_emotion_terms.clone(),
        };
        Self {
            strategy: Box::new(NearestClaimStrategy::new()),
            registry: RuleRegistry::with_extras(&extras),
            scorer: QualityScorer::new(config.scoring.clone()),
        }
    }

    /// Swap in a different relation strategy.
    pub fn with_strategy(mut self, strategy: Box<dyn RelationStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Run the full pipeline on one piece of text.
    pub fn analyze(&self, text: &str) -> EngineResult<ArgumentReport> {
        let propositions = extractor::extract(text)?;
        let graph = self.strategy.build(propositions)?;
        debug!(
            "built graph with strategy {}: {} propositions, {} relations",
            self.strategy.name(),
            graph.len(),
            graph.relations().len()
        );

        let validation = validator::validate(&graph);
        let findings = self.registry.run(&graph);
        debug!(
            "{} structural issues, {} fallacy findings",
            validation.issues.len(),
            findings.len()
        );

        let (score, feedback) = self.scorer.score(&graph, &validation, &findings);
        let findings_summary = FindingsSummary::from_findings(&findings);

        Ok(ArgumentReport {
            score,
            grade: ArgumentReport::grade_from_score(score),
            graph,
            validation,
            findings,
            findings_summary,
            feedback,
        })
    }

    /// Run only extraction, graph building and structural validation.
    pub fn validate(&self, text: &str) -> EngineResult<ValidationReport> {
        let propositions = extractor::extract(text)?;
        let graph = self.strategy.build(propositions)?;
        Ok(validator::validate(&graph))
    }
}

impl Default for ReasoningEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze text with a default engine.
pub fn analyze(text: &str) -> EngineResult<ArgumentReport> {
    ReasoningEngine::new().analyze(text)
}

/// Validate text structure with a default engine.
pub fn validate(text: &str) -> EngineResult<ValidationReport> {
    ReasoningEngine::new().validate(text)
}
