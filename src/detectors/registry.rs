//! Rule registry: holds the active fallacy rules and runs them in a
//! reproducible order.
//!
//! Registration order is part of the detection contract: findings are
//! sorted by anchor proposition id, and rules registered earlier win
//! ties. The standard set therefore always registers the core rules
//! before the extended ones.

use tracing::debug;

use crate::detectors::base::FallacyRule;
use crate::detectors::{
    AdHominemRule, AppealToAuthorityRule, AppealToEmotionRule, CircularReasoningRule,
    FalseDichotomyRule, HastyGeneralizationRule, SlipperySlopeRule, StrawManRule,
};
use crate::graph::ArgumentGraph;
use crate::models::FallacyFinding;

/// Extra lexicon terms supplied by configuration. Extensions only:
/// the built-in lists always stay active.
#[derive(Debug, Clone, Default)]
pub struct LexiconExtras {
    pub attack_terms: Vec<String>,
    pub emotion_terms: Vec<String>,
}

/// Ordered collection of fallacy rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn FallacyRule>>,
}

impl RuleRegistry {
    /// The standard rule set with default lexicons.
    pub fn standard() -> Self {
        Self::with_extras(&LexiconExtras::default())
    }

    /// The standard rule set with config-extended lexicons.
    pub fn with_extras(extras: &LexiconExtras) -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(AdHominemRule::with_extra_terms(
            &extras.attack_terms,
        )));
        registry.register(Box::new(HastyGeneralizationRule::new()));
        registry.register(Box::new(CircularReasoningRule::new()));
        registry.register(Box::new(FalseDichotomyRule::new()));
        registry.register(Box::new(AppealToEmotionRule::with_extra_terms(
            &extras.emotion_terms,
        )));
        registry.register(Box::new(StrawManRule::new()));
        registry.register(Box::new(AppealToAuthorityRule::new()));
        registry.register(Box::new(SlipperySlopeRule::new()));
        registry
    }

    /// An empty registry for callers assembling their own rule set.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Position in the run order is permanent.
    pub fn register(&mut self, rule: Box<dyn FallacyRule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn FallacyRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over the graph.
    ///
    /// Findings come back sorted by anchor proposition id; ties keep
    /// registration order (the sort is stable).
    pub fn run(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
        let mut findings: Vec<FallacyFinding> = Vec::new();
        for rule in &self.rules {
            let mut rule_findings = rule.detect(graph);
            debug!(
                "rule {} produced {} findings",
                rule.name(),
                rule_findings.len()
            );
            findings.append(&mut rule_findings);
        }
        findings.sort_by_key(|f| f.anchor());
        findings
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
