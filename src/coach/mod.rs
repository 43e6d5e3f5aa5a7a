//! Debate coaching generators
//!
//! Turns an [`ArgumentReport`] into practice material: counterpoints the
//! speaker should be ready to answer, and Socratic questions that probe
//! the argument's weak spots.
//!
//! Everything here is template-driven and deterministic. Template
//! variants are chosen by a stable hash of the primary claim text, so
//! the same report always coaches the same way. The report is consumed
//! read-only.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;

use crate::config::CoachConfig;
use crate::graph::{ArgumentGraph, Role};
use crate::models::{ArgumentReport, FallacyKind};

/// Counterargument strategies, strongest first in [`priority`] order.
///
/// [`priority`]: CounterpointStrategy::priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CounterpointStrategy {
    EvidenceChallenge,
    CausalChallenge,
    UnintendedConsequences,
    FalseDichotomy,
    AlternativePerspective,
}

impl CounterpointStrategy {
    /// Lower rank means a stronger attack.
    pub fn priority(&self) -> u8 {
        match self {
            CounterpointStrategy::EvidenceChallenge => 0,
            CounterpointStrategy::CausalChallenge => 1,
            CounterpointStrategy::UnintendedConsequences => 2,
            CounterpointStrategy::FalseDichotomy => 3,
            CounterpointStrategy::AlternativePerspective => 4,
        }
    }

    /// Which aspect of the argument the strategy attacks.
    pub fn attack_type(&self) -> &'static str {
        match self {
            CounterpointStrategy::EvidenceChallenge => "evidential",
            CounterpointStrategy::CausalChallenge => "causal",
            CounterpointStrategy::UnintendedConsequences => "consequential",
            CounterpointStrategy::FalseDichotomy => "logical",
            CounterpointStrategy::AlternativePerspective => "perspectival",
        }
    }
}

impl fmt::Display for CounterpointStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CounterpointStrategy::EvidenceChallenge => "evidence-challenge",
            CounterpointStrategy::CausalChallenge => "causal-challenge",
            CounterpointStrategy::UnintendedConsequences => "unintended-consequences",
            CounterpointStrategy::FalseDichotomy => "false-dichotomy",
            CounterpointStrategy::AlternativePerspective => "alternative-perspective",
        };
        write!(f, "{}", name)
    }
}

/// One counterargument the speaker should prepare for.
#[derive(Debug, Clone, Serialize)]
pub struct Counterpoint {
    pub text: String,
    pub strategy: CounterpointStrategy,
    pub attack_type: &'static str,
}

/// Socratic question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Clarification,
    Assumption,
    Evidence,
    Alternative,
    Implication,
    Counter,
}

impl QuestionCategory {
    pub fn purpose(&self) -> &'static str {
        match self {
            QuestionCategory::Clarification => "To clarify understanding of key terms",
            QuestionCategory::Assumption => "To examine unstated assumptions",
            QuestionCategory::Evidence => "To examine the factual basis",
            QuestionCategory::Alternative => "To consider different perspectives",
            QuestionCategory::Implication => "To explore logical consequences",
            QuestionCategory::Counter => "To anticipate and address potential objections",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionCategory::Clarification => "clarification",
            QuestionCategory::Assumption => "assumption",
            QuestionCategory::Evidence => "evidence",
            QuestionCategory::Alternative => "alternative",
            QuestionCategory::Implication => "implication",
            QuestionCategory::Counter => "counter",
        };
        write!(f, "{}", name)
    }
}

/// One probing question with a hint at what a good answer covers.
#[derive(Debug, Clone, Serialize)]
pub struct SocraticQuestion {
    pub question: String,
    pub category: QuestionCategory,
    pub purpose: &'static str,
    pub hint: String,
}

/// Coaching output for one analyzed argument.
#[derive(Debug, Clone, Serialize)]
pub struct CoachingReport {
    /// Primary claim the coaching targets, empty when none exists.
    pub claim: String,
    pub counterpoints: Vec<Counterpoint>,
    pub strongest_counterpoint: Option<Counterpoint>,
    pub questions: Vec<SocraticQuestion>,
    pub key_terms: Vec<String>,
}

/// Generates counterpoints and Socratic questions from a report.
pub struct Coach {
    counterpoint_count: usize,
    question_count: usize,
}

impl Coach {
    pub fn new() -> Self {
        Self::with_config(&CoachConfig::default())
    }

    pub fn with_config(config: &CoachConfig) -> Self {
        Self {
            counterpoint_count: config.counterpoints,
            question_count: config.questions,
        }
    }

    /// Full coaching output with the configured counts.
    pub fn coach(&self, report: &ArgumentReport) -> CoachingReport {
        let claim = primary_claim_text(&report.graph);
        let counterpoints = self.counterpoints(report, self.counterpoint_count);
        let strongest = counterpoints
            .iter()
            .min_by_key(|cp| cp.strategy.priority())
            .cloned();
        CoachingReport {
            claim: claim.unwrap_or_default(),
            counterpoints,
            strongest_counterpoint: strongest,
            questions: self.questions(report, self.question_count),
            key_terms: key_terms(&report.graph),
        }
    }

    /// Counterpoints against the report's primary claim.
    ///
    /// Report-driven strategies come first: an unsupported claim draws
    /// an evidence challenge, a false-dichotomy finding draws a
    /// false-dichotomy counter, a slippery-slope finding draws a causal
    /// challenge. The always-available strategies fill the remainder.
    pub fn counterpoints(&self, report: &ArgumentReport, count: usize) -> Vec<Counterpoint> {
        let Some(claim) = primary_claim_text(&report.graph) else {
            return Vec::new();
        };
        let pick = stable_pick(&claim);

        let mut counterpoints = Vec::new();
        if premise_free(&report.graph) {
            counterpoints.push(evidence_challenge(&claim, pick));
        }
        if has_finding(report, FallacyKind::FalseDichotomy) {
            counterpoints.push(false_dichotomy(pick));
        }
        if has_finding(report, FallacyKind::SlipperySlope) {
            counterpoints.push(causal_challenge(pick));
        }
        counterpoints.push(alternative_perspective(&claim, pick));
        counterpoints.push(unintended_consequences(&claim, pick));

        counterpoints.truncate(count);
        counterpoints
    }

    /// Socratic questions in fixed category order: clarification on the
    /// top key term, then assumption, evidence, alternative,
    /// implication and counter on the primary claim. Generic questions
    /// fill any remainder.
    pub fn questions(&self, report: &ArgumentReport, count: usize) -> Vec<SocraticQuestion> {
        let mut questions = Vec::new();

        if let Some(claim) = primary_claim_text(&report.graph) {
            let pick = stable_pick(&claim);

            if let Some(term) = key_terms(&report.graph).first() {
                questions.push(clarification_question(term, pick));
            }
            questions.push(assumption_question(&claim, pick));
            questions.push(evidence_question(&claim, &report.graph, pick));
            questions.push(alternative_question(&claim, pick));
            questions.push(implication_question(&claim, pick));
            questions.push(counter_question(&claim, pick));
        }

        for generic in generic_questions() {
            if questions.len() >= count {
                break;
            }
            questions.push(generic);
        }

        questions.truncate(count);
        questions
    }
}

impl Default for Coach {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic template index derived from the claim text.
fn stable_pick(claim: &str) -> usize {
    let digest = Sha256::digest(claim.as_bytes());
    digest[0] as usize
}

fn primary_claim_text(graph: &ArgumentGraph) -> Option<String> {
    graph.primary_claim().map(|p| p.text.clone())
}

fn premise_free(graph: &ArgumentGraph) -> bool {
    match graph.primary_claim() {
        Some(claim) => !graph
            .supporters_of(claim.id)
            .iter()
            .any(|p| p.role == Role::Premise),
        None => false,
    }
}

fn has_finding(report: &ArgumentReport, kind: FallacyKind) -> bool {
    report.findings.iter().any(|f| f.kind == kind)
}

/// Most frequent words of 4+ letters across all propositions,
/// stopwords excluded, ties broken alphabetically, top 5.
pub fn key_terms(graph: &ArgumentGraph) -> Vec<String> {
    const STOPWORDS: &[&str] = &[
        "about", "after", "although", "always", "because", "been", "before", "being", "cannot",
        "consequently", "could", "every", "from", "have", "hence", "however", "into", "more",
        "most", "must", "never", "other", "should", "since", "some", "such", "than", "that",
        "their", "them", "there", "therefore", "these", "they", "this", "thus", "through",
        "what", "when", "where", "which", "while", "will", "with", "would", "your",
    ];

    let mut counts: HashMap<String, usize> = HashMap::new();
    for prop in graph.propositions() {
        for word in prop
            .text
            .to_lowercase()
            .split(|c: char| !c.is_ascii_alphabetic())
        {
            if word.len() >= 4 && !STOPWORDS.contains(&word) {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut terms: Vec<(String, usize)> = counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.into_iter().take(5).map(|(term, _)| term).collect()
}

fn evidence_challenge(claim: &str, pick: usize) -> Counterpoint {
    const REASONS: &[&str] = &[
        "no supporting premise was offered at all",
        "assertion alone cannot carry the conclusion",
        "the audience has no way to check the claim",
    ];
    let reason = REASONS[pick % REASONS.len()];
    Counterpoint {
        text: format!(
            "The evidence provided for \"{}\" is inadequate: {}.",
            claim, reason
        ),
        strategy: CounterpointStrategy::EvidenceChallenge,
        attack_type: CounterpointStrategy::EvidenceChallenge.attack_type(),
    }
}

fn causal_challenge(pick: usize) -> Counterpoint {
    const ALTERNATIVES: &[&str] = &[
        "there may be a third factor influencing both",
        "the relationship is more complex and multifaceted",
        "the correlation is coincidental rather than causal",
        "the causation may actually run in the opposite direction",
    ];
    let alternative = ALTERNATIVES[pick % ALTERNATIVES.len()];
    Counterpoint {
        text: format!(
            "The argument assumes each step inevitably causes the next, when in fact {}.",
            alternative
        ),
        strategy: CounterpointStrategy::CausalChallenge,
        attack_type: CounterpointStrategy::CausalChallenge.attack_type(),
    }
}

fn false_dichotomy(pick: usize) -> Counterpoint {
    const ALTERNATIVES: &[&str] = &[
        "there are many middle-ground positions that could be more effective",
        "a more nuanced approach combines elements of both while avoiding extremes",
        "the issue requires a case-by-case analysis rather than a one-size-fits-all solution",
    ];
    let alternative = ALTERNATIVES[pick % ALTERNATIVES.len()];
    Counterpoint {
        text: format!(
            "This argument presents a false choice between two extremes. In reality, {}.",
            alternative
        ),
        strategy: CounterpointStrategy::FalseDichotomy,
        attack_type: CounterpointStrategy::FalseDichotomy.attack_type(),
    }
}

fn alternative_perspective(claim: &str, pick: usize) -> Counterpoint {
    const OUTCOMES: &[&str] = &[
        "different outcomes than those predicted",
        "unintended consequences that undermine the original goal",
        "benefits for some groups but harms for others",
    ];
    let outcome = OUTCOMES[pick % OUTCOMES.len()];
    Counterpoint {
        text: format!(
            "From a different perspective, \"{}\" actually leads to {}.",
            claim, outcome
        ),
        strategy: CounterpointStrategy::AlternativePerspective,
        attack_type: CounterpointStrategy::AlternativePerspective.attack_type(),
    }
}

fn unintended_consequences(claim: &str, pick: usize) -> Counterpoint {
    const CONSEQUENCES: &[&str] = &[
        "creating perverse incentives that worsen the original problem",
        "disproportionately harming vulnerable populations",
        "excessive implementation costs that drain resources from other priorities",
        "establishing precedents that could be misused in other contexts",
        "creating a false sense of security while ignoring root causes",
    ];
    let consequence = CONSEQUENCES[pick % CONSEQUENCES.len()];
    Counterpoint {
        text: format!(
            "While \"{}\" might achieve its aim, it would also risk {}.",
            claim, consequence
        ),
        strategy: CounterpointStrategy::UnintendedConsequences,
        attack_type: CounterpointStrategy::UnintendedConsequences.attack_type(),
    }
}

fn clarification_question(term: &str, pick: usize) -> SocraticQuestion {
    const TEMPLATES: &[&str] = &[
        "What do you mean by \"{}\"?",
        "Could you explain \"{}\" in more detail?",
        "How would you define \"{}\" in this context?",
    ];
    const HINTS: &[&str] = &[
        "A good answer provides a precise definition of the term, possibly with examples.",
        "Consider giving both a general definition and how the term applies in your argument.",
        "Distinguish this term from related concepts to show precise understanding.",
    ];
    SocraticQuestion {
        question: TEMPLATES[pick % TEMPLATES.len()].replace("{}", term),
        category: QuestionCategory::Clarification,
        purpose: QuestionCategory::Clarification.purpose(),
        hint: HINTS[pick % HINTS.len()].to_string(),
    }
}

fn assumption_question(claim: &str, pick: usize) -> SocraticQuestion {
    const TEMPLATES: &[&str] = &[
        "What are you assuming when you say \"{}\"?",
        "Is it always true that \"{}\"?",
        "What justifies the assumption behind \"{}\"?",
    ];
    let assumption = likely_assumption(claim);
    SocraticQuestion {
        question: TEMPLATES[pick % TEMPLATES.len()].replace("{}", claim),
        category: QuestionCategory::Assumption,
        purpose: QuestionCategory::Assumption.purpose(),
        hint: format!(
            "Identify the unstated premises your argument relies on. For example, you might be assuming that {}.",
            assumption
        ),
    }
}

fn evidence_question(claim: &str, graph: &ArgumentGraph, pick: usize) -> SocraticQuestion {
    const TEMPLATES: &[&str] = &[
        "What evidence supports your claim that \"{}\"?",
        "How do you know that \"{}\"?",
        "Could you point to specific data demonstrating \"{}\"?",
    ];
    let missing = missing_evidence(graph);
    SocraticQuestion {
        question: TEMPLATES[pick % TEMPLATES.len()].replace("{}", claim),
        category: QuestionCategory::Evidence,
        purpose: QuestionCategory::Evidence.purpose(),
        hint: format!(
            "Strong answers cite specific studies, statistics or examples. Here, start with {}.",
            missing
        ),
    }
}

fn alternative_question(claim: &str, pick: usize) -> SocraticQuestion {
    const TEMPLATES: &[&str] = &[
        "Are there alternative explanations for \"{}\"?",
        "Have you considered other perspectives on \"{}\"?",
        "What would someone who disagrees say about \"{}\"?",
    ];
    SocraticQuestion {
        question: TEMPLATES[pick % TEMPLATES.len()].replace("{}", claim),
        category: QuestionCategory::Alternative,
        purpose: QuestionCategory::Alternative.purpose(),
        hint: "Articulate the strongest version of opposing viewpoints, not just easy-to-defeat versions.".to_string(),
    }
}

fn implication_question(claim: &str, pick: usize) -> SocraticQuestion {
    const TEMPLATES: &[&str] = &[
        "If \"{}\" is true, what else must be true?",
        "What follows if everyone accepted your reasoning that \"{}\"?",
        "What might be some unintended results of \"{}\"?",
    ];
    let implication = likely_implication(claim);
    SocraticQuestion {
        question: TEMPLATES[pick % TEMPLATES.len()].replace("{}", claim),
        category: QuestionCategory::Implication,
        purpose: QuestionCategory::Implication.purpose(),
        hint: format!(
            "Trace the consequences that follow from your position. Consider whether {} would be a logical outcome.",
            implication
        ),
    }
}

fn counter_question(claim: &str, pick: usize) -> SocraticQuestion {
    const TEMPLATES: &[&str] = &[
        "What would be a strong objection to your position that \"{}\"?",
        "How would you respond to someone who argues that \"{}\"?",
        "What is the best argument against your view that \"{}\"?",
    ];
    let template = TEMPLATES[pick % TEMPLATES.len()];
    // The middle template asks about the negated position.
    let subject = if template.contains("who argues") {
        counter_position(claim)
    } else {
        claim.to_string()
    };
    SocraticQuestion {
        question: template.replace("{}", &subject),
        category: QuestionCategory::Counter,
        purpose: QuestionCategory::Counter.purpose(),
        hint: "Articulate the strongest counterargument and explain why your position still holds.".to_string(),
    }
}

fn generic_questions() -> Vec<SocraticQuestion> {
    vec![
        SocraticQuestion {
            question: "What do you think is the strongest counterargument to your position?"
                .to_string(),
            category: QuestionCategory::Counter,
            purpose: QuestionCategory::Counter.purpose(),
            hint: "Identify the most challenging objection, not just one that is easy to refute."
                .to_string(),
        },
        SocraticQuestion {
            question: "How would you respond to someone who disagrees with your conclusion?"
                .to_string(),
            category: QuestionCategory::Counter,
            purpose: QuestionCategory::Counter.purpose(),
            hint: "Address their core concerns while explaining why your position still holds."
                .to_string(),
        },
        SocraticQuestion {
            question: "What evidence would change your mind on this issue?".to_string(),
            category: QuestionCategory::Evidence,
            purpose: QuestionCategory::Evidence.purpose(),
            hint: "Specify concrete findings that would make you reconsider; this shows the position is falsifiable.".to_string(),
        },
    ]
}

/// Fixed keyword rules mapping a claim to its most likely hidden
/// assumption. First match wins.
fn likely_assumption(claim: &str) -> &'static str {
    let lower = claim.to_lowercase();
    if lower.contains("should") {
        "this action would have the intended effect without significant downsides"
    } else if lower.contains("best") || lower.contains("better") {
        "the criteria used for comparison are the most relevant ones"
    } else if lower.contains("will") || lower.contains("going to") {
        "current trends will continue without unexpected changes"
    } else if ["all", "every", "always"]
        .iter()
        .any(|w| contains_word(&lower, w))
    {
        "there are no exceptions to the general rule"
    } else if lower.contains("because") || lower.contains("due to") {
        "the link between your cause and effect is direct"
    } else if lower.contains("need") || lower.contains("must") {
        "no alternative approach could achieve the same goal"
    } else {
        "your audience shares your basic values on this topic"
    }
}

fn likely_implication(claim: &str) -> &'static str {
    let lower = claim.to_lowercase();
    if lower.contains("should") || lower.contains("must") || lower.contains("need to") {
        "this would create a precedent for similar situations"
    } else if ["right", "wrong", "moral", "ethical"]
        .iter()
        .any(|w| contains_word(&lower, w))
    {
        "the same standard would have to apply consistently in other contexts"
    } else if lower.contains("will") || lower.contains("going to") {
        "we should prepare for this outcome rather than alternatives"
    } else if contains_word(&lower, "is") || contains_word(&lower, "are") {
        "certain observable consequences would follow in the real world"
    } else {
        "related claims would stand or fall for the same reasons"
    }
}

/// Negate the claim to form an opposing position. First matching
/// rewrite wins; the fallback keeps the claim recognizable.
fn counter_position(claim: &str) -> String {
    const REWRITES: &[(&str, &str)] = &[
        (" is ", " is not "),
        (" are ", " are not "),
        (" will ", " will not "),
        (" can ", " cannot "),
        (" should ", " should not "),
    ];
    for (from, to) in REWRITES {
        if claim.contains(from) {
            return claim.replacen(from, to, 1);
        }
    }

    const OPPOSITES: &[(&str, &str)] = &[
        ("beneficial", "harmful"),
        ("effective", "ineffective"),
        ("important", "overrated"),
        ("necessary", "unnecessary"),
        ("positive", "negative"),
        ("advantage", "disadvantage"),
        ("increase", "decrease"),
        ("significant", "insignificant"),
    ];
    for (word, opposite) in OPPOSITES {
        if claim.contains(word) {
            return claim.replacen(word, opposite, 1);
        }
    }

    format!("the opposite of \"{}\" holds", claim)
}

/// What kind of support the premises lack, checked in fixed order.
fn missing_evidence(graph: &ArgumentGraph) -> &'static str {
    use crate::detectors::lexicon::{authority_pattern, evidence_pattern};

    let premises: Vec<&str> = graph
        .propositions()
        .iter()
        .filter(|p| p.role == Role::Premise)
        .map(|p| p.text.as_str())
        .collect();
    let joined = premises.join(" ");
    let lower = joined.to_lowercase();

    if !evidence_pattern().is_match(&joined) {
        "statistical data or research findings"
    } else if !["example", "instance", "case"]
        .iter()
        .any(|w| lower.contains(w))
    {
        "specific examples or cases that illustrate the point"
    } else if !authority_pattern().is_match(&joined) {
        "expert opinions or authoritative sources"
    } else if !["history", "historical", "past", "precedent"]
        .iter()
        .any(|w| lower.contains(w))
    {
        "historical precedents or relevant background"
    } else {
        "counterarguments you have considered and addressed"
    }
}

fn contains_word(lower: &str, word: &str) -> bool {
    lower
        .split(|c: char| !c.is_ascii_alphabetic())
        .any(|w| w == word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analyze;

    fn coached(text: &str) -> CoachingReport {
        let report = analyze(text).expect("analysis succeeds");
        Coach::new().coach(&report)
    }

    #[test]
    fn test_coaching_is_deterministic() {
        let text = "Because all politicians lie, you cannot trust any of them.";
        let a = coached(text);
        let b = coached(text);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_unsupported_claim_draws_evidence_challenge() {
        let coaching = coached("Therefore we should ban it.");
        assert_eq!(
            coaching.counterpoints[0].strategy,
            CounterpointStrategy::EvidenceChallenge
        );
        let strongest = coaching.strongest_counterpoint.expect("has strongest");
        assert_eq!(strongest.strategy, CounterpointStrategy::EvidenceChallenge);
        assert_eq!(strongest.attack_type, "evidential");
    }

    #[test]
    fn test_supported_claim_skips_evidence_challenge() {
        let coaching = coached("Because the data shows a decline, the policy is working.");
        assert!(coaching
            .counterpoints
            .iter()
            .all(|cp| cp.strategy != CounterpointStrategy::EvidenceChallenge));
    }

    #[test]
    fn test_default_count_is_three() {
        let coaching = coached("Therefore we should ban it.");
        assert_eq!(coaching.counterpoints.len(), 3);
        assert_eq!(coaching.questions.len(), 3);
    }

    #[test]
    fn test_questions_cover_distinct_categories() {
        let coaching = coached("Because budgets are tight, the council should cancel the project.");
        let categories: Vec<QuestionCategory> =
            coaching.questions.iter().map(|q| q.category).collect();
        assert_eq!(categories.len(), 3);
        assert!(categories.contains(&QuestionCategory::Assumption));
        // Every question carries a purpose and a hint.
        for q in &coaching.questions {
            assert!(!q.purpose.is_empty());
            assert!(!q.hint.is_empty());
        }
    }

    #[test]
    fn test_key_terms_rank_by_frequency_then_alphabetically() {
        let report = analyze(
            "Pollution harms rivers. Pollution harms forests. Cities must regulate factories.",
        )
        .expect("analysis succeeds");
        let terms = key_terms(&report.graph);
        assert_eq!(terms[0], "harms");
        assert_eq!(terms[1], "pollution");
        assert!(terms.len() <= 5);
    }

    #[test]
    fn test_counter_position_negates_first_verb() {
        assert_eq!(
            counter_position("remote work is better for focus"),
            "remote work is not better for focus"
        );
        assert_eq!(
            counter_position("the tax increase helps schools"),
            "the tax decrease helps schools"
        );
    }

    #[test]
    fn test_assumption_rule_for_should_claims() {
        assert_eq!(
            likely_assumption("we should ban cars"),
            "this action would have the intended effect without significant downsides"
        );
        assert_eq!(
            likely_assumption("every swan is white"),
            "there are no exceptions to the general rule"
        );
    }

    #[test]
    fn test_missing_evidence_prefers_statistics_first() {
        let report = analyze("Because people complain, the service must be bad.")
            .expect("analysis succeeds");
        assert_eq!(
            missing_evidence(&report.graph),
            "statistical data or research findings"
        );
    }

    #[test]
    fn test_empty_graph_gets_generic_questions_only() {
        let report = analyze("...!?");
        // Punctuation-only input still analyzes to an empty graph.
        let report = report.expect("analysis succeeds");
        let coaching = Coach::new().coach(&report);
        assert!(coaching.counterpoints.is_empty());
        assert!(coaching.strongest_counterpoint.is_none());
        assert_eq!(coaching.questions.len(), 3);
        assert!(coaching.claim.is_empty());
    }

    #[test]
    fn test_counterpoint_count_is_honored() {
        let report = analyze("Therefore we should ban it.").expect("analysis succeeds");
        let coach = Coach::new();
        assert_eq!(coach.counterpoints(&report, 1).len(), 1);
        assert_eq!(coach.counterpoints(&report, 2).len(), 2);
    }
}
