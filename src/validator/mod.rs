//! Structural validation of argument graphs
//!
//! Four checks run in a fixed order, and the report lists issues in
//! exactly that order: NO_CLAIM, then UNSUPPORTED_CLAIM per claim in id
//! order, then ORPHAN_PROPOSITION per proposition in id order, then
//! CIRCULAR_SUPPORT per normalized cycle. Orphans are advisory and do
//! not invalidate the graph.

use tracing::debug;

use crate::graph::ArgumentGraph;
use crate::models::{excerpt, IssueKind, StructuralIssue, ValidationReport};

/// Check a graph for structural problems.
pub fn validate(graph: &ArgumentGraph) -> ValidationReport {
    let mut issues = Vec::new();
    check_no_claim(graph, &mut issues);
    check_unsupported_claims(graph, &mut issues);
    check_orphans(graph, &mut issues);
    check_circular_support(graph, &mut issues);
    debug!(
        "validation found {} structural issues across {} propositions",
        issues.len(),
        graph.len()
    );
    ValidationReport::from_issues(issues)
}

fn check_no_claim(graph: &ArgumentGraph, issues: &mut Vec<StructuralIssue>) {
    if graph.claims().next().is_none() {
        issues.push(StructuralIssue {
            kind: IssueKind::NoClaim,
            propositions: vec![],
            message: "No claim found: nothing in the text asserts a position.".to_string(),
        });
    }
}

fn check_unsupported_claims(graph: &ArgumentGraph, issues: &mut Vec<StructuralIssue>) {
    for claim in graph.claims() {
        if graph.supporters_of(claim.id).is_empty() {
            issues.push(StructuralIssue {
                kind: IssueKind::UnsupportedClaim,
                propositions: vec![claim.id],
                message: format!(
                    "Claim {} (\"{}\") has no supporting premise.",
                    claim.id,
                    excerpt(&claim.text)
                ),
            });
        }
    }
}

fn check_orphans(graph: &ArgumentGraph, issues: &mut Vec<StructuralIssue>) {
    for prop in graph.propositions() {
        if graph.is_isolated(prop.id) {
            issues.push(StructuralIssue {
                kind: IssueKind::OrphanProposition,
                propositions: vec![prop.id],
                message: format!(
                    "{} (\"{}\") is not connected to any other proposition.",
                    prop.id,
                    excerpt(&prop.text)
                ),
            });
        }
    }
}

fn check_circular_support(graph: &ArgumentGraph, issues: &mut Vec<StructuralIssue>) {
    for cycle in graph.support_cycles() {
        let mut path: Vec<String> = cycle.iter().map(|id| id.to_string()).collect();
        path.push(cycle[0].to_string());
        issues.push(StructuralIssue {
            kind: IssueKind::CircularSupport,
            propositions: cycle,
            message: format!("Support cycle detected: {}.", path.join(" -> ")),
        });
    }
}
