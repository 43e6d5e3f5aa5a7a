//! Relation building: turning a flat proposition list into an argument
//! graph.
//!
//! The linking policy sits behind [`RelationStrategy`] so a smarter
//! discourse parser can replace the positional heuristic without
//! touching the rest of the pipeline.

use tracing::debug;

use crate::error::EngineResult;
use crate::graph::{ArgumentGraph, Proposition, PropositionId, RelationKind, Role};

/// Confidence assigned to unknown propositions attached to the primary
/// claim as a fallback.
pub const FALLBACK_CONFIDENCE: f64 = 0.25;

/// Builds an [`ArgumentGraph`] from extracted propositions.
pub trait RelationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn build(&self, propositions: Vec<Proposition>) -> EngineResult<ArgumentGraph>;
}

/// Positional linking: premises and rebuttals bind to the claim at the
/// smallest id-distance, preferring the preceding claim on ties.
///
/// Unknown propositions have no marker to resolve a neighbor from, so
/// they attach to the primary claim as weak support with their
/// confidence lowered to [`FALLBACK_CONFIDENCE`].
#[derive(Debug, Default)]
pub struct NearestClaimStrategy;

impl NearestClaimStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl RelationStrategy for NearestClaimStrategy {
    fn name(&self) -> &'static str {
        "nearest-claim"
    }

    fn build(&self, mut propositions: Vec<Proposition>) -> EngineResult<ArgumentGraph> {
        let claim_ids: Vec<PropositionId> = propositions
            .iter()
            .filter(|p| p.role == Role::Claim)
            .map(|p| p.id)
            .collect();
        let primary = claim_ids.first().copied();

        // Confidence is sealed into the graph, so adjust fallback
        // attachments before construction.
        if primary.is_some() {
            for prop in propositions.iter_mut().filter(|p| p.role == Role::Unknown) {
                prop.confidence = FALLBACK_CONFIDENCE;
            }
        }

        let links: Vec<(PropositionId, PropositionId, RelationKind)> = propositions
            .iter()
            .filter_map(|p| match p.role {
                Role::Premise => {
                    nearest_claim(&claim_ids, p.id).map(|c| (p.id, c, RelationKind::Supports))
                }
                Role::Rebuttal => {
                    nearest_claim(&claim_ids, p.id).map(|c| (p.id, c, RelationKind::Attacks))
                }
                Role::Unknown => primary.map(|c| (p.id, c, RelationKind::Supports)),
                Role::Claim => None,
            })
            .collect();

        let mut graph = ArgumentGraph::new(propositions)?;
        for (source, target, kind) in links {
            graph.link(source, target, kind)?;
        }
        debug!(
            "linked {} relations across {} propositions",
            graph.relations().len(),
            graph.len()
        );
        Ok(graph)
    }
}

/// The claim nearest to `from` by id distance. Preceding claims win
/// ties; the nearest following claim is used only when it is strictly
/// closer or no claim precedes.
fn nearest_claim(claim_ids: &[PropositionId], from: PropositionId) -> Option<PropositionId> {
    let idx = claim_ids.partition_point(|c| *c < from);
    let preceding = idx.checked_sub(1).map(|i| claim_ids[i]);
    let following = claim_ids.get(idx).copied();
    match (preceding, following) {
        (Some(p), Some(f)) => {
            if f.0 - from.0 < from.0 - p.0 {
                Some(f)
            } else {
                Some(p)
            }
        }
        (Some(p), None) => Some(p),
        (None, Some(f)) => Some(f),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Span;

    fn prop(id: u32, role: Role) -> Proposition {
        Proposition::new(
            PropositionId(id),
            format!("proposition {id}"),
            Span::new(0, 0),
            role,
            0.9,
        )
    }

    fn relation_of(graph: &ArgumentGraph, source: u32) -> (PropositionId, RelationKind) {
        let rel = graph
            .relations()
            .iter()
            .find(|r| r.source == PropositionId(source))
            .expect("relation for source");
        (rel.target, rel.kind)
    }

    #[test]
    fn test_premise_links_to_following_claim_when_none_precedes() {
        let graph = NearestClaimStrategy::new()
            .build(vec![prop(0, Role::Premise), prop(1, Role::Claim)])
            .unwrap();
        assert_eq!(
            relation_of(&graph, 0),
            (PropositionId(1), RelationKind::Supports)
        );
    }

    #[test]
    fn test_nearest_claim_with_tie_prefers_preceding() {
        let graph = NearestClaimStrategy::new()
            .build(vec![
                prop(0, Role::Claim),
                prop(1, Role::Premise),
                prop(2, Role::Premise),
                prop(3, Role::Premise),
                prop(4, Role::Claim),
            ])
            .unwrap();
        // d=1 before vs d=3 after
        assert_eq!(relation_of(&graph, 1).0, PropositionId(0));
        // tie at d=2 goes to the preceding claim
        assert_eq!(relation_of(&graph, 2).0, PropositionId(0));
        // d=1 after beats d=3 before
        assert_eq!(relation_of(&graph, 3).0, PropositionId(4));
    }

    #[test]
    fn test_rebuttal_attacks_its_claim() {
        let graph = NearestClaimStrategy::new()
            .build(vec![prop(0, Role::Claim), prop(1, Role::Rebuttal)])
            .unwrap();
        assert_eq!(
            relation_of(&graph, 1),
            (PropositionId(0), RelationKind::Attacks)
        );
    }

    #[test]
    fn test_unknown_attaches_to_primary_claim_with_low_confidence() {
        let graph = NearestClaimStrategy::new()
            .build(vec![
                prop(0, Role::Claim),
                prop(1, Role::Unknown),
                prop(2, Role::Claim),
            ])
            .unwrap();
        // Primary claim wins even though P2 is equally near.
        assert_eq!(
            relation_of(&graph, 1),
            (PropositionId(0), RelationKind::Supports)
        );
        let unknown = graph.proposition(PropositionId(1)).unwrap();
        assert_eq!(unknown.confidence, FALLBACK_CONFIDENCE);
    }

    #[test]
    fn test_no_claims_leaves_everything_isolated() {
        let graph = NearestClaimStrategy::new()
            .build(vec![prop(0, Role::Premise), prop(1, Role::Rebuttal)])
            .unwrap();
        assert!(graph.relations().is_empty());
        assert!(graph.is_isolated(PropositionId(0)));
        assert!(graph.is_isolated(PropositionId(1)));
    }

    #[test]
    fn test_empty_proposition_list_builds_empty_graph() {
        let graph = NearestClaimStrategy::new().build(vec![]).unwrap();
        assert!(graph.is_empty());
    }
}
