//! Argument graph: propositions and the support/attack relations
//! between them.
//!
//! The graph is append-only and validating. Propositions are stored in
//! ordinal id order and never mutated once the graph is built, so every
//! traversal is deterministic for identical input. Cycle detection runs
//! Tarjan's SCC algorithm via petgraph in O(V+E).

use petgraph::algo::tarjan_scc;
use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Ordinal identifier of a proposition within one analysis.
///
/// Ids are assigned in extraction order starting at 0, which makes
/// report ordering and finding ids reproducible across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropositionId(pub u32);

impl std::fmt::Display for PropositionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Discourse role of a proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Claim,
    Premise,
    Rebuttal,
    Unknown,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Claim => write!(f, "claim"),
            Role::Premise => write!(f, "premise"),
            Role::Rebuttal => write!(f, "rebuttal"),
            Role::Unknown => write!(f, "unknown"),
        }
    }
}

/// Byte range of a proposition within the original input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One extracted statement with its role and classifier confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposition {
    pub id: PropositionId,
    pub text: String,
    pub span: Span,
    pub role: Role,
    /// Classifier confidence in [0.0, 1.0]. Marker-classified roles carry
    /// 0.9, unresolved unknowns 0.5, fallback attachments 0.25.
    pub confidence: f64,
}

impl Proposition {
    pub fn new(
        id: PropositionId,
        text: impl Into<String>,
        span: Span,
        role: Role,
        confidence: f64,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            span,
            role,
            confidence,
        }
    }
}

/// How one proposition bears on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Supports,
    Attacks,
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationKind::Supports => write!(f, "supports"),
            RelationKind::Attacks => write!(f, "attacks"),
        }
    }
}

/// A directed edge between two propositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub source: PropositionId,
    pub target: PropositionId,
    pub kind: RelationKind,
}

/// The argument structure extracted from one piece of text.
///
/// Construction validates invariants up front: ids are dense ordinals,
/// relation endpoints must exist, and self-referential relations are
/// rejected. Violations surface as [`EngineError::MalformedGraph`].
#[derive(Debug, Clone, Serialize)]
pub struct ArgumentGraph {
    propositions: Vec<Proposition>,
    relations: Vec<Relation>,
}

impl ArgumentGraph {
    /// Build a graph over the given propositions with no relations yet.
    ///
    /// Propositions must arrive in id order with dense ordinal ids
    /// (0, 1, 2, ...), which is what the extractor produces.
    pub fn new(propositions: Vec<Proposition>) -> EngineResult<Self> {
        for (idx, prop) in propositions.iter().enumerate() {
            if prop.id.0 as usize != idx {
                return Err(EngineError::MalformedGraph {
                    detail: format!(
                        "proposition at position {idx} has id {}, expected P{idx}",
                        prop.id
                    ),
                });
            }
        }
        Ok(Self {
            propositions,
            relations: Vec::new(),
        })
    }

    /// Add a relation between two existing propositions.
    pub fn link(
        &mut self,
        source: PropositionId,
        target: PropositionId,
        kind: RelationKind,
    ) -> EngineResult<()> {
        if source == target {
            return Err(EngineError::MalformedGraph {
                detail: format!("self-referential relation on {source}"),
            });
        }
        for endpoint in [source, target] {
            if self.proposition(endpoint).is_none() {
                return Err(EngineError::MalformedGraph {
                    detail: format!("relation endpoint {endpoint} does not exist"),
                });
            }
        }
        // Parallel relations between the same pair are legal: one premise
        // backing two claims is two records, never a merged multi-edge.
        self.relations.push(Relation {
            source,
            target,
            kind,
        });
        Ok(())
    }

    pub fn propositions(&self) -> &[Proposition] {
        &self.propositions
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn len(&self) -> usize {
        self.propositions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.propositions.is_empty()
    }

    pub fn proposition(&self, id: PropositionId) -> Option<&Proposition> {
        self.propositions.get(id.0 as usize)
    }

    /// All claim propositions in id order.
    pub fn claims(&self) -> impl Iterator<Item = &Proposition> {
        self.propositions.iter().filter(|p| p.role == Role::Claim)
    }

    /// The first claim in id order, if any.
    pub fn primary_claim(&self) -> Option<&Proposition> {
        self.claims().next()
    }

    /// Propositions with a supports edge into `target`, in id order.
    pub fn supporters_of(&self, target: PropositionId) -> Vec<&Proposition> {
        self.sources_into(target, RelationKind::Supports)
    }

    /// Propositions with an attacks edge into `target`, in id order.
    pub fn attackers_of(&self, target: PropositionId) -> Vec<&Proposition> {
        self.sources_into(target, RelationKind::Attacks)
    }

    fn sources_into(&self, target: PropositionId, kind: RelationKind) -> Vec<&Proposition> {
        let mut sources: Vec<&Proposition> = self
            .relations
            .iter()
            .filter(|r| r.target == target && r.kind == kind)
            .filter_map(|r| self.proposition(r.source))
            .collect();
        sources.sort_by_key(|p| p.id);
        sources
    }

    /// Whether a proposition participates in no relation at all.
    pub fn is_isolated(&self, id: PropositionId) -> bool {
        !self
            .relations
            .iter()
            .any(|r| r.source == id || r.target == id)
    }

    /// Cycles in the supports subgraph.
    ///
    /// Each cycle is an SCC of size > 1, rotated so the smallest id comes
    /// first, and cycles are returned in ascending order of that id.
    /// Attack relations never contribute.
    pub fn support_cycles(&self) -> Vec<Vec<PropositionId>> {
        let mut graph: DiGraph<(), ()> = DiGraph::new();
        let mut node_indices = Vec::with_capacity(self.propositions.len());

        for _ in 0..self.propositions.len() {
            node_indices.push(graph.add_node(()));
        }

        for relation in &self.relations {
            if relation.kind == RelationKind::Supports {
                graph.add_edge(
                    node_indices[relation.source.0 as usize],
                    node_indices[relation.target.0 as usize],
                    (),
                );
            }
        }

        let sccs = tarjan_scc(&graph);

        let mut cycles: Vec<Vec<PropositionId>> = sccs
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let ids: Vec<PropositionId> = scc
                    .into_iter()
                    .map(|idx| PropositionId(idx.index() as u32))
                    .collect();
                normalize_cycle(&ids)
            })
            .collect();
        cycles.sort_by_key(|cycle| cycle[0]);
        cycles
    }
}

/// Rotate a cycle so the smallest proposition id comes first.
///
/// Keeps cycle reporting stable regardless of SCC traversal order.
fn normalize_cycle(cycle: &[PropositionId]) -> Vec<PropositionId> {
    if cycle.is_empty() {
        return vec![];
    }

    let min_idx = cycle
        .iter()
        .enumerate()
        .min_by_key(|(_, id)| **id)
        .map(|(i, _)| i)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&cycle[min_idx..]);
    normalized.extend_from_slice(&cycle[..min_idx]);
    normalized
}
