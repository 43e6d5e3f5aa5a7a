//! Base rule trait for fallacy detection
//!
//! Every fallacy rule is an independent, stateless value implementing
//! [`FallacyRule`]. Rules never suppress each other: if three rules fire
//! on the same proposition, three findings come back. The registry owns
//! ordering; rules only need to anchor each finding on the proposition
//! its pattern matched.

use crate::graph::ArgumentGraph;
use crate::models::FallacyFinding;

/// Trait for all fallacy rules
///
/// # Example Implementation
///
/// ```ignore
/// pub struct MyRule;
///
/// impl FallacyRule for MyRule {
///     fn name(&self) -> &'static str {
///         "my-rule"
///     }
///
///     fn description(&self) -> &'static str {
///         "Flags my specific reasoning pattern"
///     }
///
///     fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
///         vec![]
///     }
/// }
/// ```
pub trait FallacyRule: Send + Sync {
    /// Unique kebab-case identifier for this rule
    ///
    /// Finding ids hash over it, so it must stay stable across releases.
    fn name(&self) -> &'static str;

    /// Human-readable description of the pattern this rule flags
    fn description(&self) -> &'static str;

    /// Scan the graph and return findings
    ///
    /// Implementations must be pure over the graph: no shared state, no
    /// I/O, deterministic output for identical input. Each finding lists
    /// the proposition its pattern matched on first.
    fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding>;
}
