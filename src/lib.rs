//! Rhetor: argumentation analysis and coaching
//!
//! Rhetor parses free-text arguments into a typed claim/premise/rebuttal
//! graph, validates the structure, flags informal fallacies through a
//! pluggable rule registry, and scores reasoning quality 0-100 with
//! ordered coaching feedback. Collaborating layers generate counterpoints
//! and Socratic questions and score spoken-delivery fluency.
//!
//! ## Pipeline
//!
//! - **extractor**: sentences -> role-tagged propositions (discourse markers)
//! - **builder**: propositions -> [`graph::ArgumentGraph`] via a relation strategy
//! - **validator**: structural issues (missing claim, unsupported claim, orphans, cycles)
//! - **detectors**: fallacy rule registry -> severity-tagged findings
//! - **scoring**: deterministic 0-100 score, letter grade, ordered feedback
//!
//! The two core entry points are [`analyze`] and [`validate`]:
//!
//! ```
//! let report = rhetor::analyze("Because all politicians lie, you cannot trust any of them.")?;
//! assert_eq!(report.grade, "A");
//! assert_eq!(report.findings.len(), 1);
//! # Ok::<(), rhetor::EngineError>(())
//! ```

pub mod builder;
pub mod cli;
pub mod coach;
pub mod config;
pub mod detectors;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod graph;
pub mod models;
pub mod reporters;
pub mod scoring;
pub mod speech;
pub mod validator;

// Re-exports for convenience
pub use engine::{analyze, validate, ReasoningEngine};
pub use error::{EngineError, EngineResult};
pub use models::{ArgumentReport, FallacyFinding, FallacyKind, Severity, ValidationReport};
