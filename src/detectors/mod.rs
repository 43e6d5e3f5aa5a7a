//! Fallacy rules
//!
//! This module provides the rule framework and implementations for
//! flagging named fallacy patterns over an argument graph.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 RuleRegistry                    │
//! │  - Registers rules in a fixed order             │
//! │  - Runs every rule over the graph               │
//! │  - Sorts findings by anchor proposition id      │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────────────────────────────────────┐
//! │                FallacyRule Trait                │
//! │  - name(): stable identifier                    │
//! │  - description(): human-readable pattern        │
//! │  - detect(graph): pure scan, returns findings   │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Rules
//!
//! Core set:
//! - `AdHominemRule` - Rebuttals built on personal attacks
//! - `HastyGeneralizationRule` - Single sweeping premise under a claim
//! - `CircularReasoningRule` - Cycles in the supports subgraph
//! - `FalseDichotomyRule` - Either/or premises with no rebuttal in sight
//! - `AppealToEmotionRule` - Loaded language without evidence
//!
//! Extended set:
//! - `StrawManRule` - Rebuttals against a misrepresented position
//! - `AppealToAuthorityRule` - Expert name-dropping without evidence
//! - `SlipperySlopeRule` - Chained consequences to an extreme outcome
//!
//! # Usage
//!
//! ```ignore
//! use rhetor::detectors::RuleRegistry;
//!
//! let registry = RuleRegistry::standard();
//! let findings = registry.run(&graph);
//! ```

mod base;
mod registry;

pub mod lexicon;

// Core rule implementations
mod ad_hominem;
mod appeal_to_emotion;
mod circular_reasoning;
mod false_dichotomy;
mod hasty_generalization;

// Extended rule implementations
mod appeal_to_authority;
mod slippery_slope;
mod straw_man;

// Re-export base types
pub use base::FallacyRule;

// Re-export the registry
pub use registry::{LexiconExtras, RuleRegistry};

// Re-export rule implementations
pub use ad_hominem::AdHominemRule;
pub use appeal_to_authority::AppealToAuthorityRule;
pub use appeal_to_emotion::AppealToEmotionRule;
pub use circular_reasoning::CircularReasoningRule;
pub use false_dichotomy::FalseDichotomyRule;
pub use hasty_generalization::HastyGeneralizationRule;
pub use slippery_slope::SlipperySlopeRule;
pub use straw_man::StrawManRule;
