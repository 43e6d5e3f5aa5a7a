//! Core data models for Rhetor
//!
//! These models are used throughout the codebase for representing
//! structural issues, fallacy findings, and analysis reports.

use serde::{Deserialize, Serialize};

use crate::graph::{ArgumentGraph, PropositionId};

/// Generate a deterministic finding ID based on content hash.
///
/// This ensures findings have stable IDs across runs, enabling:
/// - Comparing reports from repeated analyses of the same text
/// - Suppression by ID in config files
/// - Reliable deduplication
///
/// The ID is a 16-character hex string derived from hashing:
/// - rule name (which rule found it)
/// - implicated proposition ids (where it was found)
/// - explanation (what the issue is)
pub fn deterministic_finding_id(
    rule: &str,
    propositions: &[PropositionId],
    explanation: &str,
) -> String {
    use sha2::{Digest, Sha256};
    // DefaultHasher is intentionally not stable across Rust/compiler versions.
    let ids: Vec<String> = propositions.iter().map(|p| p.to_string()).collect();
    let input = format!("{rule}\n{}\n{explanation}", ids.join(","));
    let digest = Sha256::digest(input.as_bytes());
    digest.iter().take(8).map(|b| format!("{b:02x}")).collect()
}

/// Shorten proposition text for quoting inside message templates.
///
/// Truncates to 80 characters with a trailing ellipsis so feedback
/// stays readable for long sentences.
pub fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 80;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX_CHARS).collect();
        format!("{cut}...")
    }
}

/// Severity levels for fallacy findings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(format!(
                "unknown severity '{other}' (expected low, medium, or high)"
            )),
        }
    }
}

/// The kinds of fallacy the standard rule set can flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallacyKind {
    AdHominem,
    HastyGeneralization,
    CircularReasoning,
    FalseDichotomy,
    AppealToEmotion,
    StrawMan,
    AppealToAuthority,
    SlipperySlope,
}

impl FallacyKind {
    /// Human-readable label used in feedback and reports.
    pub fn label(&self) -> &'static str {
        match self {
            FallacyKind::AdHominem => "Ad hominem",
            FallacyKind::HastyGeneralization => "Hasty generalization",
            FallacyKind::CircularReasoning => "Circular reasoning",
            FallacyKind::FalseDichotomy => "False dichotomy",
            FallacyKind::AppealToEmotion => "Appeal to emotion",
            FallacyKind::StrawMan => "Straw man",
            FallacyKind::AppealToAuthority => "Appeal to authority",
            FallacyKind::SlipperySlope => "Slippery slope",
        }
    }

    /// Fixed severity per kind. Rules never vary this at detection time,
    /// which keeps scoring reproducible for identical input.
    pub fn severity(&self) -> Severity {
        match self {
            FallacyKind::AdHominem => Severity::High,
            FallacyKind::CircularReasoning => Severity::High,
            FallacyKind::StrawMan => Severity::High,
            FallacyKind::HastyGeneralization => Severity::Medium,
            FallacyKind::FalseDichotomy => Severity::Medium,
            FallacyKind::AppealToEmotion => Severity::Medium,
            FallacyKind::SlipperySlope => Severity::Medium,
            FallacyKind::AppealToAuthority => Severity::Low,
        }
    }
}

impl std::fmt::Display for FallacyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single fallacy flagged by a rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallacyFinding {
    pub id: String,
    pub kind: FallacyKind,
    pub severity: Severity,
    /// Implicated propositions, pattern location first.
    pub propositions: Vec<PropositionId>,
    pub explanation: String,
}

impl FallacyFinding {
    /// Build a finding with the kind's fixed severity and a content-hash id.
    pub fn new(kind: FallacyKind, rule: &str, propositions: Vec<PropositionId>, explanation: String) -> Self {
        let id = deterministic_finding_id(rule, &propositions, &explanation);
        Self {
            id,
            kind,
            severity: kind.severity(),
            propositions,
            explanation,
        }
    }

    /// The proposition the pattern matched on, used for report ordering.
    pub fn anchor(&self) -> Option<PropositionId> {
        self.propositions.first().copied()
    }
}

/// Kinds of structural problem the validator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    NoClaim,
    UnsupportedClaim,
    OrphanProposition,
    CircularSupport,
}

impl IssueKind {
    /// Whether this issue makes the graph structurally invalid.
    /// Orphans are advisory only.
    pub fn invalidates(&self) -> bool {
        !matches!(self, IssueKind::OrphanProposition)
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IssueKind::NoClaim => "NO_CLAIM",
            IssueKind::UnsupportedClaim => "UNSUPPORTED_CLAIM",
            IssueKind::OrphanProposition => "ORPHAN_PROPOSITION",
            IssueKind::CircularSupport => "CIRCULAR_SUPPORT",
        };
        write!(f, "{s}")
    }
}

/// A structural problem found in an argument graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralIssue {
    pub kind: IssueKind,
    /// Implicated propositions. Empty for NO_CLAIM; cycle issues list
    /// the cycle in traversal order starting from its smallest id.
    pub propositions: Vec<PropositionId>,
    pub message: String,
}

/// Result of structural validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_structurally_valid: bool,
    pub issues: Vec<StructuralIssue>,
}

impl ValidationReport {
    pub fn from_issues(issues: Vec<StructuralIssue>) -> Self {
        let is_structurally_valid = !issues.iter().any(|i| i.kind.invalidates());
        Self {
            is_structurally_valid,
            issues,
        }
    }

    /// Issues that count against the score (orphans excluded).
    pub fn invalidating_issues(&self) -> impl Iterator<Item = &StructuralIssue> {
        self.issues.iter().filter(|i| i.kind.invalidates())
    }
}

/// Summary of findings by severity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingsSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl FindingsSummary {
    pub fn from_findings(findings: &[FallacyFinding]) -> Self {
        let mut summary = Self::default();
        for f in findings {
            match f.severity {
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
            }
            summary.total += 1;
        }
        summary
    }
}

/// Full analysis report for one piece of argumentative text.
#[derive(Debug, Clone, Serialize)]
pub struct ArgumentReport {
    pub score: u8,
    pub grade: String,
    pub graph: ArgumentGraph,
    pub validation: ValidationReport,
    pub findings: Vec<FallacyFinding>,
    pub findings_summary: FindingsSummary,
    /// Ordered coaching feedback: structural issues first, then findings.
    pub feedback: Vec<String>,
}

impl ArgumentReport {
    /// Calculate grade from score
    pub fn grade_from_score(score: u8) -> String {
        match score {
            s if s >= 90 => "A".to_string(),
            s if s >= 80 => "B".to_string(),
            s if s >= 70 => "C".to_string(),
            s if s >= 60 => "D".to_string(),
            _ => "F".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_id_is_deterministic() {
        let props = vec![PropositionId(0), PropositionId(1)];
        let a = deterministic_finding_id("hasty-generalization", &props, "too few cases");
        let b = deterministic_finding_id("hasty-generalization", &props, "too few cases");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_finding_id_varies_with_content() {
        let props = vec![PropositionId(0)];
        let a = deterministic_finding_id("ad-hominem", &props, "x");
        let b = deterministic_finding_id("ad-hominem", &props, "y");
        assert_ne!(a, b);
    }

    #[test]
    fn test_excerpt_truncates_long_text() {
        let short = "short enough";
        assert_eq!(excerpt(short), short);

        let long = "x".repeat(120);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 83);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("HIGH".parse::<Severity>(), Ok(Severity::High));
        assert!("urgent".parse::<Severity>().is_err());
    }

    #[test]
    fn test_fixed_severity_per_kind() {
        assert_eq!(FallacyKind::AdHominem.severity(), Severity::High);
        assert_eq!(FallacyKind::HastyGeneralization.severity(), Severity::Medium);
        assert_eq!(FallacyKind::AppealToAuthority.severity(), Severity::Low);
    }

    #[test]
    fn test_orphan_is_advisory() {
        assert!(!IssueKind::OrphanProposition.invalidates());
        assert!(IssueKind::NoClaim.invalidates());
        assert!(IssueKind::UnsupportedClaim.invalidates());
        assert!(IssueKind::CircularSupport.invalidates());
    }

    #[test]
    fn test_validation_report_validity() {
        let advisory = StructuralIssue {
            kind: IssueKind::OrphanProposition,
            propositions: vec![PropositionId(2)],
            message: "orphan".into(),
        };
        let report = ValidationReport::from_issues(vec![advisory.clone()]);
        assert!(report.is_structurally_valid);

        let hard = StructuralIssue {
            kind: IssueKind::UnsupportedClaim,
            propositions: vec![PropositionId(0)],
            message: "unsupported".into(),
        };
        let report = ValidationReport::from_issues(vec![advisory, hard]);
        assert!(!report.is_structurally_valid);
        assert_eq!(report.invalidating_issues().count(), 1);
    }

    #[test]
    fn test_grade_bands() {
        assert_eq!(ArgumentReport::grade_from_score(95), "A");
        assert_eq!(ArgumentReport::grade_from_score(90), "A");
        assert_eq!(ArgumentReport::grade_from_score(85), "B");
        assert_eq!(ArgumentReport::grade_from_score(75), "C");
        assert_eq!(ArgumentReport::grade_from_score(65), "D");
        assert_eq!(ArgumentReport::grade_from_score(10), "F");
    }

    #[test]
    fn test_summary_counts() {
        let findings = vec![
            FallacyFinding::new(
                FallacyKind::AdHominem,
                "ad-hominem",
                vec![PropositionId(1)],
                "attack".into(),
            ),
            FallacyFinding::new(
                FallacyKind::HastyGeneralization,
                "hasty-generalization",
                vec![PropositionId(0)],
                "sweeping".into(),
            ),
        ];
        let summary = FindingsSummary::from_findings(&findings);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.medium, 1);
        assert_eq!(summary.low, 0);
        assert_eq!(summary.total, 2);
    }
}
