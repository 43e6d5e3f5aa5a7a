//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Pull request comments
//! - Study notes and flashcards
//! - Documentation
//!
//! Output contains no timestamps: identical input renders identical
//! Markdown, which keeps reports diffable.

use anyhow::Result;

use crate::coach::CoachingReport;
use crate::models::{ArgumentReport, Severity, ValidationReport};
use crate::speech::SpeechReport;

/// Render a full analysis as GitHub-flavored Markdown
pub fn render_analysis(report: &ArgumentReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');
    md.push_str(&render_propositions(report));
    md.push('\n');
    md.push_str(&render_structure(&report.validation));
    md.push('\n');
    md.push_str(&render_findings(report));
    md.push('\n');
    md.push_str(&render_feedback(report));

    Ok(md)
}

fn render_header(report: &ArgumentReport) -> String {
    let grade_emoji = match report.grade.as_str() {
        "A" => "🏆",
        "B" => "⭐",
        "C" => "⚠️",
        "D" => "❌",
        _ => "💀",
    };

    format!(
        r#"# {} Rhetor Argument Report

**Grade: {}** | **Score: {}/100**
"#,
        grade_emoji, report.grade, report.score
    )
}

fn render_propositions(report: &ArgumentReport) -> String {
    let mut md = String::from(
        r#"## Propositions

| Id | Role | Confidence | Text |
|----|------|------------|------|
"#,
    );
    for prop in report.graph.propositions() {
        md.push_str(&format!(
            "| {} | {} | {:.2} | {} |\n",
            prop.id, prop.role, prop.confidence, prop.text
        ));
    }

    if !report.graph.relations().is_empty() {
        md.push_str("\n### Relations\n\n");
        for rel in report.graph.relations() {
            md.push_str(&format!("- {} {} {}\n", rel.source, rel.kind, rel.target));
        }
    }
    md
}

fn render_structure(validation: &ValidationReport) -> String {
    let status = if validation.is_structurally_valid {
        "✅ structurally valid"
    } else {
        "❌ structurally invalid"
    };

    let mut md = format!(
        r#"## Structure

**{}**
"#,
        status
    );
    if !validation.issues.is_empty() {
        md.push('\n');
        for issue in &validation.issues {
            md.push_str(&format!("- `{}` {}\n", issue.kind, issue.message));
        }
    }
    md
}

fn render_findings(report: &ArgumentReport) -> String {
    let fs = &report.findings_summary;
    let mut md = format!(
        r#"## Fallacy Findings

| Severity | Count |
|----------|-------|
| High | {} |
| Medium | {} |
| Low | {} |
"#,
        fs.high, fs.medium, fs.low
    );

    if !report.findings.is_empty() {
        md.push('\n');
        for finding in &report.findings {
            let emoji = severity_emoji(&finding.severity);
            let ids: Vec<String> = finding.propositions.iter().map(|id| id.to_string()).collect();
            md.push_str(&format!(
                "- {} **{}** ({}): {}\n",
                emoji,
                finding.kind.label(),
                ids.join(", "),
                finding.explanation
            ));
        }
    }
    md
}

fn render_feedback(report: &ArgumentReport) -> String {
    if report.feedback.is_empty() {
        return "## Feedback\n\nNo issues found.\n".to_string();
    }

    let mut md = String::from("## Feedback\n\n");
    for (i, line) in report.feedback.iter().enumerate() {
        md.push_str(&format!("{}. {}\n", i + 1, line));
    }
    md
}

fn severity_emoji(severity: &Severity) -> &'static str {
    match severity {
        Severity::High => "🟠",
        Severity::Medium => "🟡",
        Severity::Low => "🔵",
    }
}

/// Render a structural validation report
pub fn render_validation(report: &ValidationReport) -> Result<String> {
    let mut md = String::from("# Rhetor Validation Report\n\n");
    md.push_str(&render_structure(report));
    Ok(md)
}

/// Render a speech delivery report
pub fn render_speech(report: &SpeechReport) -> Result<String> {
    let mut md = format!(
        r#"# Rhetor Speech Report

**Fluency: {}/100** | {} words | {} fillers

## Fillers

| Term | Count |
|------|-------|
"#,
        report.fluency_score, report.word_count, report.filler_count
    );
    for filler in &report.fillers {
        md.push_str(&format!("| {} | {} |\n", filler.term, filler.count));
    }

    md.push_str("\n## Suggestions\n\n");
    for suggestion in &report.suggestions {
        md.push_str(&format!("- {}\n", suggestion));
    }
    Ok(md)
}

/// Render a coaching report
pub fn render_coaching(report: &CoachingReport) -> Result<String> {
    let mut md = String::from("# Rhetor Coaching Report\n\n");
    if !report.claim.is_empty() {
        md.push_str(&format!("**Claim:** {}\n\n", report.claim));
    }
    if !report.key_terms.is_empty() {
        md.push_str(&format!("**Key terms:** {}\n\n", report.key_terms.join(", ")));
    }

    if !report.counterpoints.is_empty() {
        md.push_str("## Counterpoints\n\n");
        for cp in &report.counterpoints {
            md.push_str(&format!("- `{}` {}\n", cp.strategy, cp.text));
        }
        if let Some(strongest) = &report.strongest_counterpoint {
            md.push_str(&format!("\n**Strongest:** `{}`\n", strongest.strategy));
        }
        md.push('\n');
    }

    if !report.questions.is_empty() {
        md.push_str("## Socratic Questions\n\n");
        for q in &report.questions {
            md.push_str(&format!(
                "- `{}` {}\n  - _{}_\n",
                q.category, q.question, q.hint
            ));
        }
    }
    Ok(md)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_coaching, test_report, test_speech, test_validation};

    #[test]
    fn test_analysis_markdown_sections() {
        let md = render_analysis(&test_report()).unwrap();
        assert!(md.contains("# 🏆 Rhetor Argument Report"));
        assert!(md.contains("## Propositions"));
        assert!(md.contains("## Fallacy Findings"));
        assert!(md.contains("P0 supports P1"));
    }

    #[test]
    fn test_validation_markdown_shows_issue_codes() {
        let md = render_validation(&test_validation()).unwrap();
        assert!(md.contains("structurally invalid"));
        assert!(md.contains("`UNSUPPORTED_CLAIM`"));
    }

    #[test]
    fn test_speech_markdown_has_filler_table() {
        let md = render_speech(&test_speech()).unwrap();
        assert!(md.contains("| um | 2 |"));
    }

    #[test]
    fn test_coaching_markdown_lists_strategies() {
        let md = render_coaching(&test_coaching()).unwrap();
        assert!(md.contains("## Counterpoints"));
        assert!(md.contains("## Socratic Questions"));
    }

    #[test]
    fn test_markdown_is_deterministic() {
        let a = render_analysis(&test_report()).unwrap();
        let b = render_analysis(&test_report()).unwrap();
        assert_eq!(a, b);
    }
}
