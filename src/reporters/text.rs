//! Text (terminal) reporter with colors and formatting

use anyhow::Result;

use crate::coach::CoachingReport;
use crate::models::{ArgumentReport, Severity, ValidationReport};
use crate::speech::SpeechReport;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

/// Grade colors (ANSI escape codes)
fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "\x1b[32m", // Green
        "B" => "\x1b[92m", // Light green
        "C" => "\x1b[33m", // Yellow
        "D" => "\x1b[91m", // Light red
        "F" => "\x1b[31m", // Red
        _ => "\x1b[0m",
    }
}

/// Severity colors
fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::High => "\x1b[91m",   // Light red
        Severity::Medium => "\x1b[33m", // Yellow
        Severity::Low => "\x1b[34m",    // Blue
    }
}

/// Severity tag
fn severity_tag(severity: &Severity) -> &'static str {
    match severity {
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
    }
}

/// Render a full analysis as formatted terminal output
pub fn render_analysis(report: &ArgumentReport) -> Result<String> {
    let mut out = String::new();

    let grade_c = grade_color(&report.grade);
    out.push_str(&format!("\n{BOLD}Rhetor Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}  ",
        report.score, report.grade
    ));
    out.push_str(&format!(
        "Propositions: {}  Relations: {}\n\n",
        report.graph.len(),
        report.graph.relations().len()
    ));

    if !report.graph.is_empty() {
        out.push_str(&format!("{BOLD}PROPOSITIONS{RESET}\n"));
        for prop in report.graph.propositions() {
            out.push_str(&format!(
                "  {DIM}{}{RESET} [{}] {}\n",
                prop.id, prop.role, prop.text
            ));
        }
        out.push('\n');
    }

    out.push_str(&render_validity_line(&report.validation));

    let fs = &report.findings_summary;
    out.push_str(&format!("{BOLD}FINDINGS{RESET} ({} total)\n", fs.total));
    let mut summary_parts = Vec::new();
    if fs.high > 0 {
        summary_parts.push(format!("\x1b[91m{} high{RESET}", fs.high));
    }
    if fs.medium > 0 {
        summary_parts.push(format!("\x1b[33m{} medium{RESET}", fs.medium));
    }
    if fs.low > 0 {
        summary_parts.push(format!("\x1b[34m{} low{RESET}", fs.low));
    }
    if !summary_parts.is_empty() {
        out.push_str(&format!("  {}\n", summary_parts.join(" | ")));
    }
    out.push('\n');

    for finding in &report.findings {
        let sev_c = severity_color(&finding.severity);
        let sev_tag = severity_tag(&finding.severity);
        let ids: Vec<String> = finding.propositions.iter().map(|id| id.to_string()).collect();
        out.push_str(&format!(
            "  {sev_c}{sev_tag}{RESET} {BOLD}{}{RESET} {DIM}({}){RESET}\n      {}\n",
            finding.kind.label(),
            ids.join(", "),
            finding.explanation
        ));
    }
    if !report.findings.is_empty() {
        out.push('\n');
    }

    if !report.feedback.is_empty() {
        out.push_str(&format!("{BOLD}FEEDBACK{RESET}\n"));
        for (i, line) in report.feedback.iter().enumerate() {
            out.push_str(&format!("  {DIM}{:>2}.{RESET} {}\n", i + 1, line));
        }
        out.push('\n');
    }

    match report.grade.as_str() {
        "A" => out.push_str(&format!("{DIM}Strong argument. Keep it tight.{RESET}\n")),
        "B" => out.push_str(&format!(
            "{DIM}Solid argument. Address the feedback above for an A.{RESET}\n"
        )),
        _ => out.push_str(&format!(
            "{DIM}Work through the feedback top to bottom; structural issues first.{RESET}\n"
        )),
    }

    Ok(out)
}

/// Render a structural validation report
pub fn render_validation(report: &ValidationReport) -> Result<String> {
    let mut out = String::new();
    out.push_str(&render_validity_line(report));
    for issue in &report.issues {
        let ids: Vec<String> = issue.propositions.iter().map(|id| id.to_string()).collect();
        let ids = if ids.is_empty() {
            String::new()
        } else {
            format!(" {DIM}({}){RESET}", ids.join(", "))
        };
        out.push_str(&format!("  {:<20}{} {}\n", issue.kind.to_string(), ids, issue.message));
    }
    Ok(out)
}

fn render_validity_line(report: &ValidationReport) -> String {
    if report.is_structurally_valid {
        format!("{GREEN}{BOLD}STRUCTURALLY VALID{RESET}\n\n")
    } else {
        format!(
            "{RED}{BOLD}STRUCTURALLY INVALID{RESET} ({} issues)\n\n",
            report.issues.len()
        )
    }
}

/// Render a speech delivery report
pub fn render_speech(report: &SpeechReport) -> Result<String> {
    let mut out = String::new();

    let fluency_c = if report.fluency_score >= 80 {
        GREEN
    } else if report.fluency_score >= 50 {
        "\x1b[33m"
    } else {
        RED
    };
    out.push_str(&format!("\n{BOLD}Speech Delivery{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Fluency: {fluency_c}{BOLD}{}/100{RESET}  Words: {}  Fillers: {}\n\n",
        report.fluency_score, report.word_count, report.filler_count
    ));

    if !report.fillers.is_empty() {
        out.push_str(&format!("{BOLD}FILLERS{RESET}\n"));
        for filler in &report.fillers {
            out.push_str(&format!("  {:>3}x  {}\n", filler.count, filler.term));
        }
        out.push('\n');
    }

    out.push_str(&format!("{BOLD}SUGGESTIONS{RESET}\n"));
    for suggestion in &report.suggestions {
        out.push_str(&format!("  - {}\n", suggestion));
    }

    Ok(out)
}

/// Render a coaching report
pub fn render_coaching(report: &CoachingReport) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}Debate Coaching{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    if !report.claim.is_empty() {
        out.push_str(&format!("Claim: {BOLD}{}{RESET}\n", report.claim));
    }
    if !report.key_terms.is_empty() {
        out.push_str(&format!(
            "Key terms: {DIM}{}{RESET}\n",
            report.key_terms.join(", ")
        ));
    }
    out.push('\n');

    if !report.counterpoints.is_empty() {
        out.push_str(&format!("{BOLD}COUNTERPOINTS{RESET}\n"));
        for (i, cp) in report.counterpoints.iter().enumerate() {
            out.push_str(&format!(
                "  {DIM}{}.{RESET} [{}] {}\n",
                i + 1,
                cp.strategy,
                cp.text
            ));
        }
        if let Some(strongest) = &report.strongest_counterpoint {
            out.push_str(&format!(
                "  {DIM}strongest: {}{RESET}\n",
                strongest.strategy
            ));
        }
        out.push('\n');
    }

    if !report.questions.is_empty() {
        out.push_str(&format!("{BOLD}QUESTIONS{RESET}\n"));
        for (i, q) in report.questions.iter().enumerate() {
            out.push_str(&format!(
                "  {DIM}{}.{RESET} [{}] {}\n      {DIM}hint: {}{RESET}\n",
                i + 1,
                q.category,
                q.question,
                q.hint
            ));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_coaching, test_report, test_speech, test_validation};

    #[test]
    fn test_analysis_shows_score_and_findings() {
        let out = render_analysis(&test_report()).unwrap();
        assert!(out.contains("95/100"));
        assert!(out.contains("Hasty generalization"));
        assert!(out.contains("STRUCTURALLY VALID"));
    }

    #[test]
    fn test_validation_lists_issues() {
        let out = render_validation(&test_validation()).unwrap();
        assert!(out.contains("STRUCTURALLY INVALID"));
        assert!(out.contains("UNSUPPORTED_CLAIM"));
    }

    #[test]
    fn test_speech_shows_fluency() {
        let out = render_speech(&test_speech()).unwrap();
        assert!(out.contains("Fluency:"));
        assert!(out.contains("um"));
    }

    #[test]
    fn test_coaching_numbers_counterpoints() {
        let out = render_coaching(&test_coaching()).unwrap();
        assert!(out.contains("COUNTERPOINTS"));
        assert!(out.contains("QUESTIONS"));
    }
}
