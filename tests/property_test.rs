//! Property-based tests for the analysis pipeline

use proptest::prelude::*;
use rhetor::speech::SpeechAnalyzer;
use rhetor::{analyze, validate, ArgumentReport, EngineError};

// Property: analyze never panics, stays on the 0-100 scale, and grades
// consistently with the score bands; blank input is the only error
proptest! {
    #[test]
    fn analyze_any_text_scores_on_scale(text in ".{0,300}") {
        match analyze(&text) {
            Ok(report) => {
                prop_assert!(report.score <= 100);
                prop_assert_eq!(report.grade, ArgumentReport::grade_from_score(report.score));
                prop_assert_eq!(report.findings_summary.total, report.findings.len());
            }
            Err(EngineError::EmptyInput) => prop_assert!(text.trim().is_empty()),
            Err(other) => prop_assert!(false, "unexpected engine error: {}", other),
        }
    }
}

// Property: identical input yields byte-identical reports
proptest! {
    #[test]
    fn analyze_is_deterministic(text in "[A-Za-z ,.!?]{1,200}") {
        let runs: Vec<String> = (0..2)
            .filter_map(|_| analyze(&text).ok())
            .map(|r| serde_json::to_string(&r).unwrap())
            .collect();
        if runs.len() == 2 {
            prop_assert_eq!(&runs[0], &runs[1]);
        }
    }
}

// Property: the cheap path reports exactly what the full pipeline reports
proptest! {
    #[test]
    fn validate_agrees_with_analyze(text in "[A-Za-z ,.]{1,200}") {
        if let (Ok(cheap), Ok(full)) = (validate(&text), analyze(&text)) {
            prop_assert_eq!(
                serde_json::to_string(&cheap).unwrap(),
                serde_json::to_string(&full.validation).unwrap()
            );
        }
    }
}

// Property: feedback always covers every issue and every finding, issues first
proptest! {
    #[test]
    fn feedback_covers_issues_then_findings(text in "[A-Za-z ,.]{1,200}") {
        if let Ok(report) = analyze(&text) {
            prop_assert_eq!(
                report.feedback.len(),
                report.validation.issues.len() + report.findings.len()
            );
            let n_issues = report.validation.issues.len();
            for (finding, line) in report.findings.iter().zip(&report.feedback[n_issues..]) {
                prop_assert_eq!(&finding.explanation, line);
            }
        }
    }
}

// Property: fluency stays within its floor and ceiling and the word count
// matches whitespace splitting
proptest! {
    #[test]
    fn speech_fluency_stays_in_band(text in "[a-z ]{0,150}") {
        let analyzer = SpeechAnalyzer::new();
        match analyzer.analyze(&text) {
            Ok(report) => {
                prop_assert!(report.fluency_score >= 10);
                prop_assert!(report.fluency_score <= 100);
                prop_assert_eq!(report.word_count, text.split_whitespace().count());
                prop_assert!(report.filler_count <= report.word_count);
            }
            Err(EngineError::EmptyInput) => prop_assert!(text.trim().is_empty()),
            Err(other) => prop_assert!(false, "unexpected speech error: {}", other),
        }
    }
}
