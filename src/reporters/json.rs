//! JSON reporter
//!
//! Outputs any report as pretty-printed JSON. Useful for machine
//! consumption, piping to jq, or further processing.

use anyhow::Result;
use serde::Serialize;

/// Render a report as pretty-printed JSON
pub fn render<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render a report as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_report, test_speech};

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["grade"], "A");
        assert_eq!(parsed["score"], 95);
        assert_eq!(
            parsed["findings"][0]["kind"],
            "hasty_generalization"
        );
    }

    #[test]
    fn test_json_render_compact() {
        let report = test_speech();
        let json_str = render_compact(&report).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }

    #[test]
    fn test_json_graph_shape() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        let props = parsed["graph"]["propositions"]
            .as_array()
            .expect("propositions array");
        assert_eq!(props.len(), 2);
        assert_eq!(props[0]["role"], "premise");
        assert_eq!(props[1]["role"], "claim");
        assert_eq!(parsed["graph"]["relations"][0]["kind"], "supports");
    }
}
