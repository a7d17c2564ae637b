//! JSON reporter
//!
//! Outputs the full ReviewReport as pretty-printed JSON for machine
//! consumption, piping to jq, or further processing.

use crate::models::ReviewReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &ReviewReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render report as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(report: &ReviewReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_json_render_valid() {
        let report = test_report();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["overall_score"], 72);
        assert_eq!(parsed["band"], "needs_improvement");
        assert_eq!(
            parsed["comments"].as_array().expect("comments array").len(),
            2
        );
    }

    #[test]
    fn test_json_render_compact() {
        let report = test_report();
        let json_str = render_compact(&report).expect("render compact JSON");
        assert!(!json_str.contains('\n'));
        let _: serde_json::Value = serde_json::from_str(&json_str).expect("parse compact JSON");
    }

    #[test]
    fn test_json_empty_comments() {
        let mut report = test_report();
        report.comments.clear();
        report.severity_breakdown = Default::default();
        let json_str = render(&report).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["comments"].as_array().expect("comments array").len(), 0);
    }
}
