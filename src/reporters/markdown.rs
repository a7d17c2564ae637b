//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for pull request comments, wikis, and
//! review-meeting handouts.

use crate::models::{ReviewReport, ScoreBand, Severity};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &ReviewReport) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');
    md.push_str(&render_summary(report));
    md.push('\n');
    md.push_str(&render_coverage(report));
    md.push('\n');
    md.push_str(&render_comments(report));
    md.push('\n');
    md.push_str(&render_notes(report));
    md.push('\n');
    md.push_str(&render_footer());

    Ok(md)
}

fn band_emoji(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "🏆",
        ScoreBand::Good => "⭐",
        ScoreBand::NeedsImprovement => "⚠️",
        ScoreBand::RequiresMajorChanges => "❌",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔴 Critical",
        Severity::High => "🟠 High",
        Severity::Medium => "🟡 Medium",
        Severity::Low => "🔵 Low",
    }
}

fn render_header(report: &ReviewReport) -> String {
    format!(
        "# {} Architecture Review Report\n\n**Score: {}/100** ({}) | **Type:** `{}`\n",
        band_emoji(report.band),
        report.overall_score,
        report.band.label(),
        report.artifact_type
    )
}

fn render_summary(report: &ReviewReport) -> String {
    let sb = &report.severity_breakdown;
    let mut md = String::from("## Summary\n\n");
    md.push_str("| Severity | Count |\n|---|---|\n");
    md.push_str(&format!("| Critical | {} |\n", sb.critical));
    md.push_str(&format!("| High | {} |\n", sb.high));
    md.push_str(&format!("| Medium | {} |\n", sb.medium));
    md.push_str(&format!("| Low | {} |\n", sb.low));
    md.push_str(&format!("| **Total** | **{}** |\n", sb.total));
    md
}

fn render_coverage(report: &ReviewReport) -> String {
    if report.coverage.is_empty() {
        return String::new();
    }
    let mut md = String::from("## Coverage\n\n");
    md.push_str("| Category | Matched | Required | Coverage | Weight |\n|---|---|---|---|---|\n");
    for c in &report.coverage {
        md.push_str(&format!(
            "| {} | {} | {} | {:.0}% | {} |\n",
            c.category,
            c.matched_count,
            c.required_count,
            c.ratio * 100.0,
            c.weight
        ));
    }
    md
}

fn render_comments(report: &ReviewReport) -> String {
    let mut md = String::from("## Review Comments\n\n");
    if report.comments.is_empty() {
        md.push_str("No findings.\n");
        return md;
    }
    for comment in &report.comments {
        md.push_str(&format!(
            "### {} {}\n\n{}\n",
            severity_label(comment.severity),
            comment.category,
            comment.message
        ));
        if let Some(section) = &comment.section_reference {
            md.push_str(&format!("\n*Section:* `{section}`\n"));
        }
        if let Some(rec) = &comment.recommendation {
            md.push_str(&format!("\n> {rec}\n"));
        }
        md.push('\n');
    }
    md
}

fn render_notes(report: &ReviewReport) -> String {
    let mut md = String::from("## Preparation Notes\n\n");
    for note in &report.preparation_notes {
        md.push_str(&format!("- {note}\n"));
    }
    md
}

fn render_footer() -> String {
    format!(
        "---\n\n*Generated by archreview on {}*\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_structure() {
        let md = render(&test_report()).expect("render markdown");
        assert!(md.starts_with("# "));
        assert!(md.contains("**Score: 72/100**"));
        assert!(md.contains("## Summary"));
        assert!(md.contains("## Coverage"));
        assert!(md.contains("## Review Comments"));
        assert!(md.contains("🔴 Critical security"));
        assert!(md.contains("## Preparation Notes"));
    }

    #[test]
    fn test_markdown_empty_comments() {
        let mut report = test_report();
        report.comments.clear();
        let md = render(&report).expect("render markdown");
        assert!(md.contains("No findings."));
    }
}
