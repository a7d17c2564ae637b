//! Text (terminal) reporter with colors and formatting

use crate::models::{ReviewReport, ScoreBand, Severity};
use anyhow::Result;

/// Band colors (ANSI escape codes)
fn band_color(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "\x1b[32m",            // Green
        ScoreBand::Good => "\x1b[92m",                 // Light green
        ScoreBand::NeedsImprovement => "\x1b[33m",     // Yellow
        ScoreBand::RequiresMajorChanges => "\x1b[31m", // Red
    }
}

/// Severity colors
fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "\x1b[31m", // Red
        Severity::High => "\x1b[91m",     // Light red
        Severity::Medium => "\x1b[33m",   // Yellow
        Severity::Low => "\x1b[34m",      // Blue
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Severity tag
fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "[C]",
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
    }
}

/// Render report as formatted terminal output
pub fn render(report: &ReviewReport) -> Result<String> {
    let mut out = String::new();

    // Header
    let band_c = band_color(report.band);
    out.push_str(&format!("\n{BOLD}Architecture Review{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{}/100{RESET}  {band_c}{BOLD}{}{RESET}  Type: {}\n\n",
        report.overall_score,
        report.band.label(),
        report.artifact_type
    ));

    // Coverage per category (compact)
    if !report.coverage.is_empty() {
        out.push_str(&format!("{BOLD}COVERAGE{RESET}\n"));
        for c in &report.coverage {
            out.push_str(&format!(
                "  {:<22} {:>3}/{:<3} ({:>3.0}%)\n",
                c.category,
                c.matched_count,
                c.required_count,
                c.ratio * 100.0
            ));
        }
        out.push('\n');
    }

    // Comments summary
    let sb = &report.severity_breakdown;
    out.push_str(&format!("{BOLD}COMMENTS{RESET} ({} total)\n", sb.total));
    let mut summary_parts = Vec::new();
    if sb.critical > 0 {
        summary_parts.push(format!("\x1b[31m{} critical{RESET}", sb.critical));
    }
    if sb.high > 0 {
        summary_parts.push(format!("\x1b[91m{} high{RESET}", sb.high));
    }
    if sb.medium > 0 {
        summary_parts.push(format!("\x1b[33m{} medium{RESET}", sb.medium));
    }
    if sb.low > 0 {
        summary_parts.push(format!("\x1b[34m{} low{RESET}", sb.low));
    }
    if !summary_parts.is_empty() {
        out.push_str(&format!("  {}\n", summary_parts.join("  ")));
    }
    out.push('\n');

    for comment in &report.comments {
        let color = severity_color(comment.severity);
        out.push_str(&format!(
            "  {color}{}{RESET} {}{}\n",
            severity_tag(comment.severity),
            comment.message,
            comment
                .section_reference
                .as_deref()
                .map(|s| format!(" {DIM}[{s}]{RESET}"))
                .unwrap_or_default()
        ));
        if let Some(rec) = &comment.recommendation {
            out.push_str(&format!("      {DIM}{rec}{RESET}\n"));
        }
    }
    if !report.comments.is_empty() {
        out.push('\n');
    }

    // Preparation notes
    out.push_str(&format!("{BOLD}PREPARATION{RESET}\n"));
    for note in &report.preparation_notes {
        out.push_str(&format!("  - {note}\n"));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_contains_key_facts() {
        let out = render(&test_report()).expect("render text");
        assert!(out.contains("72/100"));
        assert!(out.contains("needs improvement"));
        assert!(out.contains("[C]"));
        assert!(out.contains("disaster_recovery"));
        assert!(out.contains("Focus on:"));
    }

    #[test]
    fn test_text_render_clean_report() {
        let mut report = test_report();
        report.comments.clear();
        report.severity_breakdown = Default::default();
        let out = render(&report).expect("render text");
        // ANSI styling sits between "COMMENTS" and the count.
        assert!(out.contains("COMMENTS"));
        assert!(out.contains("(0 total)"));
    }
}
