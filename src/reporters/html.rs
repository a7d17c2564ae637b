//! HTML reporter with embedded styles
//!
//! Generates a standalone HTML report that can be viewed in any browser.
//! Includes:
//! - Overall score and band visualization
//! - Category coverage progress bars
//! - Review comments with severity badges and recommendations
//! - Preparation notes for the review meeting

use crate::models::{ReviewComment, ReviewReport, ScoreBand, Severity};
use anyhow::Result;
use chrono::Local;

/// Render report as standalone HTML
pub fn render(report: &ReviewReport) -> Result<String> {
    let mut html = String::new();

    // DOCTYPE and head
    html.push_str(&render_head(report));

    // Body
    html.push_str("<body>\n<div class=\"container\">\n");

    // Header
    html.push_str(&render_header());

    // Content
    html.push_str("<div class=\"content\">\n");

    // Score section
    html.push_str(&render_score_section(report));

    // Category coverage
    html.push_str(&render_coverage(report));

    // Severity summary
    html.push_str(&render_severity_summary(report));

    // Review comments
    html.push_str(&render_comments(report));

    // Preparation notes
    html.push_str(&render_notes(report));

    html.push_str("</div>\n"); // content

    // Footer
    html.push_str(&render_footer());

    html.push_str("</div>\n</body>\n</html>");

    Ok(html)
}

fn render_head(report: &ReviewReport) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Architecture Review - {}/100</title>
    <style>
{CSS}
    </style>
</head>
"#,
        report.overall_score
    )
}

fn render_header() -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<div class="header">
    <h1>📐 Architecture Review Report</h1>
    <p class="timestamp">Generated {}</p>
</div>
"#,
        timestamp
    )
}

fn band_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Excellent => "band-excellent",
        ScoreBand::Good => "band-good",
        ScoreBand::NeedsImprovement => "band-needs-improvement",
        ScoreBand::RequiresMajorChanges => "band-requires-major-changes",
    }
}

fn render_score_section(report: &ReviewReport) -> String {
    format!(
        r#"<div class="score-section">
    <div class="score-badge {}">{}</div>
    <div class="band-label">{}</div>
    <p class="artifact-type">Artifact type: <code>{}</code></p>
</div>
"#,
        band_class(report.band),
        report.overall_score,
        report.band.label(),
        report.artifact_type
    )
}

fn render_coverage(report: &ReviewReport) -> String {
    if report.coverage.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        r#"<div class="section">
    <h2 class="section-title">📊 Category Coverage</h2>
    <div class="metrics-grid">
"#,
    );
    for c in &report.coverage {
        let percent = c.ratio * 100.0;
        html.push_str(&format!(
            r#"        <div class="metric-card">
            <h3>{} (weight {})</h3>
            <div class="metric-value">{}/{}</div>
            <div class="metric-bar">
                <div class="metric-bar-fill {}" style="width: {:.0}%"></div>
            </div>
        </div>
"#,
            html_escape(&c.category),
            c.weight,
            c.matched_count,
            c.required_count,
            bar_class(c.ratio),
            percent
        ));
    }
    html.push_str("    </div>\n</div>\n");
    html
}

fn render_severity_summary(report: &ReviewReport) -> String {
    let sb = &report.severity_breakdown;
    format!(
        r#"<div class="section">
    <h2 class="section-title">🎯 Findings Summary</h2>
    <div class="severity-summary">
        <div class="severity-item severity-critical">
            <span class="severity-icon">🔴</span>
            <span class="severity-label">Critical</span>
            <span class="severity-count">{}</span>
        </div>
        <div class="severity-item severity-high">
            <span class="severity-icon">🟠</span>
            <span class="severity-label">High</span>
            <span class="severity-count">{}</span>
        </div>
        <div class="severity-item severity-medium">
            <span class="severity-icon">🟡</span>
            <span class="severity-label">Medium</span>
            <span class="severity-count">{}</span>
        </div>
        <div class="severity-item severity-low">
            <span class="severity-icon">🔵</span>
            <span class="severity-label">Low</span>
            <span class="severity-count">{}</span>
        </div>
    </div>
</div>
"#,
        sb.critical, sb.high, sb.medium, sb.low
    )
}

fn render_comments(report: &ReviewReport) -> String {
    if report.comments.is_empty() {
        return r#"<div class="section">
    <h2 class="section-title">✅ No Findings</h2>
    <p>The document satisfies every review rule.</p>
</div>
"#
        .to_string();
    }

    let mut html = format!(
        r#"<div class="section">
    <h2 class="section-title">🔍 Review Comments ({} total)</h2>
    <div class="comments-list">
"#,
        report.comments.len()
    );

    for comment in &report.comments {
        html.push_str(&render_comment(comment));
    }

    html.push_str("    </div>\n</div>\n");
    html
}

fn render_comment(comment: &ReviewComment) -> String {
    let sev_class = match comment.severity {
        Severity::Critical => "severity-critical",
        Severity::High => "severity-high",
        Severity::Medium => "severity-medium",
        Severity::Low => "severity-low",
    };

    let sev_label = match comment.severity {
        Severity::Critical => "🔴 Critical",
        Severity::High => "🟠 High",
        Severity::Medium => "🟡 Medium",
        Severity::Low => "🔵 Low",
    };

    let section_html = comment
        .section_reference
        .as_ref()
        .map(|section| {
            format!(
                "<div class=\"section-reference\">📂 Section: <code>{}</code></div>\n",
                html_escape(section)
            )
        })
        .unwrap_or_default();

    let rec_html = comment
        .recommendation
        .as_ref()
        .map(|rec| {
            format!(
                r#"<div class="recommendation">
                <div class="recommendation-label">💡 Recommendation</div>
                <div class="recommendation-text">{}</div>
            </div>"#,
                html_escape(rec)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="comment-card">
        <div class="comment-header">
            <span class="severity-badge {}">{}</span>
            <div class="comment-title">{}</div>
            <span class="category-badge">{}</span>
        </div>
        <div class="comment-body">
            {}
            {}
        </div>
    </div>
"#,
        sev_class,
        sev_label,
        html_escape(&comment.message),
        html_escape(&comment.category),
        section_html,
        rec_html
    )
}

fn render_notes(report: &ReviewReport) -> String {
    let mut html = String::from(
        r#"<div class="section">
    <h2 class="section-title">📝 Preparation Notes</h2>
    <ul class="notes-list">
"#,
    );
    for note in &report.preparation_notes {
        html.push_str(&format!("        <li>{}</li>\n", html_escape(note)));
    }
    html.push_str("    </ul>\n</div>\n");
    html
}

fn render_footer() -> String {
    r#"<div class="footer">
    <p>Generated by archreview</p>
</div>
"#
    .to_string()
}

fn bar_class(ratio: f64) -> &'static str {
    if ratio >= 0.8 {
        "bar-good"
    } else if ratio >= 0.5 {
        "bar-moderate"
    } else {
        "bar-poor"
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS
const CSS: &str = r#"
:root {
    --primary-color: #6366f1;
    --background-color: #f8fafc;
    --text-color: #1e293b;
    --card-background: white;
    --border-color: #e2e8f0;
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: var(--text-color);
    background: var(--background-color);
    padding: 2rem;
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    background: var(--card-background);
    border-radius: 12px;
    box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);
    overflow: hidden;
}

.header {
    background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%);
    color: white;
    padding: 3rem 2rem;
    text-align: center;
}

.header h1 { font-size: 2.25rem; margin-bottom: 0.5rem; }
.header .timestamp { opacity: 0.9; font-size: 0.95rem; }

.content { padding: 2rem; }

.score-section {
    text-align: center;
    padding: 2rem;
    background: #f1f5f9;
    border-radius: 8px;
    margin-bottom: 2rem;
}

.score-badge {
    display: inline-block;
    font-size: 3rem;
    font-weight: bold;
    width: 120px;
    height: 120px;
    line-height: 120px;
    border-radius: 50%;
    margin-bottom: 1rem;
    color: white;
}

.band-excellent { background: #10b981; }
.band-good { background: #22c55e; }
.band-needs-improvement { background: #eab308; }
.band-requires-major-changes { background: #ef4444; }

.band-label { font-size: 1.5rem; color: #64748b; margin-bottom: 0.5rem; }
.artifact-type { color: #64748b; }

.section { margin-bottom: 2rem; }
.section-title {
    font-size: 1.5rem;
    margin-bottom: 1rem;
    padding-bottom: 0.5rem;
    border-bottom: 2px solid var(--border-color);
}

.metrics-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
}

.metric-card {
    background: var(--card-background);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 1.5rem;
}

.metric-card h3 {
    font-size: 0.875rem;
    color: #64748b;
    margin-bottom: 0.5rem;
    text-transform: uppercase;
}

.metric-value {
    font-size: 2rem;
    font-weight: bold;
    margin-bottom: 0.5rem;
}

.metric-bar {
    height: 8px;
    background: #e2e8f0;
    border-radius: 4px;
    overflow: hidden;
}

.metric-bar-fill { height: 100%; border-radius: 4px; }
.bar-good { background: #10b981; }
.bar-moderate { background: #f59e0b; }
.bar-poor { background: #ef4444; }

.severity-summary {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}

.severity-item {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 8px;
    background: #f8fafc;
    border: 1px solid var(--border-color);
}

.severity-count { font-weight: bold; font-size: 1.25rem; }

.comments-list { display: flex; flex-direction: column; gap: 1rem; }

.comment-card {
    border: 1px solid var(--border-color);
    border-radius: 8px;
    overflow: hidden;
}

.comment-header {
    padding: 1rem;
    background: #f8fafc;
    display: flex;
    align-items: center;
    gap: 1rem;
    flex-wrap: wrap;
}

.severity-badge {
    padding: 0.25rem 0.75rem;
    border-radius: 6px;
    font-size: 0.875rem;
    font-weight: 600;
    color: white;
    white-space: nowrap;
}

.severity-critical { background: #dc2626; }
.severity-high { background: #ea580c; }
.severity-medium { background: #ca8a04; }
.severity-low { background: #2563eb; }

.comment-title { flex: 1; font-weight: 600; }

.category-badge {
    background: #e0e7ff;
    color: #4f46e5;
    padding: 0.25rem 0.75rem;
    border-radius: 6px;
    font-size: 0.875rem;
}

.comment-body { padding: 1rem; }

.section-reference {
    color: #64748b;
    font-size: 0.875rem;
    margin-bottom: 1rem;
}

.recommendation {
    padding: 1rem;
    background: #ecfdf5;
    border-left: 4px solid #10b981;
    border-radius: 4px;
}

.recommendation-label { font-weight: 600; color: #059669; margin-bottom: 0.5rem; }
.recommendation-text { color: #065f46; }

.notes-list { padding-left: 1.5rem; color: #64748b; }

.footer {
    text-align: center;
    padding: 2rem;
    color: #64748b;
    border-top: 1px solid var(--border-color);
}

@media (max-width: 768px) {
    body { padding: 1rem; }
    .header { padding: 2rem 1rem; }
    .header h1 { font-size: 1.75rem; }
    .score-badge { width: 80px; height: 80px; line-height: 80px; font-size: 2rem; }
}

@media print {
    body { padding: 0; background: white; }
    .container { box-shadow: none; }
    .comment-card { page-break-inside: avoid; }
}
"#;
