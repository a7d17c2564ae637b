//! Review orchestrator
//!
//! Sequences a full review pass: boundary validation, one section-detection
//! run, every applicable evaluator, score aggregation, and report assembly.
//! The pass is a pure function of (artifact, catalog); re-running it on
//! unchanged inputs produces an equal report.

use crate::catalog::{CategoryRule, RuleCatalog};
use crate::evaluators::{
    ArchPatternEvaluator, ArtifactView, CategoryEvaluator, CompletenessEvaluator, Evaluator,
    ARCH_PATTERNS_CATEGORY,
};
use crate::models::{
    Artifact, ReviewComment, ReviewReport, ScoreBand, Severity, SeverityBreakdown,
};
use crate::{scoring, sections};
use thiserror::Error;
use tracing::{debug, info};

/// The only two failure modes of the core. Everything else (missing
/// sections, zero matches) is an expected data state that produces
/// comments, never errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("invalid artifact: {0}")]
    InvalidArtifact(String),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// How many categories the focus note lists.
const MAX_FOCUS_CATEGORIES: usize = 4;

/// Run a full review of `artifact` against `catalog`.
pub fn review(artifact: &Artifact, catalog: &RuleCatalog) -> Result<ReviewReport, ReviewError> {
    if artifact.text.trim().is_empty() {
        return Err(ReviewError::InvalidArtifact(
            "document text is empty".into(),
        ));
    }
    catalog.validate()?;

    // One section-detection run per review; loader-supplied sections
    // overlay the detector's output.
    let mut section_map = sections::detect_sections(&artifact.text);
    for (name, body) in &artifact.sections {
        section_map.insert(name.clone(), body.clone());
    }
    let view = ArtifactView::new(&artifact.text, section_map);

    let applicable: Vec<&CategoryRule> = catalog
        .rules
        .iter()
        .filter(|r| r.applies_to_type(artifact.artifact_type))
        .collect();
    debug!(
        rules = applicable.len(),
        artifact_type = %artifact.artifact_type,
        "running evaluators"
    );

    let mut coverage = Vec::new();
    // Comments keyed by catalog category order for final sorting.
    let mut keyed: Vec<(usize, ReviewComment)> = Vec::new();
    for (idx, rule) in applicable.iter().enumerate() {
        let completeness;
        let category;
        let evaluator: &dyn Evaluator = if rule.is_completeness() {
            completeness = CompletenessEvaluator::new(rule);
            &completeness
        } else {
            category = CategoryEvaluator::new(rule);
            &category
        };
        debug!(evaluator = evaluator.name(), "running evaluator");
        let outcome = evaluator.evaluate(&view);
        if let Some(c) = outcome.coverage {
            coverage.push(c);
        }
        keyed.extend(outcome.comments.into_iter().map(|c| (idx, c)));
    }

    let pattern_eval = ArchPatternEvaluator::new(&catalog.architecture_patterns);
    debug!(evaluator = pattern_eval.name(), "running evaluator");
    let pattern_outcome = pattern_eval.evaluate(&view);
    let pattern_key = applicable
        .iter()
        .position(|r| r.category == ARCH_PATTERNS_CATEGORY)
        .unwrap_or(applicable.len());
    keyed.extend(pattern_outcome.comments.into_iter().map(|c| (pattern_key, c)));

    // Category order, then severity (highest first) within a category;
    // stable sort preserves pattern/section listing order beyond that.
    keyed.sort_by(|(ka, a), (kb, b)| ka.cmp(kb).then(b.severity.cmp(&a.severity)));
    let comments: Vec<ReviewComment> = keyed.into_iter().map(|(_, c)| c).collect();

    let overall_score = scoring::overall_score(&coverage);
    let severity_breakdown = SeverityBreakdown::from_comments(&comments);
    let preparation_notes = preparation_notes(&comments);
    info!(
        score = overall_score,
        comments = comments.len(),
        "review complete"
    );

    Ok(ReviewReport {
        artifact_type: artifact.artifact_type,
        overall_score,
        band: ScoreBand::from_score(overall_score),
        coverage,
        comments,
        severity_breakdown,
        preparation_notes,
    })
}

/// Advisory notes priming a human reviewer's agenda: the categories with
/// unresolved comments, highest severity first.
fn preparation_notes(comments: &[ReviewComment]) -> Vec<String> {
    if comments.is_empty() {
        return vec!["No outstanding findings; the document is ready for review.".into()];
    }

    // Max severity per category, in first-appearance order.
    let mut categories: Vec<(&str, Severity)> = Vec::new();
    for comment in comments {
        match categories.iter_mut().find(|(c, _)| *c == comment.category) {
            Some(entry) => entry.1 = entry.1.max(comment.severity),
            None => categories.push((comment.category.as_str(), comment.severity)),
        }
    }
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    let focus: Vec<String> = categories
        .iter()
        .take(MAX_FOCUS_CATEGORIES)
        .map(|(category, severity)| format!("{category} ({severity})"))
        .collect();

    let mut notes = vec![format!("Focus on: {}", focus.join(", "))];
    if comments.iter().any(|c| c.severity == Severity::Critical) {
        notes.push("Resolve critical findings before scheduling the review.".into());
    }
    notes
}
