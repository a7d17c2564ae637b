//! Architecture-pattern evaluator
//!
//! When a document names a known architecture pattern (microservices,
//! layered, event-driven, ...), verify the pattern's best practices are
//! mentioned and flag the ones that are not. These comments join the
//! severity breakdown and preparation notes; the weighted score picks them
//! up only through an `architecture_patterns` category rule, if configured.

use super::{ArtifactView, Evaluator, EvaluatorOutcome};
use crate::catalog::PatternDescriptor;
use crate::models::{deterministic_comment_id, ReviewComment, Severity};
use tracing::debug;

pub const CATEGORY: &str = "architecture_patterns";

/// How many missing practices to surface in one recommendation.
const MAX_LISTED_PRACTICES: usize = 2;

pub struct ArchPatternEvaluator<'a> {
    descriptors: &'a [PatternDescriptor],
}

impl<'a> ArchPatternEvaluator<'a> {
    pub fn new(descriptors: &'a [PatternDescriptor]) -> Self {
        Self { descriptors }
    }
}

/// Pattern names use snake_case; documents write "event-driven" or
/// "event driven" just as often.
fn name_mentioned(text_lower: &str, name: &str) -> bool {
    let spaced = name.replace('_', " ");
    let dashed = name.replace('_', "-");
    text_lower.contains(name) || text_lower.contains(&spaced) || text_lower.contains(&dashed)
}

/// A practice counts as mentioned when any of its first few significant
/// words appears in the document.
fn practice_mentioned(text_lower: &str, practice: &str) -> bool {
    practice
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.len() > 3)
        .take(3)
        .any(|word| text_lower.contains(word))
}

impl Evaluator for ArchPatternEvaluator<'_> {
    fn name(&self) -> &str {
        CATEGORY
    }

    fn evaluate(&self, view: &ArtifactView<'_>) -> EvaluatorOutcome {
        let mut comments = Vec::new();

        for descriptor in self.descriptors {
            if !name_mentioned(&view.text_lower, &descriptor.name) {
                continue;
            }
            debug!(pattern = %descriptor.name, "architecture pattern detected");

            let missing: Vec<&String> = descriptor
                .best_practices
                .iter()
                .filter(|p| !practice_mentioned(&view.text_lower, p))
                .collect();
            if missing.is_empty() {
                continue;
            }

            let total = descriptor.best_practices.len();
            let message = format!(
                "Pattern '{}' is used without documented best practices",
                descriptor.name
            );
            let listed: Vec<&str> = missing
                .iter()
                .take(MAX_LISTED_PRACTICES)
                .map(|p| p.as_str())
                .collect();
            comments.push(ReviewComment {
                id: deterministic_comment_id(CATEGORY, &descriptor.name, &message),
                category: CATEGORY.to_string(),
                severity: Severity::Medium,
                message,
                recommendation: Some(format!("Consider: {}", listed.join("; "))),
                matched_count: total - missing.len(),
                required_count: total,
                section_reference: None,
            });
        }

        EvaluatorOutcome {
            coverage: None,
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use std::collections::BTreeMap;

    fn view(text: &str) -> ArtifactView<'_> {
        ArtifactView::new(text, BTreeMap::new())
    }

    #[test]
    fn test_undetected_pattern_is_silent() {
        let catalog = default_catalog();
        let outcome = ArchPatternEvaluator::new(&catalog.architecture_patterns)
            .evaluate(&view("A simple monolith with a relational database."));
        assert!(outcome.comments.is_empty());
        assert!(outcome.coverage.is_none());
    }

    #[test]
    fn test_pattern_without_practices_is_flagged() {
        let catalog = default_catalog();
        let outcome = ArchPatternEvaluator::new(&catalog.architecture_patterns)
            .evaluate(&view("We will adopt microservices for the order domain."));
        assert_eq!(outcome.comments.len(), 1);
        let comment = &outcome.comments[0];
        assert_eq!(comment.category, CATEGORY);
        assert_eq!(comment.severity, Severity::Medium);
        assert!(comment.message.contains("microservices"));
    }

    #[test]
    fn test_pattern_with_practices_documented_is_quiet() {
        let catalog = default_catalog();
        let text = "Microservices: each service has a single responsibility, \
                    services communicate via well-defined APIs, and circuit \
                    breakers provide resilience.";
        let outcome =
            ArchPatternEvaluator::new(&catalog.architecture_patterns).evaluate(&view(text));
        assert!(outcome.comments.is_empty());
    }

    #[test]
    fn test_dashed_pattern_name_detected() {
        let catalog = default_catalog();
        let outcome = ArchPatternEvaluator::new(&catalog.architecture_patterns)
            .evaluate(&view("An event-driven integration backbone."));
        assert_eq!(outcome.comments.len(), 1);
        assert!(outcome.comments[0].message.contains("event_driven"));
    }
}
