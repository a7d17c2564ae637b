//! Category evaluator
//!
//! Counts how many *distinct* patterns of a rule category match the artifact
//! at least once, and emits a single under-coverage comment when the count
//! falls short of the rule's minimum. Silence signals adequacy.

use super::{ArtifactView, Evaluator, EvaluatorOutcome};
use crate::catalog::CategoryRule;
use crate::models::{deterministic_comment_id, CategoryCoverage, ReviewComment};
use tracing::debug;

/// How many unmatched pattern sources to name in the recommendation.
const MAX_LISTED_INDICATORS: usize = 3;

pub struct CategoryEvaluator<'a> {
    rule: &'a CategoryRule,
}

impl<'a> CategoryEvaluator<'a> {
    pub fn new(rule: &'a CategoryRule) -> Self {
        Self { rule }
    }
}

impl Evaluator for CategoryEvaluator<'_> {
    fn name(&self) -> &str {
        &self.rule.category
    }

    fn evaluate(&self, view: &ArtifactView<'_>) -> EvaluatorOutcome {
        // A rule may scope its search to one section; a section the detector
        // did not find falls back to the whole document.
        let scoped;
        let (text, text_lower) = match self
            .rule
            .scope
            .as_deref()
            .and_then(|name| view.sections.get(name))
        {
            Some(section) => {
                scoped = section.to_lowercase();
                (section.as_str(), scoped.as_str())
            }
            None => (view.text, view.text_lower.as_str()),
        };

        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for pattern in &self.rule.patterns {
            if pattern.is_match(text, text_lower) {
                matched.push(pattern);
            } else {
                unmatched.push(pattern);
            }
        }

        let required = self.rule.minimum_coverage as usize;
        let ratio = if required == 0 {
            1.0
        } else {
            matched.len().min(required) as f64 / required as f64
        };
        debug!(
            category = %self.rule.category,
            matched = matched.len(),
            required,
            "category coverage"
        );

        let mut comments = Vec::new();
        if required > 0 && matched.len() < required {
            let message = format!(
                "Insufficient {} coverage: found {} of required {} indicators",
                self.rule.category,
                matched.len(),
                required
            );
            let missing: Vec<&str> = unmatched
                .iter()
                .take(MAX_LISTED_INDICATORS)
                .map(|p| p.source())
                .collect();
            let recommendation = if missing.is_empty() {
                None
            } else {
                Some(format!(
                    "Address missing indicators such as: {}",
                    missing.join(", ")
                ))
            };
            comments.push(ReviewComment {
                id: deterministic_comment_id(
                    &self.rule.category,
                    self.rule.scope.as_deref().unwrap_or(""),
                    &message,
                ),
                category: self.rule.category.clone(),
                severity: self.rule.severity,
                message,
                recommendation,
                matched_count: matched.len(),
                required_count: required,
                section_reference: self.rule.scope.clone(),
            });
        }

        EvaluatorOutcome {
            coverage: Some(CategoryCoverage {
                category: self.rule.category.clone(),
                weight: self.rule.weight,
                matched_count: matched.len(),
                required_count: required,
                ratio,
            }),
            comments,
        }
    }
}
