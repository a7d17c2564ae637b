//! Completeness evaluator
//!
//! Checks that every required section is present with a non-trivial body.
//! A heading with no body (or whitespace only) counts as missing, which
//! guards against templates that list headings without filling them in.

use super::{ArtifactView, Evaluator, EvaluatorOutcome};
use crate::catalog::CategoryRule;
use crate::models::{deterministic_comment_id, CategoryCoverage, ReviewComment};
use tracing::debug;

/// Minimum trimmed body length for a section to count as present.
pub const MIN_SECTION_BODY_LEN: usize = 10;

pub struct CompletenessEvaluator<'a> {
    rule: &'a CategoryRule,
}

impl<'a> CompletenessEvaluator<'a> {
    pub fn new(rule: &'a CategoryRule) -> Self {
        Self { rule }
    }
}

fn is_present(view: &ArtifactView<'_>, name: &str) -> bool {
    view.sections
        .get(name)
        .is_some_and(|body| body.trim().len() >= MIN_SECTION_BODY_LEN)
}

impl Evaluator for CompletenessEvaluator<'_> {
    fn name(&self) -> &str {
        &self.rule.category
    }

    fn evaluate(&self, view: &ArtifactView<'_>) -> EvaluatorOutcome {
        let required = &self.rule.required_sections;
        let missing: Vec<&String> = required
            .iter()
            .filter(|name| !is_present(view, name))
            .collect();
        let present = required.len() - missing.len();
        let ratio = if required.is_empty() {
            1.0
        } else {
            present as f64 / required.len() as f64
        };
        debug!(
            category = %self.rule.category,
            present,
            required = required.len(),
            "completeness coverage"
        );

        let comments = missing
            .iter()
            .map(|name| {
                let message =
                    format!("Required section '{name}' is missing or has no content");
                ReviewComment {
                    id: deterministic_comment_id(&self.rule.category, name, &message),
                    category: self.rule.category.clone(),
                    severity: self.rule.severity,
                    message,
                    recommendation: Some(format!(
                        "Add a '{name}' section covering this aspect of the architecture"
                    )),
                    matched_count: present,
                    required_count: required.len(),
                    section_reference: Some((*name).clone()),
                }
            })
            .collect();

        EvaluatorOutcome {
            coverage: Some(CategoryCoverage {
                category: self.rule.category.clone(),
                weight: self.rule.weight,
                matched_count: present,
                required_count: required.len(),
                ratio,
            }),
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use std::collections::BTreeMap;

    fn rule(sections: &[&str]) -> CategoryRule {
        CategoryRule {
            category: "completeness".into(),
            severity: Severity::High,
            weight: 25.0,
            required_sections: sections.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn view_with(sections: &[(&str, &str)]) -> ArtifactView<'static> {
        let map: BTreeMap<String, String> = sections
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ArtifactView::new("", map)
    }

    #[test]
    fn test_all_present_no_comments() {
        let rule = rule(&["security_considerations"]);
        let view = view_with(&[("security_considerations", "TLS everywhere, always.")]);
        let outcome = CompletenessEvaluator::new(&rule).evaluate(&view);
        assert!(outcome.comments.is_empty());
        assert_eq!(outcome.coverage.unwrap().ratio, 1.0);
    }

    #[test]
    fn test_missing_section_named_in_comment() {
        let rule = rule(&["security_considerations", "disaster_recovery"]);
        let view = view_with(&[("security_considerations", "TLS everywhere, always.")]);
        let outcome = CompletenessEvaluator::new(&rule).evaluate(&view);
        assert_eq!(outcome.comments.len(), 1);
        let comment = &outcome.comments[0];
        assert!(comment.message.contains("disaster_recovery"));
        assert_eq!(comment.section_reference.as_deref(), Some("disaster_recovery"));
        assert_eq!(comment.matched_count, 1);
        assert_eq!(comment.required_count, 2);
        assert_eq!(outcome.coverage.unwrap().ratio, 0.5);
    }

    #[test]
    fn test_whitespace_only_section_is_missing() {
        let rule = rule(&["disaster_recovery"]);
        let view = view_with(&[("disaster_recovery", "   \n\t  \n")]);
        let outcome = CompletenessEvaluator::new(&rule).evaluate(&view);
        assert_eq!(outcome.comments.len(), 1);
        assert_eq!(outcome.coverage.unwrap().ratio, 0.0);
    }

    #[test]
    fn test_trivial_body_is_missing() {
        let rule = rule(&["cost_analysis"]);
        let view = view_with(&[("cost_analysis", "TBD")]);
        let outcome = CompletenessEvaluator::new(&rule).evaluate(&view);
        assert_eq!(outcome.comments.len(), 1);
    }

    #[test]
    fn test_no_required_sections_fully_satisfied() {
        let rule = rule(&[]);
        let outcome = CompletenessEvaluator::new(&rule).evaluate(&view_with(&[]));
        assert!(outcome.comments.is_empty());
        assert_eq!(outcome.coverage.unwrap().ratio, 1.0);
    }
}
