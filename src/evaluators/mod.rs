//! Evaluators
//!
//! Each evaluator inspects one aspect of an artifact and emits review
//! comments plus, where a category rule drives it, a coverage sample for
//! the score aggregator:
//! - `CategoryEvaluator` — distinct-pattern coverage per rule category
//! - `CompletenessEvaluator` — required-section presence
//! - `ArchPatternEvaluator` — best practices for detected architecture patterns

mod category;
mod completeness;
mod patterns;

pub use category::CategoryEvaluator;
pub use completeness::CompletenessEvaluator;
pub use patterns::{ArchPatternEvaluator, CATEGORY as ARCH_PATTERNS_CATEGORY};

use crate::models::{CategoryCoverage, ReviewComment};
use std::collections::BTreeMap;

/// Read-only view of an artifact prepared once per review pass.
///
/// `sections` is the detector output overlaid with any loader-supplied
/// entries; `text_lower` is precomputed so keyword matching never
/// re-lowercases the whole document.
#[derive(Debug)]
pub struct ArtifactView<'a> {
    pub text: &'a str,
    pub text_lower: String,
    pub sections: BTreeMap<String, String>,
}

impl<'a> ArtifactView<'a> {
    pub fn new(text: &'a str, sections: BTreeMap<String, String>) -> Self {
        Self {
            text,
            text_lower: text.to_lowercase(),
            sections,
        }
    }
}

/// Result of running one evaluator over an artifact view.
#[derive(Debug, Default)]
pub struct EvaluatorOutcome {
    /// Present for rule-driven evaluators; feeds the score aggregator.
    pub coverage: Option<CategoryCoverage>,
    pub comments: Vec<ReviewComment>,
}

/// A single review check. Evaluators are pure: they read the view and their
/// own rule, and write only their outcome.
pub trait Evaluator {
    /// Category name the outcome is attributed to.
    fn name(&self) -> &str;

    fn evaluate(&self, view: &ArtifactView<'_>) -> EvaluatorOutcome;
}
