//! Rule catalog for archreview
//!
//! This module handles:
//! - In-memory category rules (patterns, severity, weight, minimum coverage)
//! - Known architecture-pattern descriptors
//! - Built-in defaults and JSON/YAML rule-file loading

mod defaults;
mod loader;

pub use defaults::default_catalog;
pub use loader::load_rules_dir;

use crate::models::{ArtifactType, Severity};
use crate::review::ReviewError;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// One search pattern for a category.
///
/// A keyword matches as a case-insensitive substring; a regex entry is
/// compiled case-insensitive by the rule loader. Malformed regexes never
/// reach the core: they fail at load time.
#[derive(Debug, Clone)]
pub enum PatternSpec {
    Keyword(String),
    Regex(Regex),
}

impl PatternSpec {
    /// Keyword pattern, stored lowercased for case-insensitive matching.
    pub fn keyword(term: impl Into<String>) -> Self {
        PatternSpec::Keyword(term.into().to_lowercase())
    }

    /// Case-insensitive regex pattern.
    pub fn regex(source: &str) -> Result<Self, regex::Error> {
        Ok(PatternSpec::Regex(
            RegexBuilder::new(source).case_insensitive(true).build()?,
        ))
    }

    /// Whether the pattern matches at least once.
    ///
    /// `text_lower` must be the lowercased form of `text`; it is precomputed
    /// once per scope so keyword checks stay cheap.
    pub fn is_match(&self, text: &str, text_lower: &str) -> bool {
        match self {
            PatternSpec::Keyword(term) => text_lower.contains(term.as_str()),
            PatternSpec::Regex(re) => re.is_match(text),
        }
    }

    /// Source text of the pattern, for listing in messages.
    pub fn source(&self) -> &str {
        match self {
            PatternSpec::Keyword(term) => term,
            PatternSpec::Regex(re) => re.as_str(),
        }
    }
}

/// Rule for one review category.
#[derive(Debug, Clone, Default)]
pub struct CategoryRule {
    pub category: String,
    /// Order governs comment listing order, not scoring.
    pub patterns: Vec<PatternSpec>,
    pub severity: Severity,
    /// Minimum distinct pattern matches for adequate coverage. Zero means
    /// the category never produces an under-coverage comment.
    pub minimum_coverage: u32,
    /// Relative contribution to the overall score; the aggregator normalizes.
    pub weight: f64,
    /// Completeness only: canonical section names that must be present.
    pub required_sections: Vec<String>,
    /// Optional canonical section name to scope pattern search to.
    pub scope: Option<String>,
    /// Artifact types this rule applies to; `None` means all.
    pub applies_to: Option<Vec<ArtifactType>>,
}

impl CategoryRule {
    pub fn applies_to_type(&self, artifact_type: ArtifactType) -> bool {
        match &self.applies_to {
            Some(types) => types.contains(&artifact_type),
            None => true,
        }
    }

    /// Rules carrying required sections are evaluated as completeness
    /// checks; their pattern list is ignored.
    pub fn is_completeness(&self) -> bool {
        !self.required_sections.is_empty()
    }
}

/// Descriptor for a known architecture pattern (microservices, layered, ...).
#[derive(Debug, Clone, Default)]
pub struct PatternDescriptor {
    pub name: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub best_practices: Vec<String>,
}

/// The full set of category rules driving one review pass.
///
/// Immutable once handed to the orchestrator; reviews never mutate it.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    /// Category order here fixes comment ordering in the report.
    pub rules: Vec<CategoryRule>,
    pub architecture_patterns: Vec<PatternDescriptor>,
}

impl RuleCatalog {
    pub fn rule(&self, category: &str) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.category == category)
    }

    /// Boundary validation per the orchestrator contract: every category has
    /// a positive finite weight and appears exactly once. Negative minimum
    /// coverage is unrepresentable in the types.
    pub fn validate(&self) -> Result<(), ReviewError> {
        let mut seen = BTreeSet::new();
        for rule in &self.rules {
            if rule.category.trim().is_empty() {
                return Err(ReviewError::InvalidCatalog(
                    "rule with empty category name".into(),
                ));
            }
            if !seen.insert(rule.category.as_str()) {
                return Err(ReviewError::InvalidCatalog(format!(
                    "duplicate category '{}'",
                    rule.category
                )));
            }
            if !(rule.weight > 0.0 && rule.weight.is_finite()) {
                return Err(ReviewError::InvalidCatalog(format!(
                    "category '{}' has non-positive weight {}",
                    rule.category, rule.weight
                )));
            }
        }
        Ok(())
    }
}
