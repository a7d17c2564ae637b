//! Rule-file loading
//!
//! Loads category rules and architecture-pattern descriptors from a rules
//! directory and merges them over the built-in defaults. Supported files:
//!
//! - `review_rules.json` / `review_rules.yaml` — map of category name to rule
//! - `architecture_patterns.json` / `.yaml` — map of pattern name to descriptor
//!
//! A file entry replaces the default rule for the same category wholesale.
//! Malformed regexes and negative thresholds fail here, before the catalog
//! reaches the review core.
//!
//! # Rule file format
//!
//! ```json
//! {
//!   "security": {
//!     "patterns": ["oauth", "jwt", { "regex": "api\\s*key" }],
//!     "severity": "critical",
//!     "minimum_coverage": 4,
//!     "weight": 30,
//!     "applies_to": ["solution_architecture"]
//!   },
//!   "completeness": {
//!     "severity": "high",
//!     "weight": 25,
//!     "required_sections": ["security_considerations", "disaster_recovery"]
//!   }
//! }
//! ```

use super::{CategoryRule, PatternDescriptor, PatternSpec, RuleCatalog};
use crate::models::{ArtifactType, Severity};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPattern {
    Keyword(String),
    Regex { regex: String },
}

fn default_weight() -> f64 {
    10.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRule {
    #[serde(default)]
    patterns: Vec<RawPattern>,
    severity: Severity,
    #[serde(default)]
    minimum_coverage: u32,
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default)]
    required_sections: Vec<String>,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    applies_to: Option<Vec<ArtifactType>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDescriptor {
    #[serde(default)]
    description: String,
    #[serde(default)]
    characteristics: Vec<String>,
    #[serde(default)]
    best_practices: Vec<String>,
}

fn compile_rule(category: &str, raw: RawRule) -> Result<CategoryRule> {
    let mut patterns = Vec::with_capacity(raw.patterns.len());
    for p in raw.patterns {
        match p {
            RawPattern::Keyword(term) => patterns.push(PatternSpec::keyword(term)),
            RawPattern::Regex { regex } => patterns.push(
                PatternSpec::regex(&regex)
                    .with_context(|| format!("bad regex in category '{category}': {regex}"))?,
            ),
        }
    }
    Ok(CategoryRule {
        category: category.to_string(),
        patterns,
        severity: raw.severity,
        minimum_coverage: raw.minimum_coverage,
        weight: raw.weight,
        required_sections: raw.required_sections,
        scope: raw.scope,
        applies_to: raw.applies_to,
    })
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading rule file {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();
    match ext.as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display())),
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display())),
        other => bail!("unsupported rule file format '{other}'"),
    }
}

/// Replace a default rule in place (keeping its catalog position) or append.
fn merge_rule(catalog: &mut RuleCatalog, rule: CategoryRule) {
    match catalog
        .rules
        .iter_mut()
        .find(|r| r.category == rule.category)
    {
        Some(existing) => *existing = rule,
        None => catalog.rules.push(rule),
    }
}

fn merge_descriptor(catalog: &mut RuleCatalog, descriptor: PatternDescriptor) {
    match catalog
        .architecture_patterns
        .iter_mut()
        .find(|d| d.name == descriptor.name)
    {
        Some(existing) => *existing = descriptor,
        None => catalog.architecture_patterns.push(descriptor),
    }
}

/// Load the effective catalog: built-in defaults overridden by any rule
/// files found in `dir`. A missing directory yields the defaults.
pub fn load_rules_dir(dir: &Path) -> Result<RuleCatalog> {
    let mut catalog = super::default_catalog();

    if !dir.is_dir() {
        debug!(dir = %dir.display(), "no rules directory, using built-in defaults");
        return Ok(catalog);
    }

    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("reading rules directory {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    // Deterministic load order regardless of directory iteration order.
    paths.sort();

    for path in paths {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
            continue;
        }
        match stem {
            "review_rules" => {
                let raw: BTreeMap<String, RawRule> = parse_file(&path)?;
                for (category, rule) in raw {
                    merge_rule(&mut catalog, compile_rule(&category, rule)?);
                }
                info!(file = %path.display(), "loaded review rules");
            }
            "architecture_patterns" => {
                let raw: BTreeMap<String, RawDescriptor> = parse_file(&path)?;
                for (name, d) in raw {
                    merge_descriptor(
                        &mut catalog,
                        PatternDescriptor {
                            name,
                            description: d.description,
                            characteristics: d.characteristics,
                            best_practices: d.best_practices,
                        },
                    );
                }
                info!(file = %path.display(), "loaded architecture patterns");
            }
            _ => {
                warn!(file = %path.display(), "ignoring unrecognized rule file");
            }
        }
    }

    catalog
        .validate()
        .map_err(|e| anyhow::anyhow!(e).context("loaded rule catalog failed validation"))?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        std::fs::write(dir.path().join(name), content).expect("write rule file");
    }

    #[test]
    fn test_missing_dir_gives_defaults() {
        let catalog = load_rules_dir(Path::new("/nonexistent/rules")).unwrap();
        assert!(catalog.rule("security").is_some());
    }

    #[test]
    fn test_json_rules_override_defaults() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "review_rules.json",
            r#"{
                "security": {
                    "patterns": ["oauth", {"regex": "api\\s*key"}],
                    "severity": "critical",
                    "minimum_coverage": 2,
                    "weight": 40
                }
            }"#,
        );
        let catalog = load_rules_dir(dir.path()).unwrap();
        let rule = catalog.rule("security").unwrap();
        assert_eq!(rule.minimum_coverage, 2);
        assert_eq!(rule.weight, 40.0);
        assert_eq!(rule.patterns.len(), 2);
        // Replaced in place: security keeps its default catalog position.
        assert_eq!(catalog.rules[1].category, "security");
    }

    #[test]
    fn test_yaml_rules_add_new_category() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "review_rules.yaml",
            "resilience:\n  patterns:\n    - circuit breaker\n    - retry\n  severity: high\n  minimum_coverage: 1\n  weight: 12\n",
        );
        let catalog = load_rules_dir(dir.path()).unwrap();
        let rule = catalog.rule("resilience").unwrap();
        assert_eq!(rule.severity, Severity::High);
        assert_eq!(catalog.rules.last().unwrap().category, "resilience");
    }

    #[test]
    fn test_bad_regex_fails_at_load() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "review_rules.json",
            r#"{"security": {"patterns": [{"regex": "("}], "severity": "critical"}}"#,
        );
        assert!(load_rules_dir(dir.path()).is_err());
    }

    #[test]
    fn test_negative_coverage_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "review_rules.json",
            r#"{"security": {"severity": "critical", "minimum_coverage": -1}}"#,
        );
        assert!(load_rules_dir(dir.path()).is_err());
    }

    #[test]
    fn test_custom_architecture_pattern() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "architecture_patterns.json",
            r#"{
                "cqrs": {
                    "description": "Command query responsibility segregation",
                    "best_practices": ["Separate read and write models"]
                }
            }"#,
        );
        let catalog = load_rules_dir(dir.path()).unwrap();
        assert!(catalog
            .architecture_patterns
            .iter()
            .any(|d| d.name == "cqrs"));
    }
}
