//! Core data models for archreview
//!
//! These models are used throughout the codebase for representing
//! artifacts, review comments, and review reports.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Generate a deterministic comment ID based on content hash.
///
/// Comments with stable IDs can be tracked across runs (fixed vs new vs
/// recurring) and suppressed by ID in rule files. The ID is a 16-character
/// hex string derived from hashing the category, section reference, and
/// message of the comment.
pub fn deterministic_comment_id(category: &str, section: &str, message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(category.as_bytes());
    hasher.update(b"\n");
    hasher.update(section.as_bytes());
    hasher.update(b"\n");
    hasher.update(message.as_bytes());
    let digest = hasher.finalize();
    digest.iter().take(8).map(|b| format!("{b:02x}")).collect()
}

/// Severity levels for review comments
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Kind of architecture document under review.
///
/// Some rule categories apply only to a subset of artifact types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactType {
    SolutionArchitecture,
    ArchitecturePattern,
    ArchitectureStandard,
    DesignDocument,
    TechnicalSpecification,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 5] = [
        ArtifactType::SolutionArchitecture,
        ArtifactType::ArchitecturePattern,
        ArtifactType::ArchitectureStandard,
        ArtifactType::DesignDocument,
        ArtifactType::TechnicalSpecification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::SolutionArchitecture => "solution_architecture",
            ArtifactType::ArchitecturePattern => "architecture_pattern",
            ArtifactType::ArchitectureStandard => "architecture_standard",
            ArtifactType::DesignDocument => "design_document",
            ArtifactType::TechnicalSpecification => "technical_specification",
        }
    }
}

impl std::fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unrecognized artifact type '{s}'"))
    }
}

/// A normalized architecture document under review.
///
/// `text` is the full plain-text content. `sections` is a best-effort map
/// from canonical section name to section body; the orchestrator runs its
/// own section detection and overlays this map on top. `metadata` holds
/// informational facts (word count, source format) that never drive scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub text: String,
    #[serde(default)]
    pub sections: BTreeMap<String, String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub artifact_type: ArtifactType,
}

impl Artifact {
    /// Build an artifact from raw text with no precomputed sections.
    pub fn from_text(text: impl Into<String>, artifact_type: ArtifactType) -> Self {
        Self {
            text: text.into(),
            sections: BTreeMap::new(),
            metadata: BTreeMap::new(),
            artifact_type,
        }
    }
}

/// One review finding.
///
/// Created by an evaluator during a single review pass; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewComment {
    pub id: String,
    pub category: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub matched_count: usize,
    pub required_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_reference: Option<String>,
}

/// Tally of comments by severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl SeverityBreakdown {
    pub fn from_comments(comments: &[ReviewComment]) -> Self {
        let mut breakdown = Self::default();
        for c in comments {
            match c.severity {
                Severity::Critical => breakdown.critical += 1,
                Severity::High => breakdown.high += 1,
                Severity::Medium => breakdown.medium += 1,
                Severity::Low => breakdown.low += 1,
            }
            breakdown.total += 1;
        }
        breakdown
    }
}

/// Human-readable quality band for an overall score.
///
/// Boundaries are inclusive on the lower bound of each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
    RequiresMajorChanges,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => ScoreBand::Excellent,
            s if s >= 75 => ScoreBand::Good,
            s if s >= 60 => ScoreBand::NeedsImprovement,
            _ => ScoreBand::RequiresMajorChanges,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::NeedsImprovement => "needs improvement",
            ScoreBand::RequiresMajorChanges => "requires major changes",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coverage achieved by one category, as fed into the score aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub category: String,
    pub weight: f64,
    pub matched_count: usize,
    pub required_count: usize,
    /// `min(matched, required) / required`, or 1.0 when nothing is required.
    pub ratio: f64,
}

/// Aggregate review result for one artifact.
///
/// A pure projection of Artifact + RuleCatalog: re-running a review on
/// unchanged inputs yields an equal report. Timestamps live only in rendered
/// output, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewReport {
    pub artifact_type: ArtifactType,
    pub overall_score: u32,
    pub band: ScoreBand,
    pub coverage: Vec<CategoryCoverage>,
    pub comments: Vec<ReviewComment>,
    pub severity_breakdown: SeverityBreakdown,
    pub preparation_notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_artifact_type_round_trip() {
        for t in ArtifactType::ALL {
            assert_eq!(t.as_str().parse::<ArtifactType>().unwrap(), t);
        }
        assert!("word_document".parse::<ArtifactType>().is_err());
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(75), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(74), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::RequiresMajorChanges);
    }

    #[test]
    fn test_comment_id_stable() {
        let a = deterministic_comment_id("security", "", "Insufficient coverage");
        let b = deterministic_comment_id("security", "", "Insufficient coverage");
        let c = deterministic_comment_id("security", "", "Different message");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn test_breakdown_counts() {
        let comment = |sev| ReviewComment {
            id: String::new(),
            category: "security".into(),
            severity: sev,
            message: "m".into(),
            recommendation: None,
            matched_count: 0,
            required_count: 1,
            section_reference: None,
        };
        let comments = vec![
            comment(Severity::Critical),
            comment(Severity::High),
            comment(Severity::High),
            comment(Severity::Low),
        ];
        let b = SeverityBreakdown::from_comments(&comments);
        assert_eq!(b.critical, 1);
        assert_eq!(b.high, 2);
        assert_eq!(b.medium, 0);
        assert_eq!(b.low, 1);
        assert_eq!(b.total, 4);
    }
}
