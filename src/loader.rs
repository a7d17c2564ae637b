//! Document loader
//!
//! Reads a plain-text or Markdown document into an `Artifact`: normalized
//! text, best-effort section map, informational metadata, and an artifact
//! type auto-detected from the file name then the content. Binary formats
//! (Word, PDF, spreadsheets) are a separate extraction concern and are not
//! handled here.

use crate::models::{Artifact, ArtifactType};
use crate::sections;
use anyhow::{Context, Result};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Load an artifact from `path`. `forced_type` overrides auto-detection.
pub fn load_artifact(path: &Path, forced_type: Option<ArtifactType>) -> Result<Artifact> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading artifact {}", path.display()))?;
    let text = raw.replace("\r\n", "\n");

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let artifact_type =
        forced_type.unwrap_or_else(|| detect_artifact_type(&text, &file_name));
    let detected = sections::detect_sections(&text);

    let mut metadata = BTreeMap::new();
    metadata.insert("file_name".to_string(), json!(file_name));
    metadata.insert("source_format".to_string(), json!(source_format(path)));
    metadata.insert(
        "word_count".to_string(),
        json!(text.split_whitespace().count()),
    );
    metadata.insert("line_count".to_string(), json!(text.lines().count()));
    metadata.insert("section_count".to_string(), json!(detected.len()));

    info!(
        file = %path.display(),
        artifact_type = %artifact_type,
        sections = detected.len(),
        "loaded artifact"
    );

    Ok(Artifact {
        text,
        sections: detected,
        metadata,
        artifact_type,
    })
}

fn source_format(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "md" | "markdown" => "markdown",
        _ => "text",
    }
}

/// Infer the artifact type from the file name first, then content keywords;
/// a generic design document is the fallback.
pub fn detect_artifact_type(content: &str, file_name: &str) -> ArtifactType {
    let name = file_name.to_lowercase();
    if name.contains("solution") || name.contains("architecture") {
        return ArtifactType::SolutionArchitecture;
    }
    if name.contains("pattern") || name.contains("template") {
        return ArtifactType::ArchitecturePattern;
    }
    if name.contains("standard") || name.contains("guideline") {
        return ArtifactType::ArchitectureStandard;
    }
    if name.contains("spec") {
        return ArtifactType::TechnicalSpecification;
    }

    let content = content.to_lowercase();
    if content.contains("solution architecture") || content.contains("system design") {
        return ArtifactType::SolutionArchitecture;
    }
    ArtifactType::DesignDocument
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_type_from_file_name() {
        assert_eq!(
            detect_artifact_type("", "payments-solution-architecture.md"),
            ArtifactType::SolutionArchitecture
        );
        assert_eq!(
            detect_artifact_type("", "caching_pattern.md"),
            ArtifactType::ArchitecturePattern
        );
        assert_eq!(
            detect_artifact_type("", "api-standards.md"),
            ArtifactType::ArchitectureStandard
        );
        assert_eq!(
            detect_artifact_type("", "billing-spec.md"),
            ArtifactType::TechnicalSpecification
        );
    }

    #[test]
    fn test_detect_type_from_content_then_fallback() {
        assert_eq!(
            detect_artifact_type("This solution architecture covers...", "notes.md"),
            ArtifactType::SolutionArchitecture
        );
        assert_eq!(
            detect_artifact_type("Some meeting notes.", "notes.md"),
            ArtifactType::DesignDocument
        );
    }

    #[test]
    fn test_load_artifact_builds_metadata_and_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("review-notes.md");
        std::fs::write(
            &path,
            "# Security Considerations\r\nTLS for all traffic between services.\r\n",
        )
        .unwrap();

        let artifact = load_artifact(&path, None).unwrap();
        assert!(!artifact.text.contains('\r'));
        assert!(artifact.sections.contains_key("security_considerations"));
        assert_eq!(artifact.metadata["source_format"], "markdown");
        assert_eq!(artifact.artifact_type, ArtifactType::DesignDocument);
        assert!(artifact.metadata["word_count"].as_u64().unwrap() > 5);
    }

    #[test]
    fn test_forced_type_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("whatever.txt");
        std::fs::write(&path, "content").unwrap();
        let artifact =
            load_artifact(&path, Some(ArtifactType::ArchitectureStandard)).unwrap();
        assert_eq!(artifact.artifact_type, ArtifactType::ArchitectureStandard);
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(load_artifact(Path::new("/nonexistent/doc.md"), None).is_err());
    }
}
