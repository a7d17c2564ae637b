//! Section detector
//!
//! Maps a document's text into named sections by matching heading lines
//! against a vocabulary of canonical-name synonyms. Recognized heading
//! markers: markdown `#` prefixes, numbered headings ("2.1 Deployment"),
//! and short all-caps lines. A section's body runs from the line after its
//! heading up to the next heading at the same or a higher level. Duplicate
//! canonical headings are resolved last-occurrence-wins.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// Canonical section names and the heading phrases that map to them.
/// Phrases are matched case-insensitively on whole-word boundaries; when
/// several match, the longest phrase wins.
const SECTION_SYNONYMS: &[(&str, &[&str])] = &[
    ("executive_summary", &["executive summary"]),
    (
        "business_requirements",
        &["business requirements", "business context", "business drivers"],
    ),
    (
        "technical_requirements",
        &[
            "technical requirements",
            "non functional requirements",
            "nonfunctional requirements",
        ],
    ),
    (
        "architecture_overview",
        &[
            "architecture overview",
            "solution overview",
            "system overview",
            "high level architecture",
            "overview",
        ],
    ),
    (
        "component_design",
        &[
            "component design",
            "component architecture",
            "components",
            "detailed design",
        ],
    ),
    (
        "security_considerations",
        &[
            "security considerations",
            "security and compliance",
            "security architecture",
            "security design",
            "security",
        ],
    ),
    (
        "performance_requirements",
        &["performance requirements", "performance"],
    ),
    (
        "scalability_design",
        &["scalability design", "scaling strategy", "scalability"],
    ),
    (
        "deployment_architecture",
        &["deployment architecture", "deployment", "infrastructure"],
    ),
    (
        "monitoring_logging",
        &[
            "monitoring and logging",
            "monitoring and observability",
            "observability",
            "monitoring",
            "logging",
        ],
    ),
    (
        "disaster_recovery",
        &[
            "disaster recovery",
            "business continuity",
            "backup and recovery",
        ],
    ),
    (
        "cost_analysis",
        &["cost analysis", "cost estimate", "cost considerations", "costs"],
    ),
];

static NUMBERED_HEADING: OnceLock<Regex> = OnceLock::new();

fn numbered_heading() -> &'static Regex {
    NUMBERED_HEADING
        .get_or_init(|| Regex::new(r"^(\d+(?:\.\d+)*)[.)]?\s+\S").unwrap())
}

/// Heading nesting level of a line, if the line looks like a heading.
fn heading_level(line: &str) -> Option<usize> {
    let trimmed = line.trim_end();

    // Markdown: one to six '#' followed by a space
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if (1..=6).contains(&hashes) && trimmed[hashes..].starts_with(' ') {
        return Some(hashes);
    }

    // Numbered: "3. Security" or "2.1 Deployment Architecture". The number
    // group is ASCII, so slicing at its end never splits a character.
    if let Some(caps) = numbered_heading().captures(trimmed) {
        let rest = trimmed[caps[1].len()..]
            .trim_start_matches(['.', ')'])
            .trim();
        if rest.len() <= 60 && !rest.ends_with('.') {
            let depth = caps[1].matches('.').count() + 1;
            return Some(depth);
        }
    }

    // All-caps short line: "SECURITY CONSIDERATIONS"
    let t = trimmed.trim_start();
    let alpha = t.chars().filter(|c| c.is_alphabetic()).count();
    if (3..=60).contains(&t.len())
        && alpha >= 3
        && !t.chars().any(|c| c.is_lowercase())
        && !t.ends_with('.')
    {
        return Some(1);
    }

    None
}

/// Lowercase a heading line and strip markers and punctuation so it can be
/// compared against the synonym vocabulary.
fn normalize_heading(line: &str) -> String {
    let stripped = line
        .trim()
        .trim_start_matches('#')
        .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ')')
        .trim()
        .trim_end_matches([':', '.'])
        .to_lowercase();
    let replaced = stripped.replace('&', " and ").replace(['_', '-'], " ");
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `phrase` appears in `heading` as a run of whole words.
fn contains_phrase(heading: &str, phrase: &str) -> bool {
    let words: Vec<&str> = heading.split(' ').collect();
    let needle: Vec<&str> = phrase.split(' ').collect();
    if needle.is_empty() || needle.len() > words.len() {
        return false;
    }
    words.windows(needle.len()).any(|w| w == needle.as_slice())
}

/// Canonical name for a normalized heading, if any synonym matches.
fn canonical_for(heading: &str) -> Option<&'static str> {
    let mut best: Option<(&'static str, usize, bool)> = None; // (name, phrase len, exact)
    for (canonical, phrases) in SECTION_SYNONYMS {
        for phrase in *phrases {
            let exact = heading == *phrase;
            if !exact && !contains_phrase(heading, phrase) {
                continue;
            }
            let candidate = (*canonical, phrase.len(), exact);
            best = match best {
                // Exact match beats containment; longer phrase beats shorter.
                Some(current)
                    if (current.2, current.1) >= (candidate.2, candidate.1) =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            };
        }
    }
    best.map(|(name, _, _)| name)
}

#[derive(Debug)]
struct Heading {
    line: usize,
    level: usize,
    canonical: Option<&'static str>,
}

/// Detect canonical sections in `text`.
///
/// Headings that match no canonical name still terminate the preceding
/// section; they just produce no map entry of their own.
pub fn detect_sections(text: &str) -> BTreeMap<String, String> {
    let lines: Vec<&str> = text.lines().collect();
    let headings: Vec<Heading> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            heading_level(line).map(|level| Heading {
                line: i,
                level,
                canonical: canonical_for(&normalize_heading(line)),
            })
        })
        .collect();

    let mut sections = BTreeMap::new();
    for (idx, h) in headings.iter().enumerate() {
        let Some(name) = h.canonical else { continue };
        let end = headings[idx + 1..]
            .iter()
            .find(|n| n.level <= h.level)
            .map(|n| n.line)
            .unwrap_or(lines.len());
        let body = lines[h.line + 1..end].join("\n");
        // Last occurrence of a duplicate heading wins.
        sections.insert(name.to_string(), body);
    }

    debug!(sections = sections.len(), "section detection complete");
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_headings() {
        let text = "# Executive Summary\nThe system does things.\n\n# Security Considerations\nTLS everywhere.\n";
        let sections = detect_sections(text);
        assert_eq!(
            sections.get("executive_summary").unwrap().trim(),
            "The system does things."
        );
        assert_eq!(
            sections.get("security_considerations").unwrap().trim(),
            "TLS everywhere."
        );
    }

    #[test]
    fn test_synonyms_map_to_canonical_name() {
        for heading in ["# Security", "# Security & Compliance", "SECURITY"] {
            let text = format!("{heading}\nDefense in depth.\n");
            let sections = detect_sections(&text);
            assert!(
                sections.contains_key("security_considerations"),
                "{heading} should map to security_considerations"
            );
        }
    }

    #[test]
    fn test_numbered_and_all_caps_headings() {
        let text =
            "1. Overview\nBig picture.\n\n2.1 Deployment Architecture\nKubernetes.\n\nDISASTER RECOVERY\nDaily backups.\n";
        let sections = detect_sections(text);
        assert!(sections.contains_key("architecture_overview"));
        assert!(sections.contains_key("deployment_architecture"));
        assert_eq!(
            sections.get("disaster_recovery").unwrap().trim(),
            "Daily backups."
        );
    }

    #[test]
    fn test_subheadings_stay_in_parent_body() {
        let text = "# Architecture Overview\nIntro.\n## Data Flow\nDetails.\n# Cost Analysis\nCheap.\n";
        let sections = detect_sections(text);
        let overview = sections.get("architecture_overview").unwrap();
        assert!(overview.contains("Intro."));
        assert!(overview.contains("Details."));
        assert!(!overview.contains("Cheap."));
    }

    #[test]
    fn test_duplicate_heading_last_wins() {
        let text = "# Security\nFirst pass.\n# Monitoring\nLogs.\n# Security\nFinal answer.\n";
        let sections = detect_sections(text);
        assert_eq!(
            sections.get("security_considerations").unwrap().trim(),
            "Final answer."
        );
    }

    #[test]
    fn test_unknown_heading_terminates_but_is_absent() {
        let text = "# Security\nTLS.\n# Team Roster\nAlice.\n";
        let sections = detect_sections(text);
        let security = sections.get("security_considerations").unwrap();
        assert!(security.contains("TLS."));
        assert!(!security.contains("Alice."));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_no_headings_no_sections() {
        let sections = detect_sections("just a paragraph of prose with no structure at all");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_numbered_heading_with_multibyte_text() {
        assert_eq!(heading_level("1. Übersicht"), Some(1));
        assert_eq!(heading_level("2.1 Sécurité"), Some(2));
        let text = "# Security\nTLS überall.\n1. Übersicht\nInhalt der Architektur.\n";
        let sections = detect_sections(text);
        let security = sections.get("security_considerations").unwrap();
        assert!(security.contains("überall"));
        assert!(!security.contains("Inhalt"));
    }

    #[test]
    fn test_numbered_list_items_are_not_headings() {
        assert_eq!(heading_level("1. The system shall respond within 200ms."), None);
        assert_eq!(heading_level("3. Security"), Some(1));
        assert_eq!(heading_level("2.1 Deployment"), Some(2));
    }
}
