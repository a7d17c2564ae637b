//! Built-in default rules and architecture-pattern descriptors.
//!
//! These mirror the review vocabulary an enterprise architecture team starts
//! from; rule files loaded from disk override them per category.

use super::{CategoryRule, PatternDescriptor, PatternSpec, RuleCatalog};
use crate::models::Severity;

/// Canonical sections a complete solution architecture must fill in.
pub const DEFAULT_REQUIRED_SECTIONS: &[&str] = &[
    "executive_summary",
    "business_requirements",
    "technical_requirements",
    "architecture_overview",
    "component_design",
    "security_considerations",
    "performance_requirements",
    "scalability_design",
    "deployment_architecture",
    "monitoring_logging",
    "disaster_recovery",
    "cost_analysis",
];

fn keywords(terms: &[&str]) -> Vec<PatternSpec> {
    terms.iter().map(|t| PatternSpec::keyword(*t)).collect()
}

fn regex(source: &str) -> PatternSpec {
    // Built-in patterns are static literals; a failure here is a programming
    // error, not a runtime condition.
    PatternSpec::regex(source).expect("valid built-in pattern")
}

/// The built-in rule catalog.
pub fn default_catalog() -> RuleCatalog {
    let mut security = keywords(&[
        "authentication",
        "authorization",
        "encryption",
        "ssl/tls",
        "oauth",
        "jwt",
        "firewall",
        "vpc",
    ]);
    security.push(regex(r"api\s*key"));
    security.push(regex(r"security\s*group"));

    let mut scalability = keywords(&["caching", "cdn", "microservices"]);
    scalability.insert(0, regex(r"load\s*balanc\w*"));
    scalability.insert(1, regex(r"auto\s*scaling"));
    scalability.insert(2, regex(r"(horizontal|vertical)\s*scaling"));
    scalability.push(regex(r"database\s*sharding"));

    let monitoring = keywords(&[
        "monitoring",
        "logging",
        "alerting",
        "metrics",
        "dashboard",
        "observability",
    ]);

    let mut compliance = keywords(&["gdpr", "hipaa", "sox", "compliance", "audit"]);
    compliance.push(regex(r"pci\s*dss"));
    compliance.push(regex(r"data\s*retention"));

    let rules = vec![
        CategoryRule {
            category: "completeness".into(),
            severity: Severity::High,
            minimum_coverage: 0,
            weight: 25.0,
            required_sections: DEFAULT_REQUIRED_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            ..Default::default()
        },
        CategoryRule {
            category: "security".into(),
            patterns: security,
            severity: Severity::Critical,
            minimum_coverage: 3,
            weight: 30.0,
            ..Default::default()
        },
        CategoryRule {
            category: "scalability".into(),
            patterns: scalability,
            severity: Severity::High,
            minimum_coverage: 2,
            weight: 15.0,
            ..Default::default()
        },
        CategoryRule {
            category: "monitoring".into(),
            patterns: monitoring,
            severity: Severity::Medium,
            minimum_coverage: 2,
            weight: 15.0,
            ..Default::default()
        },
        CategoryRule {
            category: "compliance".into(),
            patterns: compliance,
            severity: Severity::High,
            minimum_coverage: 1,
            weight: 15.0,
            ..Default::default()
        },
    ];

    let architecture_patterns = vec![
        PatternDescriptor {
            name: "microservices".into(),
            description: "Microservices architecture pattern".into(),
            characteristics: vec![
                "service independence".into(),
                "api gateway".into(),
                "service discovery".into(),
            ],
            best_practices: vec![
                "Each service should have a single responsibility".into(),
                "Services should communicate via well-defined APIs".into(),
                "Implement circuit breakers for resilience".into(),
            ],
        },
        PatternDescriptor {
            name: "layered".into(),
            description: "Layered (N-tier) architecture pattern".into(),
            characteristics: vec![
                "presentation layer".into(),
                "business layer".into(),
                "data layer".into(),
            ],
            best_practices: vec![
                "Clear separation of concerns".into(),
                "Dependencies should flow downward".into(),
                "Avoid circular dependencies".into(),
            ],
        },
        PatternDescriptor {
            name: "event_driven".into(),
            description: "Event-driven architecture pattern".into(),
            characteristics: vec![
                "event producers".into(),
                "event consumers".into(),
                "event store".into(),
            ],
            best_practices: vec![
                "Design events to be immutable".into(),
                "Implement idempotent event handlers".into(),
                "Consider event versioning strategy".into(),
            ],
        },
    ];

    RuleCatalog {
        rules,
        architecture_patterns,
    }
}
