//! Rule-driven review and scoring engine for architecture documents.
//!
//! The core is a pure, deterministic computation: an immutable [`Artifact`]
//! (normalized text + detected sections + metadata) is reviewed against an
//! immutable [`catalog::RuleCatalog`], producing a [`ReviewReport`] with a
//! 0-100 weighted score and severity-classified comments. Reviewing the
//! same inputs twice yields equal reports.
//!
//! ```no_run
//! use archreview::{catalog, review, Artifact, ArtifactType};
//!
//! let artifact = Artifact::from_text(
//!     "# Security Considerations\nOAuth with JWT over TLS.\n",
//!     ArtifactType::SolutionArchitecture,
//! );
//! let report = review(&artifact, &catalog::default_catalog())?;
//! println!("{}/100 ({})", report.overall_score, report.band.label());
//! # Ok::<(), archreview::ReviewError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod evaluators;
pub mod loader;
pub mod models;
pub mod reporters;
pub mod review;
pub mod scoring;
pub mod sections;

pub use models::{
    Artifact, ArtifactType, CategoryCoverage, ReviewComment, ReviewReport, ScoreBand, Severity,
    SeverityBreakdown,
};
pub use review::{review, ReviewError};
