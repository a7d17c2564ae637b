//! Command-line interface
//!
//! Subcommands:
//! - `review` - review a document and render the scored report
//! - `rules` - show the effective rule catalog

use crate::models::ArtifactType;
use crate::reporters::OutputFormat;
use crate::{catalog, loader, reporters, review};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(
    name = "archreview",
    version,
    about = "Rule-driven review of architecture documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Review an architecture document and produce a scored report
    Review {
        /// Path to the document (plain text or Markdown)
        file: PathBuf,
        /// Artifact type (auto-detected when omitted)
        #[arg(long, alias = "type", value_name = "TYPE")]
        artifact_type: Option<String>,
        /// Directory containing review_rules / architecture_patterns files
        #[arg(long, default_value = "rules", env = "ARCHREVIEW_RULES_DIR")]
        rules_dir: PathBuf,
        /// Output format: text, json, markdown, html
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the effective rule catalog
    Rules {
        /// Directory containing review_rules / architecture_patterns files
        #[arg(long, default_value = "rules", env = "ARCHREVIEW_RULES_DIR")]
        rules_dir: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Review {
            file,
            artifact_type,
            rules_dir,
            format,
            output,
        } => run_review(&file, artifact_type.as_deref(), &rules_dir, &format, output),
        Command::Rules { rules_dir } => run_rules(&rules_dir),
    }
}

fn run_review(
    file: &PathBuf,
    artifact_type: Option<&str>,
    rules_dir: &PathBuf,
    format: &str,
    output: Option<PathBuf>,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let forced = match artifact_type {
        Some(s) => Some(
            s.parse::<ArtifactType>()
                .map_err(review::ReviewError::InvalidArtifact)?,
        ),
        None => None,
    };

    let catalog = catalog::load_rules_dir(rules_dir)?;
    let artifact = loader::load_artifact(file, forced)?;
    let report = review::review(&artifact, &catalog)?;
    let rendered = reporters::render_with_format(&report, format)?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("writing report to {}", path.display()))?;
            eprintln!(
                "Report written to {} (score {}/100, {})",
                path.display(),
                report.overall_score,
                report.band.label()
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn run_rules(rules_dir: &PathBuf) -> Result<()> {
    let catalog = catalog::load_rules_dir(rules_dir)?;

    println!("{:<22} {:>8} {:>9} {:>7}  patterns", "CATEGORY", "SEVERITY", "MIN COVER", "WEIGHT");
    for rule in &catalog.rules {
        let detail = if rule.is_completeness() {
            format!("{} required sections", rule.required_sections.len())
        } else {
            format!("{} patterns", rule.patterns.len())
        };
        println!(
            "{:<22} {:>8} {:>9} {:>7}  {}",
            rule.category, rule.severity, rule.minimum_coverage, rule.weight, detail
        );
    }

    if !catalog.architecture_patterns.is_empty() {
        println!("\nArchitecture patterns:");
        for d in &catalog.architecture_patterns {
            println!("  {:<16} {}", d.name, d.description);
        }
    }
    Ok(())
}
