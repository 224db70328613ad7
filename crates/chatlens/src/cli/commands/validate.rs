use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::{RuntimePaths, load_document};
use crate::validate::{ValidationReport, summarize, write_report_artifact};

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Write the full issue list and summary as JSON to this path.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ValidationCommandFailure {
    pub issues: usize,
    pub first_issue: Option<String>,
}

impl std::fmt::Display for ValidationCommandFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed with {} issue(s).", self.issues)?;
        if let Some(issue) = &self.first_issue {
            write!(f, " {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationCommandFailure {}

pub fn run(args: &ValidateArgs, runtime_paths: &RuntimePaths) -> Result<()> {
    println!("validate: start input={}", runtime_paths.input.display());

    let document = load_document(&runtime_paths.input)?;
    match crate::validate::validate(&document) {
        Ok(export) => {
            let summary = summarize(&export);
            println!(
                "validate: summary threads={} nodes={} messages={} placeholders={} earliest={} latest={}",
                summary.threads,
                summary.nodes,
                summary.messages,
                summary.placeholder_nodes,
                summary.earliest_create_time.as_deref().unwrap_or("-"),
                summary.latest_update_time.as_deref().unwrap_or("-")
            );
            if let Some(path) = &args.report {
                write_report_artifact(path, &ValidationReport::passed(summary))?;
                println!("validate: report={}", path.display());
            }
            println!("validate: complete status=pass");
            Ok(())
        }
        Err(failure) => {
            if let Some(path) = &args.report {
                write_report_artifact(path, &ValidationReport::failed(&failure))?;
                println!("validate: report={}", path.display());
            }
            eprintln!(
                "validate: failed issues={} shown={}",
                failure.issue_count(),
                failure.diagnostics.len()
            );
            Err(ValidationCommandFailure {
                issues: failure.issue_count(),
                first_issue: failure.first_issue().map(ToString::to_string),
            }
            .into())
        }
    }
}
