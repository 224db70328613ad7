use anyhow::{Context, Result};
use clap::Args;

use super::validate::ValidationCommandFailure;
use crate::config::{RuntimePaths, load_document};
use crate::validate::audit_content_parts;

#[derive(Debug, Clone, Args)]
pub struct PartsArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &PartsArgs, runtime_paths: &RuntimePaths) -> Result<()> {
    if !args.json {
        println!("parts: start input={}", runtime_paths.input.display());
    }

    let document = load_document(&runtime_paths.input)?;
    let audit = audit_content_parts(&document);

    if args.json {
        let encoded =
            serde_json::to_string_pretty(&audit).context("failed to encode part audit json")?;
        println!("{encoded}");
    } else {
        for failure in &audit.failures {
            println!(
                "parts: invalid location={} content_type={}",
                failure.location,
                failure.content_type.as_deref().unwrap_or("-")
            );
            for issue in &failure.issues {
                println!("  {issue}");
            }
        }
        println!(
            "parts: complete object_parts={} failures={}",
            audit.object_parts,
            audit.failures.len()
        );
    }

    if audit.is_clean() {
        return Ok(());
    }

    Err(ValidationCommandFailure {
        issues: audit.failures.iter().map(|failure| failure.issues.len()).sum(),
        first_issue: audit
            .failures
            .first()
            .and_then(|failure| failure.issues.first())
            .map(ToString::to_string),
    }
    .into())
}
