use anyhow::{Context, Result};
use clap::Args;

use crate::config::{RuntimePaths, load_document};
use crate::shapes::{
    ExclusionRule, ReportPolicy, build_report, discover_shapes, render_text_report,
};

#[derive(Debug, Clone, Args)]
pub struct ShapesArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Hide shapes whose path matches this regex; repeatable.
    #[arg(long = "exclude-pattern", value_name = "REGEX")]
    pub exclude_patterns: Vec<String>,

    /// Keep shapes first seen directly under a `mapping` container.
    #[arg(long, default_value_t = false)]
    pub include_mappings: bool,
}

pub fn run(args: &ShapesArgs, runtime_paths: &RuntimePaths) -> Result<()> {
    let policy = build_policy(args)?;
    if !args.json {
        println!(
            "shapes: start input={} exclusions={}",
            runtime_paths.input.display(),
            policy.exclusions.len()
        );
    }

    let document = load_document(&runtime_paths.input)?;
    let registry = discover_shapes(&document);
    let report = build_report(&registry, &policy);
    tracing::debug!(
        distinct = report.distinct_shapes,
        excluded = report.excluded_shapes,
        "shape discovery finished"
    );

    if args.json {
        let encoded =
            serde_json::to_string_pretty(&report).context("failed to encode shape report json")?;
        println!("{encoded}");
        return Ok(());
    }

    println!("{}", render_text_report(&report));
    println!(
        "shapes: complete distinct={} reported={} excluded={}",
        report.distinct_shapes,
        report.entries.len(),
        report.excluded_shapes
    );

    Ok(())
}

pub fn build_policy(args: &ShapesArgs) -> Result<ReportPolicy> {
    let base = if args.include_mappings {
        ReportPolicy::unfiltered()
    } else {
        ReportPolicy::default()
    };

    args.exclude_patterns
        .iter()
        .try_fold(base, |policy, pattern| {
            Ok(policy.with_rule(ExclusionRule::pattern(pattern)?))
        })
}
