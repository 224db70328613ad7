use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use super::registry::{ShapeRecord, ShapeRegistry};

// Node containers are keyed by node ids, so each thread adds its own shape.
pub const MAPPING_CONTAINER_SUFFIX: &str = "mapping";

const ENTRY_SEPARATOR: &str = "--------------------------------";

#[derive(Debug, Clone)]
pub enum ExclusionRule {
    PathSuffix(String),
    PathPattern(Regex),
}

impl ExclusionRule {
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("invalid shape exclusion pattern `{pattern}`"))?;
        Ok(Self::PathPattern(regex))
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::PathSuffix(suffix) => path.ends_with(suffix.as_str()),
            Self::PathPattern(regex) => regex.is_match(path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportPolicy {
    pub exclusions: Vec<ExclusionRule>,
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            exclusions: vec![ExclusionRule::PathSuffix(
                MAPPING_CONTAINER_SUFFIX.to_string(),
            )],
        }
    }
}

impl ReportPolicy {
    #[must_use]
    pub const fn unfiltered() -> Self {
        Self {
            exclusions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ExclusionRule) -> Self {
        self.exclusions.push(rule);
        self
    }

    #[must_use]
    pub fn excludes(&self, path: &str) -> bool {
        self.exclusions.iter().any(|rule| rule.matches(path))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeReportEntry {
    pub count: usize,
    pub path: String,
    pub example: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeReport {
    pub distinct_shapes: usize,
    pub excluded_shapes: usize,
    pub entries: Vec<ShapeReportEntry>,
}

#[must_use]
pub fn build_report(registry: &ShapeRegistry, policy: &ReportPolicy) -> ShapeReport {
    let mut entries = Vec::new();
    let mut excluded_shapes = 0usize;

    for record in registry.entries() {
        let path = record.representative_path();
        if policy.excludes(path) {
            excluded_shapes += 1;
            continue;
        }
        entries.push(report_entry(record, path));
    }

    ShapeReport {
        distinct_shapes: registry.len(),
        excluded_shapes,
        entries,
    }
}

fn report_entry(record: &ShapeRecord, path: &str) -> ShapeReportEntry {
    let example = record
        .example
        .iter()
        .map(|field| {
            (
                field.name.clone(),
                Value::String(field.kind.as_str().to_string()),
            )
        })
        .collect();

    ShapeReportEntry {
        count: record.count,
        path: path.to_string(),
        example,
    }
}

#[must_use]
pub fn render_text_report(report: &ShapeReport) -> String {
    let mut lines = vec![format!("unique key sets: {}", report.distinct_shapes)];

    for entry in &report.entries {
        lines.push(ENTRY_SEPARATOR.to_string());
        lines.push(format!("count: {}", entry.count));
        lines.push(entry.path.clone());
        lines.push(serde_json::to_string_pretty(&entry.example).unwrap_or_default());
    }

    lines.join("\n")
}
