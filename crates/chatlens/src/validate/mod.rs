pub mod parts;
pub mod summary;

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ChatExport;
use crate::schema::{Checker, IssueKind, ValidationIssue, export_schema};
use crate::utils::json::preview;
use crate::utils::path::{JsonPath, PathSegment};

pub use parts::{PartAudit, PartFailure, audit_content_parts};
pub use summary::{ExportSummary, summarize};

pub const DIAGNOSTIC_LIMIT: usize = 10;

pub const PREVIEW_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    pub path: String,
    pub preview: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message: {}, Path: {}, Data: {}",
            self.message, self.path, self.preview
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub issues: Vec<ValidationIssue>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationFailure {
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn first_issue(&self) -> Option<&ValidationIssue> {
        self.issues.first()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parsing failed: {} structural issue(s)",
            self.issues.len()
        )?;
        if let Some(issue) = self.first_issue() {
            write!(f, "; first: {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

#[must_use]
pub fn check_export(document: &Value) -> Vec<ValidationIssue> {
    let catalog = export_schema();
    Checker::new(catalog).check(catalog.root(), document)
}

pub fn validate(document: &Value) -> Result<ChatExport, ValidationFailure> {
    let issues = check_export(document);
    if !issues.is_empty() {
        return Err(fail(document, issues));
    }

    match ChatExport::deserialize(document) {
        Ok(export) => {
            tracing::debug!(threads = export.len(), "export matched schema");
            Ok(export)
        }
        Err(error) => {
            let issue = ValidationIssue::new(
                IssueKind::Deserialize,
                JsonPath::root(),
                format!("typed copy rejected the document: {error}"),
            );
            Err(fail(document, vec![issue]))
        }
    }
}

fn fail(document: &Value, issues: Vec<ValidationIssue>) -> ValidationFailure {
    tracing::debug!(issues = issues.len(), "export failed schema check");
    let diagnostics = build_diagnostics(document, &issues, DIAGNOSTIC_LIMIT);
    for diagnostic in &diagnostics {
        tracing::warn!("{diagnostic}");
    }
    ValidationFailure {
        issues,
        diagnostics,
    }
}

#[must_use]
pub fn build_diagnostics(
    document: &Value,
    issues: &[ValidationIssue],
    limit: usize,
) -> Vec<Diagnostic> {
    issues
        .iter()
        .take(limit)
        .map(|issue| Diagnostic {
            message: issue.message.clone(),
            path: issue.rendered_path(),
            preview: preview(responsible_element(document, &issue.path), PREVIEW_MAX_CHARS),
        })
        .collect()
}

fn responsible_element<'a>(document: &'a Value, path: &JsonPath) -> &'a Value {
    match (path.first(), document) {
        (Some(PathSegment::Index(index)), Value::Array(items)) => {
            items.get(*index).unwrap_or(document)
        }
        _ => document,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub status: ValidationStatus,
    pub issue_count: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub issues: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ExportSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Pass,
    Fail,
}

impl ValidationReport {
    #[must_use]
    pub fn passed(summary: ExportSummary) -> Self {
        Self {
            status: ValidationStatus::Pass,
            issue_count: 0,
            diagnostics: Vec::new(),
            issues: Vec::new(),
            summary: Some(summary),
        }
    }

    #[must_use]
    pub fn failed(failure: &ValidationFailure) -> Self {
        Self {
            status: ValidationStatus::Fail,
            issue_count: failure.issues.len(),
            diagnostics: failure.diagnostics.clone(),
            issues: failure.issues.clone(),
            summary: None,
        }
    }
}

pub fn write_report_artifact(path: &Path, report: &ValidationReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).context("failed to create report directory")?;
    }

    let encoded =
        serde_json::to_vec_pretty(report).context("failed to encode validation report json")?;
    std::fs::write(path, encoded)
        .with_context(|| format!("failed to write validation report: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ValidationReport, build_diagnostics, responsible_element, validate};
    use crate::schema::{IssueKind, ValidationIssue};
    use crate::utils::path::{JsonPath, PathSegment};

    #[test]
    fn preview_uses_the_offending_thread() {
        let document = json!([{"id": "first"}, {"id": "second"}]);
        let path: JsonPath = [PathSegment::Index(1), PathSegment::Key("id".to_string())]
            .into_iter()
            .collect();

        assert_eq!(responsible_element(&document, &path), &json!({"id": "second"}));
    }

    #[test]
    fn preview_falls_back_to_document_for_root_issues() {
        let document = json!({"not": "an array"});
        assert_eq!(responsible_element(&document, &JsonPath::root()), &document);
    }

    #[test]
    fn diagnostics_render_root_as_dot() {
        let document = json!({"not": "an array"});
        let issue = ValidationIssue::new(
            IssueKind::InvalidType,
            JsonPath::root(),
            "Expected array, received object",
        );

        let diagnostics = build_diagnostics(&document, &[issue], 10);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].path, ".");
        assert_eq!(diagnostics[0].preview, r#"{"not":"an array"}..."#);
        assert_eq!(
            diagnostics[0].to_string(),
            r#"Message: Expected array, received object, Path: ., Data: {"not":"an array"}..."#
        );
    }

    #[test]
    fn failed_report_names_root_issues_with_dot() {
        let document = json!({"not": "an array"});
        let failure = validate(&document).expect_err("object document must fail");

        let report = serde_json::to_value(ValidationReport::failed(&failure))
            .expect("report serializes");

        assert_eq!(report["status"], "fail");
        assert_eq!(report["issues"][0]["path"], ".");
        assert_eq!(report["diagnostics"][0]["path"], ".");
    }
}
