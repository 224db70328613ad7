use serde::Serialize;
use serde_json::Value;

use crate::schema::catalog::{CONTENT_DISCRIMINATOR, CONTENT_PART};
use crate::schema::{Checker, Schema, ValidationIssue, export_schema};
use crate::utils::path::JsonPath;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartFailure {
    pub location: String,
    pub content_type: Option<String>,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartAudit {
    pub object_parts: usize,
    pub failures: Vec<PartFailure>,
}

impl PartAudit {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// Missing or mistyped containers are left to the full validator.
#[must_use]
pub fn audit_content_parts(document: &Value) -> PartAudit {
    let catalog = export_schema();
    let part_schema = Schema::Ref(CONTENT_PART);
    let mut audit = PartAudit::default();

    let Some(threads) = document.as_array() else {
        return audit;
    };

    for (thread_index, thread) in threads.iter().enumerate() {
        let Some(mapping) = thread.get("mapping").and_then(Value::as_object) else {
            continue;
        };

        for (node_id, node) in mapping {
            let Some(parts) = node
                .get("message")
                .and_then(|message| message.get("content"))
                .and_then(|content| content.get("parts"))
                .and_then(Value::as_array)
            else {
                continue;
            };

            for (part_index, part) in parts.iter().enumerate() {
                if !part.is_object() {
                    continue;
                }
                audit.object_parts += 1;

                let path = part_path(thread_index, node_id, part_index);
                let location = path.to_string();
                let issues = Checker::at(catalog, path).check(&part_schema, part);
                if issues.is_empty() {
                    continue;
                }

                let content_type = part
                    .get(CONTENT_DISCRIMINATOR)
                    .and_then(Value::as_str)
                    .map(str::to_string);
                tracing::debug!(%location, issues = issues.len(), "content part failed check");
                audit.failures.push(PartFailure {
                    location,
                    content_type,
                    issues,
                });
            }
        }
    }

    audit
}

fn part_path(thread_index: usize, node_id: &str, part_index: usize) -> JsonPath {
    let mut path = JsonPath::root();
    path.push_index(thread_index);
    path.push_key("mapping");
    path.push_key(node_id);
    path.push_key("message");
    path.push_key("content");
    path.push_key("parts");
    path.push_index(part_index);
    path
}

#[cfg(test)]
mod tests {
    use super::part_path;

    #[test]
    fn part_locations_are_absolute() {
        assert_eq!(
            part_path(2, "node-1", 0).to_string(),
            "[2].mapping.node-1.message.content.parts.[0]"
        );
    }
}
