use serde_json::{Map, Value};

use super::issue::{IssueKind, ValidationIssue};
use super::{ObjectSchema, Presence, Schema, SchemaCatalog, TaggedUnion, UnknownKeys, quoted_list};
use crate::utils::json::ValueKind;
use crate::utils::path::JsonPath;

// Issues come out in schema order: declared fields first, then undeclared
// keys of strict objects, then array and record entries in input order.
#[derive(Debug)]
pub struct Checker<'a> {
    catalog: &'a SchemaCatalog,
    path: JsonPath,
    issues: Vec<ValidationIssue>,
}

impl<'a> Checker<'a> {
    #[must_use]
    pub const fn new(catalog: &'a SchemaCatalog) -> Self {
        Self::at(catalog, JsonPath::root())
    }

    #[must_use]
    pub const fn at(catalog: &'a SchemaCatalog, path: JsonPath) -> Self {
        Self {
            catalog,
            path,
            issues: Vec::new(),
        }
    }

    #[must_use]
    pub fn check(mut self, schema: &Schema, value: &Value) -> Vec<ValidationIssue> {
        self.visit(schema, value);
        self.issues
    }

    fn visit(&mut self, schema: &Schema, value: &Value) {
        match schema {
            Schema::Any => {}
            Schema::String => self.expect_kind(schema, value, ValueKind::String),
            Schema::Number => self.expect_kind(schema, value, ValueKind::Number),
            Schema::Boolean => self.expect_kind(schema, value, ValueKind::Boolean),
            Schema::Literal(expected) => match value.as_str() {
                Some(actual) if actual == *expected => {}
                Some(actual) => self.push(
                    IssueKind::InvalidLiteral,
                    format!("Invalid literal value, expected '{expected}', received '{actual}'"),
                ),
                None => self.invalid_type(schema, value),
            },
            Schema::Enum(options) => match value.as_str() {
                Some(actual) if options.contains(&actual) => {}
                Some(actual) => self.push(
                    IssueKind::InvalidEnumValue,
                    format!(
                        "Invalid enum value. Expected {}, received '{actual}'",
                        quoted_list(options.iter().copied())
                    ),
                ),
                None => self.invalid_type(schema, value),
            },
            Schema::Nullable(inner) => {
                if !value.is_null() {
                    self.visit(inner, value);
                }
            }
            Schema::Array(item) => {
                let Some(items) = value.as_array() else {
                    self.invalid_type(schema, value);
                    return;
                };
                for (index, element) in items.iter().enumerate() {
                    self.path.push_index(index);
                    self.visit(item, element);
                    self.path.pop();
                }
            }
            Schema::Record(entry) => {
                let Some(object) = value.as_object() else {
                    self.invalid_type(schema, value);
                    return;
                };
                for (key, element) in object {
                    self.path.push_key(key);
                    self.visit(entry, element);
                    self.path.pop();
                }
            }
            Schema::Object(object_schema) => match value.as_object() {
                Some(object) => self.visit_object(object_schema, object),
                None => self.invalid_type(schema, value),
            },
            Schema::Union(alternatives) => self.visit_union(schema, alternatives, value),
            Schema::Tagged(union) => match value.as_object() {
                Some(object) => self.visit_tagged(union, object),
                None => self.invalid_type(schema, value),
            },
            Schema::Ref(name) => {
                let catalog = self.catalog;
                match catalog.definition(name) {
                    Some(definition) => self.visit(definition, value),
                    None => self.push(
                        IssueKind::UnresolvedReference,
                        format!("schema definition `{name}` is not registered"),
                    ),
                }
            }
        }
    }

    fn visit_object(&mut self, schema: &ObjectSchema, object: &Map<String, Value>) {
        for field in &schema.fields {
            self.path.push_key(field.name);
            match object.get(field.name) {
                Some(value) => self.visit(&field.schema, value),
                None => {
                    if field.presence == Presence::Required && !self.accepts_absent(&field.schema) {
                        self.push(IssueKind::Required, "Required".to_string());
                    }
                }
            }
            self.path.pop();
        }

        if schema.unknown_keys == UnknownKeys::Reject {
            for key in object.keys() {
                if schema.declares(key) {
                    continue;
                }
                self.path.push_key(key);
                self.push(
                    IssueKind::UnrecognizedKey,
                    format!("Unrecognized key in object: '{key}'"),
                );
                self.path.pop();
            }
        }
    }

    fn visit_tagged(&mut self, union: &TaggedUnion, object: &Map<String, Value>) {
        let variant = object
            .get(union.discriminator)
            .and_then(Value::as_str)
            .and_then(|tag| union.variant(tag));

        match variant {
            Some(variant) => self.visit_object(variant, object),
            None => {
                self.path.push_key(union.discriminator);
                self.push(
                    IssueKind::InvalidDiscriminator,
                    format!(
                        "Invalid discriminator value. Expected {}",
                        quoted_list(union.tags())
                    ),
                );
                self.path.pop();
            }
        }
    }

    // No clean alternative: report the first one whose base type fits.
    fn visit_union(&mut self, schema: &Schema, alternatives: &[Schema], value: &Value) {
        let mut best_match = None;

        for alternative in alternatives {
            let issues = Checker::at(self.catalog, self.path.clone()).check(alternative, value);
            if issues.is_empty() {
                return;
            }
            if best_match.is_none() && self.matches_kind(alternative, value) {
                best_match = Some(issues);
            }
        }

        match best_match {
            Some(issues) => self.issues.extend(issues),
            None => self.push(
                IssueKind::InvalidUnion,
                format!(
                    "Invalid input: expected {}, received {}",
                    schema.describe(),
                    ValueKind::of(value)
                ),
            ),
        }
    }

    fn matches_kind(&self, schema: &Schema, value: &Value) -> bool {
        let kind = ValueKind::of(value);
        match schema {
            Schema::Any => true,
            Schema::String | Schema::Literal(_) | Schema::Enum(_) => kind == ValueKind::String,
            Schema::Number => kind == ValueKind::Number,
            Schema::Boolean => kind == ValueKind::Boolean,
            Schema::Array(_) => kind == ValueKind::Array,
            Schema::Record(_) | Schema::Object(_) | Schema::Tagged(_) => {
                kind == ValueKind::Object
            }
            Schema::Nullable(inner) => kind == ValueKind::Null || self.matches_kind(inner, value),
            Schema::Union(alternatives) => alternatives
                .iter()
                .any(|alternative| self.matches_kind(alternative, value)),
            Schema::Ref(name) => self
                .catalog
                .definition(name)
                .is_some_and(|definition| self.matches_kind(definition, value)),
        }
    }

    fn accepts_absent(&self, schema: &Schema) -> bool {
        match schema {
            Schema::Any => true,
            Schema::Ref(name) => self
                .catalog
                .definition(name)
                .is_some_and(|definition| self.accepts_absent(definition)),
            _ => false,
        }
    }

    fn expect_kind(&mut self, schema: &Schema, value: &Value, expected: ValueKind) {
        if ValueKind::of(value) != expected {
            self.invalid_type(schema, value);
        }
    }

    fn invalid_type(&mut self, schema: &Schema, value: &Value) {
        self.push(
            IssueKind::InvalidType,
            format!(
                "Expected {}, received {}",
                schema.describe(),
                ValueKind::of(value)
            ),
        );
    }

    fn push(&mut self, kind: IssueKind, message: String) {
        self.issues
            .push(ValidationIssue::new(kind, self.path.clone(), message));
    }
}
