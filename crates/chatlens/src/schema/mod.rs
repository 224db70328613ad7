pub mod catalog;
pub mod check;
pub mod issue;

use std::collections::BTreeMap;

pub use catalog::export_schema;
pub use check::Checker;
pub use issue::{EMPTY_PATH_LABEL, IssueKind, ValidationIssue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKeys {
    Reject,
    Strip,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub schema: Schema,
    pub presence: Presence,
}

impl Field {
    #[must_use]
    pub const fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            presence: Presence::Required,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            schema,
            presence: Presence::Optional,
        }
    }

    // Any value, including absence.
    #[must_use]
    pub const fn any(name: &'static str) -> Self {
        Self::optional(name, Schema::Any)
    }
}

#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub fields: Vec<Field>,
    pub unknown_keys: UnknownKeys,
}

impl ObjectSchema {
    #[must_use]
    pub const fn strict(fields: Vec<Field>) -> Self {
        Self {
            fields,
            unknown_keys: UnknownKeys::Reject,
        }
    }

    #[must_use]
    pub const fn loose(fields: Vec<Field>) -> Self {
        Self {
            fields,
            unknown_keys: UnknownKeys::Strip,
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

#[derive(Debug, Clone)]
pub struct TaggedUnion {
    pub discriminator: &'static str,
    pub variants: Vec<(&'static str, ObjectSchema)>,
}

impl TaggedUnion {
    #[must_use]
    pub fn variant(&self, tag: &str) -> Option<&ObjectSchema> {
        self.variants
            .iter()
            .find(|(candidate, _)| *candidate == tag)
            .map(|(_, schema)| schema)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.iter().map(|(tag, _)| *tag)
    }
}

#[derive(Debug, Clone)]
pub enum Schema {
    Any,
    String,
    Number,
    Boolean,
    Literal(&'static str),
    Enum(&'static [&'static str]),
    Nullable(Box<Schema>),
    Array(Box<Schema>),
    Record(Box<Schema>),
    Object(ObjectSchema),
    Union(Vec<Schema>),
    Tagged(TaggedUnion),
    Ref(&'static str),
}

impl Schema {
    #[must_use]
    pub fn nullable(self) -> Self {
        Self::Nullable(Box::new(self))
    }

    #[must_use]
    pub fn array(item: Self) -> Self {
        Self::Array(Box::new(item))
    }

    #[must_use]
    pub fn record(value: Self) -> Self {
        Self::Record(Box::new(value))
    }

    #[must_use]
    pub const fn strict(fields: Vec<Field>) -> Self {
        Self::Object(ObjectSchema::strict(fields))
    }

    #[must_use]
    pub const fn loose(fields: Vec<Field>) -> Self {
        Self::Object(ObjectSchema::loose(fields))
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Any => "any".to_string(),
            Self::String => "string".to_string(),
            Self::Number => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Literal(value) => format!("'{value}'"),
            Self::Enum(options) => quoted_list(options.iter().copied()),
            Self::Nullable(inner) => format!("{} | null", inner.describe()),
            Self::Array(_) => "array".to_string(),
            Self::Record(_) | Self::Object(_) | Self::Tagged(_) => "object".to_string(),
            Self::Union(alternatives) => alternatives
                .iter()
                .map(Self::describe)
                .collect::<Vec<_>>()
                .join(" | "),
            Self::Ref(name) => (*name).to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    root: Schema,
    definitions: BTreeMap<&'static str, Schema>,
}

impl SchemaCatalog {
    #[must_use]
    pub const fn new(root: Schema, definitions: BTreeMap<&'static str, Schema>) -> Self {
        Self { root, definitions }
    }

    #[must_use]
    pub const fn root(&self) -> &Schema {
        &self.root
    }

    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&Schema> {
        self.definitions.get(name)
    }
}

pub(crate) fn quoted_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|value| format!("'{value}'"))
        .collect::<Vec<_>>()
        .join(" | ")
}
