use std::fmt;

use serde::{Serialize, Serializer};

use crate::utils::path::JsonPath;

pub const EMPTY_PATH_LABEL: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidType,
    Required,
    UnrecognizedKey,
    InvalidDiscriminator,
    InvalidEnumValue,
    InvalidLiteral,
    InvalidUnion,
    UnresolvedReference,
    Deserialize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    #[serde(serialize_with = "serialize_rendered_path")]
    pub path: JsonPath,
    pub message: String,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(kind: IssueKind, path: JsonPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn rendered_path(&self) -> String {
        self.path.render_or(EMPTY_PATH_LABEL)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.rendered_path())
    }
}

fn serialize_rendered_path<S>(path: &JsonPath, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&path.render_or(EMPTY_PATH_LABEL))
}
