pub mod content;
pub mod export;
pub(crate) mod field;
pub mod metadata;

use serde_json::Value;

pub use content::{CONTENT_TYPES, Content, ContentPart, MessagePart};
pub use export::{Author, ChatExport, ChatThread, Message, MessageNode, Recipient, Role};
pub use metadata::{AggregateResult, Citation, MessageMetadata};

#[must_use]
pub fn json_schema() -> Value {
    schemars::schema_for!(ChatExport).to_value()
}
