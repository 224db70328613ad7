use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::content::Content;
use super::metadata::MessageMetadata;

pub const ROLE_TAGS: &[&str] = &["user", "assistant", "system", "tool"];

pub const RECIPIENT_TAGS: &[&str] = &[
    "all",
    "browser",
    "python",
    "dalle.text2im",
    "assistant",
    "web",
    "canmore.create_textdoc",
    "canmore.update_textdoc",
    "bio",
    "myfiles_browser",
    "gpts_webpilot_ai__jit_plugin.webPageReader",
    "diagrams_helpful_dev__jit_plugin.get_DiagramGuidelinesRoute",
    "diagrams_helpful_dev__jit_plugin.get__MermaidRoute",
    "research_kickoff_tool.start_research_task",
    "t2uay3k.sj1i4kz",
    "web.run",
    "web.search",
    "user",
    "web.open_url",
    "canmore.comment_textdoc",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ChatExport(pub Vec<ChatThread>);

impl ChatExport {
    #[must_use]
    pub fn threads(&self) -> &[ChatThread] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ChatThread {
    pub id: String,
    pub title: String,
    pub create_time: f64,
    pub update_time: f64,

    pub mapping: BTreeMap<String, MessageNode>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub moderation_results: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub current_node: Option<Value>,

    pub plugin_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,

    pub conversation_template_id: Option<String>,
    pub conversation_origin: Option<String>,
    pub gizmo_id: Option<String>,
    pub gizmo_type: Option<String>,
    pub is_archived: bool,
    pub is_starred: Option<bool>,
    pub safe_urls: Vec<String>,
    pub default_model_slug: Option<String>,
    pub voice: Option<String>,
    pub async_status: Option<f64>,
    pub disabled_tool_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_urls: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<bool>")]
    pub is_do_not_remember: Option<Option<bool>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_scope: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MessageNode {
    pub id: String,
    pub message: Option<Message>,
    pub parent: Option<String>,
    pub children: Vec<String>,
}

impl MessageNode {
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.message.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Message {
    pub id: String,
    pub author: Author,
    pub create_time: Option<f64>,
    pub update_time: Option<f64>,
    pub content: Content,
    pub status: String,
    pub end_turn: Option<bool>,
    pub weight: f64,
    pub metadata: MessageMetadata,
    pub recipient: Recipient,
    pub channel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Author {
    pub role: Role,
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    System,
    Tool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Recipient {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "browser")]
    Browser,
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "dalle.text2im")]
    DalleText2Im,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "canmore.create_textdoc")]
    CanmoreCreateTextdoc,
    #[serde(rename = "canmore.update_textdoc")]
    CanmoreUpdateTextdoc,
    #[serde(rename = "bio")]
    Bio,
    #[serde(rename = "myfiles_browser")]
    MyFilesBrowser,
    #[serde(rename = "gpts_webpilot_ai__jit_plugin.webPageReader")]
    WebPilotPageReader,
    #[serde(rename = "diagrams_helpful_dev__jit_plugin.get_DiagramGuidelinesRoute")]
    DiagramGuidelines,
    #[serde(rename = "diagrams_helpful_dev__jit_plugin.get__MermaidRoute")]
    DiagramMermaid,
    #[serde(rename = "research_kickoff_tool.start_research_task")]
    StartResearchTask,
    #[serde(rename = "t2uay3k.sj1i4kz")]
    T2uay3kSj1i4kz,
    #[serde(rename = "web.run")]
    WebRun,
    #[serde(rename = "web.search")]
    WebSearch,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "web.open_url")]
    WebOpenUrl,
    #[serde(rename = "canmore.comment_textdoc")]
    CanmoreCommentTextdoc,
}
