use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const METADATA_COMMANDS: &[&str] = &[
    "click",
    "search",
    "quote",
    "quote_lines",
    "scroll",
    "create_textdoc",
    "update_textdoc",
    "open_url",
    "msearch",
    "prompt",
    "spinner",
    "context_stuff",
    "mclick",
    "clarify_with_text",
    "start_research_task",
];

pub const EXECUTION_STATUSES: &[&str] = &[
    "success",
    "error",
    "failed_with_in_kernel_exception",
    "cancelled",
];

pub const AGGREGATE_MESSAGE_TYPES: &[&str] = &["image", "stream"];

pub const AGGREGATE_SENDER: &str = "server";

// Keys without a fixed format land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub model_slug: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub parent_id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<MetadataCommand>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_result: Option<AggregateResult>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_doc_urls: Option<Vec<Option<String>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_hints: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_loading_message: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_task_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_task_prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_task_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_task_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_task_conversation_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub async_task_created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_research_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_async_task_result_message: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_queries: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_gen_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_duration_sec: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_display_string: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searched_display_string: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_turn_number: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_file_index: Option<f64>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MetadataCommand {
    Click,
    Search,
    Quote,
    QuoteLines,
    Scroll,
    CreateTextdoc,
    UpdateTextdoc,
    OpenUrl,
    Msearch,
    Prompt,
    Spinner,
    ContextStuff,
    Mclick,
    ClarifyWithText,
    StartResearchTask,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AggregateResult {
    pub code: String,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub final_expression_output: Option<Option<String>>,

    pub end_time: Option<f64>,
    pub jupyter_messages: Vec<Value>,
    pub messages: Vec<AggregateMessage>,
    pub run_id: String,
    pub start_time: f64,
    pub status: ExecutionStatus,
    pub update_time: f64,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub in_kernel_exception: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub system_exception: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub timeout_triggered: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub caterpillar_selected_sources: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub selected_github_repos: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_turn_number: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_file_index: Option<f64>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub cot_tool: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Success,
    Error,
    FailedWithInKernelException,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AggregateMessageType {
    Image,
    Stream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageSender {
    Server,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AggregateMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<AggregateMessageType>,

    pub sender: MessageSender,
    pub time: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Citation {
    pub start_ix: f64,
    pub end_ix: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_format_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CitationMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_display_string: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searched_display_string: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub caterpillar_selected_sources: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub selected_github_repos: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_turn_number: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_file_index: Option<f64>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub cot_tool: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CitationMetadata {
    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<CitationExtra>")]
    pub extra: Option<Option<CitationExtra>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CitationExtra {
    pub cited_message_idx: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_text: Option<String>,
}
