use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CONTENT_TYPES: &[&str] = &[
    "text",
    "code",
    "tool_output",
    "citation",
    "media",
    "user_editable_context",
    "multimodal_text",
    "tether_browsing_display",
    "execution_output",
    "app_pairing_content",
    "tether_quote",
    "audio_transcription",
    "audio_asset_pointer",
    "real_time_user_audio_video_asset_pointer",
    "image_asset_pointer",
    "thoughts",
    "reasoning_recap",
    "sonic_webpage",
];

pub const PART_CONTENT_TYPES: &[&str] = &[
    "text",
    "audio_transcription",
    "real_time_user_audio_video_asset_pointer",
    "image_asset_pointer",
    "audio_asset_pointer",
];

pub const DIRECTION_TAGS: &[&str] = &["in", "out"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum Content {
    Text(TextContent),
    Code(CodeContent),
    ToolOutput(EmptyContent),
    Citation(EmptyContent),
    Media(EmptyContent),
    UserEditableContext(UserEditableContext),
    MultimodalText(TextContent),
    TetherBrowsingDisplay(TetherBrowsingDisplay),
    ExecutionOutput(ExecutionOutput),
    AppPairingContent(AppPairingContent),
    TetherQuote(TetherQuote),
    AudioTranscription(AudioTranscription),
    AudioAssetPointer(AudioAssetPointer),
    RealTimeUserAudioVideoAssetPointer(RealTimeUserAudioVideoAssetPointer),
    ImageAssetPointer(ImageAssetPointer),
    Thoughts(ThoughtsContent),
    ReasoningRecap(ReasoningRecap),
    SonicWebpage(SonicWebpage),
}

impl Content {
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Code(_) => "code",
            Self::ToolOutput(_) => "tool_output",
            Self::Citation(_) => "citation",
            Self::Media(_) => "media",
            Self::UserEditableContext(_) => "user_editable_context",
            Self::MultimodalText(_) => "multimodal_text",
            Self::TetherBrowsingDisplay(_) => "tether_browsing_display",
            Self::ExecutionOutput(_) => "execution_output",
            Self::AppPairingContent(_) => "app_pairing_content",
            Self::TetherQuote(_) => "tether_quote",
            Self::AudioTranscription(_) => "audio_transcription",
            Self::AudioAssetPointer(_) => "audio_asset_pointer",
            Self::RealTimeUserAudioVideoAssetPointer(_) => {
                "real_time_user_audio_video_asset_pointer"
            }
            Self::ImageAssetPointer(_) => "image_asset_pointer",
            Self::Thoughts(_) => "thoughts",
            Self::ReasoningRecap(_) => "reasoning_recap",
            Self::SonicWebpage(_) => "sonic_webpage",
        }
    }

    #[must_use]
    pub fn parts(&self) -> Option<&[MessagePart]> {
        match self {
            Self::Text(content) | Self::MultimodalText(content) => {
                Some(content.parts.as_slice())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EmptyContent {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TextContent {
    pub parts: Vec<MessagePart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MessagePart {
    Text(String),
    Object(Box<ContentPart>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PartContentType {
    Text,
    AudioTranscription,
    RealTimeUserAudioVideoAssetPointer,
    ImageAssetPointer,
    AudioAssetPointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    In,
    Out,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContentPart {
    pub content_type: PartContentType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub decoding_id: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub expiry_datetime: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames_asset_pointers: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub video_container_asset_pointer: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_asset_pointer: Option<PartAudioAssetPointer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_start_timestamp: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_pointer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub fovea: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<PartMetadata>")]
    pub metadata: Option<Option<PartMetadata>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PartAudioAssetPointer {
    pub expiry_datetime: Option<String>,
    pub content_type: String,
    pub asset_pointer: String,
    pub size_bytes: f64,
    pub format: String,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PartMetadata {
    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<PartDalle>")]
    pub dalle: Option<Option<PartDalle>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PartDalle {
    pub gen_id: String,
    pub prompt: String,
    pub seed: Option<f64>,
    pub serialization_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CodeContent {
    pub language: String,
    pub response_format_name: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UserEditableContext {
    pub user_profile: String,
    pub user_instructions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TetherBrowsingDisplay {
    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub result: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub summary: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub assets: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub tether_id: Option<Value>,
}

// `text` holds the JSON-encoded execution result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExecutionOutput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AppPairingContent {
    pub custom_instructions: String,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Vec<Workspace>>")]
    pub workspaces: Option<Option<Vec<Workspace>>>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Vec<ContextPart>>")]
    pub context_parts: Option<Option<Vec<ContextPart>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Workspace {
    pub id: String,
    pub app_id: String,
    pub app_name: String,
    pub title: String,
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContextPart {
    pub workspace_id: String,
    pub text: String,
    pub textfield_id: String,
    pub path: String,
    pub path_hash: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub annotations: Option<Value>,

    pub content_type: String,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub truncated_head_lines: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub truncated_tail_lines: Option<Value>,

    pub supports_editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TetherQuote {
    pub url: String,
    pub domain: String,
    pub text: String,
    pub title: String,
    pub tether_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AudioTranscription {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub decoding_id: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AudioAssetPointer {
    pub expiry_datetime: String,
    pub asset_pointer: String,
    pub size_bytes: f64,
    pub format: String,
    pub metadata: AudioTiming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AudioTiming {
    pub start_timestamp: Option<f64>,
    pub end_timestamp: Option<f64>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub pretokenized_vq: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub interruptions: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub original_audio_source: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub transcription: Option<Value>,

    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AudioAssetPointerTag {
    #[serde(rename = "audio_asset_pointer")]
    AudioAssetPointer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmbeddedAudioAssetPointer {
    pub content_type: AudioAssetPointerTag,

    #[serde(flatten)]
    pub pointer: AudioAssetPointer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RealTimeUserAudioVideoAssetPointer {
    pub expiry_datetime: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames_asset_pointers: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub video_container_asset_pointer: Option<Option<String>>,

    pub audio_asset_pointer: EmbeddedAudioAssetPointer,
    pub audio_start_timestamp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImageAssetPointer {
    pub asset_pointer: String,
    pub size_bytes: f64,
    pub width: f64,
    pub height: f64,
    pub fovea: f64,
    pub metadata: ImageMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImageMetadata {
    pub dalle: Option<DalleMetadata>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub gizmo: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub emu_omit_glimpse_image: Option<Value>,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub emu_patches_override: Option<Value>,

    pub sanitized: bool,

    #[serde(
        default,
        deserialize_with = "super::field::present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Value>")]
    pub asset_pointer_link: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DalleMetadata {
    pub gen_id: String,
    pub prompt: String,
    pub seed: f64,
    pub parent_gen_id: Option<String>,
    pub edit_op: Option<String>,
    pub serialization_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ThoughtsContent {
    pub thoughts: Vec<Thought>,
    pub source_analysis_msg_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Thought {
    pub summary: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ReasoningRecap {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SonicWebpage {
    pub url: String,
    pub domain: String,
    pub title: String,
    pub text: String,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub snippet: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub pub_date: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub crawl_date: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "super::field::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<f64>")]
    pub pub_timestamp: Option<Option<f64>>,

    pub ref_id: String,
}
