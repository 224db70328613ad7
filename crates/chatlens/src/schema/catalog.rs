use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::{Field, ObjectSchema, Schema, SchemaCatalog, TaggedUnion};
use crate::models::content::{DIRECTION_TAGS, PART_CONTENT_TYPES};
use crate::models::export::{RECIPIENT_TAGS, ROLE_TAGS};
use crate::models::metadata::{
    AGGREGATE_MESSAGE_TYPES, AGGREGATE_SENDER, EXECUTION_STATUSES, METADATA_COMMANDS,
};

pub const THREAD: &str = "thread";
pub const MESSAGE_NODE: &str = "message_node";
pub const MESSAGE: &str = "message";
pub const MESSAGE_METADATA: &str = "message_metadata";
pub const CONTENT: &str = "content";
pub const CONTENT_PART: &str = "content_part";
pub const AUDIO_ASSET_POINTER: &str = "audio_asset_pointer";

pub const CONTENT_DISCRIMINATOR: &str = "content_type";

pub fn export_schema() -> &'static SchemaCatalog {
    static CATALOG: OnceLock<SchemaCatalog> = OnceLock::new();
    CATALOG.get_or_init(build_export_catalog)
}

fn build_export_catalog() -> SchemaCatalog {
    let definitions = BTreeMap::from([
        (THREAD, thread()),
        (MESSAGE_NODE, message_node()),
        (MESSAGE, message()),
        (MESSAGE_METADATA, message_metadata()),
        (CONTENT, Schema::Tagged(content_variants())),
        (CONTENT_PART, content_part()),
        (
            AUDIO_ASSET_POINTER,
            Schema::Object(audio_asset_pointer_variant()),
        ),
    ]);

    SchemaCatalog::new(Schema::array(Schema::Ref(THREAD)), definitions)
}

fn req(name: &'static str, schema: Schema) -> Field {
    Field::required(name, schema)
}

fn opt(name: &'static str, schema: Schema) -> Field {
    Field::optional(name, schema)
}

fn any(name: &'static str) -> Field {
    Field::any(name)
}

fn strings() -> Schema {
    Schema::array(Schema::String)
}

fn thread() -> Schema {
    Schema::strict(vec![
        req("id", Schema::String),
        req("title", Schema::String),
        req("create_time", Schema::Number),
        req("update_time", Schema::Number),
        req("mapping", Schema::record(Schema::Ref(MESSAGE_NODE))),
        any("moderation_results"),
        any("current_node"),
        req("plugin_ids", strings().nullable()),
        opt("conversation_id", Schema::String),
        req("conversation_template_id", Schema::String.nullable()),
        req("conversation_origin", Schema::String.nullable()),
        req("gizmo_id", Schema::String.nullable()),
        req("gizmo_type", Schema::String.nullable()),
        req("is_archived", Schema::Boolean),
        req("is_starred", Schema::Boolean.nullable()),
        req("safe_urls", strings()),
        req("default_model_slug", Schema::String.nullable()),
        req("voice", Schema::String.nullable()),
        req("async_status", Schema::Number.nullable()),
        req("disabled_tool_ids", strings().nullable()),
        opt("blocked_urls", strings()),
        opt("is_do_not_remember", Schema::Boolean.nullable()),
        opt("memory_scope", Schema::String),
    ])
}

fn message_node() -> Schema {
    Schema::strict(vec![
        req("id", Schema::String),
        req("message", Schema::Ref(MESSAGE).nullable()),
        req("parent", Schema::String.nullable()),
        req("children", strings()),
    ])
}

fn message() -> Schema {
    Schema::strict(vec![
        req("id", Schema::String),
        req(
            "author",
            Schema::strict(vec![
                req("role", Schema::Enum(ROLE_TAGS)),
                req("name", Schema::String.nullable()),
                any("metadata"),
            ]),
        ),
        req("create_time", Schema::Number.nullable()),
        req("update_time", Schema::Number.nullable()),
        req("content", Schema::Ref(CONTENT)),
        req("status", Schema::String),
        req("end_turn", Schema::Boolean.nullable()),
        req("weight", Schema::Number),
        req("metadata", Schema::Ref(MESSAGE_METADATA)),
        req("recipient", Schema::Enum(RECIPIENT_TAGS)),
        req("channel", Schema::String.nullable()),
    ])
}

fn message_metadata() -> Schema {
    Schema::strict(vec![
        any("finish_details"),
        opt("is_complete", Schema::Boolean),
        opt("citations", Schema::array(citation())),
        any("content_references"),
        any("message_type"),
        any("model_slug"),
        any("default_model_slug"),
        any("parent_id"),
        any("request_id"),
        any("timestamp_"),
        any("message_source"),
        any("timestamp_ms"),
        any("is_visually_hidden_from_conversation"),
        any("user_context_message_data"),
        any("is_user_system_message"),
        any("search_source"),
        any("client_reported_search_source"),
        any("search_result_groups"),
        any("safe_urls"),
        any("message_locale"),
        any("image_results"),
        opt("command", Schema::Enum(METADATA_COMMANDS)),
        any("status"),
        any("real_time_audio_has_video"),
        any("canvas"),
        any("voice_mode_message"),
        any("attachments"),
        any("_cite_metadata"),
        any("args"),
        any("rebase_system_message"),
        any("paragen_variants_info"),
        any("paragen_variant_choice"),
        any("gizmo_id"),
        any("finished_text"),
        any("initial_text"),
        any("requested_model_slug"),
        opt("aggregate_result", aggregate_result()),
        any("pending_memory_info"),
        any("jit_plugin_data"),
        any("snorkle_status"),
        any("sonic_classification_result"),
        any("exclusive_key"),
        any("app_pairing"),
        opt("cloud_doc_urls", Schema::array(Schema::String.nullable())),
        any("serialization_metadata"),
        any("ada_visualizations"),
        any("augmented_paragen_prompt_label"),
        any("kwargs"),
        any("pad"),
        any("invoked_plugin"),
        any("dalle"),
        opt("system_hints", Schema::array(Schema::Any)),
        opt("permissions", Schema::array(Schema::Any)),
        opt("is_loading_message", Schema::Boolean),
        opt("async_task_title", Schema::String),
        opt("async_task_prompt", Schema::String),
        opt("async_task_type", Schema::String),
        any("async_task_status_messages"),
        any("b1de6e2_s"),
        opt("async_task_id", Schema::String),
        opt("async_task_conversation_id", Schema::String),
        opt("async_task_created_at", Schema::String),
        opt("deep_research_version", Schema::String),
        opt("is_async_task_result_message", Schema::Boolean),
        any("b1de6e2_rm"),
        opt("search_queries", Schema::array(Schema::Any)),
        any("image_gen_async"),
        any("trigger_async_ux"),
        opt("image_gen_title", Schema::String),
        any("refresh_key_info"),
        any("debug_sonic_thread_id"),
        any("rebase_developer_message"),
        any("reasoning_status"),
        opt("finished_duration_sec", Schema::Number),
        opt("search_display_string", Schema::String),
        opt("searched_display_string", Schema::String),
        any("caterpillar_selected_sources"),
        any("selected_github_repos"),
        opt("is_error", Schema::Boolean),
        opt("retrieval_turn_number", Schema::Number),
        opt("retrieval_file_index", Schema::Number),
        any("cot_tool"),
    ])
}

fn aggregate_result() -> Schema {
    Schema::strict(vec![
        req("code", Schema::String),
        opt("final_expression_output", Schema::String.nullable()),
        req("end_time", Schema::Number.nullable()),
        req("jupyter_messages", Schema::array(Schema::Any)),
        req(
            "messages",
            Schema::array(Schema::loose(vec![
                opt("image_url", Schema::String),
                opt("message_type", Schema::Enum(AGGREGATE_MESSAGE_TYPES)),
                req("sender", Schema::Literal(AGGREGATE_SENDER)),
                req("time", Schema::Number),
                opt("width", Schema::Number),
                opt("height", Schema::Number),
            ])),
        ),
        req("run_id", Schema::String),
        req("start_time", Schema::Number),
        req("status", Schema::Enum(EXECUTION_STATUSES)),
        req("update_time", Schema::Number),
        any("in_kernel_exception"),
        any("system_exception"),
        any("timeout_triggered"),
        any("caterpillar_selected_sources"),
        any("selected_github_repos"),
        opt("is_error", Schema::Boolean),
        opt("retrieval_turn_number", Schema::Number),
        opt("retrieval_file_index", Schema::Number),
        any("cot_tool"),
    ])
}

fn citation() -> Schema {
    Schema::strict(vec![
        req("start_ix", Schema::Number),
        req("end_ix", Schema::Number),
        opt("citation_format_type", Schema::String),
        opt("invalid_reason", Schema::String),
        opt(
            "metadata",
            Schema::loose(vec![
                opt(
                    "extra",
                    Schema::loose(vec![
                        req("cited_message_idx", Schema::Number),
                        opt("evidence_text", Schema::String),
                    ])
                    .nullable(),
                ),
                opt("text", Schema::String),
                opt("title", Schema::String),
                req("type", Schema::String),
                opt("url", Schema::String),
            ]),
        ),
        opt("search_display_string", Schema::String),
        opt("searched_display_string", Schema::String),
        any("caterpillar_selected_sources"),
        any("selected_github_repos"),
        opt("is_error", Schema::Boolean),
        opt("retrieval_turn_number", Schema::Number),
        opt("retrieval_file_index", Schema::Number),
        any("cot_tool"),
    ])
}

// Every field but the part kind is optional.
fn content_part() -> Schema {
    Schema::strict(vec![
        req("content_type", Schema::Enum(PART_CONTENT_TYPES)),
        opt("text", Schema::String),
        opt("direction", Schema::Enum(DIRECTION_TAGS)),
        opt("decoding_id", Schema::String.nullable()),
        opt("expiry_datetime", Schema::String.nullable()),
        opt("frames_asset_pointers", strings()),
        opt("video_container_asset_pointer", Schema::String.nullable()),
        opt(
            "audio_asset_pointer",
            Schema::strict(vec![
                req("expiry_datetime", Schema::String.nullable()),
                req("content_type", Schema::String),
                req("asset_pointer", Schema::String),
                req("size_bytes", Schema::Number),
                req("format", Schema::String),
                any("metadata"),
            ]),
        ),
        opt("audio_start_timestamp", Schema::Number),
        opt("asset_pointer", Schema::String),
        opt("size_bytes", Schema::Number),
        opt("width", Schema::Number),
        opt("height", Schema::Number),
        any("fovea"),
        opt(
            "metadata",
            Schema::loose(vec![opt(
                "dalle",
                Schema::loose(vec![
                    req("gen_id", Schema::String),
                    req("prompt", Schema::String),
                    req("seed", Schema::Number.nullable()),
                    req("serialization_title", Schema::String),
                ])
                .nullable(),
            )])
            .nullable(),
        ),
        opt("format", Schema::String),
    ])
}

fn parts() -> Field {
    req(
        "parts",
        Schema::array(Schema::Union(vec![Schema::Ref(CONTENT_PART), Schema::String])),
    )
}

fn variant(
    tag: &'static str,
    object: fn(Vec<Field>) -> ObjectSchema,
    fields: Vec<Field>,
) -> (&'static str, ObjectSchema) {
    let mut declared = vec![req(CONTENT_DISCRIMINATOR, Schema::Literal(tag))];
    declared.extend(fields);
    (tag, object(declared))
}

fn audio_asset_pointer_variant() -> ObjectSchema {
    variant(
        "audio_asset_pointer",
        ObjectSchema::loose,
        vec![
            req("expiry_datetime", Schema::String),
            req("asset_pointer", Schema::String),
            req("size_bytes", Schema::Number),
            req("format", Schema::String),
            req(
                "metadata",
                Schema::loose(vec![
                    req("start_timestamp", Schema::Number.nullable()),
                    req("end_timestamp", Schema::Number.nullable()),
                    any("pretokenized_vq"),
                    any("interruptions"),
                    any("original_audio_source"),
                    any("transcription"),
                    req("start", Schema::Number),
                    req("end", Schema::Number),
                ]),
            ),
        ],
    )
    .1
}

pub fn content_variants() -> TaggedUnion {
    let strict = ObjectSchema::strict;
    let loose = ObjectSchema::loose;

    TaggedUnion {
        discriminator: CONTENT_DISCRIMINATOR,
        variants: vec![
            variant("text", strict, vec![parts()]),
            variant(
                "code",
                strict,
                vec![
                    req("language", Schema::String),
                    req("response_format_name", Schema::String.nullable()),
                    req("text", Schema::String),
                ],
            ),
            variant("tool_output", strict, Vec::new()),
            variant("citation", strict, Vec::new()),
            variant("media", strict, Vec::new()),
            variant(
                "user_editable_context",
                strict,
                vec![
                    req("user_profile", Schema::String),
                    req("user_instructions", Schema::String),
                ],
            ),
            variant("multimodal_text", strict, vec![parts()]),
            variant(
                "tether_browsing_display",
                strict,
                vec![
                    any("result"),
                    any("summary"),
                    any("assets"),
                    any("tether_id"),
                ],
            ),
            variant(
                "execution_output",
                strict,
                vec![req("text", Schema::String)],
            ),
            variant(
                "app_pairing_content",
                strict,
                vec![
                    req("custom_instructions", Schema::String),
                    opt("workspaces", Schema::array(workspace()).nullable()),
                    opt("context_parts", Schema::array(context_part()).nullable()),
                ],
            ),
            variant(
                "tether_quote",
                strict,
                vec![
                    req("url", Schema::String),
                    req("domain", Schema::String),
                    req("text", Schema::String),
                    req("title", Schema::String),
                    req("tether_id", Schema::String.nullable()),
                ],
            ),
            variant(
                "audio_transcription",
                loose,
                vec![
                    req("text", Schema::String),
                    opt("direction", Schema::Enum(DIRECTION_TAGS)),
                    opt("decoding_id", Schema::String.nullable()),
                ],
            ),
            ("audio_asset_pointer", audio_asset_pointer_variant()),
            variant(
                "real_time_user_audio_video_asset_pointer",
                loose,
                vec![
                    req("expiry_datetime", Schema::String),
                    opt("frames_asset_pointers", strings()),
                    opt("video_container_asset_pointer", Schema::String.nullable()),
                    req("audio_asset_pointer", Schema::Ref(AUDIO_ASSET_POINTER)),
                    req("audio_start_timestamp", Schema::Number),
                ],
            ),
            variant(
                "image_asset_pointer",
                loose,
                vec![
                    req("asset_pointer", Schema::String),
                    req("size_bytes", Schema::Number),
                    req("width", Schema::Number),
                    req("height", Schema::Number),
                    req("fovea", Schema::Number),
                    req("metadata", image_metadata()),
                ],
            ),
            variant(
                "thoughts",
                strict,
                vec![
                    req(
                        "thoughts",
                        Schema::array(Schema::loose(vec![
                            req("summary", Schema::String),
                            req("content", Schema::String),
                        ])),
                    ),
                    req("source_analysis_msg_id", Schema::String),
                ],
            ),
            variant(
                "reasoning_recap",
                strict,
                vec![req("content", Schema::String)],
            ),
            variant(
                "sonic_webpage",
                strict,
                vec![
                    req("url", Schema::String),
                    req("domain", Schema::String),
                    req("title", Schema::String),
                    req("text", Schema::String),
                    opt("snippet", Schema::String.nullable()),
                    opt("pub_date", Schema::String.nullable()),
                    opt("crawl_date", Schema::String.nullable()),
                    opt("pub_timestamp", Schema::Number.nullable()),
                    req("ref_id", Schema::String),
                ],
            ),
        ],
    }
}

fn workspace() -> Schema {
    Schema::strict(vec![
        req("id", Schema::String),
        req("app_id", Schema::String),
        req("app_name", Schema::String),
        req("title", Schema::String),
        req("content_type", Schema::String),
    ])
}

fn context_part() -> Schema {
    Schema::strict(vec![
        req("workspace_id", Schema::String),
        req("text", Schema::String),
        req("textfield_id", Schema::String),
        req("path", Schema::String),
        req("path_hash", Schema::String.nullable()),
        any("annotations"),
        req("content_type", Schema::String),
        any("truncated_head_lines"),
        any("truncated_tail_lines"),
        req("supports_editing", Schema::Boolean),
    ])
}

fn image_metadata() -> Schema {
    Schema::loose(vec![
        req(
            "dalle",
            Schema::loose(vec![
                req("gen_id", Schema::String),
                req("prompt", Schema::String),
                req("seed", Schema::Number),
                req("parent_gen_id", Schema::String.nullable()),
                req("edit_op", Schema::String.nullable()),
                req("serialization_title", Schema::String),
            ])
            .nullable(),
        ),
        any("gizmo"),
        any("emu_omit_glimpse_image"),
        any("emu_patches_override"),
        req("sanitized", Schema::Boolean),
        any("asset_pointer_link"),
    ])
}
