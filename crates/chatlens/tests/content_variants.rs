use std::collections::BTreeSet;

use chatlens::models::metadata::{ExecutionStatus, MetadataCommand};
use chatlens::models::{CONTENT_TYPES, ChatExport, Content, MessagePart};
use chatlens::validate::{check_export, validate};
use serde_json::{Map, Value, json};

fn variant_contents() -> Vec<Value> {
    vec![
        json!({
            "content_type": "text",
            "parts": [
                "plain words",
                {
                    "content_type": "audio_transcription",
                    "text": "spoken words",
                    "direction": "in",
                    "decoding_id": null
                }
            ]
        }),
        json!({
            "content_type": "code",
            "language": "python",
            "response_format_name": null,
            "text": "print(1)"
        }),
        json!({"content_type": "tool_output"}),
        json!({"content_type": "citation"}),
        json!({"content_type": "media"}),
        json!({
            "content_type": "user_editable_context",
            "user_profile": "Works on compilers.",
            "user_instructions": "Answer briefly."
        }),
        json!({
            "content_type": "multimodal_text",
            "parts": [
                {
                    "content_type": "image_asset_pointer",
                    "asset_pointer": "sediment://file_img",
                    "size_bytes": 2048,
                    "width": 512,
                    "height": 384,
                    "fovea": null,
                    "metadata": {"dalle": null, "sanitized": true}
                },
                {
                    "content_type": "real_time_user_audio_video_asset_pointer",
                    "expiry_datetime": null,
                    "frames_asset_pointers": [],
                    "video_container_asset_pointer": null,
                    "audio_asset_pointer": {
                        "expiry_datetime": null,
                        "content_type": "audio_asset_pointer",
                        "asset_pointer": "sediment://file_part_audio",
                        "size_bytes": 96,
                        "format": "wav",
                        "metadata": {"start": 0}
                    },
                    "audio_start_timestamp": 3
                },
                "caption"
            ]
        }),
        json!({
            "content_type": "tether_browsing_display",
            "result": "L0: page text",
            "summary": null,
            "assets": [],
            "tether_id": null
        }),
        json!({
            "content_type": "execution_output",
            "text": "{\"ok\": true}"
        }),
        json!({
            "content_type": "app_pairing_content",
            "custom_instructions": "Prefer the open file.",
            "workspaces": [{
                "id": "ws-1",
                "app_id": "com.example.editor",
                "app_name": "Editor",
                "title": "main.rs",
                "content_type": "text"
            }],
            "context_parts": [{
                "workspace_id": "ws-1",
                "text": "fn main() {}",
                "textfield_id": "tf-1",
                "path": "src/main.rs",
                "path_hash": null,
                "annotations": null,
                "content_type": "text",
                "supports_editing": false
            }]
        }),
        json!({
            "content_type": "tether_quote",
            "url": "https://example.com/post",
            "domain": "example.com",
            "text": "A quoted line.",
            "title": "Post",
            "tether_id": null
        }),
        json!({
            "content_type": "audio_transcription",
            "text": "hello there",
            "direction": "out",
            "decoding_id": null,
            "start_timestamp": 2
        }),
        json!({
            "content_type": "audio_asset_pointer",
            "expiry_datetime": "2025-01-01T00:00:00Z",
            "asset_pointer": "sediment://file_audio",
            "size_bytes": 4096,
            "format": "wav",
            "metadata": {
                "start_timestamp": null,
                "end_timestamp": 12,
                "pretokenized_vq": null,
                "start": 0,
                "end": 12,
                "channel_count": 1
            },
            "tool_audio_direction": "in"
        }),
        json!({
            "content_type": "real_time_user_audio_video_asset_pointer",
            "expiry_datetime": "2025-01-01T00:00:00Z",
            "frames_asset_pointers": ["sediment://frame_1"],
            "video_container_asset_pointer": null,
            "audio_asset_pointer": {
                "content_type": "audio_asset_pointer",
                "expiry_datetime": "2025-01-01T00:00:00Z",
                "asset_pointer": "sediment://file_rt_audio",
                "size_bytes": 8192,
                "format": "wav",
                "metadata": {
                    "start_timestamp": 0,
                    "end_timestamp": null,
                    "start": 0,
                    "end": 5,
                    "sample_rate": 24000
                }
            },
            "audio_start_timestamp": 10,
            "clip_label": "camera"
        }),
        json!({
            "content_type": "image_asset_pointer",
            "asset_pointer": "sediment://file_gen",
            "size_bytes": 1024,
            "width": 256,
            "height": 256,
            "fovea": 512,
            "metadata": {
                "dalle": {
                    "gen_id": "gen-1",
                    "prompt": "a lighthouse at dusk",
                    "seed": 42,
                    "parent_gen_id": null,
                    "edit_op": null,
                    "serialization_title": "DALL-E generation metadata"
                },
                "gizmo": null,
                "sanitized": false,
                "watermarked": true
            },
            "caption": "lighthouse"
        }),
        json!({
            "content_type": "thoughts",
            "thoughts": [{
                "summary": "Plan",
                "content": "Check the inputs first.",
                "chunks": []
            }],
            "source_analysis_msg_id": "analysis-1"
        }),
        json!({
            "content_type": "reasoning_recap",
            "content": "Thought for 4 seconds"
        }),
        json!({
            "content_type": "sonic_webpage",
            "url": "https://example.com/news",
            "domain": "example.com",
            "title": "News",
            "text": "Body text.",
            "snippet": null,
            "crawl_date": null,
            "pub_timestamp": 1_700_000_000,
            "ref_id": "turn0news1"
        }),
    ]
}

fn rich_metadata() -> Value {
    json!({
        "finish_details": {"type": "stop"},
        "is_complete": true,
        "citations": [
            {
                "start_ix": 0,
                "end_ix": 12,
                "citation_format_type": "tether_og",
                "metadata": {
                    "extra": {"cited_message_idx": 3, "evidence_text": "source"},
                    "text": "quoted",
                    "title": "Page",
                    "type": "webpage",
                    "url": "https://example.com",
                    "pub_date": null
                }
            },
            {
                "start_ix": 20,
                "end_ix": 24,
                "metadata": {"extra": null, "type": "file"}
            }
        ],
        "model_slug": null,
        "parent_id": "node-code",
        "command": "search",
        "aggregate_result": {
            "code": "print(1)",
            "final_expression_output": null,
            "end_time": 1_700_000_060,
            "jupyter_messages": [],
            "messages": [{
                "sender": "server",
                "time": 1_700_000_055,
                "message_type": "stream",
                "stream_name": "stdout"
            }],
            "run_id": "run-1",
            "start_time": 1_700_000_050,
            "status": "success",
            "update_time": 1_700_000_060,
            "in_kernel_exception": null,
            "system_exception": null,
            "timeout_triggered": null
        },
        "cloud_doc_urls": [null, "https://docs.example.com/a"],
        "request_id": "req-1"
    })
}

fn node_id(content: &Value) -> String {
    format!("node-{}", content["content_type"].as_str().unwrap_or("unknown"))
}

fn message_node(content: Value, metadata: Value) -> Value {
    let id = node_id(&content);
    json!({
        "id": id,
        "message": {
            "id": format!("msg-{id}"),
            "author": {"role": "assistant", "name": null, "metadata": {}},
            "create_time": 1_700_000_050,
            "update_time": null,
            "content": content,
            "status": "finished_successfully",
            "end_turn": true,
            "weight": 1,
            "metadata": metadata,
            "recipient": "all",
            "channel": null
        },
        "parent": "root",
        "children": []
    })
}

fn all_variants_export() -> Value {
    let contents = variant_contents();
    let children = contents.iter().map(node_id).collect::<Vec<_>>();

    let mut mapping = Map::new();
    mapping.insert(
        "root".to_string(),
        json!({"id": "root", "message": null, "parent": null, "children": children}),
    );
    for content in contents {
        let metadata = if content["content_type"] == "execution_output" {
            rich_metadata()
        } else {
            json!({})
        };
        mapping.insert(node_id(&content), message_node(content, metadata));
    }

    json!([{
        "id": "conv-variants",
        "title": "Every content kind",
        "create_time": 1_700_000_000,
        "update_time": 1_700_000_100,
        "mapping": mapping,
        "moderation_results": [],
        "current_node": "node-sonic_webpage",
        "plugin_ids": null,
        "conversation_id": "conv-variants",
        "conversation_template_id": null,
        "conversation_origin": null,
        "gizmo_id": null,
        "gizmo_type": null,
        "is_archived": false,
        "is_starred": null,
        "safe_urls": [],
        "default_model_slug": "gpt-4o",
        "voice": null,
        "async_status": null,
        "disabled_tool_ids": null,
        "is_do_not_remember": null
    }])
}

fn content_tags(export: &ChatExport) -> BTreeSet<&str> {
    export.threads()[0]
        .mapping
        .values()
        .filter_map(|node| node.message.as_ref())
        .map(|message| message.content.content_type())
        .collect()
}

#[test]
fn fixture_covers_every_content_type() {
    let tags = variant_contents()
        .iter()
        .map(|content| content["content_type"].as_str().unwrap_or_default().to_string())
        .collect::<Vec<_>>();

    assert_eq!(tags, CONTENT_TYPES);
}

#[test]
fn every_content_variant_passes_checker_and_typed_copy() {
    let document = all_variants_export();

    let issues = check_export(&document);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");

    let export = validate(&document).expect("every variant should validate");
    assert_eq!(
        content_tags(&export),
        CONTENT_TYPES.iter().copied().collect::<BTreeSet<_>>()
    );
}

#[test]
fn object_parts_keep_their_structure() {
    let export = validate(&all_variants_export()).expect("every variant should validate");
    let thread = &export.threads()[0];

    let text = &thread.mapping["node-text"]
        .message
        .as_ref()
        .expect("text node carries a message")
        .content;
    let Content::Text(text) = text else {
        panic!("expected text content, got {text:?}");
    };
    assert_eq!(text.parts.len(), 2);
    let MessagePart::Object(spoken) = &text.parts[1] else {
        panic!("expected an object part, got {:?}", text.parts[1]);
    };
    assert_eq!(spoken.text.as_deref(), Some("spoken words"));

    let multimodal = &thread.mapping["node-multimodal_text"]
        .message
        .as_ref()
        .expect("multimodal node carries a message")
        .content;
    let Content::MultimodalText(multimodal) = multimodal else {
        panic!("expected multimodal content, got {multimodal:?}");
    };
    let MessagePart::Object(image) = &multimodal.parts[0] else {
        panic!("expected an object part, got {:?}", multimodal.parts[0]);
    };
    assert_eq!(image.width, Some(512.0));
    assert_eq!(image.fovea, Some(Value::Null));
    assert_eq!(multimodal.parts[2], MessagePart::Text("caption".to_string()));
}

#[test]
fn typed_metadata_fields_are_populated() {
    let export = validate(&all_variants_export()).expect("every variant should validate");
    let metadata = &export.threads()[0].mapping["node-execution_output"]
        .message
        .as_ref()
        .expect("execution output node carries a message")
        .metadata;

    assert_eq!(metadata.is_complete, Some(true));
    assert_eq!(metadata.command, Some(MetadataCommand::Search));
    assert_eq!(metadata.model_slug, Some(Value::Null));

    let citations = metadata.citations.as_ref().expect("citations are typed");
    assert_eq!(citations.len(), 2);
    let first = citations[0].metadata.as_ref().expect("first citation has metadata");
    assert_eq!(first.kind, "webpage");
    assert_eq!(
        first
            .extra
            .as_ref()
            .and_then(Option::as_ref)
            .map(|extra| extra.cited_message_idx),
        Some(3.0)
    );
    let second = citations[1].metadata.as_ref().expect("second citation has metadata");
    assert_eq!(second.extra, Some(None));

    let aggregate = metadata
        .aggregate_result
        .as_ref()
        .expect("aggregate result is typed");
    assert_eq!(aggregate.status, ExecutionStatus::Success);
    assert_eq!(aggregate.final_expression_output, Some(None));
    assert_eq!(aggregate.messages.len(), 1);
    assert_eq!(aggregate.end_time, Some(1_700_000_060.0));

    assert_eq!(
        metadata.cloud_doc_urls,
        Some(vec![None, Some("https://docs.example.com/a".to_string())])
    );
    assert_eq!(metadata.extra.get("request_id"), Some(&json!("req-1")));
    assert_eq!(
        metadata.extra.get("finish_details"),
        Some(&json!({"type": "stop"}))
    );
}

#[test]
fn re_encoded_typed_copy_validates_again() {
    let export = validate(&all_variants_export()).expect("every variant should validate");

    let encoded = serde_json::to_value(&export).expect("export should serialize");
    let issues = check_export(&encoded);
    assert!(issues.is_empty(), "re-encoded issues: {issues:?}");

    let again = validate(&encoded).expect("re-encoded export should validate");
    assert_eq!(again, export);
}
